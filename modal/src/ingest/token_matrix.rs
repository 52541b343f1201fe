use super::IngestError;
use std::path::Path;

/// whitespace-delimited table. the text starts with two integers `rows columns`
/// followed by `rows * columns` tokens in row-major order; line breaks carry
/// no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatrix {
    rows: usize,
    columns: usize,
    tokens: Vec<String>,
}

impl TokenMatrix {
    pub fn read(path: &Path) -> Result<TokenMatrix, IngestError> {
        log::info!("reading token matrix from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::ReadError {
            filepath: path.display().to_string(),
            source,
        })?;
        TokenMatrix::parse(&text)
    }

    pub fn parse(text: &str) -> Result<TokenMatrix, IngestError> {
        let mut tokens = text.split_whitespace();
        let rows = header_value(tokens.next(), "rows")?;
        let columns = header_value(tokens.next(), "columns")?;
        let expected = rows.checked_mul(columns).ok_or_else(|| {
            IngestError::InvalidHeader(format!("{rows} x {columns} is too large"))
        })?;
        if columns == 0 && rows > 0 {
            return Err(IngestError::InvalidHeader(format!(
                "found {rows} rows with zero columns"
            )));
        }
        let tokens = tokens.map(String::from).collect::<Vec<_>>();
        if tokens.len() != expected {
            return Err(IngestError::TokenCountMismatch {
                rows,
                columns,
                expected,
                found: tokens.len(),
            });
        }
        log::debug!("parsed {rows} x {columns} token matrix");
        Ok(TokenMatrix {
            rows,
            columns,
            tokens,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.columns;
        self.tokens.get(start..start + self.columns)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.tokens.chunks(self.columns.max(1))
    }
}

fn header_value(token: Option<&str>, name: &str) -> Result<usize, IngestError> {
    let token = token.ok_or_else(|| IngestError::InvalidHeader(format!("missing '{name}'")))?;
    token
        .parse::<usize>()
        .map_err(|e| IngestError::InvalidHeader(format!("'{name}' value '{token}': {e}")))
}
