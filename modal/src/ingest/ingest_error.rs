use modal_core::ModalError;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed reading CSV '{filepath}': {source}")]
    CsvError { filepath: String, source: csv::Error },
    #[error("matrix header must start with two integers 'rows columns', {0}")]
    InvalidHeader(String),
    #[error("matrix header declares {rows} x {columns} = {expected} tokens but {found} were found")]
    TokenCountMismatch {
        rows: usize,
        columns: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {columns} columns, expected 3, 4 or 6")]
    UnsupportedRowWidth { row: usize, columns: usize },
    #[error("row {row}, column {column}: cannot read '{token}' as {expected}")]
    InvalidToken {
        row: usize,
        column: usize,
        token: String,
        expected: String,
    },
    #[error("row {row}: {source}")]
    InvalidRecord { row: usize, source: ModalError },
    #[error("row {row}: unknown locality '{name}'")]
    UnknownLocality { row: usize, name: String },
}
