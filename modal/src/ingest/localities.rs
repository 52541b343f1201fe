use super::{IngestError, ModalRecord};
use itertools::Itertools;
use std::path::Path;

/// the set of locality names legs may start or end at, read from
/// whitespace-delimited text (one name per token).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localities {
    names: Vec<String>,
}

impl Localities {
    pub fn new<I, S>(names: I) -> Localities
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).unique().collect_vec();
        Localities { names }
    }

    pub fn parse(text: &str) -> Localities {
        Localities::new(text.split_whitespace())
    }

    pub fn read(path: &Path) -> Result<Localities, IngestError> {
        log::info!("reading localities from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::ReadError {
            filepath: path.display().to_string(),
            source,
        })?;
        Ok(Localities::parse(&text))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// every origin and destination named by a record must be a known locality.
    pub fn check(&self, records: &[ModalRecord]) -> Result<(), IngestError> {
        for (row, record) in records.iter().enumerate() {
            let endpoints = [record.origin.as_deref(), record.destination.as_deref()];
            if let Some(name) = endpoints.into_iter().flatten().find(|n| !self.contains(n)) {
                return Err(IngestError::UnknownLocality {
                    row,
                    name: String::from(name),
                });
            }
        }
        Ok(())
    }
}
