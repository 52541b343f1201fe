use crate::ingest::IngestError;
use modal_core::ModalError;

#[derive(thiserror::Error, Debug)]
pub enum ModalAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: ::config::ConfigError,
    },
    #[error(transparent)]
    IngestError(#[from] IngestError),
    #[error("leg {index}: {source}")]
    LegError { index: usize, source: ModalError },
    #[error(transparent)]
    ModalError(#[from] ModalError),
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure encoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::ser::Error,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("{0}")]
    InvalidUserInput(String),
}
