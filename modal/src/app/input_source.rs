use super::ModalAppError;
use crate::{
    config::ModalConfig,
    ingest::{self, Localities, ModalRecord, TokenMatrix},
};
use std::path::{Path, PathBuf};

/// where freight legs are read from, chosen by file extension.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// `.toml` or `.json` configuration file
    Config(PathBuf),
    /// `.csv` file of records with a header row
    Csv(PathBuf),
    /// any other file is read as a whitespace token matrix
    TokenMatrix(PathBuf),
}

/// records read from an input along with any run defaults it carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedInput {
    pub records: Vec<ModalRecord>,
    pub quantity: Option<f64>,
    pub localities: Option<Localities>,
}

impl InputSource {
    pub fn from_path(path: &Path) -> InputSource {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match extension.as_deref() {
            Some("toml") | Some("json") => InputSource::Config(path.to_path_buf()),
            Some("csv") => InputSource::Csv(path.to_path_buf()),
            _ => InputSource::TokenMatrix(path.to_path_buf()),
        }
    }

    pub fn load(&self) -> Result<LoadedInput, ModalAppError> {
        match self {
            InputSource::Config(path) => {
                let conf = ModalConfig::try_from(&path.display().to_string())?;
                Ok(LoadedInput {
                    records: conf.modals,
                    quantity: conf.quantity,
                    localities: conf.localities.map(Localities::new),
                })
            }
            InputSource::Csv(path) => {
                let records = ingest::read_records_csv(path)?;
                Ok(LoadedInput {
                    records,
                    ..Default::default()
                })
            }
            InputSource::TokenMatrix(path) => {
                let matrix = TokenMatrix::read(path)?;
                let records = ingest::records_from_matrix(&matrix)?;
                Ok(LoadedInput {
                    records,
                    ..Default::default()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert!(matches!(
            InputSource::from_path(Path::new("legs.TOML")),
            InputSource::Config(_)
        ));
        assert!(matches!(
            InputSource::from_path(Path::new("legs.json")),
            InputSource::Config(_)
        ));
        assert!(matches!(
            InputSource::from_path(Path::new("legs.csv")),
            InputSource::Csv(_)
        ));
        assert!(matches!(
            InputSource::from_path(Path::new("legs.txt")),
            InputSource::TokenMatrix(_)
        ));
        assert!(matches!(
            InputSource::from_path(Path::new("legs")),
            InputSource::TokenMatrix(_)
        ));
    }

    #[test]
    fn test_load_token_matrix() {
        let dir = std::env::temp_dir().join("modal-input-source-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("legs.txt");
        std::fs::write(&path, "2 3\nroad 100 10\nwaterway 200 50\n").unwrap();
        let loaded = InputSource::from_path(&path).load().unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.quantity, None);
        assert_eq!(loaded.records[1].terminal_fee, Some(50.0));
    }
}
