use crate::{app::ModalAppError, ingest::ModalRecord};
use ::config::{Config, FileFormat};
use modal_core::TransportKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// a set of freight legs along with optional run defaults, read from a
/// `.toml` or `.json` file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModalConfig {
    /// cargo quantity in tonnes used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// if provided, every leg origin and destination must be one of these names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localities: Option<Vec<String>>,
    #[serde(default)]
    pub modals: Vec<ModalRecord>,
}

impl ModalConfig {
    pub fn from_file(filepath: &str) -> Result<ModalConfig, ModalAppError> {
        let format = file_format(filepath)?;
        let config = Config::builder()
            .add_source(::config::File::new(filepath, format))
            .build()
            .map_err(|e| ModalAppError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        config
            .try_deserialize::<ModalConfig>()
            .map_err(|e| ModalAppError::ConfigReadError {
                msg: format!("failed decoding '{filepath}'"),
                source: e,
            })
    }

    /// one reference leg per transport kind, for use as a starting point.
    pub fn template() -> ModalConfig {
        ModalConfig {
            quantity: Some(0.0),
            localities: None,
            modals: TransportKind::ALL
                .into_iter()
                .map(ModalRecord::reference)
                .collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String, ModalAppError> {
        let s = toml::to_string_pretty(self)?;
        Ok(s)
    }
}

impl TryFrom<&String> for ModalConfig {
    type Error = ModalAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        log::info!("reading modal configuration from {f}");
        ModalConfig::from_file(f)
    }
}

fn file_format(filepath: &str) -> Result<FileFormat, ModalAppError> {
    let extension = Path::new(filepath)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        _ => Err(ModalAppError::InvalidUserInput(format!(
            "unsupported configuration file type: {filepath}"
        ))),
    }
}
