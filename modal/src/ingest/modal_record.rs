use modal_core::{
    model::validation, Air, Modal, ModalAttributes, ModalError, Rail, Road, TransportKind,
    TransportModal, Waterway,
};
use serde::{Deserialize, Deserializer, Serialize};

/// a single freight leg as written in a configuration file or CSV row. values
/// left empty fall back to the reference values of the leg's kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModalRecord {
    pub kind: TransportKind,
    pub distance: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// accepts true/false or 0/1
    #[serde(
        default,
        deserialize_with = "deserialize_toll_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_toll: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toll_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_fee: Option<f64>,
}

impl ModalRecord {
    pub fn new(kind: TransportKind, distance: i64) -> ModalRecord {
        ModalRecord {
            kind,
            distance,
            origin: None,
            destination: None,
            price_per_km: None,
            capacity: None,
            speed: None,
            has_toll: None,
            toll_fee: None,
            terminal_fee: None,
        }
    }

    /// record reproducing the default leg of `kind`, with every attribute written out.
    pub fn reference(kind: TransportKind) -> ModalRecord {
        let modal = Modal::default_for(kind);
        let mut record = ModalRecord::new(kind, modal.distance() as i64);
        record.price_per_km = Some(modal.price_per_km());
        record.capacity = Some(modal.capacity());
        record.speed = Some(modal.speed());
        match kind {
            TransportKind::Road => {
                record.has_toll = Some(false);
                record.toll_fee = Some(0.0);
            }
            TransportKind::Rail => {}
            TransportKind::Waterway | TransportKind::Air => record.terminal_fee = Some(0.0),
        }
        record
    }

    /// assigns a per-trip surcharge to the field used by this record's kind.
    pub fn set_surcharge(&mut self, value: f64) -> Result<(), ModalError> {
        match self.kind {
            TransportKind::Road => self.toll_fee = Some(value),
            TransportKind::Waterway | TransportKind::Air => self.terminal_fee = Some(value),
            TransportKind::Rail if value == 0.0 => {}
            TransportKind::Rail => {
                return Err(ModalError::UnsupportedField {
                    kind: self.kind,
                    field: String::from("surcharge"),
                })
            }
        }
        Ok(())
    }

    /// validates the record and builds the leg it describes.
    pub fn build(&self) -> Result<Modal, ModalError> {
        let reference = self.kind.default_attributes();
        let attributes = ModalAttributes::new(
            self.price_per_km.unwrap_or(reference.price_per_km()),
            self.capacity.unwrap_or(reference.capacity()),
            self.speed.unwrap_or(reference.speed()),
            self.distance,
        )?;
        let modal = match self.kind {
            TransportKind::Road => {
                self.reject_terminal_fee()?;
                let toll_fee = self.toll_fee.unwrap_or_default();
                let has_toll = self.has_toll.unwrap_or(toll_fee > 0.0);
                Modal::from(Road::with_attributes(attributes, has_toll, toll_fee)?)
            }
            TransportKind::Rail => {
                self.reject_toll()?;
                self.reject_terminal_fee()?;
                Modal::from(Rail::with_attributes(attributes))
            }
            TransportKind::Waterway => {
                self.reject_toll()?;
                let terminal_fee = self.terminal_fee.unwrap_or_default();
                Modal::from(Waterway::with_attributes(attributes, terminal_fee)?)
            }
            TransportKind::Air => {
                self.reject_toll()?;
                let terminal_fee = self.terminal_fee.unwrap_or_default();
                Modal::from(Air::with_attributes(attributes, terminal_fee)?)
            }
        };
        Ok(modal)
    }

    fn reject_toll(&self) -> Result<(), ModalError> {
        if self.has_toll == Some(true) {
            return Err(self.unsupported("has_toll"));
        }
        if self.toll_fee.is_some_and(|fee| fee != 0.0) {
            return Err(self.unsupported("toll_fee"));
        }
        Ok(())
    }

    fn reject_terminal_fee(&self) -> Result<(), ModalError> {
        if self.terminal_fee.is_some_and(|fee| fee != 0.0) {
            return Err(self.unsupported("terminal_fee"));
        }
        Ok(())
    }

    fn unsupported(&self, field: &str) -> ModalError {
        ModalError::UnsupportedField {
            kind: self.kind,
            field: String::from(field),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TollFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn deserialize_toll_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<TollFlag>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(TollFlag::Bool(b)) => return Ok(Some(b)),
        Some(TollFlag::Int(i)) => validation::toll_flag(&i.to_string()),
        Some(TollFlag::Text(s)) => validation::toll_flag(&s),
    };
    flag.map(Some).map_err(<D::Error as serde::de::Error>::custom)
}
