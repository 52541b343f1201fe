use super::{defaults, ModalAttributes, ModalError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the mode of transport serving a freight leg.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Road,
    Rail,
    Waterway,
    Air,
}

impl TransportKind {
    pub const ALL: [TransportKind; 4] = [
        TransportKind::Road,
        TransportKind::Rail,
        TransportKind::Waterway,
        TransportKind::Air,
    ];

    /// price, capacity and speed of a default leg of this kind, with the
    /// variant default distance.
    pub fn default_attributes(&self) -> ModalAttributes {
        use defaults as D;
        let (price_per_km, capacity, speed) = match self {
            TransportKind::Road => (D::ROAD_PRICE_PER_KM, D::ROAD_CAPACITY, D::ROAD_SPEED),
            TransportKind::Rail => (D::RAIL_PRICE_PER_KM, D::RAIL_CAPACITY, D::RAIL_SPEED),
            TransportKind::Waterway => (
                D::WATERWAY_PRICE_PER_KM,
                D::WATERWAY_CAPACITY,
                D::WATERWAY_SPEED,
            ),
            TransportKind::Air => (D::AIR_PRICE_PER_KM, D::AIR_CAPACITY, D::AIR_SPEED),
        };
        ModalAttributes::from_validated(price_per_km, capacity, speed, D::VARIANT_DISTANCE)
    }

    /// name of the per-trip surcharge carried by this kind, if any.
    pub fn surcharge_name(&self) -> Option<&'static str> {
        match self {
            TransportKind::Road => Some("toll_fee"),
            TransportKind::Rail => None,
            TransportKind::Waterway | TransportKind::Air => Some("terminal_fee"),
        }
    }
}

impl Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransportKind::Road => "road",
            TransportKind::Rail => "rail",
            TransportKind::Waterway => "waterway",
            TransportKind::Air => "air",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TransportKind {
    type Err = ModalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "road" => Ok(TransportKind::Road),
            "rail" => Ok(TransportKind::Rail),
            "waterway" => Ok(TransportKind::Waterway),
            "air" => Ok(TransportKind::Air),
            _ => Err(ModalError::UnknownKind(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for kind in TransportKind::ALL {
            let parsed = TransportKind::from_str(&kind.to_string()).unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!(
            TransportKind::from_str(" Waterway ").unwrap(),
            TransportKind::Waterway
        );
    }

    #[test]
    fn test_unknown_kind() {
        let err = TransportKind::from_str("pipeline").unwrap_err();
        assert_eq!(err, ModalError::UnknownKind(String::from("pipeline")));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TransportKind::Waterway).unwrap();
        assert_eq!(json, "\"waterway\"");
        let kind: TransportKind = serde_json::from_str("\"air\"").unwrap();
        assert_eq!(kind, TransportKind::Air);
    }
}
