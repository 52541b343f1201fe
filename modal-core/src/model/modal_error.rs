use super::TransportKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModalError {
    #[error("invalid value {value} for '{field}': must be a finite, non-negative number")]
    NegativeValue { field: String, value: f64 },
    #[error("invalid distance {0}: must be non-negative")]
    NegativeDistance(i64),
    #[error("invalid toll flag '{0}': expected one of 0, 1, true, false")]
    InvalidTollFlag(String),
    #[error("unknown transport kind '{0}', expected one of road, rail, waterway, air")]
    UnknownKind(String),
    #[error("{kind} legs do not accept a {field}")]
    UnsupportedField { kind: TransportKind, field: String },
    #[error("cannot compute {operation}: {divisor} is zero")]
    DivisionByZero { operation: String, divisor: String },
    #[error("moving {quantity} tonnes at capacity {capacity} needs more trips than can be counted")]
    TripCountOverflow { quantity: f64, capacity: f64 },
}

impl ModalError {
    /// true for errors caused by an argument outside of the accepted domain,
    /// as opposed to a computation over a zero-valued attribute.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, ModalError::DivisionByZero { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, ModalError::DivisionByZero { .. })
    }
}
