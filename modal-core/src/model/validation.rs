//! shared argument checks for modal attributes and surcharges. every setter and
//! constructor in this crate routes through these functions.
use super::ModalError;

/// accepts finite values >= 0. NaN and infinities are rejected along with negatives.
pub fn non_negative(field: &str, value: f64) -> Result<f64, ModalError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModalError::NegativeValue {
            field: String::from(field),
            value,
        })
    }
}

/// distances arrive as signed integers from external input and are stored unsigned.
pub fn distance(value: i64) -> Result<u64, ModalError> {
    u64::try_from(value).map_err(|_| ModalError::NegativeDistance(value))
}

/// reads a toll flag written as `0`, `1`, `true` or `false`.
pub fn toll_flag(value: &str) -> Result<bool, ModalError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ModalError::InvalidTollFlag(String::from(value))),
    }
}
