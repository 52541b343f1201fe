use super::{ModalAttributes, ModalError, TransportKind, TransportModal};
use serde::Serialize;

/// rail leg. carries no surcharge, so a trip costs distance * price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rail {
    attributes: ModalAttributes,
}

impl Rail {
    /// rail leg over `distance` with the rail reference price, capacity and speed.
    pub fn new(distance: i64) -> Result<Rail, ModalError> {
        let mut attributes = TransportKind::Rail.default_attributes();
        attributes.set_distance(distance)?;
        Ok(Rail { attributes })
    }

    pub fn with_attributes(attributes: ModalAttributes) -> Rail {
        Rail { attributes }
    }
}

impl Default for Rail {
    fn default() -> Self {
        Rail::with_attributes(TransportKind::Rail.default_attributes())
    }
}

impl TransportModal for Rail {
    fn kind(&self) -> TransportKind {
        TransportKind::Rail
    }

    fn attributes(&self) -> &ModalAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut ModalAttributes {
        &mut self.attributes
    }

    fn cost_per_trip(&self) -> f64 {
        self.attributes.line_haul_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::defaults;

    #[test]
    fn test_default() {
        let rail = Rail::default();
        assert_eq!(rail.kind(), TransportKind::Rail);
        assert_eq!(rail.price_per_km(), defaults::RAIL_PRICE_PER_KM);
        assert_eq!(rail.capacity(), 70000.0);
        assert_eq!(rail.speed(), 20.0);
        assert_eq!(rail.distance(), 0);
    }

    #[test]
    fn test_cost_rounds_up_to_full_trips() {
        let rail = Rail::new(100).unwrap();
        assert!((rail.compute_cost(70000.0).unwrap() - 5.0).abs() < 1e-9);
        assert!((rail.compute_cost(70001.0).unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_capacity() {
        let mut rail = Rail::new(100).unwrap();
        rail.set_capacity(0.0).unwrap();
        let err = rail.compute_cost(10.0).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_negative_distance() {
        assert_eq!(Rail::new(-5), Err(ModalError::NegativeDistance(-5)));
    }

    #[test]
    fn test_rejects_negative_distance() {
        assert_eq!(Rail::new(-1).unwrap_err(), ModalError::NegativeDistance(-1));
    }
}
