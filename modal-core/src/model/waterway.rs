use super::{validation, ModalAttributes, ModalError, TransportKind, TransportModal};
use serde::Serialize;

/// waterway leg. the terminal fee covers loading at the port and is paid per trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waterway {
    attributes: ModalAttributes,
    terminal_fee: f64,
}

impl Waterway {
    pub fn new(distance: i64, terminal_fee: f64) -> Result<Waterway, ModalError> {
        let mut attributes = TransportKind::Waterway.default_attributes();
        attributes.set_distance(distance)?;
        Waterway::with_attributes(attributes, terminal_fee)
    }

    pub fn with_attributes(
        attributes: ModalAttributes,
        terminal_fee: f64,
    ) -> Result<Waterway, ModalError> {
        let terminal_fee = validation::non_negative("terminal_fee", terminal_fee)?;
        Ok(Waterway {
            attributes,
            terminal_fee,
        })
    }

    pub fn terminal_fee(&self) -> f64 {
        self.terminal_fee
    }

    pub fn set_terminal_fee(&mut self, value: f64) -> Result<(), ModalError> {
        self.terminal_fee = validation::non_negative("terminal_fee", value)?;
        Ok(())
    }
}

impl Default for Waterway {
    fn default() -> Self {
        Waterway {
            attributes: TransportKind::Waterway.default_attributes(),
            terminal_fee: 0.0,
        }
    }
}

impl TransportModal for Waterway {
    fn kind(&self) -> TransportKind {
        TransportKind::Waterway
    }

    fn attributes(&self) -> &ModalAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut ModalAttributes {
        &mut self.attributes
    }

    fn cost_per_trip(&self) -> f64 {
        self.attributes.line_haul_cost() + self.terminal_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let waterway = Waterway::default();
        assert_eq!(waterway.price_per_km(), 0.04375);
        assert_eq!(waterway.capacity(), 1000.0);
        assert_eq!(waterway.speed(), 40.0);
        assert_eq!(waterway.distance(), 0);
        assert_eq!(waterway.terminal_fee(), 0.0);
    }

    #[test]
    fn test_cost_with_terminal_fee() {
        let waterway = Waterway::new(200, 50.0).unwrap();
        let cost = waterway.compute_cost(1000.0).unwrap();
        assert!((cost - 58.75).abs() < 1e-9);
        let cost = waterway.compute_cost(1000.5).unwrap();
        assert!((cost - 117.5).abs() < 1e-9);
    }

    #[test]
    fn test_set_terminal_fee() {
        let mut waterway = Waterway::new(200, 50.0).unwrap();
        assert!(waterway.set_terminal_fee(-0.5).is_err());
        assert_eq!(waterway.terminal_fee(), 50.0);
        waterway.set_terminal_fee(12.0).unwrap();
        assert_eq!(waterway.terminal_fee(), 12.0);
    }

    #[test]
    fn test_zero_speed() {
        let mut waterway = Waterway::new(200, 50.0).unwrap();
        waterway.set_speed(0.0).unwrap();
        assert!(waterway.travel_time().unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_rejects_negative_arguments() {
        assert!(Waterway::new(-1, 0.0).unwrap_err().is_invalid_argument());
        assert!(Waterway::new(10, -1.0).unwrap_err().is_invalid_argument());
        let mut waterway = Waterway::new(10, 50.0).unwrap();
        assert!(waterway.set_terminal_fee(-1.0).is_err());
        assert_eq!(waterway.terminal_fee(), 50.0);
    }
}
