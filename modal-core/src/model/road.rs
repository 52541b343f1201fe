use super::{defaults, validation, ModalAttributes, ModalError, TransportKind, TransportModal};
use serde::Serialize;

/// road leg. a toll fee is paid once per dispatched vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Road {
    attributes: ModalAttributes,
    has_toll: bool,
    toll_fee: f64,
}

impl Road {
    /// road leg over `distance` with the road reference price, capacity and speed.
    pub fn new(distance: i64, has_toll: bool, toll_fee: f64) -> Result<Road, ModalError> {
        let mut attributes = TransportKind::Road.default_attributes();
        attributes.set_distance(distance)?;
        Road::with_attributes(attributes, has_toll, toll_fee)
    }

    pub fn with_attributes(
        attributes: ModalAttributes,
        has_toll: bool,
        toll_fee: f64,
    ) -> Result<Road, ModalError> {
        let toll_fee = validation::non_negative("toll_fee", toll_fee)?;
        if !has_toll && toll_fee > 0.0 {
            log::warn!("road leg has toll fee {toll_fee} but no toll flag; fee is still charged per trip");
        }
        Ok(Road {
            attributes,
            has_toll,
            toll_fee,
        })
    }

    /// the kind-agnostic default leg, a road leg over the base distance.
    pub(crate) fn base_default() -> Road {
        let attributes = TransportKind::Road
            .default_attributes()
            .with_distance(defaults::BASE_DISTANCE);
        Road {
            attributes,
            ..Road::default()
        }
    }

    pub fn has_toll(&self) -> bool {
        self.has_toll
    }

    pub fn toll_fee(&self) -> f64 {
        self.toll_fee
    }

    pub fn set_has_toll(&mut self, has_toll: bool) {
        self.has_toll = has_toll;
    }

    pub fn set_toll_fee(&mut self, value: f64) -> Result<(), ModalError> {
        self.toll_fee = validation::non_negative("toll_fee", value)?;
        Ok(())
    }
}

impl Default for Road {
    fn default() -> Self {
        Road {
            attributes: TransportKind::Road.default_attributes(),
            has_toll: false,
            toll_fee: 0.0,
        }
    }
}

impl TransportModal for Road {
    fn kind(&self) -> TransportKind {
        TransportKind::Road
    }

    fn attributes(&self) -> &ModalAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut ModalAttributes {
        &mut self.attributes
    }

    fn cost_per_trip(&self) -> f64 {
        self.attributes.line_haul_cost() + self.toll_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default() {
        let road = Road::default();
        assert_eq!(road.kind(), TransportKind::Road);
        assert_eq!(road.price_per_km(), 0.075);
        assert_eq!(road.capacity(), 35.0);
        assert_eq!(road.speed(), 60.0);
        assert_eq!(road.distance(), 0);
        assert!(!road.has_toll());
        assert_eq!(road.toll_fee(), 0.0);
    }

    #[test]
    fn test_toll_charged_per_trip() {
        let road = Road::new(100, true, 10.0).unwrap();
        assert!(approx_eq(road.compute_cost(35.0).unwrap(), 17.5));
        assert!(approx_eq(road.compute_cost(36.0).unwrap(), 35.0));
    }

    #[test]
    fn test_zero_capacity_is_an_error() {
        let mut road = Road::new(100, true, 10.0).unwrap();
        road.set_capacity(0.0).unwrap();
        let result = road.compute_cost(35.0);
        assert!(matches!(result, Err(ModalError::DivisionByZero { .. })));
    }

    #[test]
    fn test_toll_setters() {
        let mut road = Road::new(100, false, 0.0).unwrap();
        road.set_has_toll(true);
        road.set_toll_fee(4.25).unwrap();
        assert!(road.has_toll());
        assert_eq!(road.toll_fee(), 4.25);

        assert!(road.set_toll_fee(-1.0).is_err());
        assert_eq!(road.toll_fee(), 4.25);
    }

    #[test]
    fn test_negative_toll_on_construction() {
        let err = Road::new(100, true, -3.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_travel_time() {
        let road = Road::new(100, false, 0.0).unwrap();
        assert!(approx_eq(road.travel_time().unwrap(), 100.0));
    }

    #[test]
    fn test_rejects_negative_arguments() {
        assert!(Road::new(-1, false, 0.0).unwrap_err().is_invalid_argument());
        assert!(Road::new(10, true, -1.0).unwrap_err().is_invalid_argument());
        let mut road = Road::new(10, true, 10.0).unwrap();
        assert!(road.set_toll_fee(-1.0).is_err());
        assert_eq!(road.toll_fee(), 10.0);
    }

    #[test]
    fn test_cost_of_uncountable_trips_is_an_error() {
        let road = Road::new(100, true, 10.0).unwrap();
        assert!(matches!(
            road.compute_cost(1e25),
            Err(ModalError::TripCountOverflow { .. })
        ));
    }
}
