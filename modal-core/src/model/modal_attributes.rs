use super::{defaults, validation, ModalError};
use serde::Serialize;

/// attributes shared by every transport kind. fields are private so that the
/// non-negativity invariant can only be changed through the validated setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalAttributes {
    /// currency per distance unit
    price_per_km: f64,
    /// tonnes carried by a single trip
    capacity: f64,
    /// distance units per hour
    speed: f64,
    /// distance units between origin and destination
    distance: u64,
}

impl ModalAttributes {
    pub fn new(
        price_per_km: f64,
        capacity: f64,
        speed: f64,
        distance: i64,
    ) -> Result<ModalAttributes, ModalError> {
        let attributes = ModalAttributes {
            price_per_km: validation::non_negative("price_per_km", price_per_km)?,
            capacity: validation::non_negative("capacity", capacity)?,
            speed: validation::non_negative("speed", speed)?,
            distance: validation::distance(distance)?,
        };
        Ok(attributes)
    }

    /// builds from values already known to satisfy the invariants (crate constants).
    pub(crate) fn from_validated(
        price_per_km: f64,
        capacity: f64,
        speed: f64,
        distance: u64,
    ) -> ModalAttributes {
        ModalAttributes {
            price_per_km,
            capacity,
            speed,
            distance,
        }
    }

    pub(crate) fn with_distance(self, distance: u64) -> ModalAttributes {
        ModalAttributes { distance, ..self }
    }

    pub fn price_per_km(&self) -> f64 {
        self.price_per_km
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn set_price_per_km(&mut self, value: f64) -> Result<(), ModalError> {
        self.price_per_km = validation::non_negative("price_per_km", value)?;
        Ok(())
    }

    pub fn set_capacity(&mut self, value: f64) -> Result<(), ModalError> {
        self.capacity = validation::non_negative("capacity", value)?;
        Ok(())
    }

    pub fn set_speed(&mut self, value: f64) -> Result<(), ModalError> {
        self.speed = validation::non_negative("speed", value)?;
        Ok(())
    }

    pub fn set_distance(&mut self, value: i64) -> Result<(), ModalError> {
        self.distance = validation::distance(value)?;
        Ok(())
    }

    /// travel time in minutes: distance / speed * 60.
    pub fn travel_time(&self) -> Result<f64, ModalError> {
        if self.speed == 0.0 {
            return Err(ModalError::DivisionByZero {
                operation: String::from("travel time"),
                divisor: String::from("speed"),
            });
        }
        Ok(self.distance as f64 / self.speed * defaults::MINUTES_PER_HOUR)
    }

    /// number of full-capacity dispatches needed to move `quantity` tonnes.
    pub fn trips(&self, quantity: f64) -> Result<u64, ModalError> {
        let quantity = validation::non_negative("quantity", quantity)?;
        if self.capacity == 0.0 {
            return Err(ModalError::DivisionByZero {
                operation: String::from("cost"),
                divisor: String::from("capacity"),
            });
        }
        let trips = (quantity / self.capacity).ceil();
        if !trips.is_finite() || trips >= u64::MAX as f64 {
            return Err(ModalError::TripCountOverflow {
                quantity,
                capacity: self.capacity,
            });
        }
        Ok(trips as u64)
    }

    /// distance-proportional cost of a single trip, before any surcharge.
    pub fn line_haul_cost(&self) -> f64 {
        self.distance as f64 * self.price_per_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative_arguments() {
        assert!(ModalAttributes::new(-0.1, 35.0, 60.0, 100).is_err());
        assert!(ModalAttributes::new(0.1, -35.0, 60.0, 100).is_err());
        assert!(ModalAttributes::new(0.1, 35.0, -60.0, 100).is_err());
        assert_eq!(
            ModalAttributes::new(0.1, 35.0, 60.0, -100),
            Err(ModalError::NegativeDistance(-100))
        );
    }

    #[test]
    fn test_failed_setter_leaves_state_unchanged() {
        let mut attrs = ModalAttributes::new(0.075, 35.0, 60.0, 100).unwrap();
        let before = attrs.clone();
        assert!(attrs.set_price_per_km(-1.0).is_err());
        assert!(attrs.set_capacity(-1.0).is_err());
        assert!(attrs.set_speed(-1.0).is_err());
        assert!(attrs.set_distance(-1).is_err());
        assert_eq!(attrs, before);
    }

    #[test]
    fn test_setters_replace_values() {
        let mut attrs = ModalAttributes::new(0.075, 35.0, 60.0, 100).unwrap();
        attrs.set_price_per_km(0.2).unwrap();
        attrs.set_capacity(10.0).unwrap();
        attrs.set_speed(90.0).unwrap();
        attrs.set_distance(45).unwrap();
        assert_eq!(attrs.price_per_km(), 0.2);
        assert_eq!(attrs.capacity(), 10.0);
        assert_eq!(attrs.speed(), 90.0);
        assert_eq!(attrs.distance(), 45);
    }

    #[test]
    fn test_travel_time() {
        let attrs = ModalAttributes::new(0.075, 35.0, 60.0, 100).unwrap();
        assert_eq!(attrs.travel_time().unwrap(), 100.0);
        let stopped = ModalAttributes::new(0.075, 35.0, 0.0, 100).unwrap();
        assert!(stopped.travel_time().unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_trips() {
        let attrs = ModalAttributes::new(0.05, 70000.0, 20.0, 100).unwrap();
        assert_eq!(attrs.trips(0.0).unwrap(), 0);
        assert_eq!(attrs.trips(70000.0).unwrap(), 1);
        assert_eq!(attrs.trips(70001.0).unwrap(), 2);
        assert!(attrs.trips(-1.0).unwrap_err().is_invalid_argument());
        let empty = ModalAttributes::new(0.05, 0.0, 20.0, 100).unwrap();
        assert!(empty.trips(1.0).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_trips_beyond_counter_range() {
        let attrs = ModalAttributes::new(0.075, 35.0, 60.0, 100).unwrap();
        assert_eq!(
            attrs.trips(1e25),
            Err(ModalError::TripCountOverflow {
                quantity: 1e25,
                capacity: 35.0
            })
        );
        let tiny = ModalAttributes::new(0.075, f64::MIN_POSITIVE, 60.0, 100).unwrap();
        assert!(tiny.trips(f64::MAX).is_err());
        assert_eq!(attrs.trips(35.0 * 1e15).unwrap(), 1_000_000_000_000_000);
    }
}
