use super::{ModalAttributes, ModalError, TransportKind};

/// capability shared by every freight leg. implementors supply their kind,
/// access to the shared attributes and the cost of one dispatch; cost and
/// travel time over a cargo quantity follow from those.
pub trait TransportModal {
    fn kind(&self) -> TransportKind;

    fn attributes(&self) -> &ModalAttributes;

    fn attributes_mut(&mut self) -> &mut ModalAttributes;

    /// cost of a single full-capacity trip over this leg, surcharges included.
    fn cost_per_trip(&self) -> f64;

    fn price_per_km(&self) -> f64 {
        self.attributes().price_per_km()
    }

    fn capacity(&self) -> f64 {
        self.attributes().capacity()
    }

    fn speed(&self) -> f64 {
        self.attributes().speed()
    }

    fn distance(&self) -> u64 {
        self.attributes().distance()
    }

    fn set_price_per_km(&mut self, value: f64) -> Result<(), ModalError> {
        self.attributes_mut().set_price_per_km(value)
    }

    fn set_capacity(&mut self, value: f64) -> Result<(), ModalError> {
        self.attributes_mut().set_capacity(value)
    }

    fn set_speed(&mut self, value: f64) -> Result<(), ModalError> {
        self.attributes_mut().set_speed(value)
    }

    fn set_distance(&mut self, value: i64) -> Result<(), ModalError> {
        self.attributes_mut().set_distance(value)
    }

    /// minutes needed to cover the leg distance at the leg speed.
    fn travel_time(&self) -> Result<f64, ModalError> {
        self.attributes().travel_time()
    }

    fn trips(&self, quantity: f64) -> Result<u64, ModalError> {
        self.attributes().trips(quantity)
    }

    /// cost of moving `quantity` tonnes, paying for every dispatch required.
    fn compute_cost(&self, quantity: f64) -> Result<f64, ModalError> {
        let trips = self.trips(quantity)?;
        let cost = trips as f64 * self.cost_per_trip();
        log::debug!(
            "{} leg: {quantity} t over {} units -> {trips} trip(s), cost {cost}",
            self.kind(),
            self.distance()
        );
        Ok(cost)
    }
}
