use super::{validation, ModalAttributes, ModalError, TransportKind, TransportModal};
use serde::Serialize;

/// air leg. the terminal fee is paid per flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Air {
    attributes: ModalAttributes,
    terminal_fee: f64,
}

impl Air {
    pub fn new(distance: i64, terminal_fee: f64) -> Result<Air, ModalError> {
        let mut attributes = TransportKind::Air.default_attributes();
        attributes.set_distance(distance)?;
        Air::with_attributes(attributes, terminal_fee)
    }

    pub fn with_attributes(attributes: ModalAttributes, terminal_fee: f64) -> Result<Air, ModalError> {
        let terminal_fee = validation::non_negative("terminal_fee", terminal_fee)?;
        Ok(Air {
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

impl Default for Air {
    fn default() -> Self {
        Air {
            attributes: TransportKind::Air.default_attributes(),
            terminal_fee: 0.0,
        }
    }
}

impl TransportModal for Air {
    fn kind(&self) -> TransportKind {
        TransportKind::Air
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
