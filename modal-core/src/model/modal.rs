use super::{
    Air, ModalAttributes, ModalError, Rail, Road, TransportKind, TransportModal,
    Waterway,
};
use serde::Serialize;

/// a freight leg of any kind. dispatches the [`TransportModal`] capability to
/// the wrapped variant, which fixes the kind for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Modal {
    Road(Road),
    Rail(Rail),
    Waterway(Waterway),
    Air(Air),
}

impl Modal {
    /// builds a leg of `kind` from explicit attributes. surcharges start at zero.
    pub fn new(
        kind: TransportKind,
        price_per_km: f64,
        capacity: f64,
        speed: f64,
        distance: i64,
    ) -> Result<Modal, ModalError> {
        let attributes = ModalAttributes::new(price_per_km, capacity, speed, distance)?;
        let modal = match kind {
            TransportKind::Road => Modal::Road(Road::with_attributes(attributes, false, 0.0)?),
            TransportKind::Rail => Modal::Rail(Rail::with_attributes(attributes)),
            TransportKind::Waterway => {
                Modal::Waterway(Waterway::with_attributes(attributes, 0.0)?)
            }
            TransportKind::Air => Modal::Air(Air::with_attributes(attributes, 0.0)?),
        };
        Ok(modal)
    }

    /// the no-argument leg of a specific kind, at the variant default distance.
    pub fn default_for(kind: TransportKind) -> Modal {
        match kind {
            TransportKind::Road => Modal::Road(Road::default()),
            TransportKind::Rail => Modal::Rail(Rail::default()),
            TransportKind::Waterway => Modal::Waterway(Waterway::default()),
            TransportKind::Air => Modal::Air(Air::default()),
        }
    }

    /// the per-trip surcharge (toll or terminal fee), zero for rail.
    pub fn surcharge(&self) -> f64 {
        match self {
            Modal::Road(road) => road.toll_fee(),
            Modal::Rail(_) => 0.0,
            Modal::Waterway(waterway) => waterway.terminal_fee(),
            Modal::Air(air) => air.terminal_fee(),
        }
    }

    /// sets the toll fee on road legs or the terminal fee on waterway and air legs.
    pub fn set_surcharge(&mut self, value: f64) -> Result<(), ModalError> {
        match self {
            Modal::Road(road) => road.set_toll_fee(value),
            Modal::Rail(_) => Err(ModalError::UnsupportedField {
                kind: TransportKind::Rail,
                field: String::from("surcharge"),
            }),
            Modal::Waterway(waterway) => waterway.set_terminal_fee(value),
            Modal::Air(air) => air.set_terminal_fee(value),
        }
    }

    pub fn as_road(&self) -> Option<&Road> {
        match self {
            Modal::Road(road) => Some(road),
            _ => None,
        }
    }

    pub fn as_road_mut(&mut self) -> Option<&mut Road> {
        match self {
            Modal::Road(road) => Some(road),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn TransportModal {
        match self {
            Modal::Road(road) => road,
            Modal::Rail(rail) => rail,
            Modal::Waterway(waterway) => waterway,
            Modal::Air(air) => air,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn TransportModal {
        match self {
            Modal::Road(road) => road,
            Modal::Rail(rail) => rail,
            Modal::Waterway(waterway) => waterway,
            Modal::Air(air) => air,
        }
    }
}

impl Default for Modal {
    /// the kind-agnostic default is a road leg over the base distance.
    fn default() -> Self {
        Modal::Road(Road::base_default())
    }
}

impl TransportModal for Modal {
    fn kind(&self) -> TransportKind {
        self.inner().kind()
    }

    fn attributes(&self) -> &ModalAttributes {
        self.inner().attributes()
    }

    fn attributes_mut(&mut self) -> &mut ModalAttributes {
        self.inner_mut().attributes_mut()
    }

    fn cost_per_trip(&self) -> f64 {
        self.inner().cost_per_trip()
    }
}

impl From<Road> for Modal {
    fn from(value: Road) -> Self {
        Modal::Road(value)
    }
}

impl From<Rail> for Modal {
    fn from(value: Rail) -> Self {
        Modal::Rail(value)
    }
}

impl From<Waterway> for Modal {
    fn from(value: Waterway) -> Self {
        Modal::Waterway(value)
    }
}

impl From<Air> for Modal {
    fn from(value: Air) -> Self {
        Modal::Air(value)
    }
}
