mod air;
mod modal;
mod modal_attributes;
mod modal_error;
mod rail;
mod road;
mod transport_kind;
mod transport_modal;
mod waterway;

pub mod defaults;
pub mod validation;

pub use air::Air;
pub use modal::Modal;
pub use modal_attributes::ModalAttributes;
pub use modal_error::ModalError;
pub use rail::Rail;
pub use road::Road;
pub use transport_kind::TransportKind;
pub use transport_modal::TransportModal;
pub use waterway::Waterway;
