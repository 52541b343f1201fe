pub mod model;

pub use model::{
    Air, Modal, ModalAttributes, ModalError, Rail, Road, TransportKind, TransportModal, Waterway,
};
