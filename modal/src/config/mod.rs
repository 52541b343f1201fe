mod modal_config;

pub use modal_config::ModalConfig;
