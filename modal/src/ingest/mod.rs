mod ingest_error;
mod localities;
mod matrix_rows;
mod modal_record;
mod record_reader;
mod token_matrix;

pub use ingest_error::IngestError;
pub use localities::Localities;
pub use matrix_rows::records_from_matrix;
pub use modal_record::ModalRecord;
pub use record_reader::{build_modals, read_records_csv, records_from_csv_reader};
pub use token_matrix::TokenMatrix;
