mod input_source;
mod modal_app;
mod modal_app_error;
mod report;
mod report_format;

pub use input_source::{InputSource, LoadedInput};
pub use modal_app::{ModalApp, ModalOperation};
pub use modal_app_error::ModalAppError;
pub use report::{DefaultsRow, ModalReport, ModalReportRow};
pub use report_format::ReportFormat;
