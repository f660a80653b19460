pub mod domain;
pub mod dto;
pub mod error;
pub mod export;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use export::{encode_csv, encode_lines, export_rows, ExportDocument, ExportFormat};
pub use rules::*;
pub use time::{format_founded_date, today_local, NOT_AVAILABLE};
