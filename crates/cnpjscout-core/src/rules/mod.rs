pub mod extract;

pub use extract::{extract_email, extract_phone};
