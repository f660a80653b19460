pub mod cnpja;
pub mod error;
pub mod file;
pub mod query;
pub mod response;
pub mod source;

pub use cnpja::CnpjaSource;
pub use error::{RegistryError, Result};
pub use file::JsonFileSource;
pub use query::SearchQuery;
pub use source::RecordSource;
