use crate::query::SearchQuery;
use crate::response::parse_records;
use crate::source::RecordSource;
use crate::Result;
use cnpjscout_core::SearchResults;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Replays a registry response saved to disk. The query is not applied;
/// the file is taken to be the answer to it.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordSource for JsonFileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_records(&self, query: &SearchQuery) -> Result<SearchResults> {
        debug!(
            path = %self.path.display(),
            query = %query.describe(),
            "reading saved registry response"
        );
        let body = fs::read_to_string(&self.path)?;
        parse_records(&body)
    }
}
