use crate::query::SearchQuery;
use crate::Result;
use cnpjscout_core::SearchResults;

pub trait RecordSource {
    fn source_name(&self) -> &'static str;
    fn fetch_records(&self, query: &SearchQuery) -> Result<SearchResults>;
}
