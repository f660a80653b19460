use crate::query::SearchQuery;
use crate::source::RecordSource;
use crate::{RegistryError, Result};
use cnpjscout_core::SearchResults;

pub const DEFAULT_USER_AGENT: &str = "cnpjscout";

#[cfg(feature = "http-registry")]
mod imp {
    use super::{RecordSource, RegistryError, Result, SearchQuery, SearchResults, DEFAULT_USER_AGENT};
    use crate::response::{parse_records, snippet, BODY_LOG_LIMIT};
    use reqwest::blocking::Client;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use tracing::debug;
    use url::{Host, Url};

    #[derive(Debug, Clone)]
    pub struct CnpjaSource {
        base_url: String,
        api_key: String,
        user_agent: Option<String>,
    }

    impl CnpjaSource {
        pub fn new(base_url: String, api_key: String, user_agent: Option<String>) -> Self {
            Self {
                base_url,
                api_key,
                user_agent,
            }
        }
    }

    impl RecordSource for CnpjaSource {
        fn source_name(&self) -> &'static str {
            "cnpja"
        }

        fn fetch_records(&self, query: &SearchQuery) -> Result<SearchResults> {
            fetch_records(
                &self.base_url,
                &self.api_key,
                self.user_agent.as_deref(),
                query,
            )
        }
    }

    pub fn fetch_records(
        base_url: &str,
        api_key: &str,
        user_agent: Option<&str>,
        query: &SearchQuery,
    ) -> Result<SearchResults> {
        if api_key.trim().is_empty() {
            return Err(RegistryError::MissingApiKey);
        }
        let url = request_url(base_url, query)?;
        debug!(url = %url, "querying registry");

        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        let response = client
            .get(url)
            .header(AUTHORIZATION, api_key.trim())
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            let body = snippet(body.trim(), BODY_LOG_LIMIT);
            debug!(status = status.as_u16(), body = %body, "registry rejected request");
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(body = %snippet(&body, BODY_LOG_LIMIT), "registry response");
        parse_records(&body)
    }

    pub fn request_url(base_url: &str, query: &SearchQuery) -> Result<Url> {
        let mut url = Url::parse(base_url.trim())?;
        ensure_secure(&url)?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        Ok(url)
    }

    fn ensure_secure(url: &Url) -> Result<()> {
        match url.scheme() {
            "https" => Ok(()),
            "http" if is_loopback(url) => Ok(()),
            _ => Err(RegistryError::InvalidUrl(format!(
                "{url} must use https"
            ))),
        }
    }

    fn is_loopback(url: &Url) -> bool {
        match url.host() {
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(addr)) => addr.is_loopback(),
            Some(Host::Ipv6(addr)) => addr.is_loopback(),
            None => false,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{fetch_records, request_url};
        use crate::query::SearchQuery;
        use crate::RegistryError;
        use chrono::NaiveDate;
        use cnpjscout_core::SearchWindow;

        fn query() -> SearchQuery {
            let window = SearchWindow::new(
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            )
            .unwrap();
            SearchQuery::new(window, true, 100)
        }

        #[test]
        fn builds_filtered_request_url() {
            let url = request_url("https://api.cnpja.com/office", &query()).expect("url");
            assert_eq!(
                url.as_str(),
                "https://api.cnpja.com/office?founded.gte=2024-05-01T00%3A00%3A00Z\
                 &founded.lte=2024-05-31T23%3A59%3A59Z&company.simei.optant.eq=true&limit=100"
            );
        }

        #[test]
        fn refuses_plain_http_outside_loopback() {
            let err = request_url("http://api.cnpja.com/office", &query()).unwrap_err();
            assert!(matches!(err, RegistryError::InvalidUrl(_)));
            assert!(request_url("http://127.0.0.1:8080/office", &query()).is_ok());
            assert!(request_url("http://localhost/office", &query()).is_ok());
        }

        #[test]
        fn requires_api_key_before_any_request() {
            let err = fetch_records("https://api.cnpja.com/office", "  ", None, &query())
                .unwrap_err();
            assert!(matches!(err, RegistryError::MissingApiKey));
        }
    }
}

#[cfg(not(feature = "http-registry"))]
mod imp {
    use super::{RecordSource, RegistryError, Result, SearchQuery, SearchResults};

    /// Stand-in that keeps the CLI building without an HTTP client.
    #[derive(Debug, Clone)]
    pub struct CnpjaSource;

    impl CnpjaSource {
        pub fn new(_base_url: String, _api_key: String, _user_agent: Option<String>) -> Self {
            Self
        }
    }

    impl RecordSource for CnpjaSource {
        fn source_name(&self) -> &'static str {
            "cnpja"
        }

        fn fetch_records(&self, _query: &SearchQuery) -> Result<SearchResults> {
            Err(RegistryError::Unavailable(
                "registry queries require the http-registry feature".to_string(),
            ))
        }
    }

    pub fn fetch_records(
        _base_url: &str,
        _api_key: &str,
        _user_agent: Option<&str>,
        _query: &SearchQuery,
    ) -> Result<SearchResults> {
        Err(RegistryError::Unavailable(
            "registry queries require the http-registry feature".to_string(),
        ))
    }

    #[cfg(test)]
    mod tests {
        use super::CnpjaSource;
        use crate::query::SearchQuery;
        use crate::{RecordSource, RegistryError};
        use chrono::NaiveDate;
        use cnpjscout_core::SearchWindow;

        #[test]
        fn reports_missing_http_support() {
            let window = SearchWindow::new(
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            )
            .unwrap();
            let source = CnpjaSource::new(
                "https://api.cnpja.com/office".to_string(),
                "key".to_string(),
                None,
            );
            let err = source
                .fetch_records(&SearchQuery::new(window, true, 100))
                .unwrap_err();
            assert!(matches!(err, RegistryError::Unavailable(_)));
        }
    }
}

pub use imp::{fetch_records, CnpjaSource};
#[cfg(feature = "http-registry")]
pub use imp::request_url;
