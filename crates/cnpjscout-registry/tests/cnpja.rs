#![cfg(feature = "http-registry")]

use chrono::NaiveDate;
use cnpjscout_core::SearchWindow;
use cnpjscout_registry::{CnpjaSource, RecordSource, RegistryError, SearchQuery};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESPONSE: &str = r#"{
  "next": null,
  "limit": 100,
  "records": [
    {
      "taxId": "45997418000153",
      "founded": "2024-05-10",
      "company": { "name": "Oficina do Bairro", "simei": { "optant": true } },
      "status": { "id": 2, "text": "Ativa" },
      "address": { "state": "MG" },
      "phones": [{ "type": "LANDLINE", "area": "31", "number": "33334444" }],
      "emails": [{ "ownership": "CORPORATE", "address": "oficina@bairro.com.br" }]
    }
  ]
}"#;

fn query() -> SearchQuery {
    let window = SearchWindow::new(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
    )
    .unwrap();
    SearchQuery::new(window, true, 100)
}

#[tokio::test]
async fn fetches_and_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/office"))
        .and(header("Authorization", "test-key"))
        .and(query_param("founded.gte", "2024-05-01T00:00:00Z"))
        .and(query_param("founded.lte", "2024-05-31T23:59:59Z"))
        .and(query_param("company.simei.optant.eq", "true"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let source = CnpjaSource::new(
        format!("{}/office", server.uri()),
        "test-key".to_string(),
        None,
    );
    let results = tokio::task::spawn_blocking(move || source.fetch_records(&query()))
        .await
        .expect("join")
        .expect("fetch");

    assert_eq!(results.len(), 1);
    let rows = results.rows();
    assert_eq!(rows[0].cnpj, "45.997.418/0001-53");
    assert_eq!(rows[0].phone, "553133334444");
    assert_eq!(rows[0].email, "oficina@bairro.com.br");
}

#[tokio::test]
async fn surfaces_rejected_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/office"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"message":"founded.gte must be a date"}"#),
        )
        .mount(&server)
        .await;

    let source = CnpjaSource::new(
        format!("{}/office", server.uri()),
        "api-key".to_string(),
        Some("cnpjscout-test".to_string()),
    );
    let err = tokio::task::spawn_blocking(move || source.fetch_records(&query()))
        .await
        .expect("join")
        .unwrap_err();

    assert!(
        err.to_string().contains("founded.gte must be a date"),
        "message: {err}"
    );
    match err {
        RegistryError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, r#"{"message":"founded.gte must be a date"}"#);
        }
        other => panic!("unexpected error: {other}"),
    }
}
