//! Integration tests for the candidate query client using WireMock.

use serde_json::json;
use wikiclimate::{CandidateQueryError, WikidataClient};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binding(
    city: &str,
    name: &str,
    population: &str,
    country: &str,
    article: &str,
    point: &str,
) -> serde_json::Value {
    json!({
        "city": { "type": "uri", "value": city },
        "cityLabel": { "type": "literal", "value": name },
        "population": { "type": "literal", "value": population },
        "country": { "type": "uri", "value": "http://www.wikidata.org/entity/Q30" },
        "countryLabel": { "type": "literal", "value": country },
        "article": { "type": "uri", "value": article },
        "gps": { "type": "literal", "value": point },
    })
}

fn sparql_response(bindings: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "head": { "vars": ["city", "cityLabel", "population", "country", "countryLabel", "article", "gps"] },
        "results": { "bindings": bindings }
    })
}

#[tokio::test]
async fn fetch_parses_bindings_in_response_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_response(vec![
            binding(
                "http://www.wikidata.org/entity/Q1490",
                "Tokyo",
                "13929286",
                "Japan",
                "https://en.wikipedia.org/wiki/Tokyo",
                "Point(139.6917 35.6895)",
            ),
            binding(
                "http://www.wikidata.org/entity/Q84",
                "London",
                "8908081",
                "United Kingdom",
                "https://en.wikipedia.org/wiki/London",
                "Point(-0.1275 51.5072)",
            ),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = WikidataClient::new(server.uri()).unwrap();
    let candidates = client.fetch_candidates().await.unwrap();

    assert_eq!(candidates.len(), 2);
    // Descending population, exactly as the service returned it
    assert_eq!(candidates[0].name, "Tokyo");
    assert_eq!(candidates[0].population, 13_929_286);
    assert_eq!(candidates[0].article_title, "Tokyo");
    assert_eq!(candidates[0].gps_lat, 35.6895);
    assert_eq!(candidates[0].gps_lon, 139.6917);
    assert_eq!(candidates[1].name, "London");
    assert_eq!(candidates[1].gps_lon, -0.1275);
}

#[tokio::test]
async fn server_error_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = WikidataClient::new(server.uri()).unwrap();
    let result = client.fetch_candidates().await;

    assert!(matches!(
        result,
        Err(CandidateQueryError::HttpStatus { status, .. }) if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn malformed_gps_binding_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_response(vec![binding(
            "http://www.wikidata.org/entity/Q64",
            "Berlin",
            "3644826",
            "Germany",
            "https://en.wikipedia.org/wiki/Berlin",
            "52.52, 13.40",
        )])))
        .mount(&server)
        .await;

    let client = WikidataClient::new(server.uri()).unwrap();
    let result = client.fetch_candidates().await;

    assert!(matches!(
        result,
        Err(CandidateQueryError::MalformedBinding { field: "gps", .. })
    ));
}

#[tokio::test]
async fn empty_result_set_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_response(vec![])))
        .mount(&server)
        .await;

    let client = WikidataClient::new(server.uri()).unwrap();
    let candidates = client.fetch_candidates().await.unwrap();
    assert!(candidates.is_empty());
}
