//! Integration tests for `TermsClient` using wiremock HTTP mocks.

use regenfind_terms::{Suggestion, TermsClient, TermsError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> TermsClient {
    TermsClient::with_base_url(30, base_url).expect("client construction should not fail")
}

#[tokio::test]
async fn suggestions_maps_labels_in_response_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        2,
        ["E11.9", "G62.9"],
        null,
        ["diabetes", "diabetic neuropathy"]
    ]);

    Mock::given(method("GET"))
        .and(query_param("terms", "diab"))
        .and(query_param("maxList", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client
        .suggestions("diab", 7)
        .await
        .expect("should parse suggestions");

    assert_eq!(
        suggestions,
        [
            Suggestion::new("diabetes"),
            Suggestion::new("diabetic neuropathy")
        ]
    );
}

#[tokio::test]
async fn empty_label_array_yields_no_suggestions() {
    let server = MockServer::start().await;

    let body = serde_json::json!([0, [], null, []]);

    Mock::given(method("GET"))
        .and(query_param("terms", "zzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client.suggestions("zzz", 7).await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn missing_label_array_yields_no_suggestions() {
    let server = MockServer::start().await;

    // Some responses omit the display-label slot entirely.
    let body = serde_json::json!([0, []]);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client.suggestions("rare condition", 7).await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.suggestions("diab", 7).await;
    assert!(matches!(result, Err(TermsError::Http(_))));
}

#[tokio::test]
async fn invalid_json_surfaces_as_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.suggestions("diab", 7).await;
    assert!(matches!(result, Err(TermsError::Deserialize { .. })));
}

#[tokio::test]
async fn max_list_is_forwarded() {
    let server = MockServer::start().await;

    let body = serde_json::json!([1, ["M17"], null, ["knee osteoarthritis"]]);

    Mock::given(method("GET"))
        .and(query_param("maxList", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client.suggestions("knee", 3).await.unwrap();
    assert_eq!(suggestions.len(), 1);
}
