// Integration tests for the generateContent call, against a mock server.
// Run with: cargo test -p propseek-client --test gemini_api

use httpmock::prelude::*;
use serde_json::json;

use propseek_client::{fixture, ClientError, RecommendationClient};
use propseek_model::Language;

const MODEL: &str = "gemini-3-flash-preview";

fn client_for(server: &MockServer) -> RecommendationClient {
    RecommendationClient::with_api_base(
        "test-key-123".to_string(),
        MODEL.to_string(),
        server.base_url(),
    )
    .unwrap()
}

fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", MODEL)
}

#[test]
fn successful_call_parses_suggestions_and_filters_sources() {
    let server = MockServer::start();

    let model_output = json!({
        "summary": "One office found.",
        "suggestions": [{
            "title": "Király Street Art Office",
            "price": "€650/month",
            "location": "Pécs, Király str. 12.",
            "description": "65 sqm office.",
            "link": "https://ingatlanok.pvh.hu/pvh123",
            "reason": "Pedestrian zone.",
            "pros": ["Prime location"],
            "cons": [],
            "auctionInfo": {"deadline": "2025.04.15", "type": "licit", "deposit": "€1500"}
        }]
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(generate_path())
            .header("x-goog-api-key", "test-key-123")
            .json_body_includes(r#"{"generationConfig": {"responseMimeType": "application/json"}}"#);
        then.status(200).json_body(json!({
            "candidates": [{
                "content": { "parts": [{ "text": model_output.to_string() }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "title": "PVH listings", "uri": "https://ingatlanok.pvh.hu" } },
                        { "web": { "title": "dead chunk", "uri": "" } },
                        { }
                    ]
                }
            }]
        }));
    });

    let response = client_for(&server)
        .fetch("modern office downtown", Language::En)
        .unwrap();

    mock.assert();
    assert_eq!(response.summary, "One office found.");
    assert_eq!(response.suggestions.len(), 1);
    assert_eq!(response.suggestions[0].link, "https://ingatlanok.pvh.hu/pvh123");
    // Only the chunk with a non-empty URI survives
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].title, "PVH listings");
}

#[test]
fn api_error_maps_status_and_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(generate_path());
        then.status(403)
            .json_body(json!({ "error": { "message": "API key not valid" } }));
    });

    let err = client_for(&server)
        .fetch("shops near the square", Language::En)
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn non_json_model_text_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(generate_path());
        then.status(200).json_body(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I could not find anything, sorry." }] }
            }]
        }));
    });

    let err = client_for(&server)
        .fetch("warehouse with loading dock", Language::En)
        .unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[test]
fn empty_candidate_list_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(generate_path());
        then.status(200).json_body(json!({ "candidates": [] }));
    });

    let err = client_for(&server)
        .fetch("storefront", Language::De)
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[test]
fn sentinel_query_never_touches_the_network() {
    let server = MockServer::start();
    // Any network hit would fail loudly; the sentinel must not reach it
    server.mock(|when, then| {
        when.method(POST).path(generate_path());
        then.status(500);
    });

    for lang in Language::ALL {
        let response = client_for(&server).fetch("teszt", lang).unwrap();
        assert_eq!(response, fixture::for_lang(lang));
    }
}
