//! HTTP tests against a mocked season feed

use super::*;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn feed() -> serde_json::Value {
    json!({
        "players": [
            {"player_id": 1, "name": "Ajith", "total_runs": 210, "wickets": "4"},
            {"player_id": "2", "name": "Kiran", "total_runs": "95", "best_spell": "3-18"}
        ],
        "tournaments": [
            {"name": "SPL 1", "matches": []}
        ]
    })
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/spl_data.json"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[test]
fn test_build_client() {
    assert!(build_client().is_ok());
}

#[tokio::test]
async fn test_fetch_season_data_success() {
    let server = serve(ResponseTemplate::new(200).set_body_json(feed())).await;
    let client = build_client().unwrap();
    let url = format!("{}/data/spl_data.json", server.uri());

    let data = fetch_season_data(&client, &url).await.unwrap();

    assert_eq!(data.players.len(), 2);
    assert_eq!(data.players[0].name, "Ajith");
    assert_eq!(data.players[1].player_id.as_ref().unwrap().as_str(), "2");
    assert_eq!(data.tournaments[0].name, "SPL 1");
}

#[tokio::test]
async fn test_fetch_sends_feed_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header(ACCEPT.as_str(), "application/json"))
        .and(header(CACHE_CONTROL.as_str(), "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    let data = fetch_season_data(&client, &server.uri()).await.unwrap();
    assert_eq!(data.players.len(), 2);
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = serve(ResponseTemplate::new(404)).await;
    let client = build_client().unwrap();
    let url = format!("{}/data/spl_data.json", server.uri());

    let err = fetch_season_data(&client, &url).await.unwrap_err();
    assert!(matches!(err, SplError::Http(_)));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = serve(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    let client = build_client().unwrap();
    let url = format!("{}/data/spl_data.json", server.uri());

    let err = fetch_season_data(&client, &url).await.unwrap_err();
    assert!(matches!(err, SplError::Json(_)));
}

#[tokio::test]
async fn test_fetch_rejects_empty_roster() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({"players": []}))).await;
    let client = build_client().unwrap();
    let url = format!("{}/data/spl_data.json", server.uri());

    let err = fetch_season_data(&client, &url).await.unwrap_err();
    assert!(matches!(err, SplError::NoData));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_json(feed())
            .set_delay(Duration::from_millis(1500)),
    )
    .await;
    let client = build_client().unwrap();
    let url = format!("{}/data/spl_data.json", server.uri());

    let err = fetch_season_data_with_timeout(&client, &url, Duration::from_secs(1))
        .await
        .unwrap_err();
    match err {
        SplError::Timeout { seconds } => assert_eq!(seconds, 1),
        other => panic!("Expected Timeout, got {:?}", other),
    }
}
