use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use streak_card::card::CardOptions;
use streak_card::generate_card;
use streak_card::github::rate_limit::{self, RateLimit};
use streak_card::github::{client, graphql};

fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

async fn server_returning(body: serde_json::Value) -> MockServer {
    install_crypto_provider();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("contributionCalendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn calendar_fixture() -> serde_json::Value {
    let raw = std::fs::read_to_string("tests/fixtures/calendar_response.json").unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn calendar_is_flattened() {
    let server = server_returning(calendar_fixture()).await;
    let octocrab = client::build("test-token", Some(&server.uri())).unwrap();

    let calendar = graphql::fetch_contribution_calendar(&octocrab, "octocat")
        .await
        .unwrap();
    assert_eq!(calendar.total_contributions, 17);
    assert_eq!(calendar.created_at, "2015-06-01T12:00:00Z");
    assert_eq!(calendar.days.len(), 9);
}

#[tokio::test]
async fn streak_data_from_calendar() {
    let server = server_returning(calendar_fixture()).await;
    let octocrab = client::build("test-token", Some(&server.uri())).unwrap();

    let data = graphql::fetch_streak_data(&octocrab, "octocat").await.unwrap();
    assert_eq!(data.username, "octocat");
    assert_eq!(data.total_contributions, 17);
    assert_eq!(data.current_streak, 2);
    assert_eq!(data.streak_start_date, "2024-06-01");
    assert_eq!(data.streak_end_date, "2024-06-02");
    assert_eq!(data.longest_streak, 3);
    assert_eq!(data.longest_streak_range(), Some(("2024-05-26", "2024-05-28")));
    assert_eq!(data.first_contribution_date, "2015-06-01T12:00:00Z");
}

#[tokio::test]
async fn graphql_errors_are_reported() {
    let server = server_returning(json!({
        "data": null,
        "errors": [{ "message": "Something went wrong" }]
    }))
    .await;
    let octocrab = client::build("test-token", Some(&server.uri())).unwrap();

    let err = graphql::fetch_contribution_calendar(&octocrab, "octocat")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("GraphQL errors: Something went wrong"));
}

#[tokio::test]
async fn unknown_user_is_reported() {
    let server = server_returning(json!({ "data": { "user": null } })).await;
    let octocrab = client::build("test-token", Some(&server.uri())).unwrap();

    let err = graphql::fetch_streak_data(&octocrab, "ghost-user")
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("user ghost-user not found"));
}

#[tokio::test]
async fn fetched_data_renders_a_card() {
    let server = server_returning(calendar_fixture()).await;
    let octocrab = client::build("test-token", Some(&server.uri())).unwrap();

    let data = graphql::fetch_streak_data(&octocrab, "octocat").await.unwrap();
    let svg = generate_card(
        &data,
        &CardOptions {
            animate: false,
            ..CardOptions::default()
        },
    );
    assert!(svg.contains(">17</text>"));
    assert!(svg.contains(">2</text>"));
    assert!(svg.contains(">3</text>"));
    assert!(svg.contains(">Jun 1, 2015 - Present</text>"));
}

#[tokio::test]
async fn http_rate_limit_is_classified() {
    install_crypto_provider();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for user ID 1.",
            "documentation_url": "https://docs.github.com/rest/rate-limit"
        })))
        .mount(&server)
        .await;
    let octocrab = client::build("test-token", Some(&server.uri())).unwrap();

    let err = graphql::fetch_contribution_calendar(&octocrab, "octocat")
        .await
        .unwrap_err();
    assert_eq!(rate_limit::classify(&err), Some(RateLimit::Primary));
}
