//! Token-only client against a mock AgentView server.

mod common;

use agentview_client::{Error, PublicAgentView, PublicSessionsQuery};
use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_me_sends_only_user_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/me"))
        .and(header("x-user-token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = PublicAgentView::new(server.uri(), "tok-1").unwrap();
    let me = client.get_me().await.unwrap();
    assert_eq!(me.id, "u1");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_get_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/sessions/s1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(session_json("s1", vec![run_json("r1", "failed"), run_json("r2", "completed")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = PublicAgentView::new(server.uri(), "tok-1").unwrap();
    let session = client.get_session("s1").await.unwrap();
    assert_eq!(session.runs.len(), 2);
    assert_eq!(session.active_runs().len(), 1);
    assert_eq!(session.last_run().map(|run| run.id.as_str()), Some("r2"));
}

#[tokio::test]
async fn test_list_sessions_filters_by_agent_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/sessions"))
        .and(query_param("agent", "support"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&["s1", "s2"], 1, 1, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = PublicAgentView::new(server.uri(), "tok-1").unwrap();
    let page = client
        .list_sessions(PublicSessionsQuery::fields().agent("support"))
        .await
        .unwrap();
    assert_eq!(page.sessions.len(), 2);
    assert_eq!(page.pagination.page_len(), 2);

    let requests = server.received_requests().await.unwrap();
    let url = &requests[0].url;
    assert!(!url.query_pairs().any(|(key, _)| key == "env"));
}

#[tokio::test]
async fn test_invalid_token_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid token" })))
        .mount(&server)
        .await;

    let client = PublicAgentView::new(server.uri(), "expired").unwrap();
    let err = client.get_me().await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(matches!(err, Error::Api { status: 401, .. }));
}
