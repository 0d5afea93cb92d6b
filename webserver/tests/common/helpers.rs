//! Test helpers for driving the router without a socket

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared::LeagueData;
use standings::traits::{MockMatchStore, MockStadiumStore, MockTeamStore};
use standings::MemoryStore;
use tower::ServiceExt;

use webserver::WebServer;

/// Server over the in-memory store
pub type TestServer = WebServer<MemoryStore, MemoryStore, MemoryStore>;

/// Server over mocks, for failure paths
pub type MockServer = WebServer<MockTeamStore, MockMatchStore, MockStadiumStore>;

pub struct TestHelpers;

impl TestHelpers {
    pub fn memory_server(data: LeagueData) -> (MemoryStore, TestServer) {
        let store = MemoryStore::with_data(data);
        let server = WebServer::new(
            "127.0.0.1:0".parse().unwrap(),
            false,
            store.clone(),
            store.clone(),
            store.clone(),
        );
        (store, server)
    }

    pub fn mock_server(teams: MockTeamStore, matches: MockMatchStore, stadiums: MockStadiumStore) -> MockServer {
        WebServer::new("127.0.0.1:0".parse().unwrap(), true, teams, matches, stadiums)
    }

    /// Send one request through the router and decode the JSON body
    pub async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        Self::send(router, Method::GET, uri).await
    }

    pub async fn post(router: Router, uri: &str) -> (StatusCode, Value) {
        Self::send(router, Method::POST, uri).await
    }

    /// Names of the rows in a table response, in order
    pub fn names(table: &Value) -> Vec<String> {
        table
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect()
    }
}
