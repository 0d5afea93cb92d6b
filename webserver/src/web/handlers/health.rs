//! Welcome and liveness endpoints

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use standings::{MatchStore, StadiumStore, TeamStore};

use crate::types::MessageResponse;
use crate::webserver_impl::WebServer;

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the league standings API"))
}

/// Health check endpoint
pub async fn health_check<T, M, S>(State(webserver): State<WebServer<T, M, S>>) -> Json<Value>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let state = webserver.state();
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": state.get_uptime_seconds(),
        "persistent": state.persistent,
        "tableUpdates": state.table_update_count()
    }))
}
