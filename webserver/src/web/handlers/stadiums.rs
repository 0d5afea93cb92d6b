use axum::{extract::State, Json};
use shared::Stadium;
use standings::{MatchStore, StadiumStore, TeamStore};

use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// `GET /api/stadiums`
pub async fn list_stadiums<T, M, S>(State(webserver): State<WebServer<T, M, S>>) -> WebServerResult<Json<Vec<Stadium>>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    Ok(Json(webserver.stadium_store().list_stadiums().await?))
}
