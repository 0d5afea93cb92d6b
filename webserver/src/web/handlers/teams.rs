//! Team listing

use axum::{extract::State, Json};
use shared::Team;
use standings::{ranking, MatchStore, StadiumStore, TeamStore};

use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// `GET /api/teams`, ordered by persisted points, goal difference, goals for
pub async fn list_teams<T, M, S>(State(webserver): State<WebServer<T, M, S>>) -> WebServerResult<Json<Vec<Team>>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let mut teams = webserver.service().team_store().list_teams().await?;
    teams.sort_by(ranking::compare_persisted);
    Ok(Json(teams))
}
