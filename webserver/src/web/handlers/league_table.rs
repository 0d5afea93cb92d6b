//! League table endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use shared::{component_info, ComponentId};
use standings::{MatchStore, StadiumStore, TeamStore};

use super::parse_query;
use crate::error::WebServerResult;
use crate::types::{LeagueTableQuery, MessageResponse, UpdatedTableResponse};
use crate::webserver_impl::WebServer;

/// `GET /api/league-table`
///
/// With `forceUpdate=true` the persisted team stats are rebuilt first and the
/// table comes back wrapped as `{message, table}`. Otherwise the table is
/// computed on the fly and returned as a bare array.
pub async fn get_league_table<T, M, S>(
    State(webserver): State<WebServer<T, M, S>>,
    query: Result<Query<LeagueTableQuery>, QueryRejection>,
) -> WebServerResult<Response>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let query = parse_query(query)?;
    let season = query.season();

    if query.force_update {
        let table = webserver.service().update_stats(season).await?;
        let count = webserver.state().record_table_update();
        component_info!(
            ComponentId::current(),
            "🔄 Team stats rebuilt for season {} (update #{})",
            season.unwrap_or("<all>"),
            count
        );
        let body = UpdatedTableResponse {
            message: "Team statistics updated".to_string(),
            table,
        };
        return Ok(Json(body).into_response());
    }

    let table = webserver.service().generate(season).await?;
    Ok(Json(table).into_response())
}

/// `POST /api/league-table/reset`
pub async fn reset_league_table<T, M, S>(
    State(webserver): State<WebServer<T, M, S>>,
) -> WebServerResult<Json<MessageResponse>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    webserver.service().reset_stats().await?;
    Ok(Json(MessageResponse::new("Team statistics reset")))
}
