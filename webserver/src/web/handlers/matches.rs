//! Match listings
//!
//! Every listing resolves team and stadium references into summaries.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use shared::{MatchFilter, TeamId};
use standings::{MatchStore, StadiumStore, TeamStore};

use super::parse_query;
use crate::error::{WebServerError, WebServerResult};
use crate::types::{Catalogue, MatchQuery, MatchView};
use crate::webserver_impl::WebServer;

async fn populated<T, M, S>(webserver: &WebServer<T, M, S>, filter: &MatchFilter) -> WebServerResult<Vec<MatchView>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let matches = webserver.service().match_store().list_matches(filter).await?;
    let teams = webserver.service().team_store().list_teams().await?;
    let stadiums = webserver.stadium_store().list_stadiums().await?;

    let catalogue = Catalogue::new(&teams, &stadiums);
    Ok(matches.into_iter().map(|m| catalogue.populate(m)).collect())
}

/// `GET /api/matches` with optional filters
pub async fn list_matches<T, M, S>(
    State(webserver): State<WebServer<T, M, S>>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> WebServerResult<Json<Vec<MatchView>>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let filter = parse_query(query)?.into_filter()?;
    Ok(Json(populated(&webserver, &filter).await?))
}

/// `GET /api/matches/team/:team_id`; 404 when the team does not exist
pub async fn matches_by_team<T, M, S>(
    State(webserver): State<WebServer<T, M, S>>,
    Path(team_id): Path<String>,
) -> WebServerResult<Json<Vec<MatchView>>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let team_id = TeamId::from_string(&team_id).map_err(|e| WebServerError::invalid(e.to_string()))?;
    webserver.service().team_store().get_team(&team_id).await?;

    let filter = MatchFilter::new().with_team(team_id);
    Ok(Json(populated(&webserver, &filter).await?))
}

/// `GET /api/matches/round/:round`
pub async fn matches_by_round<T, M, S>(
    State(webserver): State<WebServer<T, M, S>>,
    round: Result<Path<u32>, PathRejection>,
) -> WebServerResult<Json<Vec<MatchView>>>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let Path(round) = round.map_err(|rejection| WebServerError::invalid(rejection.body_text()))?;
    let filter = MatchFilter::new().with_round(round);
    Ok(Json(populated(&webserver, &filter).await?))
}
