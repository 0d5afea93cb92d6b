//! Request and response types for the HTTP surface

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    Match, MatchFilter, MatchId, MatchStatus, Stadium, StadiumId, StadiumSummary, Team, TeamId,
    TeamSummary,
};
use standings::StandingsRow;

use crate::error::{WebServerError, WebServerResult};

/// Query string of `GET /api/league-table`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueTableQuery {
    pub season: Option<String>,
    pub force_update: bool,
}

impl LeagueTableQuery {
    /// Requested season; an empty value means every season
    pub fn season(&self) -> Option<&str> {
        non_empty(self.season.as_deref())
    }
}

/// Query string of `GET /api/matches`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchQuery {
    pub team_id: Option<String>,
    pub round: Option<u32>,
    pub matchday: Option<u32>,
    pub stadium_id: Option<String>,
    pub status: Option<MatchStatus>,
    pub season: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl MatchQuery {
    /// Validate the raw query into a store filter
    pub fn into_filter(self) -> WebServerResult<MatchFilter> {
        let team_id = non_empty(self.team_id.as_deref())
            .map(|raw| TeamId::from_string(raw).map_err(|e| WebServerError::invalid(format!("teamId: {e}"))))
            .transpose()?;
        let stadium_id = non_empty(self.stadium_id.as_deref())
            .map(|raw| StadiumId::from_string(raw).map_err(|e| WebServerError::invalid(format!("stadiumId: {e}"))))
            .transpose()?;
        let date_from = non_empty(self.start_date.as_deref())
            .map(|raw| parse_date("startDate", raw))
            .transpose()?;
        let date_to = non_empty(self.end_date.as_deref())
            .map(|raw| parse_date("endDate", raw))
            .transpose()?;

        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err(WebServerError::invalid("startDate is after endDate"));
            }
        }

        Ok(MatchFilter {
            team_id,
            round: self.round,
            matchday: self.matchday,
            stadium_id,
            status: self.status,
            season: non_empty(self.season.as_deref()).map(str::to_string),
            date_from,
            date_to,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC)
pub fn parse_date(field: &str, raw: &str) -> WebServerResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| WebServerError::invalid(format!("{field}: expected a date, got '{raw}'")))
}

/// Plain message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response of a forced table update
#[derive(Debug, Serialize)]
pub struct UpdatedTableResponse {
    pub message: String,
    pub table: Vec<StandingsRow>,
}

/// A match with its team and stadium references resolved.
/// References that cannot be resolved serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub id: MatchId,
    pub home_team: Option<TeamSummary>,
    pub away_team: Option<TeamSummary>,
    pub date: DateTime<Utc>,
    pub stadium: Option<StadiumSummary>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub status: MatchStatus,
    pub season: String,
    pub round: u32,
    pub matchday: u32,
}

/// Lookup tables used to populate many matches at once
pub struct Catalogue {
    teams: HashMap<TeamId, TeamSummary>,
    stadiums: HashMap<StadiumId, StadiumSummary>,
}

impl Catalogue {
    pub fn new(teams: &[Team], stadiums: &[Stadium]) -> Self {
        Self {
            teams: teams.iter().map(|t| (t.id.clone(), t.summary())).collect(),
            stadiums: stadiums.iter().map(|s| (s.id.clone(), s.summary())).collect(),
        }
    }

    pub fn populate(&self, m: Match) -> MatchView {
        MatchView {
            home_team: self.teams.get(&m.home_team_id).cloned(),
            away_team: self.teams.get(&m.away_team_id).cloned(),
            stadium: self.stadiums.get(&m.stadium_id).cloned(),
            id: m.id,
            date: m.date,
            home_goals: m.home_goals,
            away_goals: m.away_goals,
            status: m.status,
            season: m.season,
            round: m.round,
            matchday: m.matchday,
        }
    }
}
