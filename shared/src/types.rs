//! Core league records and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Unique identifier for teams
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for matches
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for stadiums
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StadiumId(Uuid);

impl StadiumId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }
}

impl Default for StadiumId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StadiumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate counters persisted on every team record.
///
/// These are overwritten wholesale by a standings update; they are never
/// merged with a previous value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl TeamStats {
    /// True when every counter is zero
    pub fn is_zeroed(&self) -> bool {
        *self == Self::default()
    }
}

/// A team record as held by the store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
    #[serde(flatten)]
    pub stats: TeamStats,
}

impl Team {
    /// Create a team with zeroed stats
    pub fn new(id: TeamId, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: short_name.into(),
            stats: TeamStats::default(),
        }
    }

    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            short_name: self.short_name.clone(),
        }
    }
}

/// Identity fields of a team, without aggregates
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

/// Lifecycle of a fixture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Played,
    Cancelled,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::Played => write!(f, "played"),
            MatchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A fixture between two teams
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub date: DateTime<Utc>,
    pub stadium_id: StadiumId,
    pub home_goals: u32,
    pub away_goals: u32,
    pub status: MatchStatus,
    pub season: String,
    pub round: u32,
    pub matchday: u32,
}

impl Match {
    pub fn is_played(&self) -> bool {
        self.status == MatchStatus::Played
    }

    pub fn involves(&self, team_id: &TeamId) -> bool {
        self.home_team_id == *team_id || self.away_team_id == *team_id
    }

    /// Exact season label match; `None` accepts every season
    pub fn in_season(&self, season: Option<&str>) -> bool {
        season.map_or(true, |s| self.season == s)
    }
}

/// A venue from the stadium catalogue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub id: StadiumId,
    pub name: String,
    pub city: String,
    pub capacity: u32,
    pub address: String,
}

impl Stadium {
    pub fn summary(&self) -> StadiumSummary {
        StadiumSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumSummary {
    pub id: StadiumId,
    pub name: String,
    pub city: String,
}

/// Optional criteria for selecting matches. Every set field must hold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchFilter {
    /// Home or away side
    pub team_id: Option<TeamId>,
    pub round: Option<u32>,
    pub matchday: Option<u32>,
    pub stadium_id: Option<StadiumId>,
    pub status: Option<MatchStatus>,
    pub season: Option<String>,
    /// Inclusive lower bound on kickoff
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on kickoff
    pub date_to: Option<DateTime<Utc>>,
}

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Played matches, optionally restricted to one season
    pub fn played_in(season: Option<&str>) -> Self {
        Self {
            status: Some(MatchStatus::Played),
            season: season.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_round(mut self, round: u32) -> Self {
        self.round = Some(round);
        self
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, m: &Match) -> bool {
        if let Some(team_id) = &self.team_id {
            if !m.involves(team_id) {
                return false;
            }
        }
        if self.round.is_some_and(|r| m.round != r) {
            return false;
        }
        if self.matchday.is_some_and(|d| m.matchday != d) {
            return false;
        }
        if self.stadium_id.as_ref().is_some_and(|s| m.stadium_id != *s) {
            return false;
        }
        if self.status.is_some_and(|s| m.status != s) {
            return false;
        }
        if !m.in_season(self.season.as_deref()) {
            return false;
        }
        if self.date_from.is_some_and(|from| m.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| m.date > to) {
            return false;
        }
        true
    }
}

/// Complete dataset as stored on disk
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueData {
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub stadiums: Vec<Stadium>,
}

impl LeagueData {
    pub fn from_json(content: &str) -> SharedResult<Self> {
        serde_json::from_str(content).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> SharedResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SharedError::SerializationError {
            message: e.to_string(),
        })
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == *id)
    }

    pub fn stadium(&self, id: &StadiumId) -> Option<&Stadium> {
        self.stadiums.iter().find(|s| s.id == *id)
    }
}
