//! Storage capability traits with mockall annotations for testing
//!
//! The workflow never touches a database directly. Every read and write goes
//! through these traits so stores can be swapped and mocked.

use shared::{Match, MatchFilter, Stadium, Team, TeamId, TeamStats};

use crate::error::StandingsResult;

/// Team record storage
#[mockall::automock]
#[async_trait::async_trait]
pub trait TeamStore: Send + Sync {
    /// All teams in stored order
    async fn list_teams(&self) -> StandingsResult<Vec<Team>>;

    /// A single team; `TeamNotFound` when the id is unknown
    async fn get_team(&self, team_id: &TeamId) -> StandingsResult<Team>;

    /// Zero the aggregate counters of every team
    ///
    /// # Returns
    /// Number of team records reset
    async fn reset_all_stats(&self) -> StandingsResult<usize>;

    /// Overwrite the aggregate counters of one team. Identity fields are untouched.
    async fn update_team_stats(&self, team_id: &TeamId, stats: &TeamStats) -> StandingsResult<()>;
}

/// Match record storage (read-only for the standings workflow)
#[mockall::automock]
#[async_trait::async_trait]
pub trait MatchStore: Send + Sync {
    /// Matches satisfying `filter`, ordered by kickoff ascending.
    /// Matches sharing a kickoff keep their stored order.
    async fn list_matches(&self, filter: &MatchFilter) -> StandingsResult<Vec<Match>>;
}

/// Stadium catalogue
#[mockall::automock]
#[async_trait::async_trait]
pub trait StadiumStore: Send + Sync {
    async fn list_stadiums(&self) -> StandingsResult<Vec<Stadium>>;
}
