//! In-memory store
//!
//! Holds a whole `LeagueData` behind a shared lock. Clones share the same data.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shared::{LeagueData, Match, MatchFilter, Stadium, Team, TeamId, TeamStats};

use crate::error::{StandingsError, StandingsResult};
use crate::traits::{MatchStore, StadiumStore, TeamStore};

/// Real in-memory implementation of every store trait
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<LeagueData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `data`
    pub fn with_data(data: LeagueData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> LeagueData {
        self.data.read().await.clone()
    }
}

/// Apply a filter and order by kickoff (stable)
pub(crate) fn select_matches(matches: &[Match], filter: &MatchFilter) -> Vec<Match> {
    let mut selected: Vec<Match> = matches.iter().filter(|m| filter.matches(m)).cloned().collect();
    selected.sort_by_key(|m| m.date);
    selected
}

/// Zero every team's counters, returning how many were touched
pub(crate) fn reset_teams(teams: &mut [Team]) -> usize {
    for team in teams.iter_mut() {
        team.stats = TeamStats::default();
    }
    teams.len()
}

/// Overwrite one team's counters
pub(crate) fn write_team_stats(teams: &mut [Team], team_id: &TeamId, stats: &TeamStats) -> StandingsResult<()> {
    let team = teams
        .iter_mut()
        .find(|t| t.id == *team_id)
        .ok_or_else(|| StandingsError::TeamNotFound {
            team_id: team_id.clone(),
        })?;
    team.stats = stats.clone();
    Ok(())
}

#[async_trait]
impl TeamStore for MemoryStore {
    async fn list_teams(&self) -> StandingsResult<Vec<Team>> {
        Ok(self.data.read().await.teams.clone())
    }

    async fn get_team(&self, team_id: &TeamId) -> StandingsResult<Team> {
        self.data
            .read()
            .await
            .team(team_id)
            .cloned()
            .ok_or_else(|| StandingsError::TeamNotFound {
                team_id: team_id.clone(),
            })
    }

    async fn reset_all_stats(&self) -> StandingsResult<usize> {
        let mut data = self.data.write().await;
        Ok(reset_teams(&mut data.teams))
    }

    async fn update_team_stats(&self, team_id: &TeamId, stats: &TeamStats) -> StandingsResult<()> {
        let mut data = self.data.write().await;
        write_team_stats(&mut data.teams, team_id, stats)
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn list_matches(&self, filter: &MatchFilter) -> StandingsResult<Vec<Match>> {
        Ok(select_matches(&self.data.read().await.matches, filter))
    }
}

#[async_trait]
impl StadiumStore for MemoryStore {
    async fn list_stadiums(&self) -> StandingsResult<Vec<Stadium>> {
        Ok(self.data.read().await.stadiums.clone())
    }
}
