//! JSON file store
//!
//! Loads a `LeagueData` document once at open and serves reads from memory.
//! Every mutation is written back to disk with a temp-file-and-rename so a
//! failed write never leaves a truncated document. Memory is only updated
//! once the file write has succeeded.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use shared::{component_debug, component_error, ComponentId, LeagueData, Match, MatchFilter, Stadium, Team, TeamId, TeamStats};

use crate::error::{StandingsError, StandingsResult};
use crate::services::memory_store::{reset_teams, select_matches, write_team_stats};
use crate::traits::{MatchStore, StadiumStore, TeamStore};

/// Real file-backed implementation of every store trait
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: Arc<RwLock<LeagueData>>,
}

impl JsonFileStore {
    /// Open an existing dataset file
    pub async fn open(path: impl Into<PathBuf>) -> StandingsResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| StandingsError::storage(format!("Failed to read {}: {}", path.display(), e)))?;
        let data = LeagueData::from_json(&content)?;

        component_debug!(
            ComponentId::current(),
            "📁 Loaded {} teams, {} matches, {} stadiums from {}",
            data.teams.len(),
            data.matches.len(),
            data.stadiums.len(),
            path.display()
        );

        Ok(Self {
            path,
            data: Arc::new(RwLock::new(data)),
        })
    }

    /// Write `data` to `path` (replacing any file there) and open it
    pub async fn create(path: impl Into<PathBuf>, data: LeagueData) -> StandingsResult<Self> {
        let path = path.into();
        write_atomic(&path, &data).await?;
        Ok(Self {
            path,
            data: Arc::new(RwLock::new(data)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `mutate` to a copy of the teams, persist, then commit to memory
    async fn mutate_teams<F, R>(&self, mutate: F) -> StandingsResult<R>
    where
        F: FnOnce(&mut Vec<Team>) -> StandingsResult<R>,
    {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let result = mutate(&mut next.teams)?;
        if let Err(e) = write_atomic(&self.path, &next).await {
            component_error!(ComponentId::current(), "💥 Failed to persist {}: {}", self.path.display(), e);
            return Err(e);
        }
        *data = next;
        Ok(result)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

async fn write_atomic(path: &Path, data: &LeagueData) -> StandingsResult<()> {
    let content = data.to_json_pretty()?;
    let tmp = temp_path(path);

    fs::write(&tmp, content)
        .await
        .map_err(|e| StandingsError::storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| StandingsError::storage(format!("Failed to replace {}: {}", path.display(), e)))?;
    Ok(())
}

#[async_trait]
impl TeamStore for JsonFileStore {
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
        self.mutate_teams(|teams| Ok(reset_teams(teams))).await
    }

    async fn update_team_stats(&self, team_id: &TeamId, stats: &TeamStats) -> StandingsResult<()> {
        self.mutate_teams(|teams| write_team_stats(teams, team_id, stats)).await
    }
}

#[async_trait]
impl MatchStore for JsonFileStore {
    async fn list_matches(&self, filter: &MatchFilter) -> StandingsResult<Vec<Match>> {
        Ok(select_matches(&self.data.read().await.matches, filter))
    }
}

#[async_trait]
impl StadiumStore for JsonFileStore {
    async fn list_stadiums(&self) -> StandingsResult<Vec<Stadium>> {
        Ok(self.data.read().await.stadiums.clone())
    }
}
