//! Standings sync workflow
//!
//! Reset, recompute and persist team aggregates against injected stores.
//! Each call is a fresh cycle; nothing is carried over between calls.

use futures_util::future::join_all;

use shared::{component_debug, component_warn, logging, ComponentId, MatchFilter};

use crate::{
    engine,
    error::{FailedWrite, StandingsError, StandingsResult},
    traits::{MatchStore, TeamStore},
    types::{StandingsReport, StandingsRow},
};

/// Standings workflow over a team store and a match store
pub struct StandingsService<T, M>
where
    T: TeamStore,
    M: MatchStore,
{
    team_store: T,
    match_store: M,
}

impl<T, M> StandingsService<T, M>
where
    T: TeamStore,
    M: MatchStore,
{
    /// Create new service with injected stores
    pub fn new(team_store: T, match_store: M) -> Self {
        Self {
            team_store,
            match_store,
        }
    }

    pub fn team_store(&self) -> &T {
        &self.team_store
    }

    pub fn match_store(&self) -> &M {
        &self.match_store
    }

    /// Compute the table for `season` (all seasons when `None`) without
    /// touching storage.
    pub async fn generate(&self, season: Option<&str>) -> StandingsResult<Vec<StandingsRow>> {
        Ok(self.generate_report(season).await?.rows)
    }

    /// Like [`generate`](Self::generate), keeping the skipped-match diagnostics.
    pub async fn generate_report(&self, season: Option<&str>) -> StandingsResult<StandingsReport> {
        let teams = self.team_store.list_teams().await?;
        let matches = self.match_store.list_matches(&MatchFilter::played_in(season)).await?;

        component_debug!(
            ComponentId::current(),
            "📊 Generating table for season {}: {} teams, {} played matches",
            season.unwrap_or("<all>"),
            teams.len(),
            matches.len()
        );

        let report = engine::compute_standings_report(&teams, &matches, season);
        if !report.skipped.is_empty() {
            component_warn!(
                ComponentId::current(),
                "⚠️ {} match(es) skipped due to unknown teams",
                report.skipped.len()
            );
        }

        Ok(report)
    }

    /// Zero every team's aggregate counters in storage.
    pub async fn reset_stats(&self) -> StandingsResult<()> {
        let count = self.team_store.reset_all_stats().await?;
        logging::log_success(ComponentId::current(), &format!("Reset stats for {count} teams"));
        Ok(())
    }

    /// Reset, recompute for `season`, then write each row's counters back.
    ///
    /// Writes are dispatched concurrently and all of them are awaited. If any
    /// fails the result is `PartialWrite`, listing which teams were updated
    /// and which were not. Applied writes are not rolled back.
    pub async fn update_stats(&self, season: Option<&str>) -> StandingsResult<Vec<StandingsRow>> {
        self.reset_stats().await?;
        let rows = self.generate(season).await?;
        logging::log_progress(
            ComponentId::current(),
            "Persisting stats",
            &format!("{} teams, season {}", rows.len(), season.unwrap_or("<all>")),
        );
        let updated = self.persist(&rows).await?;

        logging::log_success(ComponentId::current(), &format!("Updated stats for {updated} teams"));
        Ok(rows)
    }

    async fn persist(&self, rows: &[StandingsRow]) -> StandingsResult<usize> {
        let writes = rows.iter().map(|row| async move {
            let result = self.team_store.update_team_stats(row.team_id(), &row.stats).await;
            (row.team_id().clone(), result)
        });

        let mut updated = Vec::with_capacity(rows.len());
        let mut failed = Vec::new();
        for (team_id, result) in join_all(writes).await {
            match result {
                Ok(()) => updated.push(team_id),
                Err(e) => failed.push(FailedWrite {
                    team_id,
                    reason: e.to_string(),
                }),
            }
        }

        if failed.is_empty() {
            return Ok(updated.len());
        }

        let err = StandingsError::PartialWrite { updated, failed };
        logging::log_error(ComponentId::current(), "Stats persistence", &err);
        Err(err)
    }
}
