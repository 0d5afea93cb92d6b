//! Standings engine
//!
//! Pure computation of a ranked league table from a team set and a match
//! set. Rows are rebuilt from a full replay on every call.

use std::collections::HashMap;

use shared::{component_debug, component_warn, ComponentId, Match, Team, TeamId};

use crate::ranking;
use crate::types::{SkippedMatch, StandingsReport, StandingsRow};

/// Compute the ranked table for `season` (every season when `None`).
///
/// Only played matches count. Matches naming a team outside `teams` are
/// skipped and logged.
pub fn compute_standings(teams: &[Team], matches: &[Match], season: Option<&str>) -> Vec<StandingsRow> {
    compute_standings_report(teams, matches, season).rows
}

/// Same as [`compute_standings`], also returning the skipped matches.
pub fn compute_standings_report(teams: &[Team], matches: &[Match], season: Option<&str>) -> StandingsReport {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&TeamId, usize> = HashMap::with_capacity(teams.len());

    for team in teams {
        if index.contains_key(&team.id) {
            component_warn!(ComponentId::current(), "Duplicate team {} ignored", team.id);
            continue;
        }
        index.insert(&team.id, rows.len());
        rows.push(StandingsRow::new(team));
    }

    // sort_by_key is stable: same-date matches replay in input order
    let mut replay: Vec<&Match> = matches
        .iter()
        .filter(|m| m.is_played() && m.in_season(season))
        .collect();
    replay.sort_by_key(|m| m.date);

    let mut skipped = Vec::new();
    let mut matches_counted = 0;

    for m in replay {
        let (home, away) = match (index.get(&m.home_team_id), index.get(&m.away_team_id)) {
            (Some(&home), Some(&away)) => (home, away),
            _ => {
                let missing: Vec<TeamId> = [&m.home_team_id, &m.away_team_id]
                    .into_iter()
                    .filter(|id| !index.contains_key(id))
                    .cloned()
                    .collect();
                component_warn!(
                    ComponentId::current(),
                    "Skipping match {}: unknown team(s) {}",
                    m.id,
                    missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
                );
                skipped.push(SkippedMatch::new(m, missing));
                continue;
            }
        };

        rows[home].record(&m.away_team_id, m.home_goals, m.away_goals);
        rows[away].record(&m.home_team_id, m.away_goals, m.home_goals);
        matches_counted += 1;
    }

    for row in rows.iter_mut() {
        row.finalize();
    }

    ranking::rank_rows(&mut rows);

    component_debug!(
        ComponentId::current(),
        "Computed table: {} teams, {} matches counted, {} skipped",
        rows.len(),
        matches_counted,
        skipped.len()
    );

    StandingsReport {
        rows,
        skipped,
        matches_counted,
    }
}
