//! Ordering rules for the league table and its zones.
//!
//! Team names are compared with the Unicode root collation, so accented
//! initials such as `Ś` or `Ł` sort next to their base letter.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use shared::Team;

use crate::types::{StandingsRow, Zone};

/// Number of positions at each end of the table that form a zone
pub const ZONE_SIZE: usize = 3;

/// Table criteria, each one a tie-break for the previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankCriteria {
    Points,
    GoalDifference,
    GoalsFor,
    /// Last resort. Rows still equal after this keep their input order.
    Name,
}

pub const TABLE_CRITERIA: [RankCriteria; 4] = [
    RankCriteria::Points,
    RankCriteria::GoalDifference,
    RankCriteria::GoalsFor,
    RankCriteria::Name,
];

type CmpFunc = fn(&StandingsRow, &StandingsRow) -> Ordering;

/// Higher is better for every numeric criterion.
fn compare_points(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.stats.points.cmp(&a.stats.points)
}

fn compare_goal_difference(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.stats.goal_difference.cmp(&a.stats.goal_difference)
}

fn compare_goals_for(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.stats.goals_for.cmp(&a.stats.goals_for)
}

/// Alphabetical, lower is better.
fn compare_name(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    compare_team_names(&a.team.name, &b.team.name)
}

impl RankCriteria {
    fn compare_fn(self) -> CmpFunc {
        match self {
            RankCriteria::Points => compare_points,
            RankCriteria::GoalDifference => compare_goal_difference,
            RankCriteria::GoalsFor => compare_goals_for,
            RankCriteria::Name => compare_name,
        }
    }
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware name order, falling back to the raw strings so the result
/// is total.
pub fn compare_team_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| collator.as_ref().map(|c| c.compare(a, b)))
        .unwrap_or_else(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    TABLE_CRITERIA
        .iter()
        .map(|criteria| criteria.compare_fn()(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Order of persisted team records: points, goal difference, goals for.
pub fn compare_persisted(a: &Team, b: &Team) -> Ordering {
    b.stats
        .points
        .cmp(&a.stats.points)
        .then_with(|| b.stats.goal_difference.cmp(&a.stats.goal_difference))
        .then_with(|| b.stats.goals_for.cmp(&a.stats.goals_for))
}

/// Zone for a 1-based position. The top zone is checked first, so in a
/// table shorter than two zones the overlap resolves to qualification.
pub fn zone_for(position: usize, total: usize) -> Zone {
    if position <= ZONE_SIZE {
        Zone::Qualification
    } else if position + ZONE_SIZE > total {
        Zone::Relegation
    } else {
        Zone::Mid
    }
}

/// Sort rows in place (stable) and assign dense positions and zones.
pub fn rank_rows(rows: &mut [StandingsRow]) {
    rows.sort_by(compare_rows);

    let total = rows.len();
    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index + 1;
        row.zone = zone_for(row.position, total);
    }
}
