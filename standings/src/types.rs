//! Derived standings records

use serde::{Deserialize, Serialize};
use shared::{Match, MatchId, Team, TeamId, TeamStats, TeamSummary};
use std::collections::BTreeMap;
use std::fmt;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Number of recent results kept in a team's form
pub const FORM_LENGTH: usize = 5;

/// Result of one match from one team's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl MatchOutcome {
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => POINTS_FOR_WIN,
            MatchOutcome::Draw => POINTS_FOR_DRAW,
            MatchOutcome::Loss => 0,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "W"),
            MatchOutcome::Draw => write!(f, "D"),
            MatchOutcome::Loss => write!(f, "L"),
        }
    }
}

/// Record of one team against one specific opponent
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl HeadToHead {
    fn record(&mut self, outcome: MatchOutcome) {
        self.played += 1;
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
    }
}

/// Qualitative banding of a table position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Qualification,
    Mid,
    Relegation,
}

/// One line of the league table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    #[serde(flatten)]
    pub team: TeamSummary,
    #[serde(flatten)]
    pub stats: TeamStats,
    /// Most recent first
    pub form: Vec<MatchOutcome>,
    pub head_to_head: BTreeMap<TeamId, HeadToHead>,
    /// 1-based, assigned after sorting
    pub position: usize,
    pub zone: Zone,
}

impl StandingsRow {
    /// Zeroed row for a team; position and zone are placeholders until ranking
    pub(crate) fn new(team: &Team) -> Self {
        Self {
            team: team.summary(),
            stats: TeamStats::default(),
            form: Vec::with_capacity(FORM_LENGTH),
            head_to_head: BTreeMap::new(),
            position: 0,
            zone: Zone::Mid,
        }
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team.id
    }

    /// Apply one played match from this team's side
    pub(crate) fn record(&mut self, opponent: &TeamId, goals_for: u32, goals_against: u32) -> MatchOutcome {
        let outcome = MatchOutcome::from_score(goals_for, goals_against);

        // Counters saturate rather than wrap on absurd inputs.
        let stats = &mut self.stats;
        stats.played = stats.played.saturating_add(1);
        stats.goals_for = stats.goals_for.saturating_add(goals_for);
        stats.goals_against = stats.goals_against.saturating_add(goals_against);
        stats.points = stats.points.saturating_add(outcome.points());
        match outcome {
            MatchOutcome::Win => stats.wins = stats.wins.saturating_add(1),
            MatchOutcome::Draw => stats.draws = stats.draws.saturating_add(1),
            MatchOutcome::Loss => stats.losses = stats.losses.saturating_add(1),
        }

        self.form.insert(0, outcome);
        self.form.truncate(FORM_LENGTH);

        self.head_to_head.entry(opponent.clone()).or_default().record(outcome);

        outcome
    }

    pub(crate) fn finalize(&mut self) {
        let difference = i64::from(self.stats.goals_for) - i64::from(self.stats.goals_against);
        self.stats.goal_difference = i32::try_from(difference)
            .unwrap_or(if difference > 0 { i32::MAX } else { i32::MIN });
    }
}

/// A played match left out of the table because a side is unknown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedMatch {
    pub match_id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub missing: Vec<TeamId>,
}

impl SkippedMatch {
    pub(crate) fn new(m: &Match, missing: Vec<TeamId>) -> Self {
        Self {
            match_id: m.id.clone(),
            home_team_id: m.home_team_id.clone(),
            away_team_id: m.away_team_id.clone(),
            missing,
        }
    }
}

/// Ranked table plus the diagnostics gathered while building it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandingsReport {
    pub rows: Vec<StandingsRow>,
    pub skipped: Vec<SkippedMatch>,
    pub matches_counted: usize,
}
