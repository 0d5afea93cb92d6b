//! Test helpers and builder patterns for standings tests

use shared::{LeagueData, Match, MatchStatus, Stadium, Team};
use standings::{MemoryStore, StandingsRow, StandingsService};

use super::fixtures::TestFixtures;

/// Builder for league datasets with sensible defaults
pub struct LeagueBuilder {
    teams: Vec<Team>,
    matches: Vec<Match>,
    stadiums: Vec<Stadium>,
}

impl LeagueBuilder {
    /// Start from the first `count` standard teams and one stadium
    pub fn new(count: usize) -> Self {
        Self {
            teams: TestFixtures::teams(count),
            matches: Vec::new(),
            stadiums: vec![Stadium {
                id: TestFixtures::stadium_id(),
                name: "Community Stadium".to_string(),
                city: "London".to_string(),
                capacity: 17_250,
                address: "Lionel Road South".to_string(),
            }],
        }
    }

    /// Add a double round robin where every pairing is played home and away.
    /// Scores are derived from the pairing so the table is reproducible.
    pub fn with_double_round_robin(mut self) -> Self {
        let n = self.teams.len();
        let mut day = 0;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let home_goals = ((i * 7 + j * 3) % 4) as u32;
                let away_goals = ((i * 2 + j * 5) % 3) as u32;
                let m = TestFixtures::played(&self.teams[i], &self.teams[j], home_goals, away_goals, day);
                self.matches.push(m);
                day += 1;
            }
        }
        self
    }

    /// Add one scheduled fixture for every pairing, with scores that must be ignored
    pub fn with_scheduled_fixtures(mut self) -> Self {
        let n = self.teams.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let m = TestFixtures::with_status(&self.teams[i], &self.teams[j], (9, 0), MatchStatus::Scheduled, 400);
                self.matches.push(m);
            }
        }
        self
    }

    pub fn with_match(mut self, m: Match) -> Self {
        self.matches.push(m);
        self
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn build(self) -> LeagueData {
        LeagueData {
            teams: self.teams,
            matches: self.matches,
            stadiums: self.stadiums,
        }
    }
}

/// Type alias for the workflow over the in-memory store
pub type MemoryService = StandingsService<MemoryStore, MemoryStore>;

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// A workflow whose team and match stores share one in-memory dataset
    pub fn memory_service(data: LeagueData) -> (MemoryStore, MemoryService) {
        let store = MemoryStore::with_data(data);
        let service = StandingsService::new(store.clone(), store.clone());
        (store, service)
    }

    /// Assert the per-row arithmetic invariants
    pub fn assert_row_invariants(rows: &[StandingsRow]) {
        for (i, row) in rows.iter().enumerate() {
            let s = &row.stats;
            assert_eq!(row.position, i + 1, "dense 1-based positions");
            assert_eq!(s.played, s.wins + s.draws + s.losses, "{} played", row.team.name);
            assert_eq!(s.points, 3 * s.wins + s.draws, "{} points", row.team.name);
            assert_eq!(
                s.goal_difference,
                s.goals_for as i32 - s.goals_against as i32,
                "{} goal difference",
                row.team.name
            );
            assert!(row.form.len() <= 5);
            assert!(row.form.len() as u32 <= s.played);
        }
    }

    /// Count (decisive, drawn) played matches in `matches`
    pub fn outcome_counts(matches: &[Match]) -> (u32, u32) {
        matches
            .iter()
            .filter(|m| m.is_played())
            .fold((0, 0), |(decisive, drawn), m| {
                if m.home_goals == m.away_goals {
                    (decisive, drawn + 1)
                } else {
                    (decisive + 1, drawn)
                }
            })
    }
}
