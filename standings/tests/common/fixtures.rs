//! Test fixtures and data for standings tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::{Match, MatchId, MatchStatus, StadiumId, Team, TeamId};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard test team IDs using proper UUID format
    pub const TEAM_IDS: [&'static str; 8] = [
        "550e8400-e29b-41d4-a716-446655440001",
        "550e8400-e29b-41d4-a716-446655440002",
        "550e8400-e29b-41d4-a716-446655440003",
        "550e8400-e29b-41d4-a716-446655440004",
        "550e8400-e29b-41d4-a716-446655440005",
        "550e8400-e29b-41d4-a716-446655440006",
        "550e8400-e29b-41d4-a716-446655440007",
        "550e8400-e29b-41d4-a716-446655440008",
    ];

    pub const TEAM_NAMES: [(&'static str, &'static str); 8] = [
        ("Arsenal", "ARS"),
        ("Brentford", "BRE"),
        ("Chelsea", "CHE"),
        ("Everton", "EVE"),
        ("Fulham", "FUL"),
        ("Liverpool", "LIV"),
        ("Newcastle", "NEW"),
        ("Wolves", "WOL"),
    ];

    pub const STADIUM: &'static str = "550e8400-e29b-41d4-a716-446655440101";
    pub const SEASON: &'static str = "2024/2025";
    pub const OTHER_SEASON: &'static str = "2023/2024";

    pub fn team_id(index: usize) -> TeamId {
        TeamId::from_string(Self::TEAM_IDS[index]).unwrap()
    }

    pub fn stadium_id() -> StadiumId {
        StadiumId::from_string(Self::STADIUM).unwrap()
    }

    /// The first `count` standard teams
    pub fn teams(count: usize) -> Vec<Team> {
        Self::TEAM_NAMES
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, (name, short))| Team::new(Self::team_id(i), *name, *short))
            .collect()
    }

    /// Two-team league used by the reference scenarios
    pub fn two_teams() -> (Team, Team) {
        let mut teams = Self::teams(2);
        let b = teams.remove(1);
        let a = teams.remove(0);
        (a, b)
    }

    pub fn kickoff(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 17, 14, 0, 0).unwrap() + Duration::days(day)
    }

    /// A played match in the standard season
    pub fn played(home: &Team, away: &Team, home_goals: u32, away_goals: u32, day: i64) -> Match {
        Self::with_status(home, away, (home_goals, away_goals), MatchStatus::Played, day)
    }

    pub fn with_status(home: &Team, away: &Team, goals: (u32, u32), status: MatchStatus, day: i64) -> Match {
        Match {
            id: MatchId::new(),
            home_team_id: home.id.clone(),
            away_team_id: away.id.clone(),
            date: Self::kickoff(day),
            stadium_id: Self::stadium_id(),
            home_goals: goals.0,
            away_goals: goals.1,
            status,
            season: Self::SEASON.to_string(),
            round: 1,
            matchday: 1,
        }
    }
}
