//! Test fixtures and data for webserver tests

use chrono::{Duration, TimeZone, Utc};
use shared::{LeagueData, Match, MatchId, MatchStatus, Stadium, StadiumId, Team, TeamId};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard test IDs using proper UUID format
    pub const TEAM_1: &'static str = "550e8400-e29b-41d4-a716-446655440001";
    pub const TEAM_2: &'static str = "550e8400-e29b-41d4-a716-446655440002";
    pub const TEAM_3: &'static str = "550e8400-e29b-41d4-a716-446655440003";
    pub const UNKNOWN_TEAM: &'static str = "550e8400-e29b-41d4-a716-446655440099";
    pub const STADIUM_1: &'static str = "550e8400-e29b-41d4-a716-446655440101";
    pub const STADIUM_2: &'static str = "550e8400-e29b-41d4-a716-446655440102";

    pub const SEASON: &'static str = "2024/2025";

    pub fn team_id(raw: &str) -> TeamId {
        TeamId::from_string(raw).unwrap()
    }

    pub fn stadium_id(raw: &str) -> StadiumId {
        StadiumId::from_string(raw).unwrap()
    }

    pub fn teams() -> Vec<Team> {
        vec![
            Team::new(Self::team_id(Self::TEAM_1), "Jagiellonia Białystok", "JAG"),
            Team::new(Self::team_id(Self::TEAM_2), "Raków Częstochowa", "RCZ"),
            Team::new(Self::team_id(Self::TEAM_3), "Śląsk Wrocław", "SLA"),
        ]
    }

    pub fn stadiums() -> Vec<Stadium> {
        vec![
            Stadium {
                id: Self::stadium_id(Self::STADIUM_1),
                name: "Stadion Miejski".to_string(),
                city: "Białystok".to_string(),
                capacity: 22_372,
                address: "ul. Słoneczna 1".to_string(),
            },
            Stadium {
                id: Self::stadium_id(Self::STADIUM_2),
                name: "Tarczyński Arena".to_string(),
                city: "Wrocław".to_string(),
                capacity: 42_771,
                address: "al. Śląska 1".to_string(),
            },
        ]
    }

    pub fn fixture(home: &str, away: &str, goals: (u32, u32), status: MatchStatus, round: u32) -> Match {
        Match {
            id: MatchId::new(),
            home_team_id: Self::team_id(home),
            away_team_id: Self::team_id(away),
            date: Utc.with_ymd_and_hms(2024, 7, 19, 18, 0, 0).unwrap() + Duration::days(7 * (round as i64 - 1)),
            stadium_id: Self::stadium_id(if home == Self::TEAM_3 { Self::STADIUM_2 } else { Self::STADIUM_1 }),
            home_goals: goals.0,
            away_goals: goals.1,
            status,
            season: Self::SEASON.to_string(),
            round,
            matchday: round,
        }
    }

    /// Three teams over three rounds:
    /// round 1 JAG 2-0 RCZ, round 2 SLA 1-1 JAG, round 3 RCZ v SLA scheduled
    pub fn league() -> LeagueData {
        LeagueData {
            teams: Self::teams(),
            matches: vec![
                Self::fixture(Self::TEAM_1, Self::TEAM_2, (2, 0), MatchStatus::Played, 1),
                Self::fixture(Self::TEAM_3, Self::TEAM_1, (1, 1), MatchStatus::Played, 2),
                Self::fixture(Self::TEAM_2, Self::TEAM_3, (0, 0), MatchStatus::Scheduled, 3),
            ],
            stadiums: Self::stadiums(),
        }
    }
}
