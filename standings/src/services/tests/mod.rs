//! Store-specific tests
//!
//! Each store has its own test file; shared fixtures live here.


pub mod fixtures {
    use chrono::{Duration, TimeZone, Utc};
    use shared::{LeagueData, Match, MatchId, MatchStatus, Stadium, StadiumId, Team, TeamId};

    /// Standard test IDs using proper UUID format
    pub const TEAM_1: &str = "550e8400-e29b-41d4-a716-446655440001";
    pub const TEAM_2: &str = "550e8400-e29b-41d4-a716-446655440002";
    pub const TEAM_3: &str = "550e8400-e29b-41d4-a716-446655440003";
    pub const STADIUM_1: &str = "550e8400-e29b-41d4-a716-446655440101";

    pub fn team_id(raw: &str) -> TeamId {
        TeamId::from_string(raw).expect("Valid test team ID")
    }

    pub fn stadium() -> Stadium {
        Stadium {
            id: StadiumId::from_string(STADIUM_1).expect("Valid test stadium ID"),
            name: "Stadion Miejski".to_string(),
            city: "Poznań".to_string(),
            capacity: 42_837,
            address: "ul. Bułgarska 17".to_string(),
        }
    }

    pub fn fixture(home: &str, away: &str, goals: (u32, u32), status: MatchStatus, day: i64) -> Match {
        Match {
            id: MatchId::new(),
            home_team_id: team_id(home),
            away_team_id: team_id(away),
            date: Utc.with_ymd_and_hms(2024, 7, 20, 15, 0, 0).unwrap() + Duration::days(day),
            stadium_id: stadium().id,
            home_goals: goals.0,
            away_goals: goals.1,
            status,
            season: "2024/2025".to_string(),
            round: 1 + (day / 7) as u32,
            matchday: 1 + day as u32,
        }
    }

    /// Three teams, two played matches, one scheduled
    pub fn league() -> LeagueData {
        LeagueData {
            teams: vec![
                Team::new(team_id(TEAM_1), "Lech Poznań", "LPO"),
                Team::new(team_id(TEAM_2), "Legia Warszawa", "LEG"),
                Team::new(team_id(TEAM_3), "Pogoń Szczecin", "POG"),
            ],
            matches: vec![
                fixture(TEAM_2, TEAM_3, (0, 0), MatchStatus::Scheduled, 14),
                fixture(TEAM_1, TEAM_2, (2, 1), MatchStatus::Played, 0),
                fixture(TEAM_3, TEAM_1, (1, 1), MatchStatus::Played, 7),
            ],
            stadiums: vec![stadium()],
        }
    }
}
