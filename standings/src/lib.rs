//! League standings engine and sync workflow
//!
//! The engine derives a ranked league table from played matches with no I/O.
//! The workflow wraps it in reset, recompute and persist operations against
//! injected team and match stores.

pub mod engine;
pub mod error;
pub mod ranking;
pub mod services;
pub mod traits;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use engine::{compute_standings, compute_standings_report};
pub use error::{FailedWrite, StandingsError, StandingsResult};
pub use services::{JsonFileStore, MemoryStore};
pub use traits::{MatchStore, StadiumStore, TeamStore};
pub use types::{HeadToHead, MatchOutcome, SkippedMatch, StandingsReport, StandingsRow, Zone};
pub use workflow::StandingsService;
