//! Shared types for the league standings service
//!
//! Contains the league records every crate agrees on (teams, matches,
//! stadiums), the shared error type and the tracing setup. Component-internal
//! types (standings rows, HTTP views) live in their own crates.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;

pub use logging::ComponentId;
