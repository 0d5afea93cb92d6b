//! HTTP front end for the league standings service
//!
//! Serves the computed league table, the stats reset and update workflow,
//! and read-only team, match and stadium listings over JSON.

pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{ErrorBody, WebServerError, WebServerResult};
pub use state::ServerState;
pub use types::{Catalogue, LeagueTableQuery, MatchQuery, MatchView, MessageResponse, UpdatedTableResponse};
pub use webserver_impl::WebServer;
