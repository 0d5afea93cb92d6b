//! Main webserver implementation
//!
//! `WebServer` owns the standings workflow and the stadium catalogue, both
//! built over injected store implementations, and exposes them as an axum
//! router.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use shared::{component_info, logging, ComponentId};
use standings::{MatchStore, StadiumStore, StandingsService, TeamStore};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::{WebServerError, WebServerResult};
use crate::state::ServerState;
use crate::web::handlers::{health, league_table, matches, stadiums, teams};

/// Main webserver struct with dependency injection
pub struct WebServer<T, M, S>
where
    T: TeamStore,
    M: MatchStore,
    S: StadiumStore,
{
    state: Arc<ServerState>,
    service: Arc<StandingsService<T, M>>,
    stadium_store: Arc<S>,
}

impl<T, M, S> Clone for WebServer<T, M, S>
where
    T: TeamStore,
    M: MatchStore,
    S: StadiumStore,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            service: Arc::clone(&self.service),
            stadium_store: Arc::clone(&self.stadium_store),
        }
    }
}

impl<T, M, S> WebServer<T, M, S>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    /// Create a new webserver with injected stores
    pub fn new(bind_address: SocketAddr, persistent: bool, team_store: T, match_store: M, stadium_store: S) -> Self {
        Self {
            state: Arc::new(ServerState::new(bind_address, persistent)),
            service: Arc::new(StandingsService::new(team_store, match_store)),
            stadium_store: Arc::new(stadium_store),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let api = Router::new()
            .route("/league-table", get(league_table::get_league_table::<T, M, S>))
            .route("/league-table/reset", post(league_table::reset_league_table::<T, M, S>))
            .route("/teams", get(teams::list_teams::<T, M, S>))
            .route("/matches", get(matches::list_matches::<T, M, S>))
            .route("/matches/team/:team_id", get(matches::matches_by_team::<T, M, S>))
            .route("/matches/round/:round", get(matches::matches_by_round::<T, M, S>))
            .route("/stadiums", get(stadiums::list_stadiums::<T, M, S>));

        Router::new()
            .route("/", get(health::welcome))
            .route("/health", get(health::health_check::<T, M, S>))
            .nest("/api", api)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.state.bind_address;
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartup {
                address: address.to_string(),
                message: e.to_string(),
            })?;

        component_info!(ComponentId::current(), "🌐 Web server listening on http://{}", address);
        component_info!(ComponentId::current(), "📊 League table at http://{}/api/league-table", address);

        self.state.set_running(true);
        let result = axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await;
        self.state.set_running(false);

        if let Err(e) = result {
            logging::log_error(ComponentId::current(), "HTTP server", &e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }

    pub fn service(&self) -> &StandingsService<T, M> {
        &self.service
    }

    pub fn stadium_store(&self) -> &S {
        &self.stadium_store
    }
}
