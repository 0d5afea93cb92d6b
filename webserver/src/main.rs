//! League standings server entry point

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use shared::{component_info, component_warn, logging, ComponentId, LeagueData, SharedError};
use standings::{JsonFileStore, MatchStore, MemoryStore, StadiumStore, TeamStore};
use tokio::signal;

use webserver::{WebServer, WebServerResult};

/// Command line arguments; each falls back to an environment variable
#[derive(Parser, Debug)]
#[command(name = "league-server")]
#[command(about = "League standings HTTP service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, env = "LEAGUE_PORT", default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "LEAGUE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// JSON dataset with teams, matches and stadiums
    #[arg(long, env = "LEAGUE_DATA", default_value = "./data/league.json")]
    data: PathBuf,

    /// Serve the dataset from memory and never write it back
    #[arg(long)]
    in_memory: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LEAGUE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // .env must be loaded before clap reads the environment
    dotenv::dotenv().ok();
    let args = Args::parse();

    ComponentId::init_webserver();
    logging::init_tracing(Some(&args.log_level));

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|_| SharedError::InvalidConfig {
            field: "host".to_string(),
            value: args.host.clone(),
        })?;

    logging::log_startup(
        ComponentId::current(),
        &format!("bind={} data={} in_memory={}", bind_address, args.data.display(), args.in_memory),
    );

    if args.in_memory {
        let store = MemoryStore::with_data(load_snapshot(&args.data).await?);
        serve(bind_address, false, store.clone(), store.clone(), store).await?;
    } else {
        let store = JsonFileStore::open(&args.data).await?;
        serve(bind_address, true, store.clone(), store.clone(), store).await?;
    }

    logging::log_success(ComponentId::current(), "League server stopped gracefully");
    Ok(())
}

/// Read the dataset for in-memory mode; a missing file starts an empty league
async fn load_snapshot(path: &Path) -> WebServerResult<LeagueData> {
    if !path.exists() {
        component_warn!(
            ComponentId::current(),
            "⚠️ Dataset {} not found, starting with an empty league",
            path.display()
        );
        return Ok(LeagueData::default());
    }
    let content = tokio::fs::read_to_string(path).await?;
    Ok(LeagueData::from_json(&content)?)
}

async fn serve<T, M, S>(
    bind_address: SocketAddr,
    persistent: bool,
    team_store: T,
    match_store: M,
    stadium_store: S,
) -> WebServerResult<()>
where
    T: TeamStore + 'static,
    M: MatchStore + 'static,
    S: StadiumStore + 'static,
{
    let server = WebServer::new(bind_address, persistent, team_store, match_store, stadium_store);
    component_info!(
        ComponentId::current(),
        "🚀 Serving league data ({})",
        if persistent { "file-backed" } else { "in-memory" }
    );

    server.run(shutdown_signal()).await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::current(), "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(ComponentId::current(), "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
