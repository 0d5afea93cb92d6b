//! Webserver runtime state

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Process-level server state shared by all handlers
#[derive(Debug)]
pub struct ServerState {
    pub bind_address: SocketAddr,
    /// Whether stats writes go back to the dataset file
    pub persistent: bool,
    pub is_running: AtomicBool,
    pub table_updates: AtomicU64,
    pub server_start_time: Instant,
}

impl ServerState {
    pub fn new(bind_address: SocketAddr, persistent: bool) -> Self {
        Self {
            bind_address,
            persistent,
            is_running: AtomicBool::new(false),
            table_updates: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Count a completed forced table update
    pub fn record_table_update(&self) -> u64 {
        self.table_updates.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn table_update_count(&self) -> u64 {
        self.table_updates.load(Ordering::Relaxed)
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
