use std::time::{Duration, Instant};

use dexgate_core::Gateway;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    started_at: Instant,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
