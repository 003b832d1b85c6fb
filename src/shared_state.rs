use std::time::Instant;

use crate::config::EngineConfig;

/// Read-only handler state. Evaluations never write to it.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub engine: EngineConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(engine: EngineConfig) -> Self {
        Self { engine, started_at: Instant::now() }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
