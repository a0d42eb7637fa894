pub mod server;
pub use server::{InfraPool, ServerConfig, ServerConfigCli};

use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the non-blocking file writer flushing for as long as it is held.
#[derive(Debug)]
pub struct TracingGuard {
    pub file_guard: Option<WorkerGuard>,
}
