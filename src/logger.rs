//! The `Logger` collaborator (spec §6): `log(value) -> unit`. Default
//! implementation routes through `tracing`, matching the teacher's own use
//! of `tracing`/`log` for diagnostics rather than `println!`.

use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn log(&self, value: &str);
}

/// Writes through `tracing::info!` at target `"statechart_core"`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, value: &str) {
        tracing::info!(target: "statechart_core", "{value}");
    }
}

pub(crate) fn default_logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger)
}
