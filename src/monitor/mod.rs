pub mod diagnostics;
pub mod events;
pub mod ledger;
pub mod orchestrator;
pub mod policy;

use thiserror::Error;

use crate::host::HostError;
use crate::monitor::events::EventKind;

/// Recoverable failures inside the monitor
///
/// None of these abort a simulation step: each particle's classification is
/// independent and the orchestrator logs the failure and keeps scanning.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// An event log has reached its fixed capacity; the append is rejected
    /// instead of overrunning the log
    #[error("{category} event log is full (capacity {capacity})")]
    CapacityExceeded {
        category: EventKind,
        capacity: usize,
    },

    #[error("host removal failed: {0}")]
    HostRemoval(#[from] HostError),

    #[error("energy log write failed: {0}")]
    DiagnosticsIo(#[from] std::io::Error),
}
