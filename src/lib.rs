pub mod configuration;
pub mod host;
pub mod monitor;

pub use host::{Host, HostError, NVec3, Orbit, Particle, ParticleHash};
pub use host::demo::DemoHost;

pub use monitor::MonitorError;
pub use monitor::diagnostics::EnergyLog;
pub use monitor::events::{EventKind, EventLog, EventRecord, EventRecorder};
pub use monitor::ledger::MassLedger;
pub use monitor::orchestrator::{Monitor, MonitorSettings, Removal};
pub use monitor::policy::{Fate, Thresholds};

pub use configuration::config::{
    BodyConfig, MonitorConfig, ParametersConfig, ScenarioConfig, ThresholdConfig,
};
