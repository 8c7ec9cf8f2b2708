//! Removal orchestrator: the per-step boundary-event scan
//!
//! Invoked by the host on every integration step. On the fast cadence it
//! walks the non-central particles in ascending index order, classifies each
//! against the threshold policy, and on a removal: announces it, asks the
//! host to drop the particle, appends an event record, credits the mass
//! ledger for sun collisions, and requests one cache resynchronization before
//! the scan continues. On the slow cadence it appends an energy sample to the
//! diagnostics log. No failure aborts a step; each particle is independent.

use tracing::warn;

use crate::configuration::config::{MonitorConfig, ScenarioConfig};
use crate::host::{Host, Orbit, Particle, ParticleHash};
use crate::monitor::diagnostics::EnergyLog;
use crate::monitor::events::{EventKind, EventRecorder};
use crate::monitor::ledger::MassLedger;
use crate::monitor::policy::{Fate, Thresholds};

/// Runtime cadence and sizing settings, mapped from [`MonitorConfig`]
#[derive(Debug, Clone, Copy)]
pub struct MonitorSettings {
    pub fast_interval: u64, // removal scan cadence, in steps
    pub slow_interval: u64, // energy diagnostics cadence, in steps
    pub event_capacity: usize, // per-category event log capacity
    pub min_steps_per_orbit: f64, // early-warning floor for period / dt
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            fast_interval: 100,
            slow_interval: 10_000,
            event_capacity: 500,
            min_steps_per_orbit: 20.0,
        }
    }
}

impl MonitorSettings {
    pub fn from_config(cfg: &MonitorConfig) -> Self {
        Self {
            // a zero interval would mean division by zero in the cadence gate
            fast_interval: cfg.fast_interval.max(1),
            slow_interval: cfg.slow_interval.max(1),
            event_capacity: cfg.event_capacity,
            min_steps_per_orbit: cfg.min_steps_per_orbit,
        }
    }
}

/// One removal carried out during a scan
#[derive(Debug, Clone, Copy)]
pub struct Removal {
    pub hash: ParticleHash,
    pub time: f64,
    pub kind: EventKind,
}

/// The boundary-event monitor
pub struct Monitor {
    thresholds: Thresholds,
    settings: MonitorSettings,
    recorder: EventRecorder,
    ledger: MassLedger,
    energy_log: Option<EnergyLog>,
}

impl Monitor {
    pub fn new(
        thresholds: Thresholds,
        settings: MonitorSettings,
        energy_log: Option<EnergyLog>,
    ) -> Self {
        Self {
            thresholds,
            settings,
            recorder: EventRecorder::new(settings.event_capacity),
            ledger: MassLedger::new(),
            energy_log,
        }
    }

    /// Build a monitor from a YAML-facing scenario configuration
    pub fn from_config(cfg: &ScenarioConfig, energy_log: Option<EnergyLog>) -> Self {
        Self::new(
            Thresholds::from_config(&cfg.thresholds),
            MonitorSettings::from_config(&cfg.monitor),
            energy_log,
        )
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    pub fn ledger(&self) -> &MassLedger {
        &self.ledger
    }

    /// Per-step entry point, called by the host once per integration step
    /// Returns the removals carried out this step (empty off-cadence)
    pub fn step(&mut self, host: &mut dyn Host) -> Vec<Removal> {
        let steps = host.steps_done();

        let removals = if steps % self.settings.fast_interval == 0 {
            self.scan(host)
        } else {
            Vec::new()
        };

        if steps % self.settings.slow_interval == 0 {
            self.sample_energy(host);
        }

        removals
    }

    /// Walk the non-central particles once, in ascending index order
    fn scan(&mut self, host: &mut dyn Host) -> Vec<Removal> {
        let mut removals = Vec::new();
        let mut i = 1; // index 0 is the central body, never evaluated

        while i < host.particles().len() {
            let p = host.particles()[i].clone();
            let distance_squared = p.distance_from_center_squared();
            let orbit = host.orbit_of(&p);

            let kind = match self.thresholds.classify(distance_squared, orbit) {
                Fate::Escape => EventKind::Escape,
                Fate::SunCollision => EventKind::SunCollision,
                Fate::WideOrbit => EventKind::WideOrbit,
                Fate::Keep => {
                    self.check_orbit_resolution(host, &p, orbit);
                    i += 1;
                    continue;
                }
            };

            let time = host.time();
            println!("remove {} at t={} ({})", p.hash, time, kind.reason());

            if let Err(err) = host.remove(p.hash) {
                // hash already gone on the host side, skip this particle
                warn!("skipping removal of {}: {}", p.hash, err);
                i += 1;
                continue;
            }

            if let Err(err) = self.recorder.record(kind, p.hash, time) {
                warn!("{}", err);
            }
            if kind == EventKind::SunCollision {
                // pre-removal mass, captured before the particle storage went away
                self.ledger.credit_sun(host, p.m);
            }
            // log-append happens-before the resync request for this removal
            host.request_resync();

            removals.push(Removal {
                hash: p.hash,
                time,
                kind,
            });
            // the removal shifted the next particle into slot i, rescan it
        }

        removals
    }

    /// Early warning for kept particles: a bound orbit whose period is below
    /// `min_steps_per_orbit` timesteps cannot be resolved by the integrator.
    /// Operator diagnostics only, never alters simulation state.
    fn check_orbit_resolution(&self, host: &dyn Host, p: &Particle, orbit: Option<Orbit>) {
        let Some(orbit) = orbit else {
            return;
        };
        if !orbit.is_bound() || orbit.a <= 0.0 {
            return;
        }
        let mu = host.gravitational_parameter();
        if mu <= 0.0 {
            return;
        }
        let period = std::f64::consts::TAU * (orbit.a.powi(3) / mu).sqrt();
        if period < self.settings.min_steps_per_orbit * host.timestep() {
            warn!(
                "orbital period {:.6} of particle {} is below {}x the timestep {}",
                period,
                p.hash,
                self.settings.min_steps_per_orbit,
                host.timestep()
            );
        }
    }

    /// Append one `(time, energy)` sample; write failures are non-fatal
    fn sample_energy(&mut self, host: &dyn Host) {
        let Some(log) = &self.energy_log else {
            return;
        };
        if let Err(err) = log.append(host.time(), host.energy()) {
            warn!("{}", err);
        }
    }
}
