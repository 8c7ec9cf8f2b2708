//! Host-facing types and the integrator contract
//!
//! The monitor does not own the simulation: it is called once per step by a
//! host integrator and only reads particle state, requests removals, and asks
//! for cache resynchronization. [`Host`] is that seam; [`DemoHost`](demo::DemoHost)
//! is a small in-crate implementation used by the binary and the tests.

pub mod demo;

use std::fmt;

use nalgebra::Vector3;
use thiserror::Error;

pub type NVec3 = Vector3<f64>;

/// Opaque unique particle id, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleHash(pub u32);

impl fmt::Display for ParticleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a single particle as exposed by the host
///
/// Index 0 in the host's particle array is always the central body (sun)
/// and is never evaluated for removal.
#[derive(Debug, Clone)]
pub struct Particle {
    pub hash: ParticleHash,
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
}

impl Particle {
    /// Squared heliocentric distance |x|^2
    pub fn distance_from_center_squared(&self) -> f64 {
        self.x.dot(&self.x)
    }
}

/// Orbital elements relative to the central body
///
/// `e < 1` means the orbit is bound; the perihelion distance `a * (1 - e)`
/// is only meaningful for bound orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub a: f64, // semi-major axis
    pub e: f64, // eccentricity
}

impl Orbit {
    pub fn is_bound(&self) -> bool {
        self.e < 1.0
    }

    /// Closest approach distance to the central body, `a(1-e)`
    pub fn perihelion(&self) -> f64 {
        self.a * (1.0 - self.e)
    }
}

/// Failures reported by the host when the monitor requests an operation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("no particle with hash {0} exists")]
    UnknownHash(ParticleHash),
}

/// Contract the host integrator exposes to the monitor
///
/// All calls happen inside the host's own step, single-threaded; the monitor
/// never holds references across steps.
pub trait Host {
    /// Current simulation time
    fn time(&self) -> f64;

    /// Number of integration steps completed so far
    fn steps_done(&self) -> u64;

    /// Fixed integration step size
    fn timestep(&self) -> f64;

    /// G times the central-body mass, for orbital-period estimates
    fn gravitational_parameter(&self) -> f64;

    /// Live particle array; index 0 is the central body
    fn particles(&self) -> &[Particle];

    /// Remove the particle with the given hash from the simulation
    fn remove(&mut self, hash: ParticleHash) -> Result<(), HostError>;

    /// Invalidate integrator-internal derived caches after the particle set changed
    fn request_resync(&mut self);

    /// Orbital elements of `p` relative to the central body
    /// Returns `None` when the elements cannot be resolved (degenerate state)
    fn orbit_of(&self, p: &Particle) -> Option<Orbit>;

    /// Total system energy (kinetic + potential)
    fn energy(&self) -> f64;

    /// Add `mass_delta` onto the live central-body record
    fn credit_central(&mut self, mass_delta: f64);
}
