//! Threshold policy: classify a particle against the configured bounds
//!
//! Pure decision logic, no side effects. The rules form an ordered decision
//! table and the evaluation order is part of the contract, not an accident
//! of code layout:
//!
//! 1. `d^2 > max^2`                                     -> Escape
//! 2. `d^2 < min^2` OR (bound AND `perihelion^2 < min^2`) -> SunCollision
//! 3. bound AND `perihelion > max_perihelion_distance`    -> WideOrbit
//! 4. otherwise                                          -> Keep
//!
//! Escape is checked first because a particle leaving the system may have
//! ill-defined bound elements; the sun-collision rule also looks at the
//! perihelion since a high-eccentricity bound orbit can pass through the sun
//! without currently being close.

use crate::configuration::config::ThresholdConfig;
use crate::host::Orbit;

/// Configured removal bounds, set once at startup and read-only afterwards
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub min_distance_from_sun_squared: f64,
    pub max_distance_from_sun_squared: f64,
    pub max_perihelion_distance: f64, // wide-orbit cutoff
}

impl Thresholds {
    pub fn from_config(cfg: &ThresholdConfig) -> Self {
        Self {
            min_distance_from_sun_squared: cfg.min_distance_from_sun_squared,
            max_distance_from_sun_squared: cfg.max_distance_from_sun_squared,
            max_perihelion_distance: cfg.max_perihelion_distance,
        }
    }

    /// Classify a particle; first matching rule wins
    ///
    /// `orbit = None` means the elements could not be resolved: orbit-based
    /// rules are skipped for that particle, distance-based rules still apply.
    pub fn classify(&self, distance_squared: f64, orbit: Option<Orbit>) -> Fate {
        if distance_squared > self.max_distance_from_sun_squared {
            return Fate::Escape;
        }

        // only bound orbits with a positive semi-major axis have a
        // meaningful perihelion; a < 0 with e < 1 is representable but
        // unphysical and its negative perihelion must not square into the
        // sun-collision rule
        let perihelion = orbit
            .filter(|o| o.is_bound() && o.a > 0.0)
            .map(|o| o.perihelion());

        let plunges = perihelion
            .map_or(false, |q| q * q < self.min_distance_from_sun_squared);
        if distance_squared < self.min_distance_from_sun_squared || plunges {
            return Fate::SunCollision;
        }

        if perihelion.map_or(false, |q| q > self.max_perihelion_distance) {
            return Fate::WideOrbit;
        }

        Fate::Keep
    }
}

/// Outcome of classifying one particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Heliocentric distance exceeds the outer bound; mass leaves the system
    Escape,
    /// Current or projected (perihelion) distance below the inner bound;
    /// mass is credited to the central body
    SunCollision,
    /// Bound orbit whose perihelion exceeds the cutoff, no longer
    /// dynamically relevant; removed without mass transfer
    WideOrbit,
    /// Particle stays in the simulation
    Keep,
}
