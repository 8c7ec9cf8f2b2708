//! Self-contained demo host used by the binary and the integration tests
//!
//! Propagates a small self-gravitating system with velocity-Verlet (two force
//! evaluations per step, direct pair summation with softening) and implements
//! the [`Host`] contract on top of it: orbital elements from Cartesian state,
//! total energy, removal by hash. The production integrator is external; this
//! host only exists so the monitor has something real to watch.

use crate::configuration::config::ScenarioConfig;
use crate::host::{Host, HostError, NVec3, Orbit, Particle, ParticleHash};

#[derive(Debug)]
pub struct DemoHost {
    bodies: Vec<Particle>,
    t: f64, // time
    dt: f64, // step size
    g: f64, // gravitational constant
    eps2: f64, // softening
    steps_done: u64,
    resync_requests: u64,
    hash_counter: u32, // next free hash, original scheme: a plain counter
}

impl DemoHost {
    pub fn new(g: f64, dt: f64) -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
            dt,
            g,
            eps2: 0.0,
            steps_done: 0,
            resync_requests: 0,
            hash_counter: 0,
        }
    }

    /// Build a host from a YAML-facing scenario configuration
    /// The first body in the list becomes the central body
    pub fn build(cfg: &ScenarioConfig) -> Self {
        let mut host = Self::new(cfg.parameters.G, cfg.parameters.h0);
        host.eps2 = cfg.parameters.eps2;
        for bc in &cfg.bodies {
            host.add_particle(
                NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                bc.m,
            );
        }
        host
    }

    /// Add a particle and return its assigned hash
    /// The first particle added is the central body
    pub fn add_particle(&mut self, x: NVec3, v: NVec3, m: f64) -> ParticleHash {
        self.hash_counter += 1;
        let hash = ParticleHash(self.hash_counter);
        self.bodies.push(Particle { hash, x, v, m });
        hash
    }

    /// How many times the monitor has requested cache resynchronization
    /// The demo integrator keeps no derived caches, so this only counts requests
    pub fn resync_requests(&self) -> u64 {
        self.resync_requests
    }

    /// Shortest orbital period among the non-central particles
    /// `None` when no particle has resolvable bound elements
    pub fn innermost_period(&self) -> Option<f64> {
        let mu = self.gravitational_parameter();
        let mut min_a = f64::INFINITY;
        for p in self.bodies.iter().skip(1) {
            if let Some(orbit) = self.orbit_of(p) {
                if orbit.is_bound() && orbit.a.abs() < min_a {
                    min_a = orbit.a.abs();
                }
            }
        }
        if min_a.is_finite() && mu > 0.0 {
            Some(std::f64::consts::TAU * (min_a.powi(3) / mu).sqrt())
        } else {
            None
        }
    }

    /// Compute total accelerations for all bodies (direct pair summation)
    fn accelerations(&self) -> Vec<NVec3> {
        let n = self.bodies.len();
        let mut out = vec![NVec3::zeros(); n];

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = self.bodies[i].x;
            let mi = self.bodies[i].m;

            for j in (i + 1)..n {
                let r = self.bodies[j].x - xi;
                let r2 = r.dot(&r);

                // softened squared distance
                let d2 = r2 + self.eps2;

                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                // equal and opposite: a_i += G m_j r / |r|^3, a_j -= G m_i r / |r|^3
                out[i] += coef * self.bodies[j].m * r;
                out[j] -= coef * mi * r;
            }
        }
        out
    }

    /// Advance the system by one step using velocity-Verlet
    /// Uses two force evaluations per step and updates positions, velocities,
    /// and `t` in-place with fixed step `dt`
    pub fn step(&mut self) {
        let n = self.bodies.len();
        if n == 0 { // no bodies, return
            self.steps_done += 1;
            return;
        }

        let dt = self.dt;
        let half_dt = 0.5 * dt;

        // a_n from x_n at time t_n
        let a_old = self.accelerations();

        // Kick: v_n+1/2 = v_n + (1/2 * dt) * a_n
        for (b, a) in self.bodies.iter_mut().zip(a_old.iter()) {
            b.v += half_dt * *a;
        }

        // Drift: x_n+1 = x_n + dt v_n+1/2
        for b in self.bodies.iter_mut() {
            b.x += dt * b.v;
        }

        // advance time
        self.t += dt;

        // a_n+1 from x_n+1 at time t_n+1
        let a_new = self.accelerations();

        // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
        for (b, a) in self.bodies.iter_mut().zip(a_new.iter()) {
            b.v += half_dt * *a;
        }

        self.steps_done += 1;
    }
}

impl Host for DemoHost {
    fn time(&self) -> f64 {
        self.t
    }

    fn steps_done(&self) -> u64 {
        self.steps_done
    }

    fn timestep(&self) -> f64 {
        self.dt
    }

    fn gravitational_parameter(&self) -> f64 {
        self.g * self.bodies.first().map_or(0.0, |b| b.m)
    }

    fn particles(&self) -> &[Particle] {
        &self.bodies
    }

    fn remove(&mut self, hash: ParticleHash) -> Result<(), HostError> {
        match self.bodies.iter().position(|b| b.hash == hash) {
            Some(idx) => {
                // preserves ascending-index order of the survivors
                self.bodies.remove(idx);
                Ok(())
            }
            None => Err(HostError::UnknownHash(hash)),
        }
    }

    fn request_resync(&mut self) {
        self.resync_requests += 1;
    }

    fn orbit_of(&self, p: &Particle) -> Option<Orbit> {
        let sun = self.bodies.first()?;
        let r_vec = p.x - sun.x;
        let v_vec = p.v - sun.v;

        let r = r_vec.norm();
        if r == 0.0 {
            return None;
        }
        let mu = self.g * (sun.m + p.m);
        if mu <= 0.0 {
            return None;
        }

        // vis-viva: 1/a = 2/r - v^2/mu
        let inv_a = 2.0 / r - v_vec.norm_squared() / mu;
        let a = 1.0 / inv_a;

        // eccentricity vector: e = (v x h)/mu - r_hat
        let h = r_vec.cross(&v_vec);
        let e_vec = v_vec.cross(&h) / mu - r_vec / r;
        let e = e_vec.norm();

        if !a.is_finite() || !e.is_finite() {
            return None;
        }
        Some(Orbit { a, e })
    }

    fn energy(&self) -> f64 {
        let n = self.bodies.len();
        let mut kinetic = 0.0;
        let mut potential = 0.0;

        for i in 0..n {
            let bi = &self.bodies[i];
            kinetic += 0.5 * bi.m * bi.v.norm_squared();

            for j in (i + 1)..n {
                let bj = &self.bodies[j];
                let r = bj.x - bi.x;
                let d = (r.dot(&r) + self.eps2).sqrt();
                potential -= self.g * bi.m * bj.m / d;
            }
        }
        kinetic + potential
    }

    fn credit_central(&mut self, mass_delta: f64) {
        if let Some(sun) = self.bodies.first_mut() {
            sun.m += mass_delta;
        }
    }
}
