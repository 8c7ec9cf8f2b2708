//! Mass ledger for sun-collision removals
//!
//! A particle that collides with the central body transfers its mass there;
//! the credit must land on the live central-body record, captured before the
//! particle's storage is discarded, so that total system mass is conserved
//! across the removal. Escapes are not credited: that mass genuinely leaves
//! the system.

use crate::host::Host;

#[derive(Debug, Default)]
pub struct MassLedger {
    transferred: f64, // cumulative mass credited to the central body
}

impl MassLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `mass_delta` (the colliding particle's pre-removal mass) onto
    /// the central body. Each physical collision credits exactly once.
    pub fn credit_sun(&mut self, host: &mut dyn Host, mass_delta: f64) {
        host.credit_central(mass_delta);
        self.transferred += mass_delta;
    }

    /// Total mass transferred to the central body so far
    pub fn transferred(&self) -> f64 {
        self.transferred
    }
}
