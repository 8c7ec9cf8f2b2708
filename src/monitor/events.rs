//! Bounded append-only event logs for removal bookkeeping
//!
//! Three independent categories (escape / sun collision / wide orbit), each a
//! fixed-capacity ordered sequence of records. A record's position in its log
//! is its creation order; records are never mutated or reordered. Appending
//! past capacity is rejected with [`MonitorError::CapacityExceeded`] instead
//! of overrunning the storage.

use std::fmt;

use crate::host::ParticleHash;
use crate::monitor::MonitorError;

/// Which categorized log an event belongs to; exactly one per event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Escape,
    SunCollision,
    WideOrbit,
}

impl EventKind {
    /// Short reason tag used in removal announcements
    pub fn reason(&self) -> &'static str {
        match self {
            EventKind::Escape => "max",
            EventKind::SunCollision => "min",
            EventKind::WideOrbit => "wide",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Escape => "escape",
            EventKind::SunCollision => "sun collision",
            EventKind::WideOrbit => "wide orbit",
        };
        write!(f, "{name}")
    }
}

/// A single removal event
/// `is_new` is always true at creation; nothing revisits a record in place,
/// but it is part of the record contract for downstream consumers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRecord {
    pub hash: ParticleHash,
    pub time: f64,
    pub is_new: bool,
}

/// Fixed-capacity ordered sequence of [`EventRecord`]
/// The cursor (next free slot) is the current length and never exceeds capacity
#[derive(Debug)]
pub struct EventLog {
    kind: EventKind,
    records: Vec<EventRecord>,
    capacity: usize,
}

impl EventLog {
    pub fn new(kind: EventKind, capacity: usize) -> Self {
        Self {
            kind,
            records: Vec::new(),
            capacity,
        }
    }

    /// Append a record in O(1); returns the slot index it landed in
    pub fn append(&mut self, hash: ParticleHash, time: f64) -> Result<usize, MonitorError> {
        if self.records.len() >= self.capacity {
            return Err(MonitorError::CapacityExceeded {
                category: self.kind,
                capacity: self.capacity,
            });
        }
        let slot = self.records.len();
        self.records.push(EventRecord {
            hash,
            time,
            is_new: true,
        });
        Ok(slot)
    }

    /// Read-only iteration in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The three categorized logs behind one append interface
#[derive(Debug)]
pub struct EventRecorder {
    escapes: EventLog,
    sun_collisions: EventLog,
    wide_orbits: EventLog,
}

impl EventRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            escapes: EventLog::new(EventKind::Escape, capacity),
            sun_collisions: EventLog::new(EventKind::SunCollision, capacity),
            wide_orbits: EventLog::new(EventKind::WideOrbit, capacity),
        }
    }

    /// Append an event to the log for `kind`
    pub fn record(
        &mut self,
        kind: EventKind,
        hash: ParticleHash,
        time: f64,
    ) -> Result<usize, MonitorError> {
        self.log_mut(kind).append(hash, time)
    }

    pub fn log(&self, kind: EventKind) -> &EventLog {
        match kind {
            EventKind::Escape => &self.escapes,
            EventKind::SunCollision => &self.sun_collisions,
            EventKind::WideOrbit => &self.wide_orbits,
        }
    }

    fn log_mut(&mut self, kind: EventKind) -> &mut EventLog {
        match kind {
            EventKind::Escape => &mut self.escapes,
            EventKind::SunCollision => &mut self.sun_collisions,
            EventKind::WideOrbit => &mut self.wide_orbits,
        }
    }
}
