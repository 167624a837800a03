//! Observation sinks — where agents and models report what they saw.
//!
//! Two record kinds exist: one per agent when it is created, and one per
//! agent on its first tick describing which neighbor it chose to imitate.
//! Records are informational; nothing in the simulation reads them back.

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Emitted once per agent when the model creates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationRecord {
    pub position: Position,
    pub initial_move: Move,
    pub initial_score: f64,
}

/// Emitted once per agent, on its first step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstTickRecord {
    pub position: Position,
    pub neighbor_count: usize,
    pub best_position: Position,
    pub best_move: Move,
    pub best_score: f64,
}

/// Receiver for observation records.
pub trait ObservationSink {
    fn record_creation(&mut self, record: &CreationRecord);

    fn record_first_tick(&mut self, record: &FirstTickRecord);
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ObservationSink for NullSink {
    fn record_creation(&mut self, _record: &CreationRecord) {}

    fn record_first_tick(&mut self, _record: &FirstTickRecord) {}
}

/// Keeps every record in memory, in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySink {
    pub creations: Vec<CreationRecord>,
    pub first_ticks: Vec<FirstTickRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.creations.is_empty() && self.first_ticks.is_empty()
    }
}

impl ObservationSink for MemorySink {
    fn record_creation(&mut self, record: &CreationRecord) {
        self.creations.push(record.clone());
    }

    fn record_first_tick(&mut self, record: &FirstTickRecord) {
        self.first_ticks.push(record.clone());
    }
}

/// Forwards records as structured `tracing` events.
///
/// Events are emitted at `debug` level under the `pdgrid::observe` target,
/// so a subscriber filter such as `pdgrid::observe=debug` selects them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ObservationSink for TracingSink {
    fn record_creation(&mut self, record: &CreationRecord) {
        tracing::debug!(
            target: "pdgrid::observe",
            position = %record.position,
            initial_move = %record.initial_move,
            initial_score = record.initial_score,
            "agent created"
        );
    }

    fn record_first_tick(&mut self, record: &FirstTickRecord) {
        tracing::debug!(
            target: "pdgrid::observe",
            position = %record.position,
            neighbors = record.neighbor_count,
            best = %record.best_position,
            best_move = %record.best_move,
            best_score = record.best_score,
            "first imitation"
        );
    }
}

impl<S: ObservationSink + ?Sized> ObservationSink for &mut S {
    fn record_creation(&mut self, record: &CreationRecord) {
        (**self).record_creation(record);
    }

    fn record_first_tick(&mut self, record: &FirstTickRecord) {
        (**self).record_first_tick(record);
    }
}

impl<S: ObservationSink + ?Sized> ObservationSink for Box<S> {
    fn record_creation(&mut self, record: &CreationRecord) {
        (**self).record_creation(record);
    }

    fn record_first_tick(&mut self, record: &FirstTickRecord) {
        (**self).record_first_tick(record);
    }
}
