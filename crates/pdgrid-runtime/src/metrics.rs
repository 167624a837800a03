//! Population-level statistics, collected once per tick.

use crate::grid::Grid;
use pdgrid_core::types::Tick;
use serde::{Deserialize, Serialize};

/// Snapshot of the population's strategy mix and scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub tick: Tick,
    pub cooperators: usize,
    pub defectors: usize,
    /// cooperators / population
    pub cooperation_rate: f64,
    pub total_score: f64,
    pub mean_score: f64,
    pub max_score: f64,
}

impl ModelStats {
    /// Compute statistics from the grid's current state.
    pub fn collect(tick: Tick, grid: &Grid) -> Self {
        let population = grid.len();
        let cooperators = grid.cooperators();
        let total_score: f64 = grid.agents().iter().map(|a| a.score()).sum();
        let max_score = grid
            .agents()
            .iter()
            .map(|a| a.score())
            .fold(0.0f64, f64::max);

        let (cooperation_rate, mean_score) = if population > 0 {
            (
                cooperators as f64 / population as f64,
                total_score / population as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            tick,
            cooperators,
            defectors: population - cooperators,
            cooperation_rate,
            total_score,
            mean_score,
            max_score,
        }
    }
}

/// Ticks at which the cooperator count changed from the previous entry.
pub fn cooperation_shifts(history: &[ModelStats]) -> Vec<Tick> {
    history
        .windows(2)
        .filter(|w| w[0].cooperators != w[1].cooperators)
        .map(|w| w[1].tick)
        .collect()
}
