//! Model configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file is a valid
//! configuration:
//!
//! ```toml
//! width = 50
//! height = 50
//! torus = true
//! imitation_radius = 1
//! schedule = "Random"
//! seed = 42
//!
//! [payoff]
//! CC = 1.0
//! CD = 0.0
//! DC = 1.6
//! DD = 0.0
//!
//! [[starting_moves]]
//! x = 25
//! y = 25
//! move = "D"
//! ```

use pdgrid_core::error::{ConfigError, PdError, Result};
use pdgrid_core::payoff::PayoffMatrix;
use pdgrid_core::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A fixed starting move for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartingMove {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "move")]
    pub mv: Move,
}

impl StartingMove {
    pub fn new(position: Position, mv: Move) -> Self {
        Self {
            x: position.x,
            y: position.y,
            mv,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Grid width in cells (default: 50).
    pub width: usize,
    /// Grid height in cells (default: 50).
    pub height: usize,
    /// Wrap neighborhoods around the edges (default: true).
    pub torus: bool,
    /// Radius of the neighborhood agents imitate from (default: 1).
    pub imitation_radius: u32,
    /// Update discipline (default: Random).
    pub schedule: ScheduleType,
    /// Seed for starting moves and random activation order (default: 42).
    pub seed: u64,
    /// Cells whose starting move is fixed instead of drawn at random.
    pub starting_moves: Vec<StartingMove>,
    /// Pairwise payoffs.
    pub payoff: PayoffMatrix,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            torus: true,
            imitation_radius: 1,
            schedule: ScheduleType::default(),
            seed: 42,
            starting_moves: Vec::new(),
            payoff: PayoffMatrix::default(),
        }
    }
}

impl ModelConfig {
    /// A `width` x `height` configuration with every other field defaulted.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn schedule(mut self, schedule: ScheduleType) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn imitation_radius(mut self, radius: u32) -> Self {
        self.imitation_radius = radius;
        self
    }

    pub fn torus(mut self, torus: bool) -> Self {
        self.torus = torus;
        self
    }

    pub fn payoff(mut self, payoff: PayoffMatrix) -> Self {
        self.payoff = payoff;
        self
    }

    pub fn starting_move(mut self, position: Position, mv: Move) -> Self {
        self.starting_moves.push(StartingMove::new(position, mv));
        self
    }

    /// Check the configuration for values a model cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(out_of_range("width", self.width));
        }
        if self.height == 0 {
            return Err(out_of_range("height", self.height));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(PdError::invalid_config(
                "height",
                self.height.to_string(),
                format!("a {}-wide grid of this height has too many cells", self.width),
            ));
        }

        let mut seen = HashSet::new();
        for start in &self.starting_moves {
            let pos = start.position();
            if pos.x >= self.width || pos.y >= self.height {
                return Err(PdError::OutOfBounds {
                    position: pos,
                    width: self.width,
                    height: self.height,
                });
            }
            if !seen.insert(pos) {
                return Err(PdError::invalid_config(
                    "starting_moves",
                    pos.to_string(),
                    "cell listed more than once",
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ModelConfig =
            toml::from_str(s).map_err(|e| PdError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded model config");
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PdError::Serialization(e.to_string()))
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

fn out_of_range(field: &str, value: usize) -> PdError {
    PdError::Config(ConfigError::OutOfRange {
        field: field.to_string(),
        min: 1.0,
        max: usize::MAX as f64,
        value: value as f64,
    })
}
