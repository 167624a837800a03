//! # pdgrid
//!
//! A spatial iterated Prisoner's Dilemma.
//!
//! Every cell of a rectangular grid holds one agent playing either
//! Cooperate or Defect. Each tick an agent looks at its neighborhood, copies
//! the move of the highest scorer (itself included), then plays that move
//! against its eight immediate neighbors and adds the payoff to its score.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdgrid::prelude::*;
//!
//! let config = ModelConfig::with_size(20, 20)
//!     .seed(7)
//!     .schedule(ScheduleType::Simultaneous)
//!     .starting_move(Position::new(10, 10), Move::Defect);
//!
//! let mut model = Model::with_config(config).unwrap();
//! model.run(10).unwrap();
//!
//! let stats = model.stats();
//! assert_eq!(stats.tick, 10);
//! assert_eq!(stats.cooperators + stats.defectors, 400);
//! ```
//!
//! ## Architecture
//!
//! - [`pdgrid_core`] - Moves, positions, payoff matrix, the `World` trait,
//!   observation sinks and errors
//! - [`pdgrid_agents`] - The imitating agent and its serializable state
//! - [`pdgrid_runtime`] - Grid, scheduler, configuration, metrics, sessions
//!
//! ## Schedules
//!
//! | Schedule | Order | Payoff computed against |
//! |----------|-------|-------------------------|
//! | `Sequential` | Creation order | Neighbors' current moves |
//! | `Random` | Fresh shuffle every tick | Neighbors' current moves |
//! | `Simultaneous` | All step, then all advance | Neighbors' staged moves |
//!
//! ## Session Persistence
//!
//! ```rust,ignore
//! use pdgrid::prelude::*;
//! use std::path::Path;
//!
//! save_session(&model, Path::new("run.json"))?;
//! let session = load_session(Path::new("run.json"))?;
//! let mut restored = Model::from_session(session, NullSink)?;
//! ```

pub use pdgrid_core as core;
pub use pdgrid_agents as agents;
pub use pdgrid_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use pdgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pdgrid_core::types::{Move, NeighborView, Position, ScheduleType, Tick};
    pub use pdgrid_core::payoff::PayoffMatrix;

    // Core traits
    pub use pdgrid_core::world::World;
    pub use pdgrid_core::observe::{
        CreationRecord, FirstTickRecord, MemorySink, NullSink, ObservationSink, TracingSink,
    };

    // Error types
    pub use pdgrid_core::error::{ConfigError, PdError, Result};

    // Agents
    pub use pdgrid_agents::agent::{Agent, SCORING_RADIUS};
    pub use pdgrid_agents::serialize::AgentState;

    // Runtime
    pub use pdgrid_runtime::config::{ModelConfig, StartingMove};
    pub use pdgrid_runtime::grid::Grid;
    pub use pdgrid_runtime::model::{Model, ModelEvent};
    pub use pdgrid_runtime::metrics::{cooperation_shifts, ModelStats};
    pub use pdgrid_runtime::session::{load_session, save_session, ModelSession, SessionMetadata};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
