//! Runtime prelude — convenient imports for common usage.
//!
//! ```rust
//! use pdgrid_runtime::prelude::*;
//! ```

pub use crate::config::{ModelConfig, StartingMove};
pub use crate::grid::Grid;
pub use crate::model::{Model, ModelEvent};
pub use crate::metrics::{cooperation_shifts, ModelStats};
pub use crate::rng::{create_rng, random_move, ModelRng};
pub use crate::session::{load_session, save_session, ModelSession, SessionMetadata};

// Re-export from agents
pub use pdgrid_agents::prelude::*;
