//! Core prelude — convenient imports for common usage.
//!
//! ```rust
//! use pdgrid_core::prelude::*;
//! ```

pub use crate::types::{Move, NeighborView, ParseMoveError, Position, ScheduleType, Tick};

pub use crate::world::{FixedNeighborhood, World};

pub use crate::payoff::PayoffMatrix;

pub use crate::observe::{
    CreationRecord, FirstTickRecord, MemorySink, NullSink, ObservationSink, TracingSink,
};

pub use crate::error::{ConfigError, PdError, Result};
