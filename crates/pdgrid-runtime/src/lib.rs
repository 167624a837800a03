//! # pdgrid runtime
//!
//! The grid world, the scheduler that drives it, and everything around a
//! run: configuration, seeded randomness, statistics and sessions.
//!
//! ```rust
//! use pdgrid_runtime::prelude::*;
//!
//! let config = ModelConfig::with_size(10, 10).seed(3);
//! let mut model = Model::with_config(config).unwrap();
//! model.run(5).unwrap();
//! assert_eq!(model.history().len(), 6);
//! ```

pub mod config;
pub mod rng;
pub mod grid;
pub mod model;
pub mod metrics;
pub mod session;
pub mod prelude;
