//! # pdgrid core
//!
//! Shared types and contracts for the spatial Prisoner's Dilemma.
//!
//! - [`types`] - positions, moves, schedule kinds, neighbor views
//! - [`world`] - the neighbor query agents read from
//! - [`payoff`] - the 2x2 payoff matrix
//! - [`observe`] - observation sinks for creation and first-tick records
//! - [`error`] - the error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use pdgrid_core::prelude::*;
//!
//! let payoff = PayoffMatrix::new(3.0, 0.0, 5.0, 1.0).unwrap();
//! assert_eq!(payoff.payoff(Move::Defect, Move::Cooperate), Some(5.0));
//! ```

pub mod types;
pub mod world;
pub mod payoff;
pub mod observe;
pub mod error;
pub mod prelude;
