//! Agents prelude — the agent plus everything from the core prelude.

pub use crate::agent::{payoff_against, select_best_neighbor, Agent, SCORING_RADIUS};
pub use crate::serialize::AgentState;

pub use pdgrid_core::prelude::*;
