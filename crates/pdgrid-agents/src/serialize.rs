//! Agent state serialization for session persistence.
//!
//! A restored agent behaves exactly like the one it was exported from:
//! every field that feeds `step` or `advance` is carried.

use crate::agent::Agent;
use pdgrid_core::types::*;
use serde::{Deserialize, Serialize};

/// Serializable state of an [`Agent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Position,
    #[serde(rename = "move")]
    pub mv: Move,
    #[serde(default)]
    pub next_move: Option<Move>,
    pub score: f64,
    #[serde(default)]
    pub increment: f64,
    #[serde(default)]
    pub tick_count: u64,
}

impl Agent {
    /// Export the agent's state for serialization.
    pub fn export_state(&self) -> AgentState {
        AgentState {
            position: self.position,
            mv: self.mv,
            next_move: self.next_move,
            score: self.score,
            increment: self.increment,
            tick_count: self.tick_count,
        }
    }

    /// Rebuild an agent from exported state.
    pub fn from_state(state: &AgentState) -> Self {
        Self {
            position: state.position,
            mv: state.mv,
            next_move: state.next_move,
            score: state.score,
            increment: state.increment,
            tick_count: state.tick_count,
        }
    }
}

impl From<&Agent> for AgentState {
    fn from(agent: &Agent) -> Self {
        agent.export_state()
    }
}

impl From<AgentState> for Agent {
    fn from(state: AgentState) -> Self {
        Agent::from_state(&state)
    }
}
