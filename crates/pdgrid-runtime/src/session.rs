//! Session persistence — save/load a running model as JSON.
//!
//! A session holds the configuration, every agent's state, the RNG state
//! and the statistics history, so a restored model continues exactly where
//! the saved one stopped.

use crate::config::ModelConfig;
use crate::grid::Grid;
use crate::metrics::ModelStats;
use crate::model::Model;
use crate::rng::ModelRng;
use pdgrid_agents::agent::Agent;
use pdgrid_agents::serialize::AgentState;
use pdgrid_core::error::{PdError, Result};
use pdgrid_core::observe::ObservationSink;
use pdgrid_core::types::Tick;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub session_id: String,
    pub tick: Tick,
    pub width: usize,
    pub height: usize,
    pub agent_count: usize,
}

/// Serializable snapshot of a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSession {
    pub metadata: SessionMetadata,
    pub config: ModelConfig,
    pub agents: Vec<AgentState>,
    pub rng: ModelRng,
    #[serde(default)]
    pub history: Vec<ModelStats>,
}

impl ModelSession {
    /// Snapshot a model. Each call gets a fresh session id.
    pub fn capture<S: ObservationSink>(model: &Model<S>) -> Self {
        let agents: Vec<AgentState> = model.grid().agents().iter().map(AgentState::from).collect();
        Self {
            metadata: SessionMetadata {
                session_id: uuid::Uuid::new_v4().to_string(),
                tick: model.current_tick(),
                width: model.grid().width(),
                height: model.grid().height(),
                agent_count: agents.len(),
            },
            config: model.config().clone(),
            agents,
            rng: model.rng().clone(),
            history: model.history().to_vec(),
        }
    }
}

/// Save a model to a JSON file, creating parent directories as needed.
pub fn save_session<S: ObservationSink>(model: &Model<S>, path: &Path) -> Result<()> {
    let session = ModelSession::capture(model);
    let json = serde_json::to_string_pretty(&session)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;

    tracing::info!(
        path = %path.display(),
        session_id = %session.metadata.session_id,
        tick = session.metadata.tick,
        "saved session"
    );
    Ok(())
}

/// Load a saved session from JSON.
pub fn load_session(path: &Path) -> Result<ModelSession> {
    let json = std::fs::read_to_string(path)?;
    let session: ModelSession = serde_json::from_str(&json)?;
    tracing::info!(
        path = %path.display(),
        session_id = %session.metadata.session_id,
        tick = session.metadata.tick,
        "loaded session"
    );
    Ok(session)
}

impl<S: ObservationSink> Model<S> {
    /// Rebuild a model from a session.
    ///
    /// Agents keep their scores, staged moves and tick counts. No creation
    /// records are sent to `sink`.
    pub fn from_session(session: ModelSession, sink: S) -> Result<Self> {
        let ModelSession {
            metadata,
            config,
            agents,
            rng,
            history,
        } = session;

        config.validate()?;
        if metadata.width != config.width || metadata.height != config.height {
            return Err(PdError::invalid_config(
                "metadata",
                format!("{}x{}", metadata.width, metadata.height),
                format!("config describes a {}x{} grid", config.width, config.height),
            ));
        }

        let agents: Vec<Agent> = agents.into_iter().map(Agent::from).collect();
        let grid = Grid::from_agents(config.width, config.height, config.torus, agents)?;

        tracing::info!(
            session_id = %metadata.session_id,
            tick = metadata.tick,
            agents = grid.len(),
            "restored model"
        );

        Ok(Model::from_parts(config, grid, rng, metadata.tick, history, sink))
    }
}
