//! # pdgrid agents
//!
//! The imitating Prisoner's Dilemma agent and its serializable state.
//!
//! ```rust
//! use pdgrid_agents::prelude::*;
//!
//! let mut agent = Agent::new(Position::new(0, 0), Move::Cooperate);
//! let neighbors = vec![
//!     agent.view(),
//!     NeighborView { position: Position::new(1, 0), mv: Move::Defect, next_move: None, score: 3.0 },
//! ];
//! agent.step(&neighbors, &mut NullSink).unwrap();
//! assert_eq!(agent.next_move(), Some(Move::Defect));
//! ```

pub mod agent;
pub mod serialize;
pub mod prelude;
