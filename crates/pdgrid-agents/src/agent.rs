//! Agent — a stationary player that imitates its most successful neighbor.
//!
//! Each tick has two phases:
//! - **step**: look at every neighbor within the imitation radius (self
//!   included), stage the move of the best scorer as `next_move`
//! - **advance**: commit the staged move and collect payoff from the
//!   immediate neighbors
//!
//! Under the simultaneous schedule the phases run as two population-wide
//! passes, so payoff is computed against neighbors' staged moves. Under the
//! other schedules each agent advances right after it steps and payoff uses
//! whatever move each neighbor currently holds.

use pdgrid_core::error::{PdError, Result};
use pdgrid_core::observe::{FirstTickRecord, ObservationSink};
use pdgrid_core::payoff::PayoffMatrix;
use pdgrid_core::types::*;
use pdgrid_core::world::World;

/// Radius of the neighborhood agents collect payoff from.
///
/// Independent of the imitation radius, which may be larger.
pub const SCORING_RADIUS: u32 = 1;

/// A Prisoner's Dilemma player fixed to one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub(crate) position: Position,
    pub(crate) mv: Move,
    pub(crate) next_move: Option<Move>,
    pub(crate) score: f64,
    pub(crate) increment: f64,
    pub(crate) tick_count: u64,
}

impl Agent {
    /// Create an agent with a known starting move and a zero score.
    pub fn new(position: Position, starting_move: Move) -> Self {
        Self {
            position,
            mv: starting_move,
            next_move: None,
            score: 0.0,
            increment: 0.0,
            tick_count: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The move currently played.
    pub fn current_move(&self) -> Move {
        self.mv
    }

    /// The move staged by the last `step`, if any.
    pub fn next_move(&self) -> Option<Move> {
        self.next_move
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Payoff collected by the most recent `advance`.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Number of `step` calls so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_cooperating(&self) -> bool {
        self.mv.is_cooperating()
    }

    /// Copy of the state neighbors are allowed to see.
    pub fn view(&self) -> NeighborView {
        NeighborView {
            position: self.position,
            mv: self.mv,
            next_move: self.next_move,
            score: self.score,
        }
    }

    /// Decide the next move by imitating the best neighbor.
    ///
    /// `neighbors` is the imitation neighborhood with the agent itself
    /// included, so an agent that outscores everyone around it keeps its
    /// own move. Returns the neighbor that was imitated.
    ///
    /// Never touches `move`, `score` or `increment`. On error the agent is
    /// left exactly as it was.
    pub fn step(
        &mut self,
        neighbors: &[NeighborView],
        sink: &mut dyn ObservationSink,
    ) -> Result<NeighborView> {
        let best = *select_best_neighbor(neighbors).ok_or(PdError::EmptyNeighborhood {
            position: self.position,
        })?;

        self.next_move = Some(best.mv);
        self.tick_count += 1;

        if self.tick_count == 1 {
            sink.record_first_tick(&FirstTickRecord {
                position: self.position,
                neighbor_count: neighbors.len(),
                best_position: best.position,
                best_move: best.mv,
                best_score: best.score,
            });
        }

        Ok(best)
    }

    /// [`step`](Self::step) against a neighborhood queried from `world`.
    pub fn step_in(
        &mut self,
        world: &dyn World,
        imitation_radius: u32,
        sink: &mut dyn ObservationSink,
    ) -> Result<NeighborView> {
        let neighbors = world.neighbors(self.position, imitation_radius, true);
        self.step(&neighbors, sink)
    }

    /// Commit the staged move and collect this tick's payoff.
    ///
    /// `scoring_neighbors` is the radius-1 neighborhood without the agent
    /// itself. Adds exactly one increment to the score and returns it.
    /// Fails with `PayoffLookup` when no move has been staged yet; the agent
    /// is unchanged in that case.
    pub fn advance(
        &mut self,
        scoring_neighbors: &[NeighborView],
        schedule: ScheduleType,
        payoff: &PayoffMatrix,
    ) -> Result<f64> {
        let next = self.next_move.ok_or_else(|| {
            PdError::payoff_lookup(self.position, "no staged move; advance called before step")
        })?;

        let increment = payoff_against(self.position, next, scoring_neighbors, schedule, payoff)?;

        if next != self.mv {
            tracing::trace!(position = %self.position, from = %self.mv, to = %next, "switched move");
        }
        self.mv = next;
        self.increment = increment;
        self.score += increment;
        Ok(increment)
    }

    /// [`advance`](Self::advance) against a neighborhood queried from `world`.
    pub fn advance_in(
        &mut self,
        world: &dyn World,
        schedule: ScheduleType,
        payoff: &PayoffMatrix,
    ) -> Result<f64> {
        let neighbors = world.neighbors(self.position, SCORING_RADIUS, false);
        self.advance(&neighbors, schedule, payoff)
    }

    /// Payoff the agent's current move earns against `scoring_neighbors`.
    ///
    /// Pure: the agent is not modified.
    pub fn compute_payoff(
        &self,
        scoring_neighbors: &[NeighborView],
        schedule: ScheduleType,
        payoff: &PayoffMatrix,
    ) -> Result<f64> {
        payoff_against(self.position, self.mv, scoring_neighbors, schedule, payoff)
    }
}

/// The neighbor with the strictly highest score.
///
/// Ties go to the first maximizer in slice order. `None` for an empty slice.
pub fn select_best_neighbor(neighbors: &[NeighborView]) -> Option<&NeighborView> {
    let mut best: Option<&NeighborView> = None;
    for candidate in neighbors {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Sum of `payoff[(own, neighbor_move)]` over `neighbors`.
///
/// Simultaneous schedules read each neighbor's staged move; a neighbor that
/// has nothing staged is a `PayoffLookup` error.
pub fn payoff_against(
    position: Position,
    own: Move,
    neighbors: &[NeighborView],
    schedule: ScheduleType,
    payoff: &PayoffMatrix,
) -> Result<f64> {
    let mut total = 0.0;
    for neighbor in neighbors {
        let other = if schedule.is_simultaneous() {
            neighbor.next_move.ok_or_else(|| {
                PdError::payoff_lookup(
                    position,
                    format!("neighbor at {} has no staged move", neighbor.position),
                )
            })?
        } else {
            neighbor.mv
        };
        total += payoff.lookup(position, own, other)?;
    }
    Ok(total)
}
