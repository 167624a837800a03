//! Model — the grid, its scheduler and the run history.
//!
//! Each tick:
//! 1. Agents are visited in schedule order (creation order, or a fresh
//!    shuffle under `Random`)
//! 2. Each visited agent steps; outside `Simultaneous` it advances
//!    immediately, so later agents see its new move and score
//! 3. Under `Simultaneous` a second pass advances every agent against the
//!    moves staged in the first pass
//! 4. Statistics are collected and the tick counter advances
//!
//! Any error aborts the tick part-way. The model is then in a mixed state
//! and the run should be abandoned.

use crate::config::ModelConfig;
use crate::grid::Grid;
use crate::metrics::ModelStats;
use crate::rng::{create_rng, random_move, ModelRng};
use pdgrid_agents::agent::{Agent, SCORING_RADIUS};
use pdgrid_core::error::Result;
use pdgrid_core::observe::{CreationRecord, NullSink, ObservationSink};
use pdgrid_core::types::*;
use pdgrid_core::world::World;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event emitted by the model during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelEvent {
    /// An agent committed a different move than it played last tick.
    MoveChanged { position: Position, from: Move, to: Move },
    /// A tick completed.
    TickComplete { tick: Tick, cooperators: usize, defectors: usize },
}

/// The simulation: a populated grid driven by a scheduler.
pub struct Model<S: ObservationSink = NullSink> {
    config: ModelConfig,
    grid: Grid,
    rng: ModelRng,
    tick: Tick,
    history: Vec<ModelStats>,
    event_history: Vec<(Tick, ModelEvent)>,
    sink: S,
}

impl Model<NullSink> {
    /// Build a model that discards observation records.
    pub fn with_config(config: ModelConfig) -> Result<Self> {
        Self::new(config, NullSink)
    }
}

impl<S: ObservationSink> Model<S> {
    /// Build and populate a model.
    ///
    /// Cells listed in `config.starting_moves` get that move; every other
    /// cell draws one uniformly from the seeded RNG, in creation order.
    /// One creation record per agent goes to `sink`.
    pub fn new(config: ModelConfig, mut sink: S) -> Result<Self> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let overrides: HashMap<Position, Move> = config
            .starting_moves
            .iter()
            .map(|s| (s.position(), s.mv))
            .collect();

        let grid = Grid::populate(config.width, config.height, config.torus, |position| {
            let mv = match overrides.get(&position) {
                Some(mv) => *mv,
                None => random_move(&mut rng),
            };
            Agent::new(position, mv)
        })?;

        for agent in grid.agents() {
            sink.record_creation(&CreationRecord {
                position: agent.position(),
                initial_move: agent.current_move(),
                initial_score: agent.score(),
            });
        }

        let initial = ModelStats::collect(0, &grid);
        tracing::info!(
            width = config.width,
            height = config.height,
            schedule = %config.schedule,
            seed = config.seed,
            cooperators = initial.cooperators,
            "model created"
        );

        Ok(Self {
            config,
            grid,
            rng,
            tick: 0,
            history: vec![initial],
            event_history: Vec::new(),
            sink,
        })
    }

    /// Reassemble a model from its parts. Used by session restore.
    pub(crate) fn from_parts(
        config: ModelConfig,
        grid: Grid,
        rng: ModelRng,
        tick: Tick,
        history: Vec<ModelStats>,
        sink: S,
    ) -> Self {
        Self {
            config,
            grid,
            rng,
            tick,
            history,
            event_history: Vec::new(),
            sink,
        }
    }

    /// Step one agent: stage the move of its best neighbor.
    ///
    /// Outside the simultaneous schedule the agent also advances right
    /// away. Returns the neighbor it imitated.
    pub fn step_agent(&mut self, position: Position) -> Result<NeighborView> {
        let neighbors = self
            .grid
            .neighbors(position, self.config.imitation_radius, true);
        let best = self
            .grid
            .agent_at_mut(position)?
            .step(&neighbors, &mut self.sink)?;

        if !self.config.schedule.is_simultaneous() {
            self.advance_agent(position)?;
        }
        Ok(best)
    }

    /// Advance one agent: commit its staged move and collect payoff.
    pub fn advance_agent(&mut self, position: Position) -> Result<f64> {
        let scoring = self.grid.neighbors(position, SCORING_RADIUS, false);
        self.grid
            .agent_at_mut(position)?
            .advance(&scoring, self.config.schedule, &self.config.payoff)
    }

    /// Run a single tick.
    pub fn tick(&mut self) -> Result<Vec<ModelEvent>> {
        let before: Vec<Move> = self.grid.agents().iter().map(|a| a.current_move()).collect();
        let mut order: Vec<Position> = self.grid.positions().collect();

        match self.config.schedule {
            ScheduleType::Sequential => {
                for &position in &order {
                    self.step_agent(position)?;
                }
            }
            ScheduleType::Random => {
                order.shuffle(&mut self.rng);
                for &position in &order {
                    self.step_agent(position)?;
                }
            }
            ScheduleType::Simultaneous => {
                for &position in &order {
                    self.step_agent(position)?;
                }
                for &position in &order {
                    self.advance_agent(position)?;
                }
            }
        }

        self.tick += 1;

        let mut events: Vec<ModelEvent> = self
            .grid
            .agents()
            .iter()
            .zip(before)
            .filter(|(agent, old)| agent.current_move() != *old)
            .map(|(agent, old)| ModelEvent::MoveChanged {
                position: agent.position(),
                from: old,
                to: agent.current_move(),
            })
            .collect();

        let stats = ModelStats::collect(self.tick, &self.grid);
        tracing::debug!(
            tick = self.tick,
            cooperators = stats.cooperators,
            defectors = stats.defectors,
            switched = events.len(),
            "tick complete"
        );
        events.push(ModelEvent::TickComplete {
            tick: self.tick,
            cooperators: stats.cooperators,
            defectors: stats.defectors,
        });
        self.history.push(stats);

        for event in &events {
            self.event_history.push((self.tick, event.clone()));
        }

        Ok(events)
    }

    /// Run the simulation for `ticks` ticks, stopping at the first error.
    pub fn run(&mut self, ticks: u64) -> Result<Vec<Vec<ModelEvent>>> {
        let mut all_events = Vec::new();
        for _ in 0..ticks {
            all_events.push(self.tick()?);
        }
        Ok(all_events)
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Statistics for the current state.
    pub fn stats(&self) -> ModelStats {
        ModelStats::collect(self.tick, &self.grid)
    }

    /// Statistics recorded at creation and after every tick.
    pub fn history(&self) -> &[ModelStats] {
        &self.history
    }

    /// Every event since the model was built, restored or last drained,
    /// with its tick.
    ///
    /// Grows by at least one entry per tick. Long runs should call
    /// [`drain_events`](Self::drain_events) periodically.
    pub fn event_history(&self) -> &[(Tick, ModelEvent)] {
        &self.event_history
    }

    /// Take the recorded events, leaving the event history empty.
    pub fn drain_events(&mut self) -> Vec<(Tick, ModelEvent)> {
        std::mem::take(&mut self.event_history)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent_at(&self, position: Position) -> Result<&Agent> {
        self.grid.agent_at(position)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub(crate) fn rng(&self) -> &ModelRng {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdgrid_core::observe::MemorySink;
    use pdgrid_core::payoff::PayoffMatrix;

    fn classic() -> PayoffMatrix {
        PayoffMatrix::new(3.0, 0.0, 5.0, 1.0).unwrap()
    }

    /// A 3x3 bounded grid of cooperators with one defector in the middle.
    fn lone_defector(schedule: ScheduleType) -> ModelConfig {
        let mut config = ModelConfig::with_size(3, 3)
            .torus(false)
            .schedule(schedule)
            .payoff(classic());
        for x in 0..3 {
            for y in 0..3 {
                let mv = if (x, y) == (1, 1) { Move::Defect } else { Move::Cooperate };
                config = config.starting_move(Position::new(x, y), mv);
            }
        }
        config
    }

    #[test]
    fn creation_records_every_agent() {
        let model = Model::new(ModelConfig::with_size(4, 3), MemorySink::new()).unwrap();
        let sink = model.sink();
        assert_eq!(sink.creations.len(), 12);
        assert!(sink.creations.iter().all(|r| r.initial_score == 0.0));
        assert_eq!(sink.creations[1].position, Position::new(0, 1));
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn starting_moves_override_random_draws() {
        let config = ModelConfig::with_size(2, 2)
            .starting_move(Position::new(1, 1), Move::Defect)
            .starting_move(Position::new(0, 0), Move::Defect);
        let model = Model::with_config(config).unwrap();
        assert_eq!(model.agent_at(Position::new(1, 1)).unwrap().current_move(), Move::Defect);
        assert_eq!(model.agent_at(Position::new(0, 0)).unwrap().current_move(), Move::Defect);
    }

    #[test]
    fn tick_advances_counter_and_history() {
        let mut model = Model::with_config(ModelConfig::with_size(5, 5)).unwrap();
        model.tick().unwrap();
        assert_eq!(model.current_tick(), 1);
        assert_eq!(model.history().len(), 2);
        assert_eq!(model.stats().tick, 1);
        assert!(model.grid().agents().iter().all(|a| a.tick_count() == 1));
    }

    #[test]
    fn every_agent_reports_first_tick_once() {
        let mut model = Model::new(ModelConfig::with_size(3, 3), MemorySink::new()).unwrap();
        model.run(3).unwrap();
        let sink = model.into_sink();
        assert_eq!(sink.first_ticks.len(), 9);
        assert!(sink.first_ticks.iter().all(|r| r.neighbor_count == 9));
    }

    #[test]
    fn zero_scores_copy_first_cell_of_neighborhood() {
        let mut model = Model::with_config(lone_defector(ScheduleType::Simultaneous)).unwrap();
        let events = model.tick().unwrap();

        // Everyone is tied at zero, so each agent copies the first cell it
        // visits. Only (2,2) starts its neighborhood at the defector.
        assert_eq!(model.agent_at(Position::new(1, 1)).unwrap().current_move(), Move::Cooperate);
        assert_eq!(model.agent_at(Position::new(2, 2)).unwrap().current_move(), Move::Defect);
        assert_eq!(events.len(), 3);
        assert!(events.contains(&ModelEvent::MoveChanged {
            position: Position::new(1, 1),
            from: Move::Defect,
            to: Move::Cooperate,
        }));

        assert_eq!(model.agent_at(Position::new(1, 1)).unwrap().increment(), 7.0 * 3.0);
        assert_eq!(model.agent_at(Position::new(2, 2)).unwrap().increment(), 3.0 * 5.0);
        assert_eq!(model.agent_at(Position::new(0, 0)).unwrap().increment(), 3.0 * 3.0);
    }

    #[test]
    fn best_scorer_takes_over_the_neighborhood() {
        let mut model = Model::with_config(lone_defector(ScheduleType::Simultaneous)).unwrap();
        let events = model.run(2).unwrap();

        // After tick 1 the center leads with 21 and every cell can see it.
        assert_eq!(
            events[1][0],
            ModelEvent::MoveChanged {
                position: Position::new(2, 2),
                from: Move::Defect,
                to: Move::Cooperate,
            }
        );
        assert_eq!(model.stats().cooperators, 9);
        assert_eq!(model.event_history().len(), 3 + 2);
    }

    #[test]
    fn drained_events_are_not_kept() {
        let mut model = Model::with_config(ModelConfig::with_size(4, 4)).unwrap();
        model.run(2).unwrap();
        let drained = model.drain_events();
        assert!(drained.len() >= 2);
        assert_eq!(drained.last().map(|(tick, _)| *tick), Some(2));
        assert!(model.event_history().is_empty());

        model.tick().unwrap();
        assert!(model.event_history().iter().all(|(tick, _)| *tick == 3));
        // Statistics history is unaffected.
        assert_eq!(model.history().len(), 4);
    }

    #[test]
    fn sequential_scores_against_current_moves() {
        let mut sim = Model::with_config(lone_defector(ScheduleType::Simultaneous)).unwrap();
        let mut seq = Model::with_config(lone_defector(ScheduleType::Sequential)).unwrap();
        sim.tick().unwrap();
        seq.tick().unwrap();

        // (0,0) goes first. Sequentially it still sees the center defecting;
        // simultaneously it sees the center's staged cooperation.
        assert_eq!(seq.agent_at(Position::new(0, 0)).unwrap().score(), 6.0);
        assert_eq!(sim.agent_at(Position::new(0, 0)).unwrap().score(), 9.0);

        // (0,1) then sees (0,0) ahead at 6 and copies its cooperation.
        let second = seq.agent_at(Position::new(0, 1)).unwrap();
        assert_eq!(second.current_move(), Move::Cooperate);
        assert_eq!(second.score(), 4.0 * 3.0);
    }

    #[test]
    fn same_seed_same_run() {
        let config = ModelConfig::with_size(8, 8).seed(11).schedule(ScheduleType::Random);
        let mut a = Model::with_config(config.clone()).unwrap();
        let mut b = Model::with_config(config).unwrap();
        a.run(5).unwrap();
        b.run(5).unwrap();
        assert_eq!(a.history(), b.history());
        for (x, y) in a.grid().agents().iter().zip(b.grid().agents()) {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn step_agent_outside_grid_fails() {
        let mut model = Model::with_config(ModelConfig::with_size(2, 2)).unwrap();
        assert!(model.step_agent(Position::new(5, 5)).is_err());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Model::with_config(ModelConfig::with_size(0, 4)).is_err());
    }
}
