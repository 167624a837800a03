//! Imitation (step phase) tests.

use pdgrid_agents::agent::{select_best_neighbor, Agent};
use pdgrid_core::observe::{MemorySink, NullSink};
use pdgrid_core::types::*;
use pdgrid_core::world::FixedNeighborhood;

fn view(x: usize, y: usize, mv: Move, score: f64) -> NeighborView {
    NeighborView {
        position: Position::new(x, y),
        mv,
        next_move: None,
        score,
    }
}

#[test]
fn imitates_highest_scoring_defector() {
    let mut agent = Agent::new(Position::new(2, 2), Move::Cooperate);
    let neighbors = vec![
        agent.view(),
        view(1, 2, Move::Defect, 4.0),
        view(3, 2, Move::Cooperate, 0.0),
        view(2, 1, Move::Cooperate, 0.0),
        view(2, 3, Move::Defect, 6.0),
    ];

    let best = agent.step(&neighbors, &mut NullSink).unwrap();

    assert_eq!(best.score, 6.0);
    assert_eq!(best.position, Position::new(2, 3));
    assert_eq!(agent.next_move(), Some(Move::Defect));
    // Staging never commits.
    assert_eq!(agent.current_move(), Move::Cooperate);
}

#[test]
fn tie_break_is_repeatable() {
    let neighbors = vec![
        view(0, 0, Move::Cooperate, 5.0),
        view(0, 1, Move::Defect, 9.0),
        view(1, 0, Move::Cooperate, 9.0),
        view(1, 1, Move::Cooperate, 2.0),
    ];

    let chosen: Vec<Position> = (0..20)
        .map(|_| select_best_neighbor(&neighbors).unwrap().position)
        .collect();
    assert!(chosen.iter().all(|p| *p == Position::new(0, 1)));

    let mut agent = Agent::new(Position::new(0, 0), Move::Cooperate);
    agent.step(&neighbors, &mut NullSink).unwrap();
    assert_eq!(agent.next_move(), Some(Move::Defect));
}

#[test]
fn repeated_step_only_advances_tick_count() {
    let mut agent = Agent::new(Position::new(1, 1), Move::Cooperate);
    let neighbors = vec![agent.view(), view(0, 1, Move::Defect, 1.0)];

    agent.step(&neighbors, &mut NullSink).unwrap();
    let after_first = agent.clone();
    agent.step(&neighbors, &mut NullSink).unwrap();

    assert_eq!(agent.score(), after_first.score());
    assert_eq!(agent.current_move(), after_first.current_move());
    assert_eq!(agent.increment(), after_first.increment());
    assert_eq!(agent.next_move(), after_first.next_move());
    assert_eq!(agent.tick_count(), after_first.tick_count() + 1);
}

#[test]
fn step_in_queries_with_center_included() {
    let mut agent = Agent::new(Position::new(0, 0), Move::Defect);
    let mut center = agent.view();
    center.score = 7.0;
    let world = FixedNeighborhood::new(Some(center), vec![view(1, 0, Move::Cooperate, 3.0)]);

    let mut sink = MemorySink::new();
    agent.step_in(&world, 1, &mut sink).unwrap();

    assert_eq!(agent.next_move(), Some(Move::Defect));
    assert_eq!(sink.first_ticks[0].neighbor_count, 2);
    assert_eq!(sink.first_ticks[0].best_position, Position::new(0, 0));
}

#[test]
fn step_in_with_empty_world_fails() {
    let mut agent = Agent::new(Position::new(0, 0), Move::Defect);
    let world = FixedNeighborhood::default();
    assert!(agent.step_in(&world, 3, &mut NullSink).is_err());
}
