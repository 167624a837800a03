//! World — the neighbor query agents depend on.
//!
//! The world owns the spatial layout. Agents never hold references to each
//! other; they read copies of their neighbors' state handed out by the world.

use crate::types::*;

/// The spatial structure agents are embedded in.
///
/// This is a trait so that agent logic can be exercised against any layout
/// (a real grid, or a hand-built neighborhood in tests).
pub trait World {
    /// Neighbors of `position` within `radius` cells.
    ///
    /// When `include_center` is set, the cell at `position` is part of the
    /// result. The order must be stable for identical inputs: imitation
    /// breaks score ties by taking the first maximizer in this order.
    fn neighbors(&self, position: Position, radius: u32, include_center: bool) -> Vec<NeighborView>;
}

/// A fixed, pre-built neighborhood.
///
/// Answers every query with the same list, filtered only by
/// `include_center`. Useful when the layout is irrelevant and only the
/// neighbor set matters.
#[derive(Debug, Clone, Default)]
pub struct FixedNeighborhood {
    pub center: Option<NeighborView>,
    pub others: Vec<NeighborView>,
}

impl FixedNeighborhood {
    pub fn new(center: Option<NeighborView>, others: Vec<NeighborView>) -> Self {
        Self { center, others }
    }
}

impl World for FixedNeighborhood {
    fn neighbors(&self, _position: Position, _radius: u32, include_center: bool) -> Vec<NeighborView> {
        let mut out = Vec::with_capacity(self.others.len() + 1);
        if include_center {
            out.extend(self.center);
        }
        out.extend(self.others.iter().copied());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(x: usize, mv: Move) -> NeighborView {
        NeighborView {
            position: Position::new(x, 0),
            mv,
            next_move: None,
            score: 0.0,
        }
    }

    #[test]
    fn fixed_neighborhood_respects_include_center() {
        let world = FixedNeighborhood::new(
            Some(view(0, Move::Cooperate)),
            vec![view(1, Move::Defect), view(2, Move::Cooperate)],
        );
        assert_eq!(world.neighbors(Position::new(0, 0), 1, true).len(), 3);
        let without = world.neighbors(Position::new(0, 0), 1, false);
        assert_eq!(without.len(), 2);
        assert_eq!(without[0].position, Position::new(1, 0));
    }
}
