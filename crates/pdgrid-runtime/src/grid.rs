//! Grid — a rectangular world with one agent per cell.
//!
//! Neighborhoods are Moore neighborhoods (the square of cells within
//! `radius` in both axes). On a torus they wrap around the edges; on a
//! bounded grid the cells that would fall off the edge are simply missing.
//!
//! Agents are stored in creation order: column by column, `x` outer and
//! `y` inner.

use pdgrid_agents::agent::Agent;
use pdgrid_core::error::{PdError, Result};
use pdgrid_core::types::*;
use pdgrid_core::world::World;

/// A `width` x `height` grid fully populated with agents.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    torus: bool,
    agents: Vec<Agent>,
}

impl Grid {
    /// Build a grid, creating one agent per cell with `make`.
    ///
    /// `make` is called in creation order and must return an agent placed at
    /// the position it was given.
    pub fn populate<F>(width: usize, height: usize, torus: bool, mut make: F) -> Result<Self>
    where
        F: FnMut(Position) -> Agent,
    {
        let mut agents = Vec::with_capacity(cell_count(width, height)?);
        for x in 0..width {
            for y in 0..height {
                let position = Position::new(x, y);
                let agent = make(position);
                if agent.position() != position {
                    return Err(PdError::invalid_config(
                        "agent.position",
                        agent.position().to_string(),
                        format!("agent created for cell {}", position),
                    ));
                }
                agents.push(agent);
            }
        }
        Ok(Self {
            width,
            height,
            torus,
            agents,
        })
    }

    /// Build a grid from agents in any order.
    ///
    /// Every cell must be covered exactly once.
    pub fn from_agents(width: usize, height: usize, torus: bool, agents: Vec<Agent>) -> Result<Self> {
        let mut slots: Vec<Option<Agent>> = vec![None; cell_count(width, height)?];
        for agent in agents {
            let position = agent.position();
            if position.x >= width || position.y >= height {
                return Err(PdError::OutOfBounds {
                    position,
                    width,
                    height,
                });
            }
            let slot = &mut slots[position.x * height + position.y];
            if slot.is_some() {
                return Err(PdError::invalid_config(
                    "agents",
                    position.to_string(),
                    "more than one agent in the same cell",
                ));
            }
            *slot = Some(agent);
        }

        let mut placed = Vec::with_capacity(slots.len());
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(agent) => placed.push(agent),
                None => {
                    let position = Position::new(idx / height, idx % height);
                    return Err(PdError::missing_field(format!("agent at {}", position)));
                }
            }
        }

        Ok(Self {
            width,
            height,
            torus,
            agents: placed,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_torus(&self) -> bool {
        self.torus
    }

    /// Number of agents (always `width * height`).
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agents in creation order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Positions in creation order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.agents.iter().map(|a| a.position())
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn index_of(&self, position: Position) -> Result<usize> {
        if !self.contains(position) {
            return Err(PdError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.x * self.height + position.y)
    }

    pub fn agent_at(&self, position: Position) -> Result<&Agent> {
        let idx = self.index_of(position)?;
        Ok(&self.agents[idx])
    }

    pub fn agent_at_mut(&mut self, position: Position) -> Result<&mut Agent> {
        let idx = self.index_of(position)?;
        Ok(&mut self.agents[idx])
    }

    /// Cells in the Moore neighborhood of `position`.
    ///
    /// Offsets are visited `dx` outer, `dy` inner, both from `-radius` to
    /// `radius`. Each cell appears once, at its first visit, which matters
    /// when a torus is small enough for the neighborhood to wrap onto
    /// itself. Without `include_center` the center is left out even if
    /// wrapping would reach it again.
    pub fn neighborhood(&self, position: Position, radius: u32, include_center: bool) -> Vec<Position> {
        let xs = self.axis(position.x, radius, self.width);
        let ys = self.axis(position.y, radius, self.height);

        let mut cells = Vec::with_capacity(xs.len() * ys.len());
        for &x in &xs {
            for &y in &ys {
                let cell = Position::new(x, y);
                if cell == position && !include_center {
                    continue;
                }
                cells.push(cell);
            }
        }
        cells
    }

    /// Distinct coordinates along one axis, in first-visit order for
    /// offsets `-radius..=radius`.
    fn axis(&self, center: usize, radius: u32, len: usize) -> Vec<usize> {
        let (c, r, n) = (center as i64, radius as i64, len as i64);
        if self.torus {
            // After one full period every coordinate repeats an earlier visit.
            let span = (2 * r + 1).min(n);
            (0..span).map(|i| (c - r + i).rem_euclid(n) as usize).collect()
        } else {
            let reach = r.min(n);
            (-reach..=reach)
                .map(|d| c + d)
                .filter(|&v| v >= 0 && v < n)
                .map(|v| v as usize)
                .collect()
        }
    }

    /// Number of cooperating agents.
    pub fn cooperators(&self) -> usize {
        self.agents.iter().filter(|a| a.is_cooperating()).count()
    }
}

fn cell_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| {
        PdError::invalid_config(
            "height",
            height.to_string(),
            format!("a {}-wide grid of this height has too many cells", width),
        )
    })
}

impl World for Grid {
    fn neighbors(&self, position: Position, radius: u32, include_center: bool) -> Vec<NeighborView> {
        self.neighborhood(position, radius, include_center)
            .into_iter()
            .filter_map(|cell| self.index_of(cell).ok())
            .map(|idx| self.agents[idx].view())
            .collect()
    }
}
