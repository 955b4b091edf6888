use std::fmt;

use gridwalk_core::{Coord, Grid, move_cost};

/// A reconstructed route, ordered from start to target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub cells: Vec<Coord>,
}

impl Route {
    /// Number of steps (cells minus one).
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Sum of move costs along the route.
    pub fn cost(&self) -> f64 {
        self.cells.windows(2).map(|w| move_cost(w[0], w[1])).sum()
    }

    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Whether the route joins `grid`'s start to its target through open,
    /// pairwise adjacent cells without repeating a cell.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        if self.first() != Some(grid.start()) || self.last() != Some(grid.target()) {
            return false;
        }
        if !self.cells.iter().all(|&c| grid.is_open(c)) {
            return false;
        }
        if !self.cells.windows(2).all(|w| w[0].is_adjacent(w[1])) {
            return false;
        }
        let mut seen = self.cells.clone();
        seen.sort();
        seen.dedup();
        seen.len() == self.cells.len()
    }
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The target was reached and the route marked.
    Found(Route),
    /// The reachable area was exhausted without meeting the target.
    NoPath,
    /// Depth-bounded search gave up because a branch hit `limit`.
    DepthLimited { limit: usize },
    /// The observer requested termination mid-run.
    Cancelled,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(r) => write!(f, "found: {} hops, cost {:.1}", r.hops(), r.cost()),
            Self::NoPath => f.write_str("no path"),
            Self::DepthLimited { limit } => write!(f, "not found within depth {limit}"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}
