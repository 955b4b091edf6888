use gridwalk_core::{Coord, Dims, Grid};

/// Visitation state of a node during a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitState {
    /// Untouched since the last reset.
    #[default]
    Neutral,
    /// Discovered and queued by the forward (or only) search.
    Frontier,
    /// Discovered and queued by the backward half of a bidirectional search.
    FrontierReverse,
    /// Expanded.
    Visited,
    /// On the reconstructed route.
    Path,
}

/// Mutable per-node search state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    pub parent: Option<Coord>,
    pub cost: f64,
    pub state: VisitState,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            parent: None,
            cost: f64::INFINITY,
            state: VisitState::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// Per-run node state for every cell of a grid.
///
/// The grid topology is borrowed by each algorithm; the context is the only
/// thing an algorithm mutates. Run the algorithms through
/// [`Algorithm::run`](crate::Algorithm::run) or the inherent methods
/// (`bfs`, `dfs`, `ucs`, `dls`, `iddfs`, `bidirectional`).
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub(crate) dims: Dims,
    pub(crate) nodes: Vec<NodeState>,
}

impl SearchContext {
    /// Create a fresh context sized for `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![NodeState::default(); dims.len()],
        }
    }

    /// Create a fresh context sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.dims())
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Restore every node to neutral, infinite cost, no parent.
    pub fn reset(&mut self) {
        self.nodes.fill(NodeState::default());
    }

    /// Clear state and parent of every non-wall node, leaving costs alone.
    pub(crate) fn reset_visits(&mut self, grid: &Grid) {
        for (i, n) in self.nodes.iter_mut().enumerate() {
            if grid.is_open(self.dims.coord(i)) {
                n.state = VisitState::Neutral;
                n.parent = None;
            }
        }
    }

    /// Full node state at `c`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, c: Coord) -> Option<&NodeState> {
        self.dims.index(c).map(|i| &self.nodes[i])
    }

    /// Visitation state at `c`. Out-of-bounds cells read as neutral.
    #[inline]
    pub fn state(&self, c: Coord) -> VisitState {
        self.node(c).map_or(VisitState::Neutral, |n| n.state)
    }

    #[inline]
    pub fn parent(&self, c: Coord) -> Option<Coord> {
        self.node(c).and_then(|n| n.parent)
    }

    /// Accumulated cost at `c`. Only uniform-cost search maintains it.
    #[inline]
    pub fn cost(&self, c: Coord) -> f64 {
        self.node(c).map_or(f64::INFINITY, |n| n.cost)
    }

    /// Number of nodes currently in `state`.
    pub fn count(&self, state: VisitState) -> usize {
        self.nodes.iter().filter(|n| n.state == state).count()
    }

    /// Every node marked [`VisitState::Path`], in row-major order.
    pub fn path_cells(&self) -> Vec<Coord> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.state == VisitState::Path)
            .map(|(i, _)| self.dims.coord(i))
            .collect()
    }

    /// Snapshot of every node's state in row-major order.
    pub fn snapshot(&self) -> Vec<NodeState> {
        self.nodes.clone()
    }

    // -----------------------------------------------------------------------
    // Mutation helpers for the algorithms
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn node_mut(&mut self, c: Coord) -> &mut NodeState {
        let i = self
            .dims
            .index(c)
            .unwrap_or_else(|| panic!("search reached {c} outside the {} grid", self.dims));
        &mut self.nodes[i]
    }

    #[inline]
    pub(crate) fn set_state(&mut self, c: Coord, state: VisitState) {
        self.node_mut(c).state = state;
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, c: Coord, parent: Option<Coord>) {
        self.node_mut(c).parent = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_is_neutral() {
        let ctx = SearchContext::new(Dims::new(2, 3));
        assert_eq!(ctx.count(VisitState::Neutral), 6);
        assert_eq!(ctx.cost(Coord::new(1, 2)), f64::INFINITY);
        assert_eq!(ctx.parent(Coord::new(1, 2)), None);
        assert_eq!(ctx.state(Coord::new(9, 9)), VisitState::Neutral);
        assert!(ctx.node(Coord::new(2, 0)).is_none());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut ctx = SearchContext::new(Dims::new(2, 2));
        let c = Coord::new(1, 1);
        ctx.set_state(c, VisitState::Path);
        ctx.set_parent(c, Some(Coord::new(0, 0)));
        ctx.node_mut(c).cost = 1.4;
        assert_eq!(ctx.path_cells(), vec![c]);

        ctx.reset();
        assert_eq!(ctx.node(c), Some(&NodeState::default()));
        assert!(ctx.path_cells().is_empty());
    }

    #[test]
    fn reset_visits_skips_walls_and_keeps_cost() {
        let grid = Grid::new(1, 3, Coord::new(0, 0), Coord::new(0, 2))
            .unwrap()
            .with_walls([Coord::new(0, 1)])
            .unwrap();
        let mut ctx = SearchContext::for_grid(&grid);
        for c in grid.dims().iter() {
            ctx.set_state(c, VisitState::Visited);
            ctx.node_mut(c).cost = 2.0;
        }
        ctx.reset_visits(&grid);
        assert_eq!(ctx.state(Coord::new(0, 0)), VisitState::Neutral);
        assert_eq!(ctx.state(Coord::new(0, 1)), VisitState::Visited);
        assert_eq!(ctx.cost(Coord::new(0, 2)), 2.0);
    }
}
