use gridwalk_core::{Grid, neighbors};

use crate::context::{SearchContext, VisitState};
use crate::observer::Observer;
use crate::outcome::Outcome;

impl SearchContext {
    /// Depth-first search with an explicit LIFO stack.
    ///
    /// Same enqueue-once guard as [`bfs`](Self::bfs); the most recently
    /// discovered neighbor (the last in direction order) is expanded first.
    /// No optimality guarantee.
    pub fn dfs<O: Observer>(&mut self, grid: &Grid, obs: &mut O) -> Outcome {
        let target = grid.target();
        let mut stack = vec![grid.start()];
        self.set_state(grid.start(), VisitState::Frontier);

        while let Some(cur) = stack.pop() {
            if obs.aborted() {
                return Outcome::Cancelled;
            }
            if cur == target {
                return self.reconstruct(grid, target, obs);
            }
            self.set_state(cur, VisitState::Visited);

            for m in neighbors(grid, cur) {
                let n = self.node_mut(m.to);
                if n.state == VisitState::Neutral {
                    n.state = VisitState::Frontier;
                    n.parent = Some(cur);
                    stack.push(m.to);
                }
            }

            obs.render(grid, self);
        }

        Outcome::NoPath
    }
}
