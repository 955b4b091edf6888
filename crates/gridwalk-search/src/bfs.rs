use std::collections::VecDeque;

use gridwalk_core::{Grid, neighbors};

use crate::context::{SearchContext, VisitState};
use crate::observer::Observer;
use crate::outcome::Outcome;

impl SearchContext {
    /// Breadth-first search from the grid's start to its target.
    ///
    /// Hop-count optimal; move costs are ignored. Each cell is queued at most
    /// once (guarded by the neutral -> frontier transition).
    pub fn bfs<O: Observer>(&mut self, grid: &Grid, obs: &mut O) -> Outcome {
        let target = grid.target();
        let mut queue = VecDeque::from([grid.start()]);
        self.set_state(grid.start(), VisitState::Frontier);

        while let Some(cur) = queue.pop_front() {
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
                    queue.push_back(m.to);
                }
            }

            obs.render(grid, self);
        }

        Outcome::NoPath
    }
}
