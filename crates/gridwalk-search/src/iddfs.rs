use gridwalk_core::Grid;

use crate::context::SearchContext;
use crate::observer::Observer;
use crate::outcome::Outcome;

impl SearchContext {
    /// Iterative-deepening depth-first search.
    ///
    /// Runs [`dls`](Self::dls) with limits `1..=max_depth`, clearing the
    /// visitation state and parents of every open node before each pass.
    /// Stops at the first limit that finds the target. If a pass expands
    /// the whole reachable area without cutting anything off, deeper passes
    /// cannot help and the result is [`Outcome::NoPath`].
    pub fn iddfs<O: Observer>(&mut self, grid: &Grid, max_depth: usize, obs: &mut O) -> Outcome {
        for limit in 1..=max_depth {
            log::trace!("iddfs: depth limit {limit}");
            self.reset_visits(grid);
            match self.dls(grid, limit, obs) {
                Outcome::DepthLimited { .. } => continue,
                done => return done,
            }
        }
        Outcome::DepthLimited { limit: max_depth }
    }
}
