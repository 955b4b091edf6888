//! Path reconstruction: walk parent links back from the goal, marking each
//! cell as part of the route.

use std::collections::HashMap;

use gridwalk_core::{Coord, Grid};

use crate::context::{SearchContext, VisitState};
use crate::observer::Observer;
use crate::outcome::{Outcome, Route};

/// Discovery map of a bidirectional half: node -> predecessor toward that
/// half's origin (`None` for the origin itself).
pub type Discovered = HashMap<Coord, Option<Coord>>;

impl SearchContext {
    /// Mark the parent chain ending at `goal` as [`VisitState::Path`].
    ///
    /// Renders once per marked cell, goal first. Calling it again on the same
    /// search state marks the same cells.
    pub fn reconstruct<O: Observer>(&mut self, grid: &Grid, goal: Coord, obs: &mut O) -> Outcome {
        let mut cells = Vec::new();
        let mut cur = Some(goal);
        while let Some(c) = cur {
            debug_assert!(cells.len() <= self.nodes.len(), "parent links form a cycle");
            if obs.aborted() {
                return Outcome::Cancelled;
            }
            self.set_state(c, VisitState::Path);
            cells.push(c);
            cur = self.parent(c);
            obs.render(grid, self);
        }
        cells.reverse();
        Outcome::Found(Route { cells })
    }

    /// Splice the two halves of a bidirectional search at `meet`.
    ///
    /// Walks `meet` back to the start through `forward`, then `meet` on to
    /// the target through `backward`. `meet` is marked on both walks.
    pub fn reconstruct_bidirectional<O: Observer>(
        &mut self,
        grid: &Grid,
        meet: Coord,
        forward: &Discovered,
        backward: &Discovered,
        obs: &mut O,
    ) -> Outcome {
        let Some(mut head) = self.mark_chain(grid, meet, forward, obs) else {
            return Outcome::Cancelled;
        };
        let Some(tail) = self.mark_chain(grid, meet, backward, obs) else {
            return Outcome::Cancelled;
        };
        head.reverse();
        head.extend(tail.into_iter().skip(1));
        Outcome::Found(Route { cells: head })
    }

    /// Mark `from` and its predecessors in `links`; returns the walk in
    /// visiting order, or `None` if aborted.
    fn mark_chain<O: Observer>(
        &mut self,
        grid: &Grid,
        from: Coord,
        links: &Discovered,
        obs: &mut O,
    ) -> Option<Vec<Coord>> {
        let mut walk = Vec::new();
        let mut cur = Some(from);
        while let Some(c) = cur {
            debug_assert!(walk.len() <= self.nodes.len(), "discovery links form a cycle");
            if obs.aborted() {
                return None;
            }
            self.set_state(c, VisitState::Path);
            walk.push(c);
            cur = links.get(&c).copied().flatten();
            obs.render(grid, self);
        }
        Some(walk)
    }
}
