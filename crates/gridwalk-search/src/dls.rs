//! Depth-limited search, run as an explicit stack of frames.
//!
//! Each frame holds the neighbor list of an expanded node and a cursor into
//! it, so the visitation order is exactly that of the recursive
//! formulation: a neighbor's neutral check happens when the cursor reaches
//! it, after all earlier siblings' subtrees are finished.

use gridwalk_core::{Coord, Grid, neighbors};

use crate::context::{SearchContext, VisitState};
use crate::observer::Observer;
use crate::outcome::Outcome;

struct Frame {
    at: Coord,
    depth: usize,
    moves: Vec<Coord>,
    next: usize,
}

impl Frame {
    /// Advance the cursor to the next still-neutral neighbor.
    fn next_child(&mut self, ctx: &SearchContext) -> Option<Coord> {
        while let Some(&to) = self.moves.get(self.next) {
            self.next += 1;
            if ctx.state(to) == VisitState::Neutral {
                return Some(to);
            }
        }
        None
    }
}

impl SearchContext {
    /// Depth-first search that gives up on any branch `limit` hops deep.
    ///
    /// The target is recognised at depth `limit`, but nodes at that depth
    /// are not expanded and stay neutral, so a shallower branch can still
    /// claim them. Expanded nodes are never unmarked, so a node exhausted
    /// by one branch is closed to its siblings.
    ///
    /// Returns [`Outcome::DepthLimited`] if the target was not found and at
    /// least one branch was cut off, [`Outcome::NoPath`] if the whole
    /// reachable area was expanded.
    pub fn dls<O: Observer>(&mut self, grid: &Grid, limit: usize, obs: &mut O) -> Outcome {
        let target = grid.target();
        let mut cut_off = false;
        let mut stack: Vec<Frame> = Vec::new();
        let mut entering = Some((grid.start(), 0usize));

        loop {
            if let Some((at, depth)) = entering.take() {
                if obs.aborted() {
                    return Outcome::Cancelled;
                }
                if at == target {
                    return self.reconstruct(grid, target, obs);
                }
                if depth >= limit {
                    cut_off = true;
                } else {
                    self.set_state(at, VisitState::Visited);
                    obs.render(grid, self);
                    stack.push(Frame {
                        at,
                        depth,
                        moves: neighbors(grid, at).map(|m| m.to).collect(),
                        next: 0,
                    });
                }
            }

            let Some(frame) = stack.last_mut() else {
                break;
            };
            match frame.next_child(self) {
                Some(child) => {
                    let (parent, depth) = (frame.at, frame.depth + 1);
                    self.set_parent(child, Some(parent));
                    entering = Some((child, depth));
                }
                None => {
                    stack.pop();
                }
            }
        }

        if cut_off {
            Outcome::DepthLimited { limit }
        } else {
            Outcome::NoPath
        }
    }
}
