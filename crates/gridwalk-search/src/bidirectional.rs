use std::collections::VecDeque;

use gridwalk_core::{Coord, Grid, neighbors};

use crate::context::{SearchContext, VisitState};
use crate::observer::Observer;
use crate::outcome::Outcome;
use crate::reconstruct::Discovered;

/// One direction of a bidirectional search.
struct Half {
    queue: VecDeque<Coord>,
    seen: Discovered,
    frontier: VisitState,
}

impl Half {
    fn new(origin: Coord, frontier: VisitState) -> Self {
        Self {
            queue: VecDeque::from([origin]),
            seen: Discovered::from([(origin, None)]),
            frontier,
        }
    }
}

impl SearchContext {
    /// Breadth-first search from both ends at once.
    ///
    /// Each round expands one node from the start side, then one from the
    /// target side, then renders. A meeting point is checked both when a
    /// node is popped and when a neighbor is discovered, so the search stops
    /// as soon as the two discovery maps intersect. Ends with
    /// [`Outcome::NoPath`] when either queue runs dry.
    pub fn bidirectional<O: Observer>(&mut self, grid: &Grid, obs: &mut O) -> Outcome {
        let mut fwd = Half::new(grid.start(), VisitState::Frontier);
        let mut bwd = Half::new(grid.target(), VisitState::FrontierReverse);
        self.set_state(grid.start(), VisitState::Frontier);
        self.set_state(grid.target(), VisitState::FrontierReverse);

        while !fwd.queue.is_empty() && !bwd.queue.is_empty() {
            if obs.aborted() {
                return Outcome::Cancelled;
            }
            if let Some(meet) = self.expand_half(grid, &mut fwd, &bwd) {
                return self.reconstruct_bidirectional(grid, meet, &fwd.seen, &bwd.seen, obs);
            }
            if let Some(meet) = self.expand_half(grid, &mut bwd, &fwd) {
                return self.reconstruct_bidirectional(grid, meet, &fwd.seen, &bwd.seen, obs);
            }
            obs.render(grid, self);
        }

        Outcome::NoPath
    }

    /// Pop and expand one node of `half`; returns a meeting point if one
    /// turns up.
    fn expand_half(&mut self, grid: &Grid, half: &mut Half, other: &Half) -> Option<Coord> {
        let cur = half.queue.pop_front()?;
        if other.seen.contains_key(&cur) {
            return Some(cur);
        }
        self.set_state(cur, VisitState::Visited);

        for m in neighbors(grid, cur) {
            if half.seen.contains_key(&m.to) {
                continue;
            }
            half.seen.insert(m.to, Some(cur));
            self.set_state(m.to, half.frontier);
            half.queue.push_back(m.to);
            if other.seen.contains_key(&m.to) {
                return Some(m.to);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NullObserver, Recorder};

    #[test]
    fn open_three_by_three_meets_in_the_middle() {
        let g = Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let mut rec = Recorder::new();
        let out = ctx.bidirectional(&g, &mut rec);
        assert_eq!(
            out.route().map(|r| r.cells.clone()),
            Some(vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)])
        );
        // The meeting happens in the first round, before its render; the
        // meeting cell is marked on both walks.
        assert_eq!(rec.frames(), 4);
        assert_eq!(ctx.state(Coord::new(1, 2)), VisitState::FrontierReverse);
        assert_eq!(ctx.state(Coord::new(0, 1)), VisitState::Frontier);
    }

    #[test]
    fn route_is_contiguous_without_repeats() {
        let layouts = [
            "S.#....\n.##.##.\n...#...\n##...#.\n...#.#T",
            "S......\n######.\n.......\n.######\n......T",
            "S#.....\n.#.###.\n.#.#...\n...#.#T",
        ];
        for layout in layouts {
            let g = Grid::parse(layout).unwrap();
            let mut ctx = SearchContext::for_grid(&g);
            let out = ctx.bidirectional(&g, &mut NullObserver);
            let route = out.route().unwrap();
            assert!(route.is_valid_on(&g), "{layout}");
            for c in &route.cells {
                assert_eq!(ctx.state(*c), VisitState::Path);
            }
        }
    }

    #[test]
    fn adjacent_endpoints() {
        let g = Grid::new(2, 2, Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let out = ctx.bidirectional(&g, &mut NullObserver);
        assert_eq!(
            out.route().map(|r| r.cells.clone()),
            Some(vec![Coord::new(0, 0), Coord::new(0, 1)])
        );
    }

    #[test]
    fn enclosed_target_reports_no_path() {
        let g = Grid::parse("S....\n.....\n.....\n...##\n...#T").unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        assert_eq!(ctx.bidirectional(&g, &mut NullObserver), Outcome::NoPath);
        assert!(ctx.path_cells().is_empty());
    }

    #[test]
    fn enclosed_start_reports_no_path() {
        let g = Grid::parse("S#...\n##...\n....T").unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        assert_eq!(ctx.bidirectional(&g, &mut NullObserver), Outcome::NoPath);
    }
}
