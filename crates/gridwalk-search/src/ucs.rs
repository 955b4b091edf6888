use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridwalk_core::{Coord, Grid, neighbors};

use crate::context::{SearchContext, VisitState};
use crate::observer::Observer;
use crate::outcome::Outcome;

/// Priority-queue entry ordered by cost, then insertion sequence.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    cost: f64,
    seq: u64,
    at: Coord,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest, earliest entry.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SearchContext {
    /// Uniform-cost (Dijkstra) search using the neighbor move costs.
    ///
    /// A node may be queued several times with decreasing cost; the stale
    /// entries are skipped when popped. The first time a node is finalized
    /// its `cost` is the minimum cost from the start.
    pub fn ucs<O: Observer>(&mut self, grid: &Grid, obs: &mut O) -> Outcome {
        let (start, target) = (grid.start(), grid.target());
        let mut seq: u64 = 0;
        let mut open = BinaryHeap::new();

        {
            let n = self.node_mut(start);
            n.cost = 0.0;
            n.state = VisitState::Frontier;
        }
        open.push(QueueEntry {
            cost: 0.0,
            seq,
            at: start,
        });

        while let Some(QueueEntry { cost, at: cur, .. }) = open.pop() {
            if obs.aborted() {
                return Outcome::Cancelled;
            }

            // Skip stale entries.
            if self.state(cur) == VisitState::Visited {
                continue;
            }
            self.set_state(cur, VisitState::Visited);

            if cur == target {
                return self.reconstruct(grid, target, obs);
            }

            for m in neighbors(grid, cur) {
                let tentative = cost + m.cost;
                let n = self.node_mut(m.to);
                if n.state == VisitState::Visited || tentative >= n.cost {
                    continue;
                }
                n.cost = tentative;
                n.parent = Some(cur);
                n.state = VisitState::Frontier;
                seq += 1;
                open.push(QueueEntry {
                    cost: tentative,
                    seq,
                    at: m.to,
                });
            }

            obs.render(grid, self);
        }

        Outcome::NoPath
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;

    #[test]
    fn queue_pops_cheapest_then_earliest() {
        let mut heap = BinaryHeap::new();
        let c = Coord::new(0, 0);
        heap.push(QueueEntry { cost: 2.0, seq: 1, at: c });
        heap.push(QueueEntry { cost: 1.4, seq: 2, at: c });
        heap.push(QueueEntry { cost: 2.0, seq: 0, at: c });
        heap.push(QueueEntry { cost: 1.4, seq: 3, at: c });
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|e| e.seq).collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
    }

    #[test]
    fn open_three_by_three_takes_two_diagonals() {
        let g = Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let out = ctx.ucs(&g, &mut NullObserver);
        let route = out.route().unwrap();
        assert_eq!(route.cells, vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
        assert!((route.cost() - 2.8).abs() < 1e-9);
        assert!((ctx.cost(Coord::new(2, 2)) - 2.8).abs() < 1e-9);
        // Every other cell was finalized before the target.
        assert_eq!(ctx.count(VisitState::Visited), 6);
    }

    #[test]
    fn picks_cheaper_of_equal_hop_routes() {
        // Both (0,1) and (1,1) reach (0,2) in two hops; the straight line is
        // cheaper.
        let g = Grid::new(3, 3, Coord::new(0, 0), Coord::new(0, 2)).unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let out = ctx.ucs(&g, &mut NullObserver);
        let route = out.route().unwrap();
        assert_eq!(route.cells, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        assert!((route.cost() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn cost_matches_route_cost_with_walls() {
        let g = Grid::parse(
            "S..#...
             .#.#.#.
             .#...#.
             .####..
             ......T",
        )
        .unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let out = ctx.ucs(&g, &mut NullObserver);
        let route = out.route().unwrap();
        assert!(route.is_valid_on(&g));
        assert!((route.cost() - ctx.cost(g.target())).abs() < 1e-9);
    }

    #[test]
    fn enclosed_target_reports_no_path() {
        let g = Grid::parse("S...\n..##\n..#T").unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        assert_eq!(ctx.ucs(&g, &mut NullObserver), Outcome::NoPath);
        assert_eq!(ctx.cost(g.target()), f64::INFINITY);
    }
}
