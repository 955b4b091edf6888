//! Step-observable uninformed search over a [`gridwalk_core::Grid`].
//!
//! Six strategies share one mutable [`SearchContext`] (parent, cost and
//! visitation state per cell) and report every step to an [`Observer`]:
//!
//! - **Breadth-first** ([`SearchContext::bfs`]), hop-count optimal
//! - **Depth-first** ([`SearchContext::dfs`])
//! - **Uniform-cost** ([`SearchContext::ucs`]), cost optimal
//! - **Depth-limited** ([`SearchContext::dls`])
//! - **Iterative deepening** ([`SearchContext::iddfs`])
//! - **Bidirectional breadth-first** ([`SearchContext::bidirectional`])
//!
//! [`Algorithm`] is the closed set of strategies a host selects from; each
//! run ends in an [`Outcome`].
//!
//! ```
//! use gridwalk_core::{Coord, Grid};
//! use gridwalk_search::{Algorithm, NullObserver, SearchConfig, SearchContext};
//!
//! let grid = Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! let mut ctx = SearchContext::for_grid(&grid);
//! let out = Algorithm::Bfs.run(&grid, &mut ctx, &SearchConfig::default(), &mut NullObserver);
//! assert_eq!(out.route().map(|r| r.hops()), Some(2));
//! ```

mod algorithm;
mod bfs;
mod bidirectional;
mod context;
mod dfs;
mod dls;
mod iddfs;
mod observer;
mod outcome;
mod reconstruct;
mod ucs;

pub use algorithm::{Algorithm, ParseAlgorithmError, SearchConfig};
pub use context::{NodeState, SearchContext, VisitState};
pub use observer::{FnObserver, NullObserver, Observer, Recorder};
pub use outcome::{Outcome, Route};
pub use reconstruct::Discovered;
