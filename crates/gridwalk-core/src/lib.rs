//! **gridwalk-core** — grid model for step-animated search.
//!
//! This crate holds the static half of the search world: cell coordinates,
//! the wall/start/target topology, and the 8-direction neighbor function
//! every search algorithm expands through.

pub mod geom;
pub mod grid;
pub mod neighbors;

pub use geom::{Coord, Dims};
pub use grid::{Grid, GridError};
pub use neighbors::{DIAGONAL_COST, DIRECTIONS, Move, ORTHOGONAL_COST, move_cost, neighbors};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
