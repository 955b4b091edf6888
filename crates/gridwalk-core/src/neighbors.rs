use crate::geom::Coord;
use crate::grid::Grid;

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
///
/// A fixed 1.4 rather than the exact `SQRT_2`. Uniform-cost results are
/// computed with this value.
pub const DIAGONAL_COST: f64 = 1.4;

/// Step offsets `(dr, dc)` in enumeration order: up, right, down,
/// down-right, left, up-left, up-right, down-left.
///
/// Every algorithm that expands neighbors sequentially inherits its
/// tie-breaking from this order.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// A traversable step to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub to: Coord,
    pub cost: f64,
}

/// Cost of stepping between two adjacent cells.
#[inline]
pub fn move_cost(from: Coord, to: Coord) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Traversable neighbors of `at`, in [`DIRECTIONS`] order.
///
/// Out-of-bounds and wall cells are skipped.
pub fn neighbors(grid: &Grid, at: Coord) -> impl Iterator<Item = Move> + '_ {
    DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
        let to = at.shift(dr, dc);
        grid.is_open(to).then(|| Move {
            to,
            cost: move_cost(at, to),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(rows: i32, cols: i32) -> Grid {
        Grid::new(rows, cols, Coord::new(0, 0), Coord::new(rows - 1, cols - 1)).unwrap()
    }

    #[test]
    fn interior_cell_has_eight_in_fixed_order() {
        let g = open(3, 3);
        let got: Vec<Coord> = neighbors(&g, Coord::new(1, 1)).map(|m| m.to).collect();
        assert_eq!(
            got,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 2),
                Coord::new(1, 0),
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn corner_cell_is_clipped() {
        let g = open(3, 3);
        let got: Vec<Move> = neighbors(&g, Coord::new(0, 0)).collect();
        assert_eq!(
            got,
            vec![
                Move { to: Coord::new(0, 1), cost: 1.0 },
                Move { to: Coord::new(1, 0), cost: 1.0 },
                Move { to: Coord::new(1, 1), cost: 1.4 },
            ]
        );
    }

    #[test]
    fn walls_are_skipped() {
        let g = open(3, 3)
            .with_walls([Coord::new(0, 1), Coord::new(1, 1)])
            .unwrap();
        let got: Vec<Coord> = neighbors(&g, Coord::new(0, 0)).map(|m| m.to).collect();
        assert_eq!(got, vec![Coord::new(1, 0)]);
    }

    #[test]
    fn costs() {
        assert_eq!(move_cost(Coord::new(1, 1), Coord::new(0, 1)), ORTHOGONAL_COST);
        assert_eq!(move_cost(Coord::new(1, 1), Coord::new(0, 0)), DIAGONAL_COST);
    }
}
