//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! Cells are addressed by `(row, col)`, 0-indexed, with rows growing
//! downward and columns growing right (screen order).

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Top-left cell (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether `other` is one king-move away (orthogonal or diagonal).
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }

    /// Whether the step to `other` changes both row and column.
    #[inline]
    pub fn is_diagonal_to(self, other: Coord) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Every coordinate in `[0, rows) x [0, cols)` is a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Coord::new(r, c)))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        assert_eq!(a + Coord::new(-1, 3), Coord::new(0, 5));
        assert_eq!(a.shift(2, -2), Coord::new(3, 0));
        assert_eq!(Coord::from((4, 7)), Coord::new(4, 7));
    }

    #[test]
    fn coord_ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn coord_adjacency() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(1, 1)));
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(4, 2)));
        assert!(c.is_diagonal_to(Coord::new(3, 1)));
        assert!(!c.is_diagonal_to(Coord::new(3, 2)));
    }

    #[test]
    fn coord_hash_dedup() {
        let set: HashSet<Coord> = [Coord::new(1, 1), Coord::new(1, 1), Coord::new(0, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn dims_index_round_trip() {
        let d = Dims::new(3, 4);
        assert_eq!(d.len(), 12);
        assert_eq!(d.index(Coord::new(2, 3)), Some(11));
        assert_eq!(d.coord(11), Coord::new(2, 3));
        assert_eq!(d.index(Coord::new(3, 0)), None);
        assert_eq!(d.index(Coord::new(0, -1)), None);
        for (i, c) in d.iter().enumerate() {
            assert_eq!(d.index(c), Some(i));
        }
    }

    #[test]
    fn dims_display() {
        assert_eq!(Dims::new(15, 20).to_string(), "15x20");
        assert_eq!(Coord::new(2, 3).to_string(), "(2, 3)");
    }
}
