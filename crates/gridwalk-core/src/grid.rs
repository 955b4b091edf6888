//! Static grid topology: dimensions, walls, start and target.
//!
//! A [`Grid`] never changes while a search runs. Per-run node state
//! (parents, costs, visitation) lives in the search crate's context so that
//! several independent searches can share one topology.

use std::fmt;

use crate::geom::{Coord, Dims};

/// Errors raised when building or editing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns below 1.
    EmptyDims(Dims),
    /// A coordinate outside the grid.
    OutOfBounds { at: Coord, dims: Dims },
    /// Start and target are the same cell.
    StartIsTarget(Coord),
    /// A wall was requested on the start or target cell.
    WallOnEndpoint(Coord),
    /// An ASCII layout could not be parsed.
    Layout(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDims(d) => write!(f, "grid: dimensions {d} must be at least 1x1"),
            Self::OutOfBounds { at, dims } => {
                write!(f, "grid: coordinate {at} is outside the {dims} grid")
            }
            Self::StartIsTarget(c) => write!(f, "grid: start and target are both {c}"),
            Self::WallOnEndpoint(c) => write!(f, "grid: cannot place a wall on endpoint {c}"),
            Self::Layout(msg) => write!(f, "grid layout: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Grid topology with a fixed start and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    walls: Vec<bool>,
    start: Coord,
    target: Coord,
}

impl Grid {
    /// Create a wall-free grid.
    ///
    /// Fails if the grid is empty, either endpoint lies outside it, or the
    /// endpoints coincide.
    pub fn new(rows: i32, cols: i32, start: Coord, target: Coord) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::EmptyDims(dims));
        }
        for c in [start, target] {
            if !dims.contains(c) {
                return Err(GridError::OutOfBounds { at: c, dims });
            }
        }
        if start == target {
            return Err(GridError::StartIsTarget(start));
        }
        Ok(Self {
            dims,
            walls: vec![false; dims.len()],
            start,
            target,
        })
    }

    /// Builder form of [`set_wall`](Self::set_wall) for many cells.
    pub fn with_walls<I>(mut self, walls: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        for c in walls {
            self.set_wall(c, true)?;
        }
        Ok(self)
    }

    /// Parse an ASCII layout: `#` wall, `.` open, `S` start, `T` target.
    ///
    /// Blank lines and surrounding whitespace are ignored. Every row must
    /// have the same width and exactly one `S` and one `T` must appear.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(GridError::Layout("no rows".to_string()));
        }
        let cols = lines[0].chars().count();
        let mut start = None;
        let mut target = None;
        let mut walls = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::Layout(format!(
                    "row {r} has width {} (expected {cols})",
                    line.chars().count()
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                let at = Coord::new(r as i32, c as i32);
                match ch {
                    '.' => {}
                    '#' => walls.push(at),
                    'S' if start.is_none() => start = Some(at),
                    'T' if target.is_none() => target = Some(at),
                    'S' | 'T' => {
                        return Err(GridError::Layout(format!("duplicate '{ch}' at {at}")));
                    }
                    _ => return Err(GridError::Layout(format!("invalid character '{ch}' at {at}"))),
                }
            }
        }
        let start = start.ok_or_else(|| GridError::Layout("missing start 'S'".to_string()))?;
        let target = target.ok_or_else(|| GridError::Layout("missing target 'T'".to_string()))?;
        Grid::new(lines.len() as i32, cols as i32, start, target)?.with_walls(walls)
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Whether `c` is a wall. Out-of-bounds cells are not walls.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.dims.index(c).is_some_and(|i| self.walls[i])
    }

    /// Whether `c` is inside the grid and traversable.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.dims.index(c).is_some_and(|i| !self.walls[i])
    }

    /// Set or clear a wall.
    pub fn set_wall(&mut self, c: Coord, wall: bool) -> Result<(), GridError> {
        let Some(i) = self.dims.index(c) else {
            return Err(GridError::OutOfBounds {
                at: c,
                dims: self.dims,
            });
        };
        if wall && (c == self.start || c == self.target) {
            return Err(GridError::WallOnEndpoint(c));
        }
        self.walls[i] = wall;
        Ok(())
    }

    /// Flip a wall, returning the new state. Endpoints are left untouched.
    pub fn toggle_wall(&mut self, c: Coord) -> Result<bool, GridError> {
        let wall = !self.is_wall(c);
        self.set_wall(c, wall)?;
        Ok(wall)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.fill(false);
    }

    /// All wall coordinates in row-major order.
    pub fn walls(&self) -> Vec<Coord> {
        self.walls
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w)
            .map(|(i, _)| self.dims.coord(i))
            .collect()
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }
}

impl fmt::Display for Grid {
    /// Render the topology back into the layout format accepted by
    /// [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dims.rows {
            for c in 0..self.dims.cols {
                let at = Coord::new(r, c);
                let ch = if at == self.start {
                    'S'
                } else if at == self.target {
                    'T'
                } else if self.is_wall(at) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
