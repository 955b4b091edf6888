//! Host model for the gridwalk demonstrator, shared by the interactive
//! terminal loop and the headless summary mode.
//!
//! Holds the grid, the search context, the wall layout to restore after
//! each reset, and which algorithm runs next.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use gridwalk_core::{Coord, Dims, Grid, GridError};
use gridwalk_search::{
    Algorithm, NullObserver, Observer, Outcome, SearchConfig, SearchContext, VisitState,
};
use rand::{Rng, SeedableRng};

/// Step-animated grid search demonstrator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 15)]
    pub rows: i32,

    /// Grid columns
    #[arg(long, default_value_t = 15)]
    pub cols: i32,

    /// Start cell as "row,col" (default: 2,2)
    #[arg(long, value_parser = parse_coord)]
    pub start: Option<Coord>,

    /// Target cell as "row,col" (default: rows-3,cols-3)
    #[arg(long, value_parser = parse_coord)]
    pub target: Option<Coord>,

    /// Fraction of cells turned into walls at random (0.0 - 1.0)
    #[arg(long, default_value_t = 0.0)]
    pub walls: f64,

    /// Seed for the wall scatter (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// ASCII layout file ('#' wall, '.' open, 'S' start, 'T' target);
    /// overrides the size, endpoint and wall options
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Delay after every animation step, in milliseconds
    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    /// First algorithm to run (bfs, dfs, ucs, dls, iddfs, bidirectional)
    #[arg(short, long, default_value = "bfs")]
    pub algorithm: Algorithm,

    /// Depth limit for DLS
    #[arg(long, default_value_t = 30)]
    pub dls_limit: usize,

    /// Deepest limit tried by IDDFS
    #[arg(long, default_value_t = 50)]
    pub iddfs_max_depth: usize,

    /// Run every algorithm without animation and print a summary
    #[arg(long)]
    pub headless: bool,
}

/// Parse `"row,col"` into a [`Coord`].
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got \"{s}\""))?;
    let row = r.trim().parse().map_err(|e| format!("bad row in \"{s}\": {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column in \"{s}\": {e}"))?;
    Ok(Coord::new(row, col))
}

/// Errors raised while setting up a demo session.
#[derive(Debug)]
pub enum DemoError {
    /// Wall density outside `[0, 1]`.
    Density(f64),
    /// Layout file could not be read.
    Layout { path: PathBuf, source: std::io::Error },
    /// Grid validation failed.
    Grid(GridError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Density(d) => write!(f, "wall density {d} is outside 0.0..=1.0"),
            Self::Layout { path, source } => {
                write!(f, "cannot read layout {}: {source}", path.display())
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Density(_) => None,
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Turn each open, non-endpoint cell into a wall with probability
/// `density`.
pub fn scatter_walls(grid: &mut Grid, density: f64, rng: &mut impl Rng) -> Result<(), GridError> {
    for c in grid.dims().iter() {
        if c == grid.start() || c == grid.target() || grid.is_wall(c) {
            continue;
        }
        if rng.random_bool(density) {
            grid.set_wall(c, true)?;
        }
    }
    Ok(())
}

/// `(2, 2)`, or the top-left cell when the grid is too small for it.
fn default_start(dims: Dims) -> Coord {
    let preferred = Coord::new(2, 2);
    if dims.contains(preferred) {
        preferred
    } else {
        Coord::ORIGIN
    }
}

/// `(rows-3, cols-3)`, or the bottom-right cell when that one is off the
/// grid or coincides with `start`.
fn default_target(dims: Dims, start: Coord) -> Coord {
    let preferred = Coord::new(dims.rows - 3, dims.cols - 3);
    if dims.contains(preferred) && preferred != start {
        preferred
    } else {
        Coord::new(dims.rows - 1, dims.cols - 1)
    }
}

/// Build the grid described by `args`.
pub fn build_grid(args: &Args) -> Result<Grid, DemoError> {
    if let Some(path) = &args.layout {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Layout {
            path: path.clone(),
            source,
        })?;
        return Ok(Grid::parse(&text)?);
    }
    if !(0.0..=1.0).contains(&args.walls) {
        return Err(DemoError::Density(args.walls));
    }
    let dims = Dims::new(args.rows, args.cols);
    let start = args.start.unwrap_or_else(|| default_start(dims));
    let target = args.target.unwrap_or_else(|| default_target(dims, start));
    let mut grid = Grid::new(args.rows, args.cols, start, target)?;
    if args.walls > 0.0 {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("scattering walls at density {} with seed {seed}", args.walls);
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        scatter_walls(&mut grid, args.walls, &mut rng)?;
    }
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One line of the headless report.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub title: String,
    pub outcome: Outcome,
    pub visited: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14} {} (visited {})", self.title, self.outcome, self.visited)
    }
}

/// Demo state: grid, search context and the algorithm queued next.
pub struct Session {
    pub grid: Grid,
    pub ctx: SearchContext,
    pub config: SearchConfig,
    pub current: Algorithm,
    walls: Vec<Coord>,
}

impl Session {
    pub fn new(grid: Grid, config: SearchConfig, first: Algorithm) -> Self {
        let walls = grid.walls();
        Self {
            ctx: SearchContext::for_grid(&grid),
            grid,
            config,
            current: first,
            walls,
        }
    }

    pub fn from_args(args: &Args) -> Result<Self, DemoError> {
        let grid = build_grid(args)?;
        let config = SearchConfig {
            dls_limit: args.dls_limit,
            iddfs_max_depth: args.iddfs_max_depth,
        };
        Ok(Self::new(grid, config, args.algorithm))
    }

    /// Title of the algorithm that runs next.
    pub fn title(&self) -> String {
        self.current.title(&self.config)
    }

    /// Clear every node and wall, then put the session's walls back.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.ctx.reset();
        self.grid.clear_walls();
        for &w in &self.walls {
            self.grid.set_wall(w, true)?;
        }
        Ok(())
    }

    /// Reset, run the current algorithm, and queue the next one.
    pub fn run_next<O: Observer>(&mut self, obs: &mut O) -> Result<(Algorithm, Outcome), GridError> {
        self.reset()?;
        let alg = self.current;
        let outcome = alg.run(&self.grid, &mut self.ctx, &self.config, obs);
        self.current = alg.next();
        Ok((alg, outcome))
    }

    /// Run every algorithm once, without animation.
    pub fn summarize(&mut self) -> Result<Vec<Summary>, GridError> {
        let mut out = Vec::with_capacity(Algorithm::ALL.len());
        for alg in Algorithm::ALL {
            self.current = alg;
            let (_, outcome) = self.run_next(&mut NullObserver)?;
            out.push(Summary {
                title: alg.title(&self.config),
                outcome,
                visited: self.ctx.count(VisitState::Visited),
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["gridwalk"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn coord_parsing() {
        assert_eq!(parse_coord("3,4"), Ok(Coord::new(3, 4)));
        assert_eq!(parse_coord(" 3 , 4 "), Ok(Coord::new(3, 4)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,4").is_err());
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let a = args(&[]);
        assert_eq!(a.algorithm, Algorithm::Bfs);
        let grid = build_grid(&a).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (15, 15));
        assert_eq!(grid.start(), Coord::new(2, 2));
        assert_eq!(grid.target(), Coord::new(12, 12));
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn cli_options() {
        let a = args(&["--rows", "8", "--cols", "9", "--start", "0,0", "--target", "7,8", "-a", "iddfs"]);
        assert_eq!(a.algorithm, Algorithm::Iddfs);
        let grid = build_grid(&a).unwrap();
        assert_eq!(grid.target(), Coord::new(7, 8));
        assert!(Args::try_parse_from(["gridwalk", "-a", "astar"]).is_err());
    }

    #[test]
    fn invalid_setups_are_rejected() {
        let a = args(&["--start", "1,1", "--target", "1,1"]);
        assert!(matches!(build_grid(&a), Err(DemoError::Grid(GridError::StartIsTarget(_)))));
        let a = args(&["--walls", "1.5"]);
        assert!(matches!(build_grid(&a), Err(DemoError::Density(_))));
        let a = args(&["--layout", "/definitely/not/here.txt"]);
        assert!(matches!(build_grid(&a), Err(DemoError::Layout { .. })));
    }

    #[test]
    fn seeded_walls_are_reproducible_and_spare_endpoints() {
        let a = args(&["--walls", "0.3", "--seed", "7"]);
        let g1 = build_grid(&a).unwrap();
        let g2 = build_grid(&a).unwrap();
        assert_eq!(g1, g2);
        assert!(g1.wall_count() > 0);
        assert!(!g1.is_wall(g1.start()));
        assert!(!g1.is_wall(g1.target()));
    }

    #[test]
    fn full_density_walls_everything_but_endpoints() {
        let a = args(&[
            "--rows", "5", "--cols", "5", "--start", "0,0", "--target", "4,4", "--walls", "1.0",
            "--seed", "1",
        ]);
        let g = build_grid(&a).unwrap();
        assert_eq!(g.wall_count(), 23);
    }

    #[test]
    fn default_endpoints_fit_small_grids() {
        let g = build_grid(&args(&[])).unwrap();
        assert_eq!((g.start(), g.target()), (Coord::new(2, 2), Coord::new(12, 12)));

        let g = build_grid(&args(&["--rows", "5", "--cols", "5"])).unwrap();
        assert_eq!((g.start(), g.target()), (Coord::new(2, 2), Coord::new(4, 4)));

        let g = build_grid(&args(&["--rows", "3", "--cols", "3"])).unwrap();
        assert_eq!((g.start(), g.target()), (Coord::new(2, 2), Coord::new(0, 0)));

        let g = build_grid(&args(&["--rows", "2", "--cols", "2"])).unwrap();
        assert_eq!((g.start(), g.target()), (Coord::ORIGIN, Coord::new(1, 1)));
    }

    #[test]
    fn run_next_cycles_and_restores_walls() {
        let grid = Grid::parse("S.#\n..#\n..T").unwrap();
        let mut s = Session::new(grid, SearchConfig::default(), Algorithm::Bidirectional);
        assert_eq!(s.title(), "Bidirectional");
        let (alg, out) = s.run_next(&mut NullObserver).unwrap();
        assert_eq!(alg, Algorithm::Bidirectional);
        assert!(out.is_found());
        assert_eq!(s.current, Algorithm::Bfs);

        s.reset().unwrap();
        assert_eq!(s.grid.walls(), vec![Coord::new(0, 2), Coord::new(1, 2)]);
        assert!(s.ctx.path_cells().is_empty());
    }

    #[test]
    fn headless_summary_covers_every_algorithm() {
        let grid = Grid::new(6, 6, Coord::new(0, 0), Coord::new(5, 5)).unwrap();
        let mut s = Session::new(grid, SearchConfig::default(), Algorithm::Bfs);
        let report = s.summarize().unwrap();
        assert_eq!(report.len(), 6);
        assert!(report.iter().all(|r| r.outcome.is_found()));
        assert!(report[0].to_string().starts_with("BFS"));
        assert_eq!(report[3].title, "DLS (L=30)");
    }

    #[test]
    fn bundled_layout_parses() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("layouts/maze.txt");
        let a = args(&["--layout", path.to_str().unwrap()]);
        let mut s = Session::from_args(&a).unwrap();
        assert_eq!((s.grid.rows(), s.grid.cols()), (15, 15));
        assert_eq!(s.grid.start(), Coord::new(1, 2));
        assert_eq!(s.grid.target(), Coord::new(12, 13));
        let report = s.summarize().unwrap();
        assert!(report[0].outcome.is_found());
    }
}
