use std::fmt;
use std::str::FromStr;

use gridwalk_core::Grid;

use crate::context::SearchContext;
use crate::observer::Observer;
use crate::outcome::Outcome;

/// Depth bounds for the depth-limited strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Fixed limit for [`Algorithm::Dls`].
    pub dls_limit: usize,
    /// Deepest limit tried by [`Algorithm::Iddfs`].
    pub iddfs_max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dls_limit: 30,
            iddfs_max_depth: 50,
        }
    }
}

/// The six search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl Algorithm {
    /// All strategies in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Dls,
        Algorithm::Iddfs,
        Algorithm::Bidirectional,
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::Dls => "dls",
            Self::Iddfs => "iddfs",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Display title, including the depth limit where one applies.
    pub fn title(self, config: &SearchConfig) -> String {
        match self {
            Self::Bfs => "BFS".to_string(),
            Self::Dfs => "DFS".to_string(),
            Self::Ucs => "UCS".to_string(),
            Self::Dls => format!("DLS (L={})", config.dls_limit),
            Self::Iddfs => "IDDFS".to_string(),
            Self::Bidirectional => "Bidirectional".to_string(),
        }
    }

    /// The following strategy in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Run this strategy from `grid.start()` to `grid.target()`.
    ///
    /// `ctx` is expected to be freshly reset; only IDDFS clears state
    /// between its own passes. A context sized for a different grid is
    /// replaced by a fresh one.
    pub fn run<O: Observer>(
        self,
        grid: &Grid,
        ctx: &mut SearchContext,
        config: &SearchConfig,
        obs: &mut O,
    ) -> Outcome {
        if ctx.dims() != grid.dims() {
            log::warn!(
                "search context is {} but grid is {}; starting from a fresh context",
                ctx.dims(),
                grid.dims()
            );
            *ctx = SearchContext::for_grid(grid);
        }
        log::debug!(
            "{}: {} -> {} on {} grid with {} walls",
            self.id(),
            grid.start(),
            grid.target(),
            grid.dims(),
            grid.wall_count()
        );

        let outcome = match self {
            Self::Bfs => ctx.bfs(grid, obs),
            Self::Dfs => ctx.dfs(grid, obs),
            Self::Ucs => ctx.ucs(grid, obs),
            Self::Dls => ctx.dls(grid, config.dls_limit, obs),
            Self::Iddfs => ctx.iddfs(grid, config.iddfs_max_depth, obs),
            Self::Bidirectional => ctx.bidirectional(grid, obs),
        };

        log::debug!("{}: {outcome}", self.id());
        outcome
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected one of bfs, dfs, ucs, dls, iddfs, bidirectional)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ucs" | "dijkstra" => Ok(Self::Ucs),
            "dls" => Ok(Self::Dls),
            "iddfs" | "ids" => Ok(Self::Iddfs),
            "bidirectional" | "bidi" => Ok(Self::Bidirectional),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
