use gridwalk_core::Grid;

use crate::context::SearchContext;

/// Host-side hook driven by every search.
///
/// `render` is called after each meaningful state change (one expansion
/// step, one path cell marked). `aborted` is polled at least once per loop
/// iteration; once it returns `true` the search returns
/// [`Outcome::Cancelled`](crate::Outcome::Cancelled) without further
/// mutation.
pub trait Observer {
    /// Paint (or otherwise consume) the current search state.
    fn render(&mut self, grid: &Grid, ctx: &SearchContext);

    /// Whether the host has requested termination.
    fn aborted(&mut self) -> bool {
        false
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn render(&mut self, grid: &Grid, ctx: &SearchContext) {
        (**self).render(grid, ctx);
    }

    fn aborted(&mut self) -> bool {
        (**self).aborted()
    }
}

/// Observer that ignores frames and never aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn render(&mut self, _grid: &Grid, _ctx: &SearchContext) {}
}

/// Adapts a render closure into an [`Observer`] that never aborts.
pub struct FnObserver<F>(pub F);

impl<F> Observer for FnObserver<F>
where
    F: FnMut(&Grid, &SearchContext),
{
    fn render(&mut self, grid: &Grid, ctx: &SearchContext) {
        (self.0)(grid, ctx);
    }
}

/// Counts frames and optionally aborts once a frame budget is spent.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    frames: usize,
    polls: usize,
    abort_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort as soon as `frames` frames have been rendered.
    pub fn abort_after(frames: usize) -> Self {
        Self {
            abort_after: Some(frames),
            ..Self::default()
        }
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Abort polls answered so far.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl Observer for Recorder {
    fn render(&mut self, _grid: &Grid, _ctx: &SearchContext) {
        self.frames += 1;
    }

    fn aborted(&mut self) -> bool {
        self.polls += 1;
        self.abort_after.is_some_and(|n| self.frames >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::VisitState;
    use gridwalk_core::Coord;

    #[test]
    fn closure_sees_every_frame() {
        let g = Grid::new(1, 4, Coord::new(0, 0), Coord::new(0, 3)).unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let mut visited = Vec::new();
        let out = ctx.bfs(
            &g,
            &mut FnObserver(|_: &Grid, c: &SearchContext| visited.push(c.count(VisitState::Visited))),
        );
        assert!(out.is_found());
        // Three expansions, then the path overwrites visited cells one by one.
        assert_eq!(visited, vec![1, 2, 3, 3, 2, 1, 0]);
    }

    #[test]
    fn recorder_polls_once_per_iteration() {
        let g = Grid::new(1, 4, Coord::new(0, 0), Coord::new(0, 3)).unwrap();
        let mut ctx = SearchContext::for_grid(&g);
        let mut rec = Recorder::new();
        assert!(ctx.bfs(&g, &mut rec).is_found());
        // Four pops (the last one finds the target) and four path cells.
        assert_eq!(rec.polls(), 8);
        assert_eq!(rec.frames(), 7);
    }
}
