//! Crossterm terminal view for gridwalk.
//!
//! Provides a [`TerminalView`] that implements [`gridwalk_search::Observer`]:
//! every search step repaints the grid, sleeps for the frame delay, and the
//! abort poll picks up `q` / `Esc` / `Ctrl-C` from the keyboard.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridwalk_core::{Coord, Grid};
use gridwalk_search::{Observer, SearchContext, VisitState};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

pub const WHITE: CtColor = CtColor::Rgb { r: 255, g: 255, b: 255 };
pub const BLACK: CtColor = CtColor::Rgb { r: 0, g: 0, b: 0 };
pub const GREEN: CtColor = CtColor::Rgb { r: 0, g: 255, b: 0 };
pub const RED: CtColor = CtColor::Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: CtColor = CtColor::Rgb { r: 0, g: 0, b: 255 };
pub const CYAN: CtColor = CtColor::Rgb { r: 0, g: 255, b: 255 };
pub const ORANGE: CtColor = CtColor::Rgb { r: 255, g: 165, b: 0 };
pub const YELLOW: CtColor = CtColor::Rgb { r: 255, g: 255, b: 0 };
const GREY: CtColor = CtColor::Rgb { r: 200, g: 200, b: 200 };

/// Legend entries, in display order.
pub const LEGEND: [(CtColor, &str); 7] = [
    (GREEN, "Start"),
    (RED, "Target"),
    (BLUE, "Path"),
    (CYAN, "Frontier (S)"),
    (ORANGE, "Frontier (T)"),
    (YELLOW, "Visited"),
    (BLACK, "Wall"),
];

/// Rows taken by the legend block above the grid.
const HEADER_ROWS: u16 = 5;

/// Background colour of cell `c`.
///
/// Walls win over endpoints, endpoints over search state, and the search
/// states rank path, frontier, reverse frontier, visited.
pub fn cell_color(grid: &Grid, ctx: &SearchContext, c: Coord) -> CtColor {
    if grid.is_wall(c) {
        return BLACK;
    }
    if c == grid.start() {
        return GREEN;
    }
    if c == grid.target() {
        return RED;
    }
    match ctx.state(c) {
        VisitState::Path => BLUE,
        VisitState::Frontier => CYAN,
        VisitState::FrontierReverse => ORANGE,
        VisitState::Visited => YELLOW,
        VisitState::Neutral => WHITE,
    }
}

/// Top-left terminal position of cell `c`, or `None` when the cell does not
/// fit inside a terminal of `area` (columns, rows).
pub fn cell_origin(c: Coord, cell_width: u16, area: (u16, u16)) -> Option<(u16, u16)> {
    let col = u16::try_from(c.col).ok()?;
    let row = u16::try_from(c.row).ok()?;
    let x = col.checked_mul(cell_width)?;
    let y = row.checked_add(HEADER_ROWS)?;
    (x.checked_add(cell_width)? <= area.0 && y < area.1).then_some((x, y))
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Host-level command read from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset and run the next algorithm.
    Next,
    /// Repaint (terminal resized).
    Redraw,
    /// Leave the program.
    Quit,
}

/// Maps a key press to a [`Command`].
pub fn to_command(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Next),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// TerminalView
// ---------------------------------------------------------------------------

/// Tunables for a [`TerminalView`].
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Pause after every rendered search step.
    pub frame_delay: Duration,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(50),
            cell_width: 2,
        }
    }
}

/// A terminal front-end that paints search state with crossterm.
pub struct TerminalView {
    config: ViewConfig,
    title: String,
    status: String,
    quit: bool,
    active: bool,
}

impl TerminalView {
    /// Create a new view. Call [`init`](Self::init) before drawing.
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            title: String::new(),
            status: String::new(),
            quit: false,
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        log::info!("terminal view initialised");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::info!("terminal view closed");
    }

    /// Heading shown above the legend (the algorithm name).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// One-line message shown under the legend.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Whether a quit key has been seen.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Paint the legend and every grid cell.
    pub fn draw(&mut self, grid: &Grid, ctx: &SearchContext) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.draw_legend(&mut stdout)?;

        let w = self.config.cell_width.max(1);
        let blank = " ".repeat(w as usize);
        let area = terminal::size()?;
        for c in grid.dims().iter() {
            let Some((x, y)) = cell_origin(c, w, area) else {
                continue;
            };
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetBackgroundColor(cell_color(grid, ctx, c)),
                Print(&blank)
            )?;
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()
    }

    fn draw_legend(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(
            out,
            ResetColor,
            cursor::MoveTo(0, 0),
            Print(format!("Algo: {}", self.title)),
            terminal::Clear(ClearType::UntilNewLine),
            cursor::MoveTo(0, 1),
            Print("Press SPACE to start next, q to quit"),
            terminal::Clear(ClearType::UntilNewLine),
            cursor::MoveTo(0, 2)
        )?;
        for (color, label) in LEGEND {
            queue!(
                out,
                SetBackgroundColor(color),
                Print("  "),
                ResetColor,
                Print(format!(" {label}  "))
            )?;
        }
        queue!(
            out,
            terminal::Clear(ClearType::UntilNewLine),
            cursor::MoveTo(0, 3),
            Print(&self.status),
            terminal::Clear(ClearType::UntilNewLine),
            cursor::MoveTo(0, 4),
            SetForegroundColor(GREY),
            Print("\u{2500}".repeat(60)),
            ResetColor
        )
    }

    /// Block until the next host command.
    pub fn wait_command(&mut self) -> Result<Command, Box<dyn std::error::Error>> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(cmd) = to_command(key) {
                        if cmd == Command::Quit {
                            self.quit = true;
                        }
                        return Ok(cmd);
                    }
                }
                Event::Resize(..) => {
                    execute!(io::stdout(), terminal::Clear(ClearType::All))?;
                    return Ok(Command::Redraw);
                }
                _ => {}
            }
        }
    }

    /// Sleep for `total`, watching for a quit key. Returns early on quit.
    pub fn pause(&mut self, total: Duration) {
        let deadline = Instant::now() + total;
        while !self.quit {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            self.drain_events((deadline - now).min(Duration::from_millis(50)));
        }
    }

    /// Consume pending input, latching a quit request.
    fn drain_events(&mut self, timeout: Duration) {
        if let Err(e) = self.try_drain_events(timeout) {
            log::warn!("input polling failed, stopping: {e}");
            self.quit = true;
        }
    }

    fn try_drain_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if to_command(key) == Some(Command::Quit) {
                    self.quit = true;
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.close();
    }
}

impl Observer for TerminalView {
    fn render(&mut self, grid: &Grid, ctx: &SearchContext) {
        if let Err(e) = self.draw(grid, ctx) {
            log::warn!("draw failed, stopping: {e}");
            self.quit = true;
            return;
        }
        thread::sleep(self.config.frame_delay);
    }

    fn aborted(&mut self) -> bool {
        if !self.quit {
            self.drain_events(Duration::ZERO);
        }
        self.quit
    }
}
