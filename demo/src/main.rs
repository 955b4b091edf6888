//! Terminal pathfinding demonstrator.
//!
//! Run: cargo run --bin gridwalk
//!      cargo run --bin gridwalk -- --walls 0.25 --seed 3
//!      cargo run --bin gridwalk -- --headless
//!
//! SPACE runs the next algorithm, q or ESC quits. Logs go to stderr, so
//! redirect them when enabling: RUST_LOG=debug cargo run 2>gridwalk.log

use std::time::Duration;

use clap::Parser;
use gridwalk_crossterm::{Command, TerminalView, ViewConfig};
use gridwalk_demo::{Args, Session};
use gridwalk_search::Outcome;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::from_args(args)?;

    if args.headless {
        for line in session.summarize()? {
            println!("{line}");
        }
        return Ok(());
    }

    let mut view = TerminalView::new(ViewConfig {
        frame_delay: Duration::from_millis(args.delay_ms),
        ..ViewConfig::default()
    });
    view.init()?;
    let result = interactive(&mut session, &mut view);
    view.close();
    result
}

fn interactive(
    session: &mut Session,
    view: &mut TerminalView,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        view.set_title(session.title());
        view.draw(&session.grid, &session.ctx)?;

        match view.wait_command()? {
            Command::Quit => return Ok(()),
            Command::Redraw => continue,
            Command::Next => {
                let (alg, outcome) = session.run_next(view)?;
                if outcome == Outcome::Cancelled && view.quit_requested() {
                    return Ok(());
                }
                log::info!("{alg}: {outcome}");
                view.set_status(format!("{}: {outcome}", alg.title(&session.config)));
                view.pause(Duration::from_secs(1));
                if view.quit_requested() {
                    return Ok(());
                }
            }
        }
    }
}
