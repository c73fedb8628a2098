//! Generate a maze and watch agents race to the goal in the terminal.
//!
//! Run: cargo run --bin maze -- [rows] [cols] [agents] [--plain]

use std::error::Error;
use std::sync::mpsc;

use mazer_agents::{AgentOutcome, MazeSession, SessionConfig, solve};
use mazer_core::Point;
use mazer_demos::{DemoArgs, describe_outcomes};
use mazer_gen::Maze;
use mazer_term::TermRenderer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = DemoArgs::parse(std::env::args().skip(1))?;
    let config = args.session_config();
    let mut session = MazeSession::from_config(config.clone());
    let (maze, starts) = session.prepare()?;

    let outcomes = if args.plain {
        solve(&maze, &starts, &config, None)?
    } else {
        watch(&maze, &starts, &config)?
    };

    print!("{}", maze.grid.snapshot().to_text());
    print!("{}", describe_outcomes(&outcomes));
    Ok(())
}

/// Solve on a worker thread while the main thread redraws the grid after
/// every agent event. The event stream ends once every runner has dropped
/// its sender.
fn watch(
    maze: &Maze,
    starts: &[Point],
    config: &SessionConfig,
) -> Result<Vec<AgentOutcome>, Box<dyn Error>> {
    let mut term = TermRenderer::stdout();
    term.init()?;
    let (tx, rx) = mpsc::channel();

    let (solved, drawn) = std::thread::scope(|s| {
        let worker = s.spawn(move || solve(maze, starts, config, Some(tx)));
        let mut drawn = term.draw(&maze.grid.snapshot());
        for _event in rx.iter() {
            if drawn.is_ok() {
                drawn = term.draw(&maze.grid.snapshot());
            }
        }
        (worker.join(), drawn)
    });
    term.close();

    drawn?;
    let outcomes = solved.map_err(|_| "solver thread panicked")??;
    Ok(outcomes)
}
