//! Command-line wiring shared by the demo binary.
//!
//! Usage: `maze [rows] [cols] [agents] [--plain] [--seed N] [--delay MS]
//! [--backtracker]`

use std::fmt;
use std::time::Duration;

use mazer_agents::{AgentOutcome, SessionConfig};
use mazer_core::Point;
use mazer_gen::Strategy;

pub const ROWS: i32 = 10;
pub const COLS: i32 = 20;
pub const AGENTS: usize = 3;
/// Pause between agent steps in the live view.
pub const STEP_DELAY_MS: u64 = 40;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoArgs {
    pub rows: i32,
    pub cols: i32,
    pub agents: usize,
    /// Skip the live terminal view and print only the final maze.
    pub plain: bool,
    pub seed: Option<u64>,
    pub delay_ms: u64,
    pub backtracker: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            agents: AGENTS,
            plain: false,
            seed: None,
            delay_ms: STEP_DELAY_MS,
            backtracker: false,
        }
    }
}

/// A malformed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// A value that should be a number is not.
    NotANumber { arg: String, value: String },
    /// A flag that needs a value came last.
    MissingValue(String),
    /// More than three positional arguments, or an unknown flag.
    Unexpected(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { arg, value } => write!(f, "{arg}: expected a number, got {value:?}"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::Unexpected(arg) => write!(f, "unexpected argument {arg:?}"),
        }
    }
}

impl std::error::Error for ArgError {}

fn number<T: std::str::FromStr>(arg: &str, value: &str) -> Result<T, ArgError> {
    value.parse().map_err(|_| ArgError::NotANumber {
        arg: arg.to_string(),
        value: value.to_string(),
    })
}

impl DemoArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        let mut positional = 0;
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            let arg = arg.as_ref();
            match arg {
                "--plain" => out.plain = true,
                "--backtracker" => out.backtracker = true,
                "--seed" | "--delay" => {
                    let value = it.next().ok_or_else(|| ArgError::MissingValue(arg.to_string()))?;
                    if arg == "--seed" {
                        out.seed = Some(number(arg, value.as_ref())?);
                    } else {
                        out.delay_ms = number(arg, value.as_ref())?;
                    }
                }
                _ if arg.starts_with("--") => return Err(ArgError::Unexpected(arg.to_string())),
                _ => {
                    match positional {
                        0 => out.rows = number("rows", arg)?,
                        1 => out.cols = number("cols", arg)?,
                        2 => out.agents = number("agents", arg)?,
                        _ => return Err(ArgError::Unexpected(arg.to_string())),
                    }
                    positional += 1;
                }
            }
        }
        Ok(out)
    }

    /// Session configuration for these arguments. The plain view never
    /// sleeps between steps.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            cols: self.cols,
            agents: self.agents,
            strategy: if self.backtracker {
                Strategy::Backtracker
            } else {
                Strategy::default()
            },
            step_delay: if self.plain {
                Duration::ZERO
            } else {
                Duration::from_millis(self.delay_ms)
            },
            seed: self.seed,
        }
    }
}

/// `(row, col)` of a rendered position, the order the printed grid reads.
fn row_col(p: Point) -> String {
    format!("({}, {})", p.y, p.x)
}

/// A header naming the coordinate system, then per agent its start, step
/// count and full path.
pub fn describe_outcomes(outcomes: &[AgentOutcome]) -> String {
    let mut out = String::from("positions are (row, col) on the printed grid\n");
    for o in outcomes {
        let start = row_col(o.start);
        match &o.path {
            Some(path) => {
                let cells: Vec<String> = path.iter().map(|&p| row_col(p)).collect();
                out.push_str(&format!(
                    "{} from {start}: {} steps\n  {}\n",
                    o.agent,
                    path.len() - 1,
                    cells.join(" ")
                ));
            }
            None => out.push_str(&format!("{} from {start}: no path\n", o.agent)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::AgentId;

    #[test]
    fn defaults_without_arguments() {
        let args = DemoArgs::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args, DemoArgs::default());
        let cfg = args.session_config();
        assert_eq!((cfg.rows, cfg.cols, cfg.agents), (ROWS, COLS, AGENTS));
        assert_eq!(cfg.step_delay, Duration::from_millis(STEP_DELAY_MS));
    }

    #[test]
    fn positional_and_flags() {
        let args = DemoArgs::parse(["4", "6", "2", "--plain", "--seed", "9", "--backtracker"]).unwrap();
        assert_eq!((args.rows, args.cols, args.agents), (4, 6, 2));
        assert!(args.plain && args.backtracker);
        assert_eq!(args.seed, Some(9));
        let cfg = args.session_config();
        assert_eq!(cfg.strategy, Strategy::Backtracker);
        assert_eq!(cfg.step_delay, Duration::ZERO);
    }

    #[test]
    fn bad_arguments() {
        assert_eq!(
            DemoArgs::parse(["x"]),
            Err(ArgError::NotANumber {
                arg: "rows".into(),
                value: "x".into()
            })
        );
        assert_eq!(
            DemoArgs::parse(["--seed"]),
            Err(ArgError::MissingValue("--seed".into()))
        );
        assert_eq!(
            DemoArgs::parse(["1", "2", "3", "4"]),
            Err(ArgError::Unexpected("4".into()))
        );
        assert!(DemoArgs::parse(["--fast"]).is_err());
    }

    #[test]
    fn outcome_text() {
        let outcomes = vec![
            AgentOutcome {
                agent: AgentId(0),
                start: Point::new(3, 1),
                path: Some(vec![Point::new(3, 1), Point::new(2, 1), Point::new(1, 1)]),
            },
            AgentOutcome {
                agent: AgentId(1),
                start: Point::new(5, 5),
                path: None,
            },
        ];
        let text = describe_outcomes(&outcomes);
        assert!(text.starts_with("positions are (row, col)"));
        assert!(text.contains("agent 0 from (1, 3): 2 steps"));
        assert!(text.contains("  (1, 3) (1, 2) (1, 1)\n"));
        assert!(text.contains("agent 1 from (5, 5): no path"));
    }
}
