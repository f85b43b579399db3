use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use gridwalk::{maze, Coord, Direction, GridLike, Increment, JaggedGrid, ParseConfig, Pattern};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Walk jagged grids of integers along step patterns.
#[derive(Parser, Debug)]
#[command(name = "gridwalk", version)]
struct Cli {
    /// Grid file, one row per line. A blank line is an empty row.
    file: PathBuf,

    /// Cell separator; any whitespace when omitted.
    #[arg(long)]
    separator: Option<char>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every value in row-major order.
    All {
        /// Prefix each value with its coordinate.
        #[arg(long)]
        locations: bool,
    },
    /// Walk from a start coordinate until the pattern leaves the grid.
    Walk {
        /// Start coordinate as `x,y`.
        #[arg(long, allow_hyphen_values = true)]
        start: Coord,
        #[command(flatten)]
        step: StepArgs,
        /// Prefix each value with its coordinate.
        #[arg(long)]
        locations: bool,
        /// Stop after this many values.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one walk per cell, seeded in row-major order.
    Runs {
        #[command(flatten)]
        step: StepArgs,
    },
    /// Check that every passage in a maze of N=1, E=2, S=4, W=8 bitmasks is two-sided.
    CheckMaze,
    /// Print the number of cells.
    Size,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct StepArgs {
    /// A unit direction such as `north`, `se` or `south-west`.
    #[arg(long)]
    direction: Option<Direction>,

    /// An arbitrary increment as `dx,dy`.
    #[arg(long, allow_hyphen_values = true)]
    step: Option<Increment>,
}

impl StepArgs {
    fn pattern(&self) -> Result<Box<dyn Pattern>> {
        match (self.direction, self.step) {
            (Some(direction), None) => Ok(Box::new(direction)),
            (None, Some(increment)) => Ok(Box::new(increment)),
            _ => bail!("Expected exactly one of --direction or --step"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let input = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let stdout = io::stdout();
    run(&cli, &input, &mut stdout.lock())
}

fn run(cli: &Cli, input: &str, out: &mut impl Write) -> Result<()> {
    let config = ParseConfig::new(cli.separator, ParseConfig::default().comment);

    match &cli.command {
        Command::All { locations } => {
            let grid = parse_grid(input, &config)?;
            for cell in grid.locatable_iter() {
                write_cell(out, *locations, cell.location, cell.value)?;
            }
        }
        Command::Walk {
            start,
            step,
            locations,
            limit,
        } => {
            let grid = parse_grid(input, &config)?;
            let pattern = step.pattern()?;
            let walk = grid.locatable_walk(*start, &*pattern);
            for cell in walk.take(limit.unwrap_or(usize::MAX)) {
                write_cell(out, *locations, cell.location, cell.value)?;
            }
        }
        Command::Runs { step } => {
            let grid = parse_grid(input, &config)?;
            let pattern = step.pattern()?;
            for run in grid.runs(&*pattern) {
                let values: Vec<String> = run.map(i64::to_string).collect();
                writeln!(out, "{}", values.join(" "))?;
            }
        }
        Command::CheckMaze => check_maze(input, &config, out)?,
        Command::Size => writeln!(out, "{}", parse_grid(input, &config)?.len())?,
    }
    Ok(())
}

fn parse_grid(input: &str, config: &ParseConfig) -> Result<JaggedGrid<i64>> {
    JaggedGrid::parse_with_config(input, config).context("Failed to parse grid")
}

fn check_maze(input: &str, config: &ParseConfig, out: &mut impl Write) -> Result<()> {
    let grid: JaggedGrid<u8> =
        JaggedGrid::parse_with_config(input, config).context("Failed to parse maze")?;
    let found = maze::inconsistencies(&grid);
    for inconsistency in &found {
        let neighbour = inconsistency
            .found
            .map_or_else(|| "nothing".to_string(), |value| value.to_string());
        writeln!(
            out,
            "{} opens {} onto {}",
            inconsistency.position, inconsistency.looking, neighbour
        )?;
    }
    if !found.is_empty() {
        bail!("Maze has {} one-sided passages", found.len());
    }
    writeln!(out, "Maze is consistent")?;
    Ok(())
}

fn write_cell(out: &mut impl Write, locations: bool, location: Coord, value: &i64) -> Result<()> {
    if locations {
        writeln!(out, "{location} {value}")?;
    } else {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Unit tests for the command line front end.
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const THREE_BY_THREE: &str = "10 20 30\n40 50 60\n70 80 90\n";

    fn output(args: &[&str], input: &str) -> Result<String> {
        let cli = Cli::try_parse_from(
            std::iter::once("gridwalk")
                .chain(std::iter::once("grid.txt"))
                .chain(args.iter().copied()),
        )?;
        let mut out = Vec::new();
        run(&cli, input, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn all_prints_row_major() {
        assert_eq!(
            output(&["all"], "1 2\n\n3").unwrap(),
            "1\n2\n3\n"
        );
    }

    #[test]
    fn all_with_locations() {
        assert_eq!(
            output(&["all", "--locations"], "1 2\n\n3").unwrap(),
            "(0, 0) 1\n(1, 0) 2\n(0, 2) 3\n"
        );
    }

    #[test_case(&["walk", "--start", "1,1", "--direction", "north"], "50\n20\n"; "north from the middle")]
    #[test_case(&["walk", "--start", "0,0", "--step", "1,1"], "10\n50\n90\n"; "diagonal increment")]
    #[test_case(&["walk", "--start", "2,2", "--step", "-1,-1", "--limit", "2"], "90\n50\n"; "limited")]
    #[test_case(&["walk", "--start", "-1,0", "--direction", "east"], ""; "start off the grid")]
    fn walk(args: &[&str], expected: &str) {
        assert_eq!(output(args, THREE_BY_THREE).unwrap(), expected);
    }

    #[test]
    fn walk_requires_a_pattern() {
        assert!(output(&["walk", "--start", "0,0"], THREE_BY_THREE).is_err());
        assert!(output(
            &["walk", "--start", "0,0", "--direction", "n", "--step", "0,1"],
            THREE_BY_THREE
        )
        .is_err());
    }

    #[test]
    fn runs_print_one_line_per_cell() {
        assert_eq!(
            output(&["runs", "--direction", "east"], "1 2\n3 4").unwrap(),
            "1 2\n2\n3 4\n4\n"
        );
    }

    #[test]
    fn size_counts_cells() {
        assert_eq!(output(&["size"], "1 2 3\n\n4").unwrap(), "4\n");
    }

    #[test]
    fn separator_is_configurable() {
        assert_eq!(
            output(&["--separator", ",", "size"], "1,2,3\n4").unwrap(),
            "4\n"
        );
    }

    #[test]
    fn check_maze_accepts_a_consistent_maze() {
        assert_eq!(
            output(&["check-maze"], "2 8\n").unwrap(),
            "Maze is consistent\n"
        );
    }

    #[test]
    fn check_maze_rejects_one_sided_passages() {
        let err = output(&["check-maze"], "2 0\n").unwrap_err();
        assert_eq!(err.to_string(), "Maze has 1 one-sided passages");
    }

    #[test]
    fn parse_errors_carry_context() {
        let err = output(&["size"], "1 x").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse grid");
        assert!(err.root_cause().to_string().contains("line 1, column 2"));
    }
}
