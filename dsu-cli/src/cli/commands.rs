//! Command implementations and argument parsing for the dsu CLI.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dsu_core::{DisjointSet, DsuBuilder, DsuError, Variant};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::script::{Operation, ScriptError, ScriptLine, parse_script};

/// Universe size of the built-in walkthrough.
pub const DEMO_ELEMENTS: usize = 5;

/// Script replayed by the `demo` command.
pub const DEMO_SCRIPT: &str = "\
# stage 1: two pairs
union 0 1
union 2 3
connected 0 1
connected 0 2
# stage 2: bridge the pairs
union 1 2
connected 0 3
connected 4 0
connected 4 3
";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "dsu", about = "Drive the disjoint-set union variants.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Replay the built-in five-element walkthrough.
    Demo(DemoCommand),
    /// Replay an operation script against a fresh universe.
    Run(RunCommand),
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Algorithm to drive.
    #[arg(long, value_enum, default_value_t = VariantArg::ByRank)]
    pub variant: VariantArg,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a script with one `union A B`, `find A` or `connected A B` per line.
    pub path: PathBuf,

    /// Number of elements in the universe; ids must be below this.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub elements: usize,

    /// Algorithm to drive.
    #[arg(long, value_enum, default_value_t = VariantArg::ByRank)]
    pub variant: VariantArg,
}

/// Command-line spelling of [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// No compression, no balancing.
    Naive,
    /// Path compression only.
    PathCompression,
    /// Union by size with path compression.
    BySize,
    /// Union by rank with path compression.
    ByRank,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Naive => Self::Naive,
            VariantArg::PathCompression => Self::PathCompression,
            VariantArg::BySize => Self::BySize,
            VariantArg::ByRank => Self::ByRank,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the script failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The script could not be parsed.
    #[error(transparent)]
    Script(#[from] ScriptError),
    /// The disjoint set rejected an operation.
    #[error("line {line}: {source}")]
    Operation {
        /// 1-based script line of the rejected operation.
        line: usize,
        /// Error reported by the core library.
        #[source]
        source: DsuError,
    },
}

impl CliError {
    /// The core error behind this failure, when there is one.
    #[must_use]
    pub const fn core(&self) -> Option<&DsuError> {
        match self {
            Self::Operation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of a single query line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// `find` answered with the root of the element's set.
    Find {
        /// Queried element.
        element: usize,
        /// Root of its set.
        root: usize,
    },
    /// `connected` answered whether both elements share a set.
    Connected {
        /// Left element.
        left: usize,
        /// Right element.
        right: usize,
        /// Whether they share a set.
        connected: bool,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Algorithm that executed the script.
    pub variant: Variant,
    /// Number of elements in the universe.
    pub elements: usize,
    /// Answers to query lines, in script order.
    pub outcomes: Vec<QueryOutcome>,
    /// Number of disjoint sets after the last operation.
    pub set_count: usize,
    /// Final partition, each set sorted ascending.
    pub components: Vec<Vec<usize>>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or executing the script fails.
///
/// # Examples
/// ```
/// # use dsu_cli::cli::{Cli, Command, DemoCommand, VariantArg, run_cli};
/// let cli = Cli {
///     command: Command::Demo(DemoCommand {
///         variant: VariantArg::BySize,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.set_count, 2);
/// assert_eq!(summary.components, vec![vec![0, 1, 2, 3], vec![4]]);
/// # Ok::<(), dsu_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Demo(demo) => {
            span.record("command", field::display("demo"));
            run_demo(&demo)
        }
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(&run)
        }
    }
}

pub(super) fn run_demo(command: &DemoCommand) -> Result<ExecutionSummary, CliError> {
    let script = parse_script(DEMO_SCRIPT)?;
    execute(command.variant.into(), DEMO_ELEMENTS, &script)
}

pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let source = read_script(&command.path)?;
    let script = parse_script(&source)?;
    execute(command.variant.into(), command.elements, &script)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(script),
    fields(variant = %variant, operations = script.len()),
)]
pub(super) fn execute(
    variant: Variant,
    elements: usize,
    script: &[ScriptLine],
) -> Result<ExecutionSummary, CliError> {
    let mut set = DsuBuilder::new()
        .with_len(elements)
        .with_variant(variant)
        .build();
    let mut outcomes = Vec::new();

    for &ScriptLine { line, operation } in script {
        let rejected = |source| CliError::Operation { line, source };
        match operation {
            Operation::Union(left, right) => set.union(left, right).map_err(rejected)?,
            Operation::Find(element) => {
                let root = set.find(element).map_err(rejected)?;
                outcomes.push(QueryOutcome::Find { element, root });
            }
            Operation::Connected(left, right) => {
                let connected = set.connected(left, right).map_err(rejected)?;
                outcomes.push(QueryOutcome::Connected {
                    left,
                    right,
                    connected,
                });
            }
        }
    }

    let summary = ExecutionSummary {
        variant,
        elements,
        outcomes,
        set_count: set.set_count(),
        components: set.components(),
    };
    info!(
        variant = %summary.variant,
        sets = summary.set_count,
        queries = summary.outcomes.len(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.read_script", err, fields(path = field::Empty))]
pub(super) fn read_script(path: &Path) -> Result<String, CliError> {
    Span::current().record("path", field::display(path.display()));
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut source = String::new();
    BufReader::new(File::open(path).map_err(io_error)?)
        .read_to_string(&mut source)
        .map_err(io_error)?;
    Ok(source)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dsu_cli::cli::{ExecutionSummary, QueryOutcome, render_summary};
/// # use dsu_core::Variant;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     variant: Variant::Naive,
///     elements: 2,
///     outcomes: vec![QueryOutcome::Find { element: 0, root: 1 }],
///     set_count: 1,
///     components: vec![vec![0, 1]],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "variant: naive\nelements: 2\nfind(0) = 1\nsets: 1\n{0, 1}\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "variant: {}", summary.variant)?;
    writeln!(writer, "elements: {}", summary.elements)?;
    for outcome in &summary.outcomes {
        match outcome {
            QueryOutcome::Find { element, root } => writeln!(writer, "find({element}) = {root}")?,
            QueryOutcome::Connected {
                left,
                right,
                connected,
            } => writeln!(writer, "connected({left}, {right}) = {connected}")?,
        }
    }
    writeln!(writer, "sets: {}", summary.set_count)?;
    for component in &summary.components {
        let members: Vec<String> = component.iter().map(ToString::to_string).collect();
        writeln!(writer, "{{{}}}", members.join(", "))?;
    }
    Ok(())
}
