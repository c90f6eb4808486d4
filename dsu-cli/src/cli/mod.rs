//! Command-line interface for driving the disjoint-set variants.
//!
//! `demo` replays the built-in five-element walkthrough; `run` replays an
//! operation script from disk against a universe of `--elements` ids.

mod commands;
mod script;

pub use commands::{
    Cli, CliError, Command, DEMO_ELEMENTS, DEMO_SCRIPT, DemoCommand, ExecutionSummary,
    QueryOutcome, RunCommand, VariantArg, render_summary, run_cli,
};
pub use script::{Operation, ScriptError, ScriptLine, parse_script};

#[cfg(test)]
mod test_helpers;
