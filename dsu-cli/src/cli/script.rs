//! Parser for operation scripts.
//!
//! A script holds one operation per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! union 0 1
//! find 1
//! connected 0 1
//! ```
//!
//! Keywords are case-insensitive and ids are separated by whitespace.

use thiserror::Error;

/// A single operation against a disjoint set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Merge the sets of both elements.
    Union(usize, usize),
    /// Report the root of the element's set.
    Find(usize),
    /// Report whether both elements share a set.
    Connected(usize, usize),
}

/// An operation tagged with the 1-based line it came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptLine {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Parsed operation.
    pub operation: Operation,
}

/// Errors raised while parsing a script.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ScriptError {
    /// The first word of a line named no known operation.
    #[error("line {line}: unknown operation `{keyword}`; expected union, find or connected")]
    UnknownOperation {
        /// 1-based line number.
        line: usize,
        /// The unrecognised keyword.
        keyword: String,
    },
    /// The operation received the wrong number of element ids.
    #[error("line {line}: `{keyword}` takes {expected} element ids but {got} were given")]
    Arity {
        /// 1-based line number.
        line: usize,
        /// The operation keyword.
        keyword: &'static str,
        /// Number of ids the operation takes.
        expected: usize,
        /// Number of ids present on the line.
        got: usize,
    },
    /// An argument was not a non-negative integer.
    #[error("line {line}: `{raw}` is not an element id")]
    InvalidElement {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        raw: String,
    },
}

/// Parses `source` into operations, skipping blank lines and `#` comments.
///
/// # Errors
/// Returns the first [`ScriptError`] encountered.
///
/// # Examples
/// ```
/// use dsu_cli::cli::{Operation, parse_script};
///
/// let script = parse_script("union 0 1\n# probe\nconnected 1 0\n")?;
/// assert_eq!(script.len(), 2);
/// assert_eq!(script[1].line, 3);
/// assert_eq!(script[1].operation, Operation::Connected(1, 0));
/// # Ok::<(), dsu_cli::cli::ScriptError>(())
/// ```
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            let content = text.split('#').next().unwrap_or_default().trim();
            (!content.is_empty()).then_some((index + 1, content))
        })
        .map(|(line, content)| {
            parse_operation(line, content).map(|operation| ScriptLine { line, operation })
        })
        .collect()
}

fn parse_operation(line: usize, content: &str) -> Result<Operation, ScriptError> {
    let mut words = content.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let ids = words
        .map(|raw| {
            raw.parse::<usize>().map_err(|_| ScriptError::InvalidElement {
                line,
                raw: raw.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match (keyword.as_str(), ids.as_slice()) {
        ("union", &[left, right]) => Ok(Operation::Union(left, right)),
        ("find", &[element]) => Ok(Operation::Find(element)),
        ("connected", &[left, right]) => Ok(Operation::Connected(left, right)),
        ("union", _) => Err(arity(line, "union", 2, ids.len())),
        ("find", _) => Err(arity(line, "find", 1, ids.len())),
        ("connected", _) => Err(arity(line, "connected", 2, ids.len())),
        _ => Err(ScriptError::UnknownOperation { line, keyword }),
    }
}

const fn arity(line: usize, keyword: &'static str, expected: usize, got: usize) -> ScriptError {
    ScriptError::Arity {
        line,
        keyword,
        expected,
        got,
    }
}
