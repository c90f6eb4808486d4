//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so one pair of environment variables tunes
//! them all.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const DSU_PBT_CASES_ENV_KEY: &str = "DSU_PBT_CASES";
/// Environment variable toggling proptest process forking.
pub const DSU_PBT_FORK_ENV_KEY: &str = "DSU_PBT_FORK";

/// Reasons an override value is rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ProfileOverrideError {
    /// Case count was not a positive integer.
    #[error("case count `{raw}` is not a positive integer")]
    InvalidCases {
        /// Raw override value.
        raw: String,
    },
    /// Fork flag was not a recognised boolean spelling.
    #[error("fork flag `{raw}` is not one of true/false/1/0/yes/no/on/off")]
    InvalidFork {
        /// Raw override value.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from the process environment with provided defaults.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsu_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Load a profile through an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsu_test_support::ci::property_test_profile::{
    ///     DSU_PBT_CASES_ENV_KEY, ProptestRunProfile,
    /// };
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == DSU_PBT_CASES_ENV_KEY).then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let cases = override_or_default(
            DSU_PBT_CASES_ENV_KEY,
            lookup(DSU_PBT_CASES_ENV_KEY),
            default_cases,
            parse_cases,
        );
        let fork = override_or_default(
            DSU_PBT_FORK_ENV_KEY,
            lookup(DSU_PBT_FORK_ENV_KEY),
            default_fork,
            parse_fork,
        );
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or_default<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, ProfileOverrideError>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => Ok(cases),
        _ => Err(ProfileOverrideError::InvalidCases {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_fork(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::InvalidFork {
            raw: raw.to_owned(),
        }),
    }
}
