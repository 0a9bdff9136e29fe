use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Upper bound on the number of values one trace may hold.
///
/// The worst case is bubble sort, which records `n(n-1)/2` snapshots of `n`
/// values each.
pub const TRACE_VALUE_BUDGET: u64 = 4_000_000;

/// Upper bound on `max_len`: the longest input whose worst-case trace fits
/// in [`TRACE_VALUE_BUDGET`].
pub const MAX_LEN_CEILING: usize = 200;

/// Upper bound on `max_stress_size`.
pub const STRESS_SIZE_CEILING: usize = 1_000_000;

const DEFAULT_MAX_LEN: usize = 100;
const DEFAULT_MAX_STRESS_SIZE: usize = 100_000;

const ADDR_VAR: &str = "STEPSORT_ADDR";
const STATIC_DIR_VAR: &str = "STEPSORT_STATIC_DIR";
const MAX_LEN_VAR: &str = "STEPSORT_MAX_LEN";
const MAX_STRESS_SIZE_VAR: &str = "STEPSORT_MAX_STRESS_SIZE";

const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Number of values in the worst-case trace of an input of length `len`.
#[must_use]
pub const fn worst_case_trace_values(len: usize) -> u64 {
    let n = len as u64;
    n * n * n.saturating_sub(1) / 2
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    addr: SocketAddr,
    static_dir: PathBuf,
    max_len: usize,
    max_stress_size: usize,
}

/// Errors that can occur when building a server config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` is not a valid socket address")]
    Addr(String),

    #[error("max_len must be between 1 and {max}, got {0}", max = MAX_LEN_CEILING)]
    MaxLen(usize),

    #[error("`{0}` is not a valid max_len")]
    MaxLenParse(String),

    #[error("max_stress_size must be between 1 and {max}, got {0}", max = STRESS_SIZE_CEILING)]
    MaxStressSize(usize),

    #[error("`{0}` is not a valid max_stress_size")]
    MaxStressSizeParse(String),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(
            SocketAddr::from(([127, 0, 0, 1], 3030)),
            DEFAULT_STATIC_DIR,
            DEFAULT_MAX_LEN,
            DEFAULT_MAX_STRESS_SIZE,
        )
        .unwrap()
    }
}

impl Config {
    /// Creates a new config with validated size limits.
    ///
    /// `max_len` bounds arrays that are traced (sort and compare), and
    /// `max_stress_size` bounds generated stress-test arrays, which are only
    /// counted.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero or above [`MAX_LEN_CEILING`], or
    /// if `max_stress_size` is zero or above [`STRESS_SIZE_CEILING`].
    pub fn new(
        addr: SocketAddr,
        static_dir: impl Into<PathBuf>,
        max_len: usize,
        max_stress_size: usize,
    ) -> Result<Self, ConfigError> {
        if max_len == 0 || max_len > MAX_LEN_CEILING {
            return Err(ConfigError::MaxLen(max_len));
        }

        if max_stress_size == 0 || max_stress_size > STRESS_SIZE_CEILING {
            return Err(ConfigError::MaxStressSize(max_stress_size));
        }

        Ok(Self {
            addr,
            static_dir: static_dir.into(),
            max_len,
            max_stress_size,
        })
    }

    /// Builds a config from `STEPSORT_*` environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = match lookup(ADDR_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Addr(value))?,
            None => defaults.addr,
        };

        let static_dir = lookup(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from);

        let max_len = match lookup(MAX_LEN_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::MaxLenParse(value))?,
            None => defaults.max_len,
        };

        let max_stress_size = match lookup(MAX_STRESS_SIZE_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::MaxStressSizeParse(value))?,
            None => defaults.max_stress_size,
        };

        Self::new(addr, static_dir, max_len, max_stress_size)
    }

    /// Returns the address the server binds to.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the directory static files are served from.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Returns the maximum accepted input length for traced sorts.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns the maximum array size a stress test may generate.
    #[must_use]
    pub fn max_stress_size(&self) -> usize {
        self.max_stress_size
    }

    /// Returns the request body size limit in bytes, derived from `max_len`.
    #[must_use]
    pub fn body_limit(&self) -> u64 {
        // Room for the envelope plus a generously formatted number per element.
        4 * 1024 + 32 * self.max_len as u64
    }
}
