//! JSON request and response bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use stepsort_core::Error;
use stepsort_sorters::{Algorithm, Solution};

/// Body of a sort or compare request.
///
/// Both fields are optional at the JSON level so a missing array can be
/// reported as invalid input rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub(crate) struct SortRequest {
    array: Option<Vec<Number>>,
    algorithm: Option<String>,
}

/// A request array, kept as integers when every element is one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Numbers {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
}

impl Numbers {
    fn from_json(array: Vec<Number>) -> Result<Self, Error> {
        if let Some(integers) = array.iter().map(Number::as_i64).collect::<Option<Vec<_>>>() {
            return Ok(Self::Integers(integers));
        }

        array
            .iter()
            .map(Number::as_f64)
            .collect::<Option<Vec<_>>>()
            .map(Self::Floats)
            .ok_or_else(|| Error::InvalidInput("array holds a number outside f64 range".into()))
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Integers(values) => values.len(),
            Self::Floats(values) => values.len(),
        }
    }
}

impl SortRequest {
    /// Parses a request body.
    pub(crate) fn from_json(body: Value) -> Result<Self, Error> {
        serde_json::from_value(body).map_err(|err| {
            Error::InvalidInput(format!("expected {{\"array\": [number, ...]}}: {err}"))
        })
    }

    /// Returns the selected algorithm, defaulting to bubble sort.
    pub(crate) fn algorithm(&self) -> Result<Algorithm, Error> {
        match &self.algorithm {
            Some(name) => name.parse(),
            None => Ok(Algorithm::Bubble),
        }
    }

    /// Takes the array, enforcing the length limit.
    pub(crate) fn into_array(self, max_len: usize) -> Result<Numbers, Error> {
        let array = self
            .array
            .ok_or_else(|| Error::InvalidInput("no array provided".into()))?;

        if array.len() > max_len {
            return Err(Error::InvalidInput(format!(
                "array has {} elements, the limit is {max_len}",
                array.len()
            )));
        }

        Numbers::from_json(array)
    }
}

/// Body of a stress-test request.
#[derive(Debug, Deserialize)]
pub(crate) struct StressTestRequest {
    size: Option<usize>,
}

impl StressTestRequest {
    /// Parses a request body.
    pub(crate) fn from_json(body: Value) -> Result<Self, Error> {
        serde_json::from_value(body).map_err(|err| {
            Error::InvalidInput(format!("expected {{\"size\": non-negative integer}}: {err}"))
        })
    }

    /// Takes the requested size, enforcing the limit.
    pub(crate) fn into_size(self, max_size: usize) -> Result<usize, Error> {
        let size = self
            .size
            .ok_or_else(|| Error::InvalidInput("no size provided".into()))?;

        if size > max_size {
            return Err(Error::InvalidInput(format!(
                "size {size} is above the limit of {max_size}"
            )));
        }

        Ok(size)
    }
}

/// Successful sort reply.
#[derive(Debug, Serialize)]
pub(crate) struct SortResponse<T> {
    pub(crate) steps: Vec<Vec<T>>,
    pub(crate) highlights: Vec<Vec<usize>>,
    pub(crate) comparisons: u64,
    pub(crate) swaps: u64,
}

impl<T> From<Solution<T>> for SortResponse<T> {
    fn from(solution: Solution<T>) -> Self {
        let highlights = solution
            .steps
            .iter()
            .map(|snapshot| snapshot.focus().to_vec())
            .collect();
        let steps = solution
            .steps
            .into_iter()
            .map(|snapshot| snapshot.into_items())
            .collect();

        Self {
            steps,
            highlights,
            comparisons: solution.comparisons,
            swaps: solution.swaps,
        }
    }
}

/// A sort reply in the numeric type the request used.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum SortReply {
    Integers(SortResponse<i64>),
    Floats(SortResponse<f64>),
}

/// Per-algorithm figures in a compare or stress-test reply.
#[derive(Debug, Serialize)]
pub(crate) struct Metrics {
    pub(crate) comparisons: u64,
    pub(crate) swaps: u64,
    pub(crate) steps: usize,
    pub(crate) duration_ms: f64,
}

/// Successful compare reply, keyed by algorithm name.
#[derive(Debug, Serialize)]
pub(crate) struct CompareResponse {
    pub(crate) results: BTreeMap<&'static str, Metrics>,
}

/// Successful stress-test reply.
#[derive(Debug, Serialize)]
pub(crate) struct StressTestResponse {
    pub(crate) size: usize,
    pub(crate) results: BTreeMap<&'static str, Metrics>,
    pub(crate) skipped: Vec<&'static str>,
}

/// Reply listing the accepted algorithm names.
#[derive(Debug, Serialize)]
pub(crate) struct AlgorithmList {
    pub(crate) algorithms: Vec<&'static str>,
}

impl AlgorithmList {
    pub(crate) fn all() -> Self {
        Self {
            algorithms: Algorithm::ALL.iter().map(|a| a.as_str()).collect(),
        }
    }
}

/// Error reply.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}
