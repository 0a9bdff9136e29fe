use std::{collections::BTreeMap, time::Instant};

use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use stepsort_core::{Error, ErrorKind};
use stepsort_sorters::Algorithm;
use warp::{
    Rejection,
    http::StatusCode,
    reply::{self, Json, WithStatus},
};

use crate::dto::{
    AlgorithmList, CompareResponse, ErrorBody, Metrics, Numbers, SortReply, SortRequest,
    SortResponse, StressTestRequest, StressTestResponse,
};

/// Stress tests above this size skip the quadratic algorithms.
pub const QUADRATIC_SIZE_LIMIT: usize = 50_000;

/// Stress-test arrays hold values in `0..STRESS_VALUE_RANGE`.
const STRESS_VALUE_RANGE: i64 = 1_000_000;

/// Runs one instrumented sort.
pub(crate) fn sort(body: Value, max_len: usize) -> WithStatus<Json> {
    respond(run_sort(body, max_len))
}

/// Runs every algorithm on the same array and reports their figures.
pub(crate) fn compare(body: Value, max_len: usize) -> WithStatus<Json> {
    respond(run_compare(body, max_len))
}

/// Times every algorithm on a generated array, off the async runtime.
pub(crate) async fn stress_test(
    body: Value,
    max_size: usize,
) -> Result<WithStatus<Json>, Rejection> {
    let outcome = tokio::task::spawn_blocking(move || run_stress_test(body, max_size)).await;
    let reply = match outcome {
        Ok(result) => respond(result),
        Err(err) => error_reply(&Error::Internal(format!("stress test did not finish: {err}"))),
    };
    Ok(reply)
}

/// Lists the accepted algorithm names.
pub(crate) fn algorithms() -> Json {
    reply::json(&AlgorithmList::all())
}

fn run_sort(body: Value, max_len: usize) -> Result<SortReply, Error> {
    let request = SortRequest::from_json(body)?;
    let algorithm = request.algorithm()?;

    match request.into_array(max_len)? {
        Numbers::Integers(array) => sort_array(&array, algorithm).map(SortReply::Integers),
        Numbers::Floats(array) => sort_array(&array, algorithm).map(SortReply::Floats),
    }
}

fn sort_array<T>(array: &[T], algorithm: Algorithm) -> Result<SortResponse<T>, Error>
where
    T: PartialOrd + Clone,
{
    let solution = stepsort_sorters::sort(array, algorithm)?;

    tracing::info!(
        %algorithm,
        len = array.len(),
        steps = solution.steps.len(),
        comparisons = solution.comparisons,
        swaps = solution.swaps,
        "sorted"
    );

    Ok(SortResponse::from(solution))
}

fn run_compare(body: Value, max_len: usize) -> Result<CompareResponse, Error> {
    let array = SortRequest::from_json(body)?.into_array(max_len)?;
    let len = array.len();

    let results = match array {
        Numbers::Integers(array) => measure_all(&array, Algorithm::ALL)?,
        Numbers::Floats(array) => measure_all(&array, Algorithm::ALL)?,
    };

    tracing::info!(len, "compared all algorithms");

    Ok(CompareResponse { results })
}

fn run_stress_test(body: Value, max_size: usize) -> Result<StressTestResponse, Error> {
    let size = StressTestRequest::from_json(body)?.into_size(max_size)?;

    let mut rng = rand::thread_rng();
    let array: Vec<i64> = (0..size)
        .map(|_| rng.gen_range(0..STRESS_VALUE_RANGE))
        .collect();

    let (selected, skipped): (Vec<_>, Vec<_>) = Algorithm::ALL
        .into_iter()
        .partition(|algorithm| size <= QUADRATIC_SIZE_LIMIT || !algorithm.is_quadratic());

    let results = measure_all(&array, selected)?;

    tracing::info!(size, skipped = skipped.len(), "stress test finished");

    Ok(StressTestResponse {
        size,
        results,
        skipped: skipped.into_iter().map(Algorithm::as_str).collect(),
    })
}

/// Counts and times each algorithm without keeping any trace.
fn measure_all<T>(
    array: &[T],
    algorithms: impl IntoIterator<Item = Algorithm>,
) -> Result<BTreeMap<&'static str, Metrics>, Error>
where
    T: PartialOrd + Clone,
{
    let mut results = BTreeMap::new();
    for algorithm in algorithms {
        let start = Instant::now();
        let tally = stepsort_sorters::tally(array, algorithm)?;
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(%algorithm, len = array.len(), duration_ms, "measured");

        results.insert(
            algorithm.as_str(),
            Metrics {
                comparisons: tally.comparisons,
                swaps: tally.swaps,
                steps: tally.steps,
                duration_ms,
            },
        );
    }
    Ok(results)
}

fn respond<T: Serialize>(result: Result<T, Error>) -> WithStatus<Json> {
    match result {
        Ok(body) => reply::with_status(reply::json(&body), StatusCode::OK),
        Err(err) => error_reply(&err),
    }
}

/// Maps a sort error to a JSON error reply.
pub(crate) fn error_reply(err: &Error) -> WithStatus<Json> {
    let status = match err.kind() {
        ErrorKind::Client => {
            tracing::warn!(%err, "rejected request");
            StatusCode::BAD_REQUEST
        }
        ErrorKind::Internal => {
            tracing::error!(%err, "sort failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = ErrorBody {
        error: err.to_string(),
    };
    reply::with_status(reply::json(&body), status)
}
