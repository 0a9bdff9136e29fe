//! HTTP boundary for step-by-step sorting traces.
//!
//! The server provides:
//! - `POST /sort` and `POST /api/sort`: run one algorithm, reply with its trace
//! - `POST /api/compare`: run every algorithm on the same array
//! - `POST /api/stress-test`: count and time every algorithm on a generated array
//! - `GET /api/algorithms`: list accepted algorithm names
//! - Static file serving from the configured directory
//!
//! Errors are always replied as `{"error": "..."}`: 400 for bad requests and
//! 500 when a sort fails.
//!
//! # Example
//! ```no_run
//! use stepsort_server::{Config, run};
//!
//! #[tokio::main]
//! async fn main() {
//!     run(Config::default()).await;
//! }
//! ```

mod config;
mod dto;
mod handlers;
mod rejection;

pub use config::{
    Config, ConfigError, MAX_LEN_CEILING, STRESS_SIZE_CEILING, TRACE_VALUE_BUDGET,
    worst_case_trace_values,
};
pub use handlers::QUADRATIC_SIZE_LIMIT;

use std::convert::Infallible;

use serde_json::Value;
use warp::{Filter, Reply};

/// Builds every route, with rejections recovered into JSON error replies.
pub fn routes(config: Config) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let max_len = config.max_len();
    let max_stress_size = config.max_stress_size();
    let json_body = warp::body::content_length_limit(config.body_limit())
        .and(warp::body::json::<Value>());

    let sort = warp::path!("sort")
        .or(warp::path!("api" / "sort"))
        .unify()
        .and(warp::post())
        .and(json_body.clone())
        .map(move |body: Value| handlers::sort(body, max_len));

    let compare = warp::path!("api" / "compare")
        .and(warp::post())
        .and(json_body.clone())
        .map(move |body: Value| handlers::compare(body, max_len));

    let stress_test = warp::path!("api" / "stress-test")
        .and(warp::post())
        .and(json_body)
        .and_then(move |body: Value| handlers::stress_test(body, max_stress_size));

    let algorithms = warp::path!("api" / "algorithms")
        .and(warp::get())
        .map(handlers::algorithms);

    let static_files = warp::fs::dir(config.static_dir().to_path_buf());

    sort.or(compare)
        .or(stress_test)
        .or(algorithms)
        .or(static_files)
        .recover(rejection::recover)
        .with(warp::trace::request())
}

/// Serves [`routes`] on the configured address until the process exits.
pub async fn run(config: Config) {
    let routes = routes(config.clone());

    tracing::info!(
        addr = %config.addr(),
        static_dir = %config.static_dir().display(),
        max_len = config.max_len(),
        max_stress_size = config.max_stress_size(),
        "server running"
    );
    warp::serve(routes).run(config.addr()).await;
}
