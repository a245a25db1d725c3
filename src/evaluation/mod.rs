//! Offline evaluation of the ranking engine against labelled queries.
//!
//! - [`metrics`] holds the pure Recall@k / AP@k functions.
//! - [`Evaluator`] runs queries through [`RankingEngine`](crate::ranking::RankingEngine)
//!   and aggregates the scores.
//! - [`benchmark`] ships a small labelled query set.

pub mod benchmark;
mod error;
mod harness;
pub mod metrics;


pub use benchmark::{Benchmark, default_benchmark};
pub use error::{EvaluationError, EvaluationResult};
pub use harness::{EvaluationReport, Evaluator, QueryEvaluation};
