//! Similarity ranking over a catalog snapshot with hard filters.

mod engine;
mod error;
pub mod similarity;

#[cfg(test)]
mod tests;

pub use engine::{RankingEngine, Recommendation};
pub use error::{RankingError, RankingResult};
pub use similarity::cosine_similarity;
