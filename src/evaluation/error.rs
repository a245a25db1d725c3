use thiserror::Error;

use crate::ranking::RankingError;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("{queries} queries but {ground_truth} ground-truth sets")]
    LengthMismatch { queries: usize, ground_truth: usize },

    #[error("ranking failed: {0}")]
    Ranking(#[from] RankingError),
}

pub type EvaluationResult<T> = Result<T, EvaluationError>;
