use std::io;

use thiserror::Error;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The highest table is below 2 or above `MAX_HIGHEST_TABLE`.
    #[error(
        "highest table must be between 2 and {max}, got {highest_table}",
        max = crate::data::MAX_HIGHEST_TABLE
    )]
    InvalidBound { highest_table: u32 },

    /// An answer was submitted while no question was pending.
    #[error("no question is awaiting an answer")]
    NoActiveQuestion,

    /// A session needs at least one question.
    #[error("question amount must be at least 1")]
    InvalidQuestionCount,

    /// Difficulty name not recognised.
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to serialize the question bank.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
