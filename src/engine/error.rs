use thiserror::Error;

/// Errors surfaced by engine operations.
///
/// Bad ids and impossible scores are typed errors rather than silent
/// no-ops, so callers can tell an idempotent no-op from a data bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown lesson id: {0}")]
    UnknownLesson(String),

    #[error("unknown game id: {0}")]
    UnknownGame(String),

    #[error("score {score} exceeds total possible {total}")]
    InvalidScore { score: u64, total: u64 },

    #[error("lesson id already exists: {0}")]
    DuplicateLesson(String),

    #[error("expected {expected} quiz answers, got {given}")]
    AnswerMismatch { given: usize, expected: usize },
}
