/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while reading or interpreting a monster record.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The record's challenge rating has no row in the XP table.
    #[error("unknown challenge rating: \"{0}\"")]
    UnknownChallengeRating(String),

    /// The record JSON did not match the expected shape.
    #[error("invalid monster record: {0}")]
    Json(#[from] serde_json::Error),
}
