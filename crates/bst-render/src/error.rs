//! Error types for rendering.

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that stop a statblock from being rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The record's challenge rating has no row in the XP table.
    #[error("cannot render \"{name}\": unknown challenge rating \"{rating}\"")]
    UnknownChallengeRating {
        /// Name of the record that failed.
        name: String,
        /// The rating that was not found.
        rating: String,
    },
}
