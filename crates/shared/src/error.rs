/// Shared error type used across the VisitWall crates.
#[derive(Debug, thiserror::Error)]
pub enum VisitWallError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("remote error: {0}")]
    Remote(String),
}
