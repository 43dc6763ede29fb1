//! Error types for the visitwall-vcard crate.

use thiserror::Error;

/// Errors raised around the generator: avatar rendering and file delivery.
/// Generation itself never fails.
#[derive(Debug, Error)]
pub enum VcardError {
    /// The avatar collaborator could not produce an image.
    #[error("avatar render failed: {0}")]
    AvatarRender(String),

    /// The contact file name cannot be used as a download name.
    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    /// Filesystem failure while staging or publishing the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
