use std::path::PathBuf;

use visitwall_shared::error::VisitWallError;
use visitwall_vcard::error::VcardError;

/// Failure exporting a single profile file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Profile(#[from] VisitWallError),

    #[error(transparent)]
    Vcard(#[from] VcardError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
