use thiserror::Error;

/// Failures of the extraction pass.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("boundary marker not found: no h1 with id \"{marker}\"")]
    BoundaryNotFound { marker: String },
}
