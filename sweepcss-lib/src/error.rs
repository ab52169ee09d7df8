use std::path::PathBuf;

/// Errors surfaced by the run-level API.
///
/// The text transform itself is infallible; everything here is either
/// file I/O or strict-mode promotion of collected warnings.
#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("file not found -> {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed input:\n{0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
