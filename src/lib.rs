pub mod frequency;
pub mod rle;
pub mod zip;

/// Error types for pzip operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PzipError {
    /// Output buffer is too small to hold the result.
    BufferTooSmall,
    /// A worker thread could not be started.
    SpawnFailed,
    /// A worker thread terminated abnormally before producing its result.
    WorkerPanicked,
}

impl std::fmt::Display for PzipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "output buffer too small"),
            Self::SpawnFailed => write!(f, "failed to spawn worker thread"),
            Self::WorkerPanicked => write!(f, "worker thread panicked"),
        }
    }
}

impl std::error::Error for PzipError {}

pub type PzipResult<T> = Result<T, PzipError>;
