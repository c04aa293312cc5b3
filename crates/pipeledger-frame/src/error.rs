use pipeledger_pipe::PipeError;

/// Errors that can occur while framing or unframing messages.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The declared element count exceeds the receive-side limit.
    #[error("frame count too large ({count} elements, max {max})")]
    CountTooLarge { count: usize, max: usize },

    /// A scalar frame must declare exactly one element.
    #[error("scalar frame declared {count} elements (expected 1)")]
    ScalarCount { count: usize },

    /// The peer closed the channel before the declared payload arrived.
    #[error("truncated frame: peer closed after {got} of {wanted} bytes")]
    Truncated { wanted: usize, got: usize },

    /// The underlying channel failed.
    #[error(transparent)]
    Pipe(#[from] PipeError),
}

impl FrameError {
    /// Fold pipe-level short reads into [`FrameError::Truncated`] so that
    /// receivers report one condition for an early peer close.
    pub(crate) fn from_read(err: PipeError) -> Self {
        match err {
            PipeError::ShortRead { wanted, got } => FrameError::Truncated { wanted, got },
            other => FrameError::Pipe(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
