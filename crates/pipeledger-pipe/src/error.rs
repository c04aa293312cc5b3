/// Errors that can occur on pipe channels.
#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    /// Failed to create an anonymous pipe.
    #[error("failed to create pipe: {0}")]
    Create(std::io::Error),

    /// An I/O error occurred on a pipe endpoint.
    #[error("pipe I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed its end before the requested byte count arrived.
    #[error("short read: peer closed after {got} of {wanted} bytes")]
    ShortRead { wanted: usize, got: usize },

    /// The write end reported zero progress, meaning the channel is gone.
    #[error("pipe closed (write made no progress)")]
    Closed,
}

pub type Result<T> = std::result::Result<T, PipeError>;
