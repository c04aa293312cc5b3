use pipeledger_frame::FrameError;
use pipeledger_pipe::PipeError;

/// Errors that can occur while spawning or running worker tasks.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Channel creation failed before any process was spawned.
    #[error(transparent)]
    Pipe(#[from] PipeError),

    /// Framed transfer with the peer failed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// fork(2) failed.
    #[error("failed to fork worker: {0}")]
    Spawn(nix::errno::Errno),

    /// waitpid(2) failed while reaping a worker.
    #[error("failed to reap worker {pid}: {source}")]
    Wait {
        pid: i32,
        source: nix::errno::Errno,
    },

    /// The received input sequence was empty; reductions need at least
    /// one element.
    #[error("worker received an empty input sequence")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, TaskError>;
