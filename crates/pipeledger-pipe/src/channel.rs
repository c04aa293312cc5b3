use crate::endpoint::{pipe, PipeReader, PipeWriter};
use crate::error::Result;

/// The two unidirectional pipes connecting the orchestrator to one worker.
///
/// Each pipe has exactly one writer and one reader. End-of-stream is only
/// observable if every copy of the write end outside the writing process
/// is closed, so a pair must be split into its per-role halves before use:
/// [`into_parent`](Self::into_parent) and [`into_worker`](Self::into_worker)
/// keep the ends the role owns and drop (close) the other two.
#[derive(Debug)]
pub struct ChannelPair {
    request: (PipeReader, PipeWriter),
    response: (PipeReader, PipeWriter),
}

/// The orchestrator's half: writes requests, reads responses.
#[derive(Debug)]
pub struct ParentEndpoints {
    pub request: PipeWriter,
    pub response: PipeReader,
}

/// The worker's half: reads requests, writes responses.
#[derive(Debug)]
pub struct WorkerEndpoints {
    pub request: PipeReader,
    pub response: PipeWriter,
}

impl ChannelPair {
    /// Create the request and response pipes for one worker.
    pub fn new() -> Result<Self> {
        Ok(Self {
            request: pipe()?,
            response: pipe()?,
        })
    }

    /// Keep the orchestrator-owned ends, closing the worker-owned ones.
    pub fn into_parent(self) -> ParentEndpoints {
        ParentEndpoints {
            request: self.request.1,
            response: self.response.0,
        }
    }

    /// Keep the worker-owned ends, closing the orchestrator-owned ones.
    pub fn into_worker(self) -> WorkerEndpoints {
        WorkerEndpoints {
            request: self.request.0,
            response: self.response.1,
        }
    }
}
