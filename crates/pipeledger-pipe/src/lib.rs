//! Anonymous-pipe channels for parent/worker communication.
//!
//! This is the lowest layer of pipeledger. It provides:
//! - [`PipeReader`] / [`PipeWriter`] — the two ends of an anonymous pipe,
//!   each owning its file descriptor (closed on drop)
//! - [`write_exact`] / [`read_exact`] — transfer primitives that move an
//!   exact byte count, retrying on interrupted syscalls and reporting a
//!   peer close mid-transfer as a short read instead of hiding it
//! - [`ChannelPair`] — the request/response pipe bundle between the
//!   orchestrator and one worker, split by role so that each process
//!   drops the ends it does not own

pub mod channel;
pub mod endpoint;
pub mod error;
pub mod xfer;

pub use channel::{ChannelPair, ParentEndpoints, WorkerEndpoints};
pub use endpoint::{pipe, PipeReader, PipeWriter};
pub use error::{PipeError, Result};
pub use xfer::{read_exact, write_exact};
