//! Worker roles and process lifecycle.
//!
//! A task is a unit of work executed in an isolated worker process that
//! communicates with the orchestrator only through its own channel pair.
//! [`spawn_workers`] maps each [`WorkerRole`] to a fresh pair, forks, and
//! returns [`WorkerHandle`]s; channel-end ownership is enforced by moves,
//! so no process keeps a descriptor it does not use.

pub mod error;
pub mod role;
pub mod spawn;

pub use error::{Result, TaskError};
pub use role::{mean, prefix_sums, WorkerRole};
pub use spawn::{spawn_workers, WorkerHandle};
