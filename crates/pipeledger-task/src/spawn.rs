use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};
use pipeledger_pipe::{ChannelPair, PipeReader, PipeWriter};

use crate::error::{Result, TaskError};
use crate::role::WorkerRole;

/// The orchestrator's view of one spawned worker process.
///
/// Holds the parent-owned channel ends. Taking `request` and dropping it
/// after the input is sent closes the request stream; `response` is taken
/// to receive the result. The handle stays usable for reaping afterwards.
#[derive(Debug)]
pub struct WorkerHandle {
    pub id: usize,
    pub role: WorkerRole,
    pub request: Option<PipeWriter>,
    pub response: Option<PipeReader>,
    pid: Pid,
    status: Option<i32>,
}

impl WorkerHandle {
    /// Process id of the worker.
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Reap the worker and return its exit code.
    ///
    /// Idempotent: the first call blocks in `waitpid`, later calls return
    /// the cached code. A signal death maps to `128 + signo`.
    pub fn wait(&mut self) -> Result<i32> {
        if let Some(code) = self.status {
            return Ok(code);
        }

        let status = waitpid(self.pid, None).map_err(|source| TaskError::Wait {
            pid: self.pid.as_raw(),
            source,
        })?;

        let code = match status {
            WaitStatus::Exited(_, code) => code,
            WaitStatus::Signaled(_, signal, _) => 128 + signal as i32,
            other => {
                tracing::warn!(pid = self.pid.as_raw(), status = ?other, "unexpected wait status");
                1
            }
        };

        self.status = Some(code);
        Ok(code)
    }
}

/// Spawn one worker process per role and return their handles, in order.
///
/// Each worker gets a fresh [`ChannelPair`] created immediately before its
/// fork, so later children never inherit it. Inside the child branch the
/// handles of earlier workers are dropped before the role runs, closing
/// every descriptor that belongs to a sibling or to the parent side.
///
/// The child executes its role's single round trip and exits: status 0 on
/// success, 1 on any receive/compute/send failure (logged to stderr). It
/// never returns to the caller's code.
pub fn spawn_workers(roles: Vec<WorkerRole>) -> Result<Vec<WorkerHandle>> {
    let mut handles: Vec<WorkerHandle> = Vec::with_capacity(roles.len());

    for (id, role) in roles.into_iter().enumerate() {
        let pair = ChannelPair::new()?;

        // SAFETY: the orchestrator is single-threaded at spawn time, and
        // the child branch only touches its own endpoints before exiting.
        match unsafe { fork() }.map_err(TaskError::Spawn)? {
            ForkResult::Child => {
                drop(handles);
                let endpoints = pair.into_worker();

                let code = match role.run(endpoints) {
                    Ok(()) => 0,
                    Err(err) => {
                        tracing::error!(worker = id, role = ?role, error = %err, "worker failed");
                        1
                    }
                };
                std::process::exit(code);
            }
            ForkResult::Parent { child } => {
                tracing::debug!(worker = id, role = ?role, pid = child.as_raw(), "spawned worker");
                let parent = pair.into_parent();
                handles.push(WorkerHandle {
                    id,
                    role,
                    request: Some(parent.request),
                    response: Some(parent.response),
                    pid: child,
                    status: None,
                });
            }
        }
    }

    Ok(handles)
}
