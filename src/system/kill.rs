use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};
use thiserror::Error;

use super::ProcessControl;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TerminateError {
    #[error("PID {pid} not found or already exited.")]
    NotFound { pid: u32 },

    #[error("Not permitted to terminate PID {pid}.")]
    PermissionDenied { pid: u32 },
}

impl TerminateError {
    pub fn pid(self) -> u32 {
        match self {
            TerminateError::NotFound { pid } | TerminateError::PermissionDenied { pid } => pid,
        }
    }
}

/// Requests graceful termination (SIGTERM where supported) of `pid`.
///
/// The process list is re-read for this one PID first, so a process that
/// exited after the last sample reports `NotFound` rather than a failed signal.
///
/// Platform limitation: where sysinfo has no `SIGTERM` equivalent (Windows),
/// this falls back to `Process::kill`, which is a forced kill.
pub fn terminate(sys: &mut System, pid: u32) -> Result<(), TerminateError> {
    let sysinfo_pid = Pid::from_u32(pid);
    refresh_one(sys, sysinfo_pid);

    let Some(process) = sys.process(sysinfo_pid) else {
        return Err(TerminateError::NotFound { pid });
    };

    let delivered = match process.kill_with(Signal::Term) {
        Some(delivered) => delivered,
        // No SIGTERM on this platform; kill() is forced, not graceful.
        None => process.kill(),
    };
    if delivered {
        return Ok(());
    }

    // A failed signal is either a race with exit or a permission problem.
    refresh_one(sys, sysinfo_pid);
    if sys.process(sysinfo_pid).is_some() {
        Err(TerminateError::PermissionDenied { pid })
    } else {
        Err(TerminateError::NotFound { pid })
    }
}

fn refresh_one(sys: &mut System, pid: Pid) {
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing(),
    );
}

/// [`ProcessControl`] backed by its own sysinfo handle.
pub struct Terminator {
    sys: System,
}

impl Default for Terminator {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminator {
    pub fn new() -> Self {
        Terminator { sys: System::new() }
    }
}

impl ProcessControl for Terminator {
    fn terminate(&mut self, pid: u32) -> Result<(), TerminateError> {
        let result = terminate(&mut self.sys, pid);
        match result {
            Ok(()) => tracing::info!(pid, "sent SIGTERM"),
            Err(err) => tracing::warn!(pid, %err, "termination failed"),
        }
        result
    }
}
