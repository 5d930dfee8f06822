pub mod collector;
pub mod kill;
pub mod process;
pub mod sampler;
pub mod snapshot;

use kill::TerminateError;
use process::{ProcessRecord, ReadError};
use snapshot::SystemLoad;

/// Enumerates the OS process table. Each process read may fail on its own.
pub trait ProcessSource {
    fn enumerate(&mut self) -> Vec<Result<ProcessRecord, ReadError>>;
}

/// Instantaneous whole-system usage for the header line.
pub trait LoadSource {
    fn system_load(&mut self) -> SystemLoad;
}

/// Sends termination requests to the OS.
pub trait ProcessControl {
    fn terminate(&mut self, pid: u32) -> Result<(), TerminateError>;
}
