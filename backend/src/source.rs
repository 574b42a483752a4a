//! The process table seen through two operations: list and look up.

use crate::process_kill::PidHandle;
use crate::process_list::list_user_facing;
use crate::types::{ProcError, ProcessRecord, Severity};
use procfs::process::Process;

/// A live process that can be asked to terminate.
pub trait ProcessHandle {
    fn pid(&self) -> i32;

    /// Deliver the termination request without waiting for the process to exit.
    fn terminate(&self, severity: Severity) -> Result<(), ProcError>;
}

/// Where process listings and handles come from.
pub trait ProcessSource {
    type Handle: ProcessHandle;

    fn list_user_facing(&self) -> Result<Vec<ProcessRecord>, ProcError>;

    /// `None` when no live process has this pid.
    fn lookup(&self, pid: i32) -> Option<Self::Handle>;
}

/// The real process table, read from /proc.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcfsSource;

impl ProcessSource for ProcfsSource {
    type Handle = PidHandle;

    fn list_user_facing(&self) -> Result<Vec<ProcessRecord>, ProcError> {
        list_user_facing()
    }

    fn lookup(&self, pid: i32) -> Option<PidHandle> {
        // kill(2) treats 0 and negative pids as process groups.
        if pid <= 0 {
            return None;
        }
        let stat = Process::new(pid).and_then(|p| p.stat()).ok()?;
        if stat.state == 'Z' {
            return None;
        }
        Some(PidHandle::new(pid))
    }
}
