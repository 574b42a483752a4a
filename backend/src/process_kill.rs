//! Process termination functionality.

use crate::source::{ProcessHandle, ProcessSource};
use crate::types::{ProcError, Severity};
use log::{debug, info};
use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

/// A process addressed by pid, signalled with kill(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PidHandle {
    pid: i32,
}

impl PidHandle {
    pub(crate) fn new(pid: i32) -> Self {
        Self { pid }
    }
}

impl ProcessHandle for PidHandle {
    fn pid(&self) -> i32 {
        self.pid
    }

    fn terminate(&self, severity: Severity) -> Result<(), ProcError> {
        let sig = match severity {
            Severity::Graceful => Signal::SIGTERM,
            Severity::Forced => Signal::SIGKILL,
        };
        match signal::kill(Pid::from_raw(self.pid), sig) {
            Ok(()) => {
                info!("sent {sig} to pid {}", self.pid);
                Ok(())
            }
            // Exited after lookup.
            Err(Errno::ESRCH) => {
                debug!("pid {} exited before {sig} was sent", self.pid);
                Ok(())
            }
            Err(Errno::EPERM) => Err(ProcError::PermissionDenied(self.pid)),
            Err(e) => Err(ProcError::SignalError(self.pid, e.to_string())),
        }
    }
}

/// Ask the process with `pid` to terminate. A pid with no live process is a no-op.
pub fn terminate<S: ProcessSource>(
    source: &S,
    pid: i32,
    severity: Severity,
) -> Result<(), ProcError> {
    match source.lookup(pid) {
        Some(handle) => handle.terminate(severity),
        None => {
            debug!("no process with pid {pid}, nothing to terminate");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ProcfsSource;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{Child, Command};

    fn spawn_sleeper() -> Child {
        Command::new("/bin/sleep").arg("60").spawn().unwrap()
    }

    #[test]
    fn test_graceful_sends_sigterm() {
        let mut child = spawn_sleeper();
        terminate(&ProcfsSource, child.id() as i32, Severity::Graceful).unwrap();
        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(Signal::SIGTERM as i32));
    }

    #[test]
    fn test_forced_sends_sigkill() {
        let mut child = spawn_sleeper();
        terminate(&ProcfsSource, child.id() as i32, Severity::Forced).unwrap();
        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(Signal::SIGKILL as i32));
    }

    #[test]
    fn test_missing_pid_is_noop_twice() {
        for _ in 0..2 {
            assert!(terminate(&ProcfsSource, i32::MAX, Severity::Forced).is_ok());
        }
    }

    #[test]
    fn test_stale_handle_is_ok() {
        // No process can hold a pid above PID_MAX_LIMIT, so kill(2) reports ESRCH.
        let handle = PidHandle::new(i32::MAX);
        assert!(handle.terminate(Severity::Graceful).is_ok());
        assert!(handle.terminate(Severity::Forced).is_ok());
    }
}
