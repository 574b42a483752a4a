//! Enumeration of user-facing processes from /proc.

use crate::types::{ProcError, ProcessRecord};
use log::debug;
use procfs::process::Process;
use std::collections::HashMap;
use std::ffi::OsStr;

/// `PF_KTHREAD` from include/linux/sched.h.
const PF_KTHREAD: u32 = 0x0020_0000;

const SESSION_VARS: [&str; 2] = ["DISPLAY", "WAYLAND_DISPLAY"];

/// A process that passed the per-process checks, before helper collapsing.
#[derive(Debug, Clone)]
struct Candidate {
    record: ProcessRecord,
    ppid: i32,
}

/// List the calling user's graphical-session processes in /proc order.
///
/// The calling process itself is never listed. Processes that exit or turn
/// unreadable mid-scan are skipped.
pub fn list_user_facing() -> Result<Vec<ProcessRecord>, ProcError> {
    let myself = Process::myself()?;
    let (own_pid, uid) = (myself.pid(), myself.uid()?);
    let all_procs = procfs::process::all_processes()
        .map_err(|e| ProcError::ProcfsError(format!("Failed to read /proc: {}", e)))?;

    let mut candidates = Vec::new();
    for proc in all_procs.flatten().filter(|p| p.pid() != own_pid) {
        match inspect(&proc, uid) {
            Some(candidate) => candidates.push(candidate),
            None => debug!("skipping pid {}", proc.pid()),
        }
    }

    Ok(collapse_helpers(candidates))
}

fn inspect(proc: &Process, uid: u32) -> Option<Candidate> {
    if proc.uid().ok()? != uid {
        return None;
    }
    let stat = proc.stat().ok()?;
    if stat.flags & PF_KTHREAD != 0 || stat.state == 'Z' {
        return None;
    }
    let environ = proc.environ().ok()?;
    if !SESSION_VARS.iter().any(|var| environ.contains_key(OsStr::new(var))) {
        return None;
    }

    let exe = proc.exe().ok();
    let name = exe
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| Some(stat.comm.clone()).filter(|c| !c.is_empty()));

    Some(Candidate {
        record: ProcessRecord {
            pid: stat.pid,
            name,
            path: exe.map(|p| p.to_string_lossy().into_owned()),
        },
        ppid: stat.ppid,
    })
}

/// Drop helpers spawned by a listed process running the same executable.
fn collapse_helpers(candidates: Vec<Candidate>) -> Vec<ProcessRecord> {
    let exe_by_pid: HashMap<i32, Option<String>> = candidates
        .iter()
        .map(|c| (c.record.pid, c.record.path.clone()))
        .collect();

    candidates
        .into_iter()
        .filter(|c| match (exe_by_pid.get(&c.ppid), &c.record.path) {
            (Some(Some(parent_exe)), Some(exe)) => parent_exe != exe,
            _ => true,
        })
        .map(|c| c.record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(pid: i32, ppid: i32, path: Option<&str>) -> Candidate {
        Candidate {
            record: ProcessRecord {
                pid,
                name: path.map(|p| p.rsplit('/').next().unwrap().to_string()),
                path: path.map(str::to_string),
            },
            ppid,
        }
    }

    #[test]
    fn test_collapse_hides_same_exe_children() {
        let listed = collapse_helpers(vec![
            candidate(10, 1, Some("/usr/lib/firefox/firefox")),
            candidate(11, 10, Some("/usr/lib/firefox/firefox")),
            candidate(12, 10, Some("/usr/bin/gnome-terminal")),
            candidate(13, 1, Some("/usr/bin/nautilus")),
        ]);
        let pids: Vec<i32> = listed.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![10, 12, 13]);
    }

    #[test]
    fn test_collapse_keeps_unknown_paths() {
        let listed = collapse_helpers(vec![candidate(20, 1, None), candidate(21, 20, None)]);
        assert_eq!(listed.len(), 2, "no path means no evidence of a helper");
    }

    #[test]
    fn test_collapse_ignores_unlisted_parents() {
        let listed = collapse_helpers(vec![candidate(30, 5, Some("/usr/bin/app"))]);
        assert_eq!(listed[0].pid, 30);
    }

    #[test]
    fn test_list_user_facing_reads_proc() {
        let listed = list_user_facing().unwrap();
        assert!(listed.iter().all(|r| r.pid > 0));
        let mut pids: Vec<i32> = listed.iter().map(|r| r.pid).collect();
        let before = pids.clone();
        pids.sort_unstable();
        assert_eq!(pids, before, "listing keeps /proc order");
    }

    #[test]
    fn test_list_user_facing_skips_caller() {
        let me = std::process::id() as i32;
        assert!(list_user_facing().unwrap().iter().all(|r| r.pid != me));
    }
}
