//! UI-agnostic process query and termination library for Linux.
//!
//! Lists the user's graphical-session processes, filters them by name, writes
//! matches as a JSON response file, and terminates processes by pid.
//! Uses `procfs` and `nix` for system interaction.

mod process_kill;
mod process_list;
mod query;
mod response;
mod source;
mod types;

pub use process_kill::{terminate, PidHandle};
pub use process_list::list_user_facing;
pub use query::filter_processes;
pub use response::emit;
pub use source::{ProcessHandle, ProcessSource, ProcfsSource};
pub use types::{
    MatchedService, ProcError, ProcessRecord, ResponseEnvelope, Severity, UNKNOWN,
};
