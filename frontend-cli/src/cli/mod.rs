//! Argument parsing and dispatch for the process-service binary.

pub mod args;
pub mod dispatch;

pub use args::{ArgError, Invocation};
pub use dispatch::run;
