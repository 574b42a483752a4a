//! Runs the one action an invocation selects.

use super::args::{help_text, Invocation};
use crate::config::QueryConfig;
use anyhow::{Context, Result};
use backend::{emit, filter_processes, terminate, ProcessSource, ResponseEnvelope};
use log::{info, warn};

/// Perform `invocation` against `source`.
///
/// `env` is consulted only for queries. Termination failures are logged and
/// swallowed: the caller never waits on the outcome.
pub fn run<S, F>(invocation: Invocation, source: &S, env: F) -> Result<()>
where
    S: ProcessSource,
    F: Fn(&str) -> Option<String>,
{
    match invocation {
        Invocation::Query(needle) => {
            let config = QueryConfig::from_lookup(env)?;
            let all = source
                .list_user_facing()
                .context("listing running processes")?;
            let services = filter_processes(&all, &needle);
            info!(
                "query {needle:?} matched {} of {} process(es)",
                services.len(),
                all.len()
            );
            let envelope = ResponseEnvelope::new(config.identifier, services);
            emit(&envelope, &config.output)?;
        }
        Invocation::Terminate { pid, severity } => {
            if let Err(e) = terminate(source, pid, severity) {
                warn!("failed to terminate pid {pid}: {e}");
            }
        }
        Invocation::Help => println!("{}", help_text()),
    }
    Ok(())
}
