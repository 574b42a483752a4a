//! Command-line grammar and the single invocation it selects.

use backend::Severity;
use clap::{CommandFactory, Parser};
use thiserror::Error;

/// Program name plus at most one flag and one value.
const MAX_TOKENS: usize = 3;

#[derive(Parser, Debug)]
#[command(
    name = "process-service",
    about = "Process Manager",
    allow_negative_numbers = true,
    disable_version_flag = true
)]
struct Args {
    /// query for running applications
    #[arg(
        short = 'q',
        long,
        value_name = "query",
        num_args = 0..=1,
        allow_hyphen_values = true
    )]
    query: Option<Option<String>>,

    /// quit application with given pid
    #[arg(short = 'x', long, value_name = "id")]
    execute: Option<String>,

    /// force kill application with given pid
    #[arg(short = 'X', long = "alter-execute", value_name = "id")]
    alter_execute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// List processes whose name contains the needle; empty lists all.
    Query(String),
    Terminate { pid: i32, severity: Severity },
    Help,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgError {
    #[error("not a valid pid: {0:?}")]
    InvalidPid(String),
}

impl Invocation {
    /// Select the invocation for `args`, program name first.
    ///
    /// Anything unrecognized selects [`Invocation::Help`]. When several modes
    /// parse together, query wins over execute, and execute over alter-execute.
    pub fn parse<I, T>(args: I) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.as_ref().trim().to_string())
            .collect();
        if args.len() <= 1 || args.len() > MAX_TOKENS {
            return Ok(Invocation::Help);
        }

        match Args::try_parse_from(&args) {
            Ok(parsed) => select(parsed),
            Err(_) => Ok(Invocation::Help),
        }
    }
}

/// Query, then execute, then alter-execute.
fn select(parsed: Args) -> Result<Invocation, ArgError> {
    if let Some(query) = parsed.query {
        return Ok(Invocation::Query(query.unwrap_or_default()));
    }
    if let Some(pid) = parsed.execute {
        return terminate(&pid, Severity::Graceful);
    }
    if let Some(pid) = parsed.alter_execute {
        return terminate(&pid, Severity::Forced);
    }
    Ok(Invocation::Help)
}

fn terminate(pid: &str, severity: Severity) -> Result<Invocation, ArgError> {
    let pid = pid
        .parse::<i32>()
        .map_err(|_| ArgError::InvalidPid(pid.to_string()))?;
    Ok(Invocation::Terminate { pid, severity })
}

pub fn help_text() -> String {
    Args::command().render_help().to_string()
}
