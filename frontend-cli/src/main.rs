use backend::ProcfsSource;
use cli::{ArgError, Invocation};
use log::{debug, error};
use std::process::ExitCode;

mod cli;
mod config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    debug!("arguments: {:?}", args);

    let invocation = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(ArgError::InvalidPid(pid)) => {
            debug!("rejecting pid {pid:?}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run(invocation, &ProcfsSource, |key| std::env::var(key).ok()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
