//! Data types and error definitions for process queries and termination.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Placeholder written for a name or path the process table could not supply.
pub const UNKNOWN: &str = "UNKNOWN";

/// A user-facing process as reported by a [`crate::ProcessSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: i32,
    pub name: Option<String>,
    pub path: Option<String>,
}

/// One matched process, shaped for the response file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedService {
    pub title: String,
    pub subtitle: String,
    /// Decimal pid. Always a JSON string on the wire.
    pub id: String,
}

impl From<&ProcessRecord> for MatchedService {
    fn from(record: &ProcessRecord) -> Self {
        Self {
            title: format!("Quit {}", record.name.as_deref().unwrap_or(UNKNOWN)),
            subtitle: record.path.as_deref().unwrap_or(UNKNOWN).to_string(),
            id: record.pid.to_string(),
        }
    }
}

/// Everything written to the output file for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub provider: String,
    pub services: Vec<MatchedService>,
}

/// How hard to ask a process to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// SIGTERM: the process may run its shutdown logic, or ignore us.
    Graceful,
    /// SIGKILL.
    Forced,
}

/// Errors that can occur during process management.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("Permission denied for PID {0}")]
    PermissionDenied(i32),
    #[error("Failed to send signal to PID {0}: {1}")]
    SignalError(i32, String),
    #[error("Procfs error: {0}")]
    ProcfsError(String),
    #[error("Failed to write response to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<procfs::ProcError> for ProcError {
    fn from(err: procfs::ProcError) -> Self {
        ProcError::ProcfsError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_uses_name_and_path() {
        let record = ProcessRecord {
            pid: 100,
            name: Some("Mail".into()),
            path: Some("/A/Mail".into()),
        };
        let service = MatchedService::from(&record);
        assert_eq!(service.title, "Quit Mail");
        assert_eq!(service.subtitle, "/A/Mail");
        assert_eq!(service.id, "100");
    }

    #[test]
    fn test_projection_substitutes_unknown() {
        let record = ProcessRecord {
            pid: 7,
            name: None,
            path: None,
        };
        let service = MatchedService::from(&record);
        assert_eq!(service.title, "Quit UNKNOWN");
        assert_eq!(service.subtitle, "UNKNOWN");
    }
}
