//! Writing a query response to the caller's output file.

use crate::types::{MatchedService, ProcError, ResponseEnvelope};
use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

impl ResponseEnvelope {
    pub fn new(provider: impl Into<String>, services: Vec<MatchedService>) -> Self {
        Self {
            provider: provider.into(),
            services,
        }
    }
}

/// Encode `envelope` as JSON and write it to `destination` in one write.
///
/// The file must already exist; it is never created here.
pub fn emit(envelope: &ResponseEnvelope, destination: &Path) -> Result<(), ProcError> {
    let json = serde_json::to_vec(envelope)?;
    let output_err = |source| ProcError::Output {
        path: destination.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(destination)
        .map_err(output_err)?;
    file.write_all(&json).map_err(output_err)?;

    info!(
        "wrote {} service(s) to {}",
        envelope.services.len(),
        destination.display()
    );
    Ok(())
}
