//! Name filtering over a process listing.

use crate::types::{MatchedService, ProcessRecord};

/// Keep records whose name contains `needle`, ignoring case, in input order.
///
/// An empty needle keeps everything. A record without a name is always kept
/// so it can still be found and quit.
pub fn filter_processes(all: &[ProcessRecord], needle: &str) -> Vec<MatchedService> {
    let needle = needle.to_lowercase();
    all.iter()
        .filter(|record| {
            needle.is_empty()
                || record
                    .name
                    .as_ref()
                    .map_or(true, |name| name.to_lowercase().contains(&needle))
        })
        .map(MatchedService::from)
        .collect()
}
