use tracing::debug;

use crate::cleanup::errors::CleanupError;
use crate::cleanup::types::CleanupRequest;
use crate::records::keep_list::KeepList;
use crate::records::{DnsRecord, normalize_name};

pub fn validate_request(request: &CleanupRequest) -> Result<(), CleanupError> {
    if request.zone_name.trim().is_empty() {
        return Err(CleanupError::MissingZoneName);
    }
    if request.target_alias.trim().is_empty() {
        return Err(CleanupError::MissingTargetAlias);
    }
    Ok(())
}

/// Pick the records a sweep would delete: those whose target matches the
/// retired alias and whose name no keep pattern covers.
pub fn select_candidates(
    records: &[DnsRecord],
    target_alias: &str,
    keep_list: &KeepList,
) -> Vec<DnsRecord> {
    let normalized_alias = normalize_name(target_alias);
    let mut candidates = Vec::new();

    for record in records {
        if !record.matches_target(&normalized_alias) {
            continue;
        }

        if keep_list.matches(&record.name) {
            debug!(
                event = "cleanup.record_kept",
                name = %record.name,
                record_type = %record.record_type
            );
            continue;
        }

        debug!(
            event = "cleanup.record_selected",
            name = %record.name,
            record_type = %record.record_type
        );
        candidates.push(record.clone());
    }

    candidates
}
