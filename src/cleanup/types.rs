use std::path::PathBuf;

use crate::records::{DnsRecord, FailedRecord};

/// Everything a sweep needs from the caller.
#[derive(Debug, Clone)]
pub struct CleanupRequest {
    pub zone_name: String,
    pub target_alias: String,
    pub keep_entries: Vec<String>,
    pub dry_run: bool,
}

impl CleanupRequest {
    pub fn new(
        zone_name: String,
        target_alias: String,
        keep_entries: Vec<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            zone_name,
            target_alias,
            keep_entries,
            dry_run,
        }
    }
}

/// Outcome of one sweep, dry or live.
#[derive(Debug, Clone)]
pub struct CleanupSummary {
    pub zone_id: String,
    pub zone_name: String,
    pub target_alias: String,
    pub dry_run: bool,
    pub candidates: Vec<DnsRecord>,
    pub deleted: Vec<DnsRecord>,
    pub failed: Vec<FailedRecord>,
    pub snapshot_path: Option<PathBuf>,
}

impl CleanupSummary {
    pub fn new(zone_id: String, zone_name: String, target_alias: String, dry_run: bool) -> Self {
        Self {
            zone_id,
            zone_name,
            target_alias,
            dry_run,
            candidates: Vec::new(),
            deleted: Vec::new(),
            failed: Vec::new(),
            snapshot_path: None,
        }
    }

    pub fn add_deleted(&mut self, record: DnsRecord) {
        self.deleted.push(record);
    }

    pub fn add_failed(&mut self, failure: FailedRecord) {
        self.failed.push(failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{RecordTarget, RecordType};

    fn sample_record(name: &str) -> DnsRecord {
        DnsRecord {
            name: name.to_string(),
            record_type: RecordType::A,
            target: RecordTarget::Alias {
                dns_name: "old-lb.example.net.".to_string(),
                hosted_zone_id: "Z2FDTNDATAQYW2".to_string(),
                evaluate_target_health: false,
            },
            ttl: None,
        }
    }

    #[test]
    fn test_cleanup_request_new() {
        let request = CleanupRequest::new(
            "example.com".to_string(),
            "old-lb.example.net".to_string(),
            vec!["manage".to_string()],
            true,
        );

        assert_eq!(request.zone_name, "example.com");
        assert_eq!(request.target_alias, "old-lb.example.net");
        assert_eq!(request.keep_entries, vec!["manage".to_string()]);
        assert!(request.dry_run);
    }

    #[test]
    fn test_cleanup_summary_starts_empty() {
        let summary = CleanupSummary::new(
            "Z1D633PJN98FT9".to_string(),
            "example.com.".to_string(),
            "old-lb.example.net".to_string(),
            false,
        );

        assert!(summary.candidates.is_empty());
        assert!(summary.deleted.is_empty());
        assert!(summary.failed.is_empty());
        assert!(summary.snapshot_path.is_none());
    }

    #[test]
    fn test_cleanup_summary_accumulates() {
        let mut summary = CleanupSummary::new(
            "Z1D633PJN98FT9".to_string(),
            "example.com.".to_string(),
            "old-lb.example.net".to_string(),
            false,
        );

        let record = sample_record("www.example.com.");
        summary.add_deleted(record.clone());
        summary.add_failed(FailedRecord::new(
            &sample_record("api.example.com."),
            "throttled".to_string(),
        ));

        assert_eq!(summary.deleted.len(), 1);
        assert_eq!(summary.deleted[0].name, "www.example.com.");
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].name, "api.example.com.");
        assert_eq!(summary.failed[0].message, "throttled");
    }
}
