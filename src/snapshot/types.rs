use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{DnsRecord, FailedRecord};
use crate::route53::types::HostedZone;

/// The restore file: the records a sweep removed, with enough zone context
/// to put them back later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub zone_id: String,
    pub zone_name: String,
    pub created_at: DateTime<Utc>,
    pub records: Vec<DnsRecord>,
}

impl Snapshot {
    pub fn new(zone: &HostedZone, records: Vec<DnsRecord>) -> Self {
        Self {
            zone_id: zone.id.clone(),
            zone_name: zone.name.clone(),
            created_at: Utc::now(),
            records,
        }
    }
}

/// Outcome of a restore run.
#[derive(Debug, Clone)]
pub struct RestoreSummary {
    pub zone_id: String,
    pub zone_name: String,
    pub restored: Vec<DnsRecord>,
    pub failed: Vec<FailedRecord>,
}

impl RestoreSummary {
    pub fn new(zone_id: String, zone_name: String) -> Self {
        Self {
            zone_id,
            zone_name,
            restored: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn add_restored(&mut self, record: DnsRecord) {
        self.restored.push(record);
    }

    pub fn add_failed(&mut self, failed: FailedRecord) {
        self.failed.push(failed);
    }
}
