use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// DNS record types Route 53 can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Ds,
    Https,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Soa,
    Spf,
    Srv,
    Sshfp,
    Svcb,
    Tlsa,
    Txt,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown DNS record type '{value}'")]
pub struct UnknownRecordType {
    pub value: String,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Ds => "DS",
            RecordType::Https => "HTTPS",
            RecordType::Mx => "MX",
            RecordType::Naptr => "NAPTR",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Spf => "SPF",
            RecordType::Srv => "SRV",
            RecordType::Sshfp => "SSHFP",
            RecordType::Svcb => "SVCB",
            RecordType::Tlsa => "TLSA",
            RecordType::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = UnknownRecordType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CAA" => Ok(RecordType::Caa),
            "CNAME" => Ok(RecordType::Cname),
            "DS" => Ok(RecordType::Ds),
            "HTTPS" => Ok(RecordType::Https),
            "MX" => Ok(RecordType::Mx),
            "NAPTR" => Ok(RecordType::Naptr),
            "NS" => Ok(RecordType::Ns),
            "PTR" => Ok(RecordType::Ptr),
            "SOA" => Ok(RecordType::Soa),
            "SPF" => Ok(RecordType::Spf),
            "SRV" => Ok(RecordType::Srv),
            "SSHFP" => Ok(RecordType::Sshfp),
            "SVCB" => Ok(RecordType::Svcb),
            "TLSA" => Ok(RecordType::Tlsa),
            "TXT" => Ok(RecordType::Txt),
            _ => Err(UnknownRecordType {
                value: s.to_string(),
            }),
        }
    }
}

/// What a record points at: a Route 53 alias or plain resource record values.
///
/// The alias triple is kept whole so a deleted alias record can be recreated
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordTarget {
    Alias {
        dns_name: String,
        hosted_zone_id: String,
        evaluate_target_health: bool,
    },
    Values(Vec<String>),
}

/// One DNS record as fetched from the hosted zone. Identity is (name, type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub name: String,
    pub record_type: RecordType,
    pub target: RecordTarget,
    #[serde(default)]
    pub ttl: Option<i64>,
}

impl DnsRecord {
    /// True when this record points at the given alias. The alias must be
    /// pre-normalized with `normalize_name`.
    pub fn matches_target(&self, normalized_alias: &str) -> bool {
        match &self.target {
            RecordTarget::Alias { dns_name, .. } => normalize_name(dns_name) == normalized_alias,
            RecordTarget::Values(values) => values
                .iter()
                .any(|value| normalize_name(value) == normalized_alias),
        }
    }

    /// Primary target string, for summaries and log lines.
    pub fn target_name(&self) -> &str {
        match &self.target {
            RecordTarget::Alias { dns_name, .. } => dns_name,
            RecordTarget::Values(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.target, RecordTarget::Alias { .. })
    }
}

/// A record an API change call failed for, kept for the end-of-run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedRecord {
    pub name: String,
    pub record_type: RecordType,
    pub message: String,
}

impl FailedRecord {
    pub fn new(record: &DnsRecord, message: String) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type,
            message,
        }
    }
}

/// Normalize a DNS name for comparison: lowercase with a trailing dot.
/// Route 53 returns names fully qualified; callers often type them without
/// the final dot.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.trim().to_ascii_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}
