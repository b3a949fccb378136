use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::snapshot::errors::SnapshotError;
use crate::snapshot::types::Snapshot;

/// Where a sweep writes its restore file: one timestamped JSON file per run
/// under the snapshots directory.
pub fn default_snapshot_path(snapshots_dir: &Path, zone_name: &str) -> PathBuf {
    let stem = zone_name.trim_end_matches('.').replace('.', "-");
    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    snapshots_dir.join(format!("{}-{}.json", stem, stamp))
}

/// Serialize the snapshot to `path`, overwriting an existing file.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| SnapshotError::SerializeFailed {
            message: e.to_string(),
        })?;
    fs::write(path, json)?;

    debug!(event = "snapshot.file_written", path = %path.display(), records = snapshot.records.len());
    Ok(())
}

/// Read a snapshot back. Missing and malformed files get their own errors
/// so the CLI can report them precisely.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|e| SnapshotError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(event = "snapshot.file_read", path = %path.display(), records = snapshot.records.len());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DnsRecord, RecordTarget, RecordType};
    use crate::route53::types::HostedZone;
    use tempfile::TempDir;

    fn test_zone() -> HostedZone {
        HostedZone {
            id: "/hostedzone/Z123".to_string(),
            name: "example.com.".to_string(),
        }
    }

    fn test_records() -> Vec<DnsRecord> {
        vec![
            DnsRecord {
                name: "www.example.com.".to_string(),
                record_type: RecordType::A,
                target: RecordTarget::Alias {
                    dns_name: "prod.example.com.".to_string(),
                    hosted_zone_id: "Z35SXDOTRQ7X7K".to_string(),
                    evaluate_target_health: true,
                },
                ttl: None,
            },
            DnsRecord {
                name: "blog.example.com.".to_string(),
                record_type: RecordType::Cname,
                target: RecordTarget::Values(vec!["prod.example.com".to_string()]),
                ttl: Some(300),
            },
        ]
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        let snapshot = Snapshot::new(&test_zone(), test_records());

        write_snapshot(&path, &snapshot).unwrap();
        let loaded = read_snapshot(&path).unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.records.len(), 2);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");

        let first = Snapshot::new(&test_zone(), test_records());
        let second = Snapshot::new(&test_zone(), Vec::new());

        write_snapshot(&path, &first).unwrap();
        write_snapshot(&path, &second).unwrap();

        let loaded = read_snapshot(&path).unwrap();
        assert!(loaded.records.is_empty());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("snapshot.json");

        write_snapshot(&path, &Snapshot::new(&test_zone(), Vec::new())).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::NotFound { .. }));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not valid json").unwrap();

        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed { .. }));
    }

    #[test]
    fn test_default_snapshot_path_shape() {
        let path = default_snapshot_path(Path::new("/tmp/snapshots"), "example.com.");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("example-com-"));
        assert!(name.ends_with(".json"));
        assert!(path.starts_with("/tmp/snapshots"));
    }
}
