use tracing::debug;

use crate::core::errors::SweepError;
use crate::records::types::normalize_name;

/// A compiled keep-list entry. `raw` is what the caller wrote, `expanded`
/// is the fully qualified form the glob was built from.
#[derive(Debug, Clone)]
pub struct KeepPattern {
    pub raw: String,
    pub expanded: String,
    pub compiled: glob::Pattern,
}

/// Record-name patterns exempt from deletion.
#[derive(Debug, Clone)]
pub struct KeepList {
    patterns: Vec<KeepPattern>,
}

#[derive(Debug, thiserror::Error)]
pub enum KeepListError {
    #[error("Invalid keep-list pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl SweepError for KeepListError {
    fn error_code(&self) -> &'static str {
        match self {
            KeepListError::InvalidPattern { .. } => "INVALID_KEEP_PATTERN",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

impl KeepPattern {
    fn compile(raw: &str, expanded: String) -> Result<Self, KeepListError> {
        let compiled =
            glob::Pattern::new(&expanded).map_err(|e| KeepListError::InvalidPattern {
                pattern: raw.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            raw: raw.to_string(),
            expanded,
            compiled,
        })
    }
}

impl KeepList {
    /// Compile keep-list entries for a zone.
    ///
    /// Entries without a trailing dot are relative to the zone and get the
    /// zone apex appended; entries ending in a dot are taken verbatim; `*`
    /// keeps everything. The apex itself is always on the list, so the
    /// record naming the zone is never a deletion candidate.
    pub fn for_zone(entries: &[String], zone_name: &str) -> Result<Self, KeepListError> {
        let apex = normalize_name(zone_name);

        let mut patterns = Vec::with_capacity(entries.len() + 1);
        patterns.push(KeepPattern::compile(&apex, apex.clone())?);

        for entry in entries {
            let expanded = expand_entry(entry, &apex);
            patterns.push(KeepPattern::compile(entry, expanded)?);
        }

        debug!(
            event = "records.keep_list_compiled",
            zone = %apex,
            patterns = ?patterns.iter().map(|p| p.expanded.as_str()).collect::<Vec<_>>()
        );

        Ok(Self { patterns })
    }

    /// True when the record name matches any keep pattern.
    pub fn matches(&self, record_name: &str) -> bool {
        let name = normalize_name(record_name);
        self.patterns
            .iter()
            .any(|pattern| pattern.compiled.matches(&name))
    }

    pub fn expanded_patterns(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .map(|pattern| pattern.expanded.as_str())
            .collect()
    }

    /// Number of compiled patterns, the implicit apex entry included.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

fn expand_entry(entry: &str, apex: &str) -> String {
    let trimmed = entry.trim();
    if trimmed == "*" {
        return trimmed.to_string();
    }
    if trimmed.ends_with('.') {
        return trimmed.to_ascii_lowercase();
    }
    format!("{}.{}", trimmed.to_ascii_lowercase(), apex)
}
