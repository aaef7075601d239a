use crate::analyzer::AnalysisResult;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aggregate scan counters kept by the host between runs. The engine itself
/// holds no state; these belong entirely to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    pub pages_scanned: u64,
    /// Pages with at least one finding at or above the high-severity
    /// threshold.
    pub pages_flagged: u64,
    pub started: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Default for ScanStats {
    fn default() -> Self {
        let now = Utc::now();
        ScanStats {
            pages_scanned: 0,
            pages_flagged: 0,
            started: now,
            last_updated: now,
        }
    }
}

impl ScanStats {
    /// Load stats from a JSON file, starting fresh if the file is missing.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(ScanStats::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stats file: {path}"))?;
        let stats = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse stats file: {path}"))?;
        Ok(stats)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create stats directory: {}", parent.display())
                })?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write stats file: {path}"))?;
        Ok(())
    }

    pub fn record(&mut self, result: &AnalysisResult) {
        self.pages_scanned += 1;
        if result.has_high_severity() {
            self.pages_flagged += 1;
        }
        self.last_updated = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Finding, ThreatCategory};

    fn result_with_severity(severity: u32) -> AnalysisResult {
        let findings = if severity == 0 {
            vec![]
        } else {
            vec![Finding::new(ThreatCategory::Scam, severity, "test")]
        };
        AnalysisResult {
            url: "https://example.com/".to_string(),
            domain: "example.com".to_string(),
            analyzed_at: Utc::now(),
            safety_score: crate::analyzer::safety_score(&findings),
            findings,
        }
    }

    #[test]
    fn flagged_counter_uses_high_severity_threshold() {
        let mut stats = ScanStats::default();
        stats.record(&result_with_severity(0));
        stats.record(&result_with_severity(40));
        stats.record(&result_with_severity(70));
        stats.record(&result_with_severity(95));
        assert_eq!(stats.pages_scanned, 4);
        assert_eq!(stats.pages_flagged, 2);
    }

    #[test]
    fn missing_file_starts_fresh() {
        let stats = ScanStats::load("/nonexistent/path/stats.json").unwrap();
        assert_eq!(stats.pages_scanned, 0);
        assert_eq!(stats.pages_flagged, 0);
    }
}
