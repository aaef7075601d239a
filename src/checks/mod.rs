pub mod content_quality;
pub mod domain_reputation;
pub mod forms;
pub mod text_patterns;
pub mod transport;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of threat categories. Adding one means adding a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatCategory {
    FakeNews,
    Misinformation,
    Scam,
    Phishing,
    Clickbait,
    Security,
    SatireSite,
    LowQuality,
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatCategory::FakeNews => "Fake News",
            ThreatCategory::Misinformation => "Misinformation",
            ThreatCategory::Scam => "Scam",
            ThreatCategory::Phishing => "Phishing",
            ThreatCategory::Clickbait => "Clickbait",
            ThreatCategory::Security => "Security",
            ThreatCategory::SatireSite => "Satire Site",
            ThreatCategory::LowQuality => "Low Quality",
        };
        f.write_str(name)
    }
}

/// One rule's verdict: a category, a severity, and a human-readable
/// description that is deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: ThreatCategory,
    pub severity: u8,
    pub description: String,
}

impl Finding {
    /// Severity is clamped into [0,100] at construction; no check can emit
    /// a value outside the range.
    pub fn new(category: ThreatCategory, severity: u32, description: impl Into<String>) -> Self {
        Finding {
            category,
            severity: severity.min(100) as u8,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_clamped_at_construction() {
        let finding = Finding::new(ThreatCategory::Scam, 250, "over the top");
        assert_eq!(finding.severity, 100);
    }

    #[test]
    fn category_display_matches_report_labels() {
        assert_eq!(ThreatCategory::SatireSite.to_string(), "Satire Site");
        assert_eq!(ThreatCategory::FakeNews.to_string(), "Fake News");
        assert_eq!(ThreatCategory::LowQuality.to_string(), "Low Quality");
    }
}
