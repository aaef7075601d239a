use super::{Finding, ThreatCategory};
use crate::config::RuleTable;
use crate::snapshot::PageSnapshot;

/// Content-quality heuristics: shouting (caps ratio) and exclamation
/// flooding. Both ratios divide by the character count, so empty text is
/// handled up front and never divides by zero.
pub fn check(snapshot: &PageSnapshot, rules: &RuleTable) -> Vec<Finding> {
    let mut findings = Vec::new();
    let text = &snapshot.visible_text;
    let length = text.chars().count();
    if length == 0 {
        return findings;
    }

    let caps = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    if caps as f64 / length as f64 > rules.quality.caps_ratio {
        findings.push(Finding::new(
            ThreatCategory::LowQuality,
            rules.fixed_severity.caps_shouting,
            "Excessive capitalization detected. This is often used in sensationalized content.",
        ));
    }

    let exclamations = text.chars().filter(|&c| c == '!').count();
    if exclamations as u32 > rules.quality.exclamation_count
        && exclamations as f64 / length as f64 > rules.quality.exclamation_density
    {
        findings.push(Finding::new(
            ThreatCategory::Clickbait,
            rules.fixed_severity.exclamation_flood,
            "Excessive exclamation marks detected. Content may be overly sensationalized.",
        ));
    }

    findings
}
