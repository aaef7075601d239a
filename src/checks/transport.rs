use super::{Finding, ThreatCategory};
use crate::config::RuleTable;
use crate::snapshot::PageSnapshot;

/// Insecure transport check. Independent of the password-on-http phishing
/// rule; both can fire for the same page.
pub fn check(snapshot: &PageSnapshot, rules: &RuleTable) -> Option<Finding> {
    if snapshot.protocol.contains("https") {
        return None;
    }
    Some(Finding::new(
        ThreatCategory::Security,
        rules.fixed_severity.insecure_transport,
        "This page is not using HTTPS encryption. Your data may not be secure.",
    ))
}
