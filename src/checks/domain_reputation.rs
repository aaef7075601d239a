use super::{Finding, ThreatCategory};
use crate::config::RuleTable;
use crate::snapshot::PageSnapshot;

/// Domain membership check against the satire and unreliable lists.
/// Satire takes precedence: a domain on both lists (the satire sites also
/// appear in the unreliable list) yields a satire finding, never both.
pub fn check(snapshot: &PageSnapshot, rules: &RuleTable) -> Option<Finding> {
    let domain = snapshot.normalized_domain();

    if rules.satire_domains.iter().any(|d| domain.contains(d.as_str())) {
        return Some(Finding::new(
            ThreatCategory::SatireSite,
            rules.fixed_severity.satire_site,
            "This is a known satire/parody website. Content is not meant to be taken seriously.",
        ));
    }
    if rules
        .unreliable_domains
        .iter()
        .any(|d| domain.contains(d.as_str()))
    {
        return Some(Finding::new(
            ThreatCategory::FakeNews,
            rules.fixed_severity.unreliable_domain,
            "This domain is known for publishing unreliable or false information.",
        ));
    }
    None
}
