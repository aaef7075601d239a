use super::{Finding, ThreatCategory};
use crate::config::RuleTable;
use crate::snapshot::PageSnapshot;

/// Suspicious form inspection. The two rules are independent, so this check
/// can emit zero, one, or two findings.
pub fn check(snapshot: &PageSnapshot, rules: &RuleTable) -> Vec<Finding> {
    let mut findings = Vec::new();

    if snapshot.form_fields.password > 0 && !snapshot.protocol.contains("https") {
        findings.push(Finding::new(
            ThreatCategory::Phishing,
            rules.fixed_severity.password_on_http,
            "Password field detected on non-secure (HTTP) page. Never enter passwords here!",
        ));
    }

    if snapshot.form_fields.credit_card_like > 0 {
        let domain = snapshot.domain.to_lowercase();
        let trusted = rules
            .trusted_payment_domains
            .iter()
            .any(|d| domain.contains(d.as_str()));
        if !trusted {
            findings.push(Finding::new(
                ThreatCategory::Scam,
                rules.fixed_severity.card_field_untrusted,
                "Credit card input detected. Verify this is a legitimate payment page before entering details.",
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FormFieldCounts;

    fn snapshot(protocol: &str, domain: &str, fields: FormFieldCounts) -> PageSnapshot {
        PageSnapshot {
            url: format!("{protocol}://{domain}/"),
            domain: domain.to_string(),
            visible_text: String::new(),
            protocol: protocol.to_string(),
            form_fields: fields,
        }
    }

    #[test]
    fn password_on_http_is_phishing() {
        let rules = RuleTable::default();
        let findings = check(
            &snapshot("http", "example.com", FormFieldCounts { password: 1, ..Default::default() }),
            &rules,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, ThreatCategory::Phishing);
        assert_eq!(findings[0].severity, 90);
    }

    #[test]
    fn password_on_https_is_fine() {
        let rules = RuleTable::default();
        let findings = check(
            &snapshot("https", "example.com", FormFieldCounts { password: 2, ..Default::default() }),
            &rules,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn card_field_on_untrusted_domain_is_scam() {
        let rules = RuleTable::default();
        let findings = check(
            &snapshot(
                "https",
                "cheap-deals.example",
                FormFieldCounts { credit_card_like: 1, ..Default::default() },
            ),
            &rules,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, ThreatCategory::Scam);
        assert_eq!(findings[0].severity, 70);
    }

    #[test]
    fn card_field_on_payment_provider_is_fine() {
        let rules = RuleTable::default();
        let findings = check(
            &snapshot(
                "https",
                "checkout.stripe.com",
                FormFieldCounts { credit_card_like: 3, ..Default::default() },
            ),
            &rules,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn both_rules_fire_independently() {
        let rules = RuleTable::default();
        let findings = check(
            &snapshot(
                "http",
                "shady.example",
                FormFieldCounts { password: 1, credit_card_like: 1, form_count: 1 },
            ),
            &rules,
        );
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].category, ThreatCategory::Phishing);
        assert_eq!(findings[1].category, ThreatCategory::Scam);
    }
}
