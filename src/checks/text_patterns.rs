use super::{Finding, ThreatCategory};
use crate::config::PatternCategory;
use crate::error::EngineError;
use regex::Regex;

/// One category's pattern list, compiled once at engine construction.
#[derive(Debug)]
pub struct PatternSet {
    category: ThreatCategory,
    patterns: Vec<Regex>,
    base: u32,
    per_match: u32,
    cap: u32,
}

impl PatternSet {
    pub fn compile(category: ThreatCategory, config: &PatternCategory) -> Result<Self, EngineError> {
        let patterns = config
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| EngineError::InvalidPattern { category, source })?;
        Ok(PatternSet {
            category,
            patterns,
            base: config.base,
            per_match: config.per_match,
            cap: config.cap,
        })
    }

    /// Counts how many patterns hit at least once (not total occurrences)
    /// and applies the category's severity formula.
    pub fn evaluate(&self, text: &str) -> Option<Finding> {
        if text.is_empty() {
            return None;
        }
        let matched = self.patterns.iter().filter(|re| re.is_match(text)).count() as u32;
        if matched == 0 {
            return None;
        }
        let severity = (self.base + matched * self.per_match).min(self.cap);
        log::debug!("{} patterns: {matched} matched, severity {severity}", self.category);
        Some(Finding::new(self.category, severity, describe(self.category, matched)))
    }
}

fn describe(category: ThreatCategory, matched: u32) -> String {
    match category {
        ThreatCategory::Misinformation => {
            format!("Found {matched} suspicious phrase(s) commonly used in fake news.")
        }
        ThreatCategory::Scam => {
            format!("Detected {matched} scam/phishing indicator(s). Be very careful!")
        }
        ThreatCategory::Clickbait => {
            format!("Found {matched} clickbait pattern(s). Content may be sensationalized.")
        }
        _ => format!("Matched {matched} suspicious pattern(s)."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleTable;

    fn misinformation_set() -> PatternSet {
        let rules = RuleTable::default();
        PatternSet::compile(ThreatCategory::Misinformation, &rules.misinformation).unwrap()
    }

    #[test]
    fn counts_distinct_patterns_not_occurrences() {
        let set = misinformation_set();
        // The same pattern hit three times still counts once.
        let text = "one weird trick, another one weird trick, a third one weird trick";
        let finding = set.evaluate(text).unwrap();
        assert_eq!(finding.severity, 40 + 15);
    }

    #[test]
    fn two_patterns_yield_formula_severity() {
        let set = misinformation_set();
        let finding = set
            .evaluate("Try this one weird trick. Wake up sheeple, the time has come.")
            .unwrap();
        assert_eq!(finding.severity, 70);
        assert_eq!(
            finding.description,
            "Found 2 suspicious phrase(s) commonly used in fake news."
        );
    }

    #[test]
    fn severity_is_capped() {
        let set = misinformation_set();
        let text = "BREAKING: SHOCKING doctors hate this one weird trick. \
                    Big pharma doesn't want you to see how mainstream media lies. \
                    They don't want you to know. Exposed: the truth. Wake up sheeple.";
        let finding = set.evaluate(text).unwrap();
        assert_eq!(finding.severity, 90);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = RuleTable::default();
        let set = PatternSet::compile(ThreatCategory::Scam, &rules.scam).unwrap();
        let finding = set.evaluate("CONGRATULATIONS! You won a cruise").unwrap();
        assert_eq!(finding.category, ThreatCategory::Scam);
        assert_eq!(finding.severity, 70);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(misinformation_set().evaluate("").is_none());
    }

    #[test]
    fn invalid_pattern_reports_category() {
        let config = crate::config::PatternCategory {
            patterns: vec!["(unclosed".to_string()],
            base: 20,
            per_match: 10,
            cap: 50,
        };
        let err = PatternSet::compile(ThreatCategory::Clickbait, &config).unwrap_err();
        match err {
            EngineError::InvalidPattern { category, .. } => {
                assert_eq!(category, ThreatCategory::Clickbait)
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }
}
