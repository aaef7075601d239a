use crate::checks::{self, text_patterns::PatternSet, Finding, ThreatCategory};
use crate::config::RuleTable;
use crate::error::EngineError;
use crate::snapshot::PageSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Findings at or above this severity mark a page as flagged; hosts use the
/// same threshold for warning overlays and blocked counters.
pub const HIGH_SEVERITY: u8 = 70;

/// The immutable output of one analysis. A pure function of the snapshot
/// and the rule table, except for the recorded timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub domain: String,
    pub analyzed_at: DateTime<Utc>,
    /// Findings in check execution order, stable across runs.
    pub findings: Vec<Finding>,
    pub safety_score: u8,
}

impl AnalysisResult {
    pub fn has_high_severity(&self) -> bool {
        self.findings.iter().any(|f| f.severity >= HIGH_SEVERITY)
    }
}

/// The analysis engine. Holds the rule table with all regex patterns
/// pre-compiled; `analyze` is stateless between calls and safe to use from
/// any number of threads.
pub struct Analyzer {
    rules: RuleTable,
    misinformation: PatternSet,
    scam: PatternSet,
    clickbait: PatternSet,
}

impl Analyzer {
    pub fn new(rules: RuleTable) -> Result<Self, EngineError> {
        let misinformation =
            PatternSet::compile(ThreatCategory::Misinformation, &rules.misinformation)?;
        let scam = PatternSet::compile(ThreatCategory::Scam, &rules.scam)?;
        let clickbait = PatternSet::compile(ThreatCategory::Clickbait, &rules.clickbait)?;
        Ok(Analyzer {
            rules,
            misinformation,
            scam,
            clickbait,
        })
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Runs every check in fixed order against one snapshot and reduces the
    /// findings to a safety score.
    pub fn analyze(&self, snapshot: &PageSnapshot) -> Result<AnalysisResult, EngineError> {
        snapshot.validate()?;

        let mut findings = Vec::new();
        findings.extend(checks::domain_reputation::check(snapshot, &self.rules));
        findings.extend(self.misinformation.evaluate(&snapshot.visible_text));
        findings.extend(self.scam.evaluate(&snapshot.visible_text));
        findings.extend(self.clickbait.evaluate(&snapshot.visible_text));
        findings.extend(checks::forms::check(snapshot, &self.rules));
        findings.extend(checks::transport::check(snapshot, &self.rules));
        findings.extend(checks::content_quality::check(snapshot, &self.rules));

        let safety_score = safety_score(&findings);
        log::debug!(
            "analyzed {}: {} finding(s), score {safety_score}",
            snapshot.url,
            findings.len()
        );

        Ok(AnalysisResult {
            url: snapshot.url.clone(),
            domain: snapshot.domain.clone(),
            analyzed_at: Utc::now(),
            findings,
            safety_score,
        })
    }
}

/// `round(100 - (max * 0.6 + mean * 0.4))`, clamped into [0,100].
/// No findings means a perfect score.
pub fn safety_score(findings: &[Finding]) -> u8 {
    if findings.is_empty() {
        return 100;
    }
    let max = findings.iter().map(|f| f.severity).max().unwrap_or(0) as f64;
    let sum: u32 = findings.iter().map(|f| f.severity as u32).sum();
    let avg = sum as f64 / findings.len() as f64;
    let score = (100.0 - (max * 0.6 + avg * 0.4)).round();
    score.clamp(0.0, 100.0) as u8
}
