use serde::{Deserialize, Serialize};

/// Static rule data driving every check. Loaded once, never mutated at
/// runtime. The built-in `Default` carries the compatibility data set; a
/// YAML file can override it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub version: u32,
    /// Domain substrings of known satire/parody sites. Checked before the
    /// unreliable list, so a domain on both yields a satire finding.
    pub satire_domains: Vec<String>,
    /// Domain substrings of known unreliable publishers.
    pub unreliable_domains: Vec<String>,
    pub misinformation: PatternCategory,
    pub scam: PatternCategory,
    pub clickbait: PatternCategory,
    /// Domain substrings of payment providers where credit card fields are
    /// expected.
    pub trusted_payment_domains: Vec<String>,
    pub fixed_severity: FixedSeverity,
    pub quality: QualityThresholds,
}

/// An ordered list of case-insensitive regexes plus the severity formula
/// `min(base + matched * per_match, cap)`, where `matched` counts patterns
/// with at least one hit, not total occurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCategory {
    pub patterns: Vec<String>,
    pub base: u32,
    pub per_match: u32,
    pub cap: u32,
}

/// Severities for the checks that do not count matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedSeverity {
    pub satire_site: u32,
    pub unreliable_domain: u32,
    pub password_on_http: u32,
    pub card_field_untrusted: u32,
    pub insecure_transport: u32,
    pub caps_shouting: u32,
    pub exclamation_flood: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Uppercase-to-length ratio above which text counts as shouting.
    pub caps_ratio: f64,
    /// Minimum number of '!' characters before density is considered.
    pub exclamation_count: u32,
    /// '!' per character threshold.
    pub exclamation_density: f64,
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable {
            version: 1,
            satire_domains: vec![
                "theonion.com".to_string(),
                "babylonbee.com".to_string(),
                "clickhole.com".to_string(),
                "thebeaverton.com".to_string(),
            ],
            unreliable_domains: vec![
                "naturalnews.com".to_string(),
                "infowars.com".to_string(),
                "beforeitsnews.com".to_string(),
                "worldnewsdailyreport.com".to_string(),
                "theonion.com".to_string(),
                "babylonbee.com".to_string(),
            ],
            misinformation: PatternCategory {
                patterns: vec![
                    r"(?i)breaking:?\s*(?:shocking|exclusive|you won't believe)".to_string(),
                    r"(?i)doctors\s+(?:hate|don't want you to know)".to_string(),
                    r"(?i)one\s+weird\s+trick".to_string(),
                    r"(?i)(?:big\s+)?pharma\s+doesn't\s+want".to_string(),
                    r"(?i)mainstream\s+media\s+(?:lies|won't\s+tell)".to_string(),
                    r"(?i)(?:they|government)\s+don't\s+want\s+you\s+to\s+know".to_string(),
                    r"(?i)exposed:?\s*the\s+truth".to_string(),
                    r"(?i)wake\s+up\s+sheeple".to_string(),
                ],
                base: 40,
                per_match: 15,
                cap: 90,
            },
            scam: PatternCategory {
                patterns: vec![
                    r"(?i)congratulations!?\s*you(?:'ve)?\s+won".to_string(),
                    r"(?i)claim\s+your\s+(?:prize|reward|bitcoin)".to_string(),
                    r"(?i)(?:act|respond)\s+(?:now|immediately|fast)".to_string(),
                    r"(?i)limited\s+time\s+(?:offer|only)".to_string(),
                    r"(?i)verify\s+your\s+(?:account|identity|password)".to_string(),
                    r"(?i)urgent:?\s*(?:action|response)\s+required".to_string(),
                    r"(?i)your\s+account\s+(?:has\s+been|will\s+be)\s+(?:suspended|locked)"
                        .to_string(),
                    r"(?i)(?:click|tap)\s+here\s+to\s+(?:claim|verify|unlock)".to_string(),
                    r"(?i)(?:\$\d+(?:,\d{3})*|\d+\s*(?:btc|eth))\s+(?:waiting|available)"
                        .to_string(),
                ],
                base: 60,
                per_match: 10,
                cap: 95,
            },
            clickbait: PatternCategory {
                patterns: vec![
                    r"(?i)you\s+won't\s+believe".to_string(),
                    r"(?i)what\s+happened\s+next\s+(?:will\s+)?(?:shock|amaze)".to_string(),
                    r"(?i)number\s+\d+\s+will\s+(?:shock|surprise)".to_string(),
                    r"(?i)(?:this|these)\s+\d+\s+(?:things|facts|secrets)".to_string(),
                    r"(?i)(?:scientists|experts)\s+(?:hate|are\s+baffled)".to_string(),
                    r"(?i)gone\s+(?:wrong|sexual)".to_string(),
                ],
                base: 20,
                per_match: 10,
                cap: 50,
            },
            trusted_payment_domains: vec![
                "paypal".to_string(),
                "stripe".to_string(),
                "square".to_string(),
                "braintree".to_string(),
                "shopify".to_string(),
            ],
            fixed_severity: FixedSeverity {
                satire_site: 30,
                unreliable_domain: 85,
                password_on_http: 90,
                card_field_untrusted: 70,
                insecure_transport: 40,
                caps_shouting: 25,
                exclamation_flood: 20,
            },
            quality: QualityThresholds {
                caps_ratio: 0.3,
                exclamation_count: 10,
                exclamation_density: 0.002,
            },
        }
    }
}

impl RuleTable {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: RuleTable = serde_yaml::from_str(&content)?;
        Ok(table)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
