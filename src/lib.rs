pub mod analyzer;
pub mod checks;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod statistics;

pub use analyzer::{Analyzer, AnalysisResult, HIGH_SEVERITY};
pub use checks::{Finding, ThreatCategory};
pub use config::RuleTable;
pub use error::{EngineError, ValidationError};
pub use snapshot::{FormFieldCounts, PageSnapshot};
pub use statistics::ScanStats;
