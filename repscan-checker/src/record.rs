use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// Scores below this are treated as blacklisted
const BLACKLIST_THRESHOLD: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Band thresholds: above 70 is low risk, 41 to 70 medium, 40 and below high.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskLevel::Low
        } else if score > 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationRecord {
    pub domain: String,
    pub score: u8,
    pub risk: RiskLevel,
    pub blacklisted: bool,
    pub last_checked: DateTime<Local>,
}

impl ReputationRecord {
    /// Build a record from a generated score. The risk band and blacklist
    /// flag are fixed here and never recomputed afterward.
    pub fn from_score(domain: String, score: u8, last_checked: DateTime<Local>) -> Self {
        Self {
            domain,
            score,
            risk: RiskLevel::from_score(score),
            blacklisted: score < BLACKLIST_THRESHOLD,
            last_checked,
        }
    }
}
