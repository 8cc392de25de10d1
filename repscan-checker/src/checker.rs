use crate::error::Result;
use crate::record::ReputationRecord;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Pluggable score source. The default draws a random score; a real
/// reputation client slots in behind the same signature.
pub type ScoreSource = Arc<dyn Fn(&str) -> Result<u8> + Send + Sync>;

pub struct Checker {
    delay: Duration,
    score_source: ScoreSource,
}

impl Checker {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(500))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            score_source: Arc::new(|_domain| Ok(rand::random_range(0..100u8))),
        }
    }

    pub fn with_score_source(mut self, source: ScoreSource) -> Self {
        self.score_source = source;
        self
    }

    /// Evaluate a single domain. Sleeps for the simulated lookup delay,
    /// then builds the record from whatever the score source returns.
    pub async fn check(&self, domain: &str) -> Result<ReputationRecord> {
        debug!("Checking {}", domain);

        tokio::time::sleep(self.delay).await;

        let score = (self.score_source)(domain)?;
        let record = ReputationRecord::from_score(domain.trim().to_string(), score, Local::now());

        debug!(
            "{} scored {} ({})",
            record.domain,
            record.score,
            record.risk.as_str()
        );

        Ok(record)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
