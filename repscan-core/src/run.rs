use indicatif::{ProgressBar, ProgressStyle};
use repscan_checker::checker::ScoreSource;
use repscan_checker::{Checker, ReputationRecord};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::warn;

/// Options for configuring a bulk check operation
pub struct CheckOptions {
    pub domains: Vec<String>,
    pub delay: Duration,
    pub show_progress_bars: bool,
    /// Override for the evaluator's score source, mainly for tests and
    /// callers wiring in a real reputation client.
    pub score_source: Option<ScoreSource>,
}

/// Cloneable busy/idle flag so a caller can gate its interface while a
/// bulk check is in flight.
#[derive(Clone, Default)]
pub struct RunState {
    busy: Arc<AtomicBool>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }

    fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::Relaxed);
    }
}

/// Callback for reporting check progress
pub type CheckProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Callback for reporting individual records as they come in
pub type CheckResultCallback = Arc<dyn Fn(ReputationRecord) + Send + Sync>;

/// Execute a bulk check with the given options.
/// Evaluates each domain strictly one at a time and returns the successful
/// records in input order; domains whose evaluation fails are logged and
/// omitted from the results.
pub async fn execute_bulk_check(
    options: CheckOptions,
    state: RunState,
    progress_callback: Option<CheckProgressCallback>,
    result_callback: Option<CheckResultCallback>,
) -> Result<Vec<ReputationRecord>, String> {
    let CheckOptions {
        domains,
        delay,
        show_progress_bars,
        score_source,
    } = options;

    state.set_busy(true);

    // Set up single progress bar for overall check progress (only if enabled)
    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting check...");
        Some(pb)
    } else {
        None
    };

    let mut checker = Checker::with_delay(delay);
    if let Some(source) = score_source {
        checker = checker.with_score_source(source);
    }

    let total = domains.len();
    let mut records = Vec::new();
    let mut checked = 0usize;

    for (idx, domain) in domains.iter().enumerate() {
        if let Some(ref callback) = progress_callback
            && total > 1
        {
            callback(format!("Checking domain {}/{}: {}", idx + 1, total, domain));
        }

        match checker.check(domain).await {
            Ok(record) => {
                if let Some(ref callback) = result_callback {
                    callback(record.clone());
                }
                records.push(record);
            }
            Err(e) => {
                warn!("Reputation check failed for {}: {}", domain, e);
                if let Some(ref callback) = progress_callback {
                    callback(format!("[!]  Skipping {}: {}", domain, e));
                }
            }
        }

        checked += 1;
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!(
                "Checking... {} of {} domains processed",
                checked, total
            ));
            pb.tick();
        }
    }

    // Finish progress bar (only if enabled)
    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Check complete! {} domains processed", checked));
    }

    state.set_busy(false);
    Ok(records)
}
