// Tests for the sequential bulk runner

use repscan_checker::CheckError;
use repscan_checker::checker::ScoreSource;
use repscan_core::run::{
    CheckOptions, CheckProgressCallback, CheckResultCallback, RunState, execute_bulk_check,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn options(domains: &[&str], source: ScoreSource) -> CheckOptions {
    CheckOptions {
        domains: domains.iter().map(|d| d.to_string()).collect(),
        delay: Duration::ZERO,
        show_progress_bars: false,
        score_source: Some(source),
    }
}

#[tokio::test]
async fn test_results_preserve_input_order() {
    let source: ScoreSource = Arc::new(|_domain| Ok(85));

    let records = execute_bulk_check(
        options(&["a.com", "b.com", "c.com"], source),
        RunState::new(),
        None,
        None,
    )
    .await
    .unwrap();

    let domains: Vec<&str> = records.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(domains, vec!["a.com", "b.com", "c.com"]);
}

#[tokio::test]
async fn test_failing_domains_are_skipped() {
    let source: ScoreSource = Arc::new(|domain: &str| {
        if domain == "bad.example" {
            Err(CheckError::ScoreSource("feed unavailable".to_string()))
        } else {
            Ok(50)
        }
    });

    let records = execute_bulk_check(
        options(&["a.com", "bad.example", "c.com"], source),
        RunState::new(),
        None,
        None,
    )
    .await
    .unwrap();

    let domains: Vec<&str> = records.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(domains, vec!["a.com", "c.com"]);
}

#[tokio::test]
async fn test_empty_domain_list_yields_empty_results() {
    let source: ScoreSource = Arc::new(|_domain| Ok(50));

    let records = execute_bulk_check(options(&[], source), RunState::new(), None, None)
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_duplicate_domains_are_checked_individually() {
    let source: ScoreSource = Arc::new(|_domain| Ok(50));

    let records = execute_bulk_check(
        options(&["a.com", "a.com"], source),
        RunState::new(),
        None,
        None,
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_result_callback_fires_per_success() {
    let source: ScoreSource = Arc::new(|domain: &str| {
        if domain == "bad.example" {
            Err(CheckError::ScoreSource("feed unavailable".to_string()))
        } else {
            Ok(50)
        }
    });

    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let result_callback: CheckResultCallback = Arc::new(move |record| {
        seen_clone.lock().unwrap().push(record.domain);
    });

    execute_bulk_check(
        options(&["a.com", "bad.example", "c.com"], source),
        RunState::new(),
        None,
        Some(result_callback),
    )
    .await
    .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec!["a.com".to_string(), "c.com".to_string()]);
}

#[tokio::test]
async fn test_run_state_busy_during_and_idle_after() {
    let source: ScoreSource = Arc::new(|_domain| Ok(50));
    let state = RunState::new();

    let observed: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
    let observed_clone = observed.clone();
    let state_clone = state.clone();
    let progress_callback: CheckProgressCallback = Arc::new(move |_msg| {
        observed_clone.lock().unwrap().push(state_clone.is_busy());
    });

    execute_bulk_check(
        options(&["a.com", "b.com"], source),
        state.clone(),
        Some(progress_callback),
        None,
    )
    .await
    .unwrap();

    let observed = observed.lock().unwrap();
    assert!(!observed.is_empty());
    assert!(observed.iter().all(|busy| *busy));
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_records_derive_risk_and_blacklist_from_score() {
    let source: ScoreSource = Arc::new(|domain: &str| match domain {
        "low.example" => Ok(95),
        "mid.example" => Ok(55),
        _ => Ok(10),
    });

    let records = execute_bulk_check(
        options(&["low.example", "mid.example", "high.example"], source),
        RunState::new(),
        None,
        None,
    )
    .await
    .unwrap();

    assert_eq!(records[0].risk.as_str(), "low");
    assert!(!records[0].blacklisted);
    assert_eq!(records[1].risk.as_str(), "medium");
    assert!(!records[1].blacklisted);
    assert_eq!(records[2].risk.as_str(), "high");
    assert!(records[2].blacklisted);
}
