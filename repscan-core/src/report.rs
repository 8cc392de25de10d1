// Report generation from bulk check results

use chrono::{DateTime, Local};
use repscan_checker::{ReputationRecord, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default file name for CSV exports.
pub const DEFAULT_CSV_FILENAME: &str = "domain-reputation-report.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub records: Vec<ReputationRecord>,
    pub risk_counts: RiskCounts,
    pub blacklisted_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

pub fn gather_report_data(records: &[ReputationRecord]) -> ReportData {
    let mut risk_counts = RiskCounts {
        low: 0,
        medium: 0,
        high: 0,
    };
    let mut blacklisted_count = 0;

    for record in records {
        match record.risk {
            RiskLevel::Low => risk_counts.low += 1,
            RiskLevel::Medium => risk_counts.medium += 1,
            RiskLevel::High => risk_counts.high += 1,
        }
        if record.blacklisted {
            blacklisted_count += 1;
        }
    }

    ReportData {
        records: records.to_vec(),
        risk_counts,
        blacklisted_count,
    }
}

/// Timestamps share one display form so the results table and the CSV agree.
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();

    // Header
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                          DOMAIN REPUTATION REPORT\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("Total domains checked: {}\n\n", data.records.len()));

    if data.risk_counts.high > 0 {
        report.push_str(&format!(
            "  [HIGH]     {}  (score 40 or below)\n",
            data.risk_counts.high
        ));
    }
    if data.risk_counts.medium > 0 {
        report.push_str(&format!(
            "  [MEDIUM]   {}  (score 41 to 70)\n",
            data.risk_counts.medium
        ));
    }
    if data.risk_counts.low > 0 {
        report.push_str(&format!(
            "  [LOW]      {}  (score above 70)\n",
            data.risk_counts.low
        ));
    }
    report.push('\n');

    report.push_str(&format!(
        "Blacklisted domains: {}\n\n",
        data.blacklisted_count
    ));

    // Per-domain results
    if !data.records.is_empty() {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("RESULTS\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        report.push_str(&format!(
            "{:<32} {:>5}  {:<9} {:<12} {}\n",
            "Domain", "Score", "Risk", "Blacklisted", "Last Checked"
        ));

        for record in &data.records {
            report.push_str(&format!(
                "{:<32} {:>5}  {:<9} {:<12} {}\n",
                record.domain,
                record.score,
                record.risk.as_str(),
                if record.blacklisted { "Yes" } else { "No" },
                format_timestamp(&record.last_checked)
            ));
        }
        report.push('\n');
    }

    // Footer
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                                End of Report\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("\nGenerated by Repscan - a bulk domain reputation checker\n");
    report.push_str("Scores are simulated placeholders, not real threat intelligence.\n\n");

    report
}

pub fn generate_json_report(data: &ReportData) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Repscan",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": Local::now().to_rfc3339(),
                "format": "json",
                "disclaimer": "Scores are simulated placeholders, not real threat intelligence"
            },
            "summary": {
                "total_domains": data.records.len(),
                "blacklisted": data.blacklisted_count,
                "risk_breakdown": {
                    "low": data.risk_counts.low,
                    "medium": data.risk_counts.medium,
                    "high": data.risk_counts.high
                }
            },
            "records": data.records
        }
    });

    serde_json::to_string_pretty(&json_report)
}

/// Rows are written verbatim; embedded commas or quotes in a domain are not
/// escaped, matching the export behavior this replaces.
pub fn generate_csv_report(records: &[ReputationRecord]) -> String {
    let mut csv = String::from("Domain,Score,Risk Level,Blacklisted,Last Checked\n");

    for record in records {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            record.domain,
            record.score,
            record.risk.as_str(),
            if record.blacklisted { "Yes" } else { "No" },
            format_timestamp(&record.last_checked)
        ));
    }

    csv
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
