use clap::ArgMatches;
use colored::Colorize;
use repscan_core::report::{
    DEFAULT_CSV_FILENAME, ReportFormat, gather_report_data, generate_csv_report,
    generate_json_report, generate_text_report, save_report,
};
use repscan_core::run::{CheckOptions, RunState, execute_bulk_check};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

// Helper functions for the check handler

/// Split free text into an ordered domain list: one entry per non-empty
/// trimmed line, input order preserved. No syntax validation is applied.
pub fn collect_domains(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Load domains from either a file or a single domain argument
pub fn load_domains_from_source(
    domain: Option<&String>,
    domains_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(path) = domains_file {
        load_domains_from_file(path)
    } else if let Some(domain) = domain {
        Ok(collect_domains(domain))
    } else {
        Err("Either --domain or --domains-file must be provided".to_string())
    }
}

/// Load and collect domains from a newline-delimited file
pub fn load_domains_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read domains file {}: {}", path.display(), e))?;

    let domains = collect_domains(&content);

    if domains.is_empty() {
        return Err(format!("No domains found in {}", path.display()));
    }

    Ok(domains)
}

pub async fn handle_check(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let domain = sub_matches.get_one::<String>("domain");
    let domains_file = sub_matches.get_one::<PathBuf>("domains-file");
    let delay_ms = *sub_matches.get_one::<u64>("delay").unwrap_or(&500);
    let output = sub_matches.get_one::<PathBuf>("output");
    let format_arg = sub_matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    // Load domains from source
    let domains = match load_domains_from_source(domain, domains_file) {
        Ok(domains) => domains,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if domains.is_empty() {
        eprintln!("✗ No domains to check");
        std::process::exit(1);
    }

    debug!("Loaded {} domains", domains.len());

    let format = match ReportFormat::from_str(format_arg) {
        Some(format) => format,
        None => unreachable!("clap should ensure we don't get here"),
    };

    // Print check configuration
    println!("\n🔎 Checking {} domain(s)", domains.len());
    println!("Delay: {}ms per lookup", delay_ms);
    println!("Evaluation: sequential, one domain at a time\n");

    let options = CheckOptions {
        domains,
        delay: Duration::from_millis(delay_ms),
        show_progress_bars: true, // Enable progress bars in CLI mode
        score_source: None,
    };

    let state = RunState::new();

    // Execute the bulk check with a progress callback
    let progress_callback = Arc::new(|msg: String| {
        println!("{}", msg);
    });

    let records = match execute_bulk_check(options, state, Some(progress_callback), None).await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("✗ Check failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n{} Check complete!\n", "✓".green().bold());

    let data = gather_report_data(&records);

    // Generate the report; csv defaults to its well-known file name
    let (content, default_path) = match format {
        ReportFormat::Text => (generate_text_report(&data), None),
        ReportFormat::Json => match generate_json_report(&data) {
            Ok(json) => (json, None),
            Err(e) => {
                eprintln!("✗ Failed to generate JSON report: {}", e);
                std::process::exit(1);
            }
        },
        ReportFormat::Csv => (
            generate_csv_report(&data.records),
            Some(PathBuf::from(DEFAULT_CSV_FILENAME)),
        ),
    };

    match output.cloned().or(default_path) {
        Some(path) => match save_report(&content, &path) {
            Ok(()) => println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            ),
            Err(e) => {
                eprintln!("✗ Failed to save report to {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => print!("{}", content),
    }
}
