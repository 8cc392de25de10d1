use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("repscan")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("repscan")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("check")
                .about(
                    "Run a simulated reputation check against a domain or a collection of \
                domains, one domain at a time. Results can be printed or exported.",
                )
                .arg(
                    arg!(-d --"domain" <DOMAIN>)
                        .required(false)
                        .help("A single domain to check")
                        .conflicts_with("domains-file"),
                )
                .arg(
                    arg!(-D --"domains-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of domains to check")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .conflicts_with("domain"),
                )
                .arg(
                    arg!(--"delay" <MILLIS>)
                        .required(false)
                        .help("Simulated lookup delay per domain, in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("500"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help(
                            "Save report to file (default: display to screen; csv saves to \
                        domain-reputation-report.csv)",
                        )
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv")
                        .value_parser(["text", "json", "csv"])
                        .default_value("text"),
                ),
        )
}
