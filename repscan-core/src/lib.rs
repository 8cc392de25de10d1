use colored::Colorize;

pub mod report;
pub mod run;

pub use run::{
    CheckOptions, CheckProgressCallback, CheckResultCallback, RunState, execute_bulk_check,
};

pub fn print_banner() {
    let banner = r#"
  _ __ ___ _ __  ___  ___ __ _ _ __
 | '__/ _ \ '_ \/ __|/ __/ _` | '_ \
 | | |  __/ |_) \__ \ (_| (_| | | | |
 |_|  \___| .__/|___/\___\__,_|_| |_|
          |_|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "  {} v{} - simulated domain reputation checks",
        "repscan".bright_white().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
}
