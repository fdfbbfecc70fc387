use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use solmv::log_status;
use solmv::renamer::{self, RunReport};

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "solmv")]
#[command(version = VERSION)]
#[command(about = "Rename Solidity files after their last contract declaration")]
struct Cli {
    /// Directory containing the .sol files to process (read-only)
    #[arg(long, value_name = "DIR")]
    source: PathBuf,

    /// Directory that receives the renamed copies. Cleared before every run.
    #[arg(long, value_name = "DIR")]
    target: PathBuf,
}

fn log_report(report: &RunReport) {
    for item in &report.files {
        match &item.output {
            Some(out) => log_status!("rename", "{} -> {}", item.file, out),
            None => log_status!("rename", "Skipped {} (no contract declaration)", item.file),
        }
    }
    log_status!(
        "rename",
        "{} copied, {} skipped",
        report.copied,
        report.skipped
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = renamer::run(&cli.source, &cli.target);

    if let Ok(report) = &result {
        log_report(report);
    }

    let success = result.is_ok();
    if output::print_result(result).is_err() {
        return ExitCode::FAILURE;
    }

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
