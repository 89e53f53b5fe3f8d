//! rw-clean CLI
//!
//! Pre-cleaning of firewall-rule exports before enrichment.

use clap::Parser;

mod args;

use args::Cli;
use rw_cli_common::{format_number, init_logging};
use rw_error::{classify, Severity};

fn main() {
    let args = Cli::parse();

    if let Err(e) = init_logging(args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = args.to_config();

    let summary = match rw_pipeline::clean::run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(cwd) = std::env::current_dir() {
                eprintln!("Current directory: {}", cwd.display());
            }
            let code = match classify(&e) {
                Severity::Fatal => 2,
                Severity::Warning => 1,
            };
            std::process::exit(code);
        }
    };

    // Report results to stderr
    eprintln!();
    eprintln!("Cleaning completed:");
    eprintln!(
        "  Rows processed:           {}",
        format_number(summary.rows_processed)
    );
    eprintln!(
        "  Source entries extracted: {}",
        format_number(summary.source_extracted)
    );
    eprintln!(
        "  Dest entries extracted:   {}",
        format_number(summary.dest_extracted)
    );
    eprintln!(
        "  Source ranges removed:    {}",
        format_number(summary.source_ranges_removed)
    );
    eprintln!(
        "  Dest ranges removed:      {}",
        format_number(summary.dest_ranges_removed)
    );
}
