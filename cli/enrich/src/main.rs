//! rw-enrich CLI
//!
//! Batch enrichment of firewall-rule exports against layered reference
//! tables.

use clap::Parser;

mod args;

use args::Cli;
use rw_cli_common::{format_number, init_logging};
use rw_error::{classify, Severity};
use rw_stats::SideSnapshot;

fn main() {
    let args = Cli::parse();

    if let Err(e) = init_logging(args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = args.to_config();

    let stats = match rw_pipeline::enrich::run(&config) {
        Ok(stats) => stats,
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
    eprintln!("Enrichment completed:");
    eprintln!("  Rows processed: {}", format_number(stats.rows_processed));
    print_side("Source", &stats.source);
    print_side("Destination", &stats.destination);

    if let Some(duration) = stats.duration() {
        let secs = duration.num_milliseconds() as f64 / 1000.0;
        eprintln!();
        eprintln!("  Duration: {:.2}s", secs);
    }

    eprintln!();
    eprintln!("New columns added:");
    eprintln!("  - {}", config.source_analysis_column());
    eprintln!("  - {}", config.dest_analysis_column());
}

fn print_side(label: &str, side: &SideSnapshot) {
    eprintln!();
    eprintln!("  {label} analysis:");
    eprintln!("    Total mapped:  {}", format_number(side.mapped));
    eprintln!("    IPs found:     {}", format_number(side.ips));
    eprintln!("    Subnets found: {}", format_number(side.subnets));
    for (table, count) in &side.by_table {
        eprintln!("      - from {}: {}", table, format_number(*count));
    }
    eprintln!("    Unmatched:     {}", format_number(side.unmatched));
    eprintln!("    Unparseable:   {}", format_number(side.unparseable));
}
