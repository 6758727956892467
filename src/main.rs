use anyhow::Result;
use std::env;
use std::io;

use card_validator::{load_bin_table, Command, Config, LoadReport, Session, USAGE, VERSION, WELCOME};

fn main() -> Result<()> {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("card-validator {}", VERSION);
            return Ok(());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    println!("{}", WELCOME);

    let report = match load_bin_table(&config.banks_path, config.mode) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ Error loading bank data: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("✓ Bank data loaded: {} ranges ({} mode)", report.table.len(), config.mode.name());
    warn_about(&report, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&report.table, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}

/// Surface what the lenient loader tolerated, on stderr
fn warn_about(report: &LoadReport, config: &Config) {
    for line in &report.skipped_lines {
        eprintln!(
            "⚠️  {} line {}: not 3 fields, skipped",
            config.banks_path.display(),
            line
        );
    }

    let ranges = report.table.ranges();
    for (first, later) in report.table.overlaps() {
        eprintln!(
            "⚠️  '{}' overlaps earlier '{}'; shared BINs resolve to '{}'",
            ranges[later].name, ranges[first].name, ranges[first].name
        );
    }
}
