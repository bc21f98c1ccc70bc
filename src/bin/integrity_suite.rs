use clap::error::ErrorKind;
use clap::Parser;
use log::{error, LevelFilter};
use mirrorchk::config::SuiteConfig;
use mirrorchk::suite;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Run a sequence of integrity cases from a config file", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: PathBuf,

    #[arg(short, long, default_value_t = 1)]
    verbosity: u8,
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // bad arguments exit 1; --help and --version are not errors
            std::process::exit(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            });
        }
    }
}

fn main() {
    let args = parse_args();

    let log_level = match args.verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .format_timestamp_nanos()
        .filter_level(log_level)
        .init();

    let config = match SuiteConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("could not load config file: {}", e);
            std::process::exit(1);
        }
    };

    let outcomes = suite::run(&config);

    let mut failed = 0;
    for outcome in &outcomes {
        let verdict = if outcome.passed { "PASS" } else { "FAIL" };
        match &outcome.detail {
            Some(detail) if !outcome.passed => println!(
                "{} {} (file_size={}): {}",
                verdict,
                outcome.case.name(),
                outcome.file_size,
                detail
            ),
            _ => println!(
                "{} {} (file_size={})",
                verdict,
                outcome.case.name(),
                outcome.file_size
            ),
        }
        if !outcome.passed {
            failed += 1;
        }
    }
    println!("{} of {} cases passed", outcomes.len() - failed, outcomes.len());

    if failed > 0 {
        std::process::exit(1);
    }
}
