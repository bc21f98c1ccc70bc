use clap::error::ErrorKind;
use clap::Parser;
use log::{error, LevelFilter};
use mirrorchk::cases::TestCase;
use mirrorchk::params::TestParams;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Run a single local/remote data integrity case",
    long_about = None
)]
struct Args {
    /// One of: create_sparse, create_front_hole, write_data, read_data
    test_case: String,

    /// Directory root reached through the local storage endpoint
    local_path: PathBuf,

    /// Directory root reached through the remote storage endpoint
    remote_path: PathBuf,

    /// Total logical size of the file under test, in bytes
    file_size: u64,

    /// Size of a single write payload, in bytes
    write_length: usize,

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

    let case = match TestCase::from_name(&args.test_case) {
        Ok(case) => case,
        Err(_) => {
            println!("Invalid Test Case.");
            std::process::exit(1);
        }
    };

    let params = TestParams::new(
        args.local_path,
        args.remote_path,
        args.file_size,
        args.write_length,
    );

    match case.run(&params) {
        Ok(outcome) => {
            if !outcome.passed() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
