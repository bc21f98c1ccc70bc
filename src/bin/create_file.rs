use clap::error::ErrorKind;
use clap::Parser;
use log::{error, LevelFilter};
use mirrorchk::cases::CreateCase;
use mirrorchk::params::FileParams;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Create a test file via a named creation case", long_about = None)]
struct Args {
    /// Creation case name; `sparse` is the only one implemented
    test_case: String,

    file_name: PathBuf,

    /// Total logical size of the file, in bytes
    file_size: u64,

    /// Number of bytes per write, in bytes
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

    let case = match CreateCase::from_name(&args.test_case) {
        Ok(case) => case,
        Err(_) => {
            println!("Invalid Test Case.");
            std::process::exit(1);
        }
    };

    let params = FileParams::new(&args.file_name, args.file_size, args.write_length);
    if let Err(e) = case.run(&params) {
        error!("{}", e);
        std::process::exit(1);
    }
}
