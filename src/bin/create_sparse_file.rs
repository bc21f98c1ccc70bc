use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error, LevelFilter};
use mirrorchk::sparse;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Create a sparse file with a hole in the middle", long_about = None)]
struct Args {
    file_name: PathBuf,

    /// Total logical size of the file, in bytes
    file_size: u64,

    /// Number of bytes written at each end of the file
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

    if let Err(e) = sparse::create_sparse_file(&args.file_name, args.file_size, args.write_length)
    {
        error!("{}", e);
        std::process::exit(1);
    }

    #[cfg(unix)]
    if let Ok(allocated) = sparse::allocated_size(&args.file_name) {
        debug!(
            "allocated {} of {} logical bytes",
            allocated, args.file_size
        );
    }
}
