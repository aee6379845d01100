use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stop_announcer::announcer::{Announcer, AnnouncerConfig};
use stop_announcer::stations::read_stations;

const PATH_PROMPT: &str = "Please enter the file path: ";

/// Print the stopping-pattern announcement for a station list.
#[derive(Parser, Debug)]
#[command(name = "stop-announcer", version, about)]
struct Args {
    /// Station list file: one "<name>, <true|false>" per line, or a .json
    /// array of {"name", "stops"} objects. Prompted for when omitted.
    path: Option<PathBuf>,

    /// Leave out express clauses that directly follow a stopping-all run
    #[arg(long)]
    elide_express_after_contiguous: bool,

    /// Don't re-segment stations left over after the first pass
    #[arg(long)]
    no_recover_leftovers: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the announcement
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let path = match args.path {
        Some(path) => path,
        None => match prompt_for_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let stations = match read_stations(&path) {
        Ok(stations) => stations,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = AnnouncerConfig::new(
        args.elide_express_after_contiguous,
        !args.no_recover_leftovers,
    );
    println!("{}", Announcer::new(config).announcement(&stations));

    ExitCode::SUCCESS
}

/// Ask for a path on stdin until an existing file is named.
fn prompt_for_path() -> io::Result<PathBuf> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{PATH_PROMPT}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no file path given",
            ));
        }

        let path = PathBuf::from(line.trim());
        if path.is_file() {
            return Ok(path);
        }
        println!("File not found. Please try again.");
    }
}
