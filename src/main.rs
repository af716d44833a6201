use std::env;
use std::process;

use jelly::{LogError, Logger};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let die = match args.iter().position(|arg| arg == "--die") {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    };

    if args.is_empty() {
        return Err(CliError::Usage);
    }

    let log_name = args.remove(0);
    let message = args.join(" ");

    let log = Logger::new(&log_name)?;
    println!("{}", log.path().display());

    jelly::info!(log, "started", message);
    jelly::debug!(log, "words", args.len());

    if die {
        jelly::die!(log, "giving up", message);
    }

    jelly::info!(log, "finished");

    match log.take_write_error() {
        Some(err) => Err(CliError::Write(err)),
        None => Ok(()),
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Usage: jelly <log-name> [message...] [--die]")]
    Usage,

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("failed to write log file: {0}")]
    Write(std::io::Error),
}
