use std::{io, process::ExitCode};

use rootline_cli::{Args, CliError, Session, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", Args::USAGE);
        return Ok(());
    }

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    init_tracing(&settings.log_level);

    let config = settings.solver_config()?;
    let mut session =
        Session::new(io::stdin().lock(), io::stdout().lock(), config).system(args.system);
    session.run()
}

/// Logs to stderr, filtered by `RUST_LOG` or else the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
