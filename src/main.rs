use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use torrent_pprint::cli::{self, Args, CliError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let result = cli::run(&args, &mut io::stdout().lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::NotAFile(path)) => {
            tracing::debug!("{} is not a regular file", path.display());
            println!("Error: The specified torrent file does not exist");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let e = anyhow::Error::new(e)
                .context(format!("failed to inspect {}", args.torrent_file.display()));
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
