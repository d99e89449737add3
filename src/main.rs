// Entrypoint for the probe.
// - Parses `<image-file> <jwt-token>` and hands them to `run`.
// - Maps every failure to exit status 1; a non-200 answer still exits 0.

use clap::error::ErrorKind;
use clap::Parser;
use flashcards_probe::api::{ProbeConfig, DEFAULT_BASE_URL};
use flashcards_probe::error::ProbeError;
use flashcards_probe::payload::RequestDefaults;
use flashcards_probe::run;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: flashcards-probe <image-file> <jwt-token>\n\
                     Example: flashcards-probe diagram.png your-jwt-token-here";

#[derive(Debug, Parser)]
#[command(name = "flashcards-probe", version, about = "Send an image to the AI flashcards endpoint")]
struct Cli {
    /// Image to turn into flashcards
    image: PathBuf,
    /// JWT sent as the bearer token
    token: String,
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!(error = %e, "argument parsing failed");
            println!("{}", USAGE);
            return exit_code(&ProbeError::Usage);
        }
    };

    let config = ProbeConfig {
        base_url: cli.base_url,
        ..ProbeConfig::default()
    };
    let result = {
        let mut stdout = std::io::stdout().lock();
        run(&config, &RequestDefaults::default(), &cli.image, &cli.token, &mut stdout)
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            exit_code(&e)
        }
    }
}

fn exit_code(err: &ProbeError) -> ExitCode {
    ExitCode::from(err.exit_code())
}
