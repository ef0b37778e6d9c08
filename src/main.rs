use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error, LevelFilter};

use image_entropy_lib::output::NO_PATH_MESSAGE;
use image_entropy_lib::{analyze, error_line, probe_decoders, write_outcome, Config};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about = "Image entropy screening - prints SAFE|<score>, UNSAFE|<score> or ERROR|<message>")]
struct Args {
    /// Path to the image file to analyze
    path: Option<PathBuf>,

    /// Path to an optional TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,
}

/// Print one protocol line on stdout
fn emit_error(message: &str) {
    println!("{}", error_line(message));
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Invalid configuration {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// stderr is merged into stdout by the caller, so logging stays off unless asked for
fn init_logging(config: &Config) {
    let _ = env_logger::Builder::new()
        .filter_level(config.level_filter().unwrap_or(LevelFilter::Off))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn main() -> ExitCode {
    // Panics are reported as protocol lines; keep the default hook's text off the stream
    panic::set_hook(Box::new(|info| error!("{}", info)));

    if let Err(e) = probe_decoders() {
        emit_error(&e.to_string());
        return ExitCode::from(1);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                emit_error(&e.to_string());
                return ExitCode::SUCCESS;
            }
        },
    };

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            emit_error(&format!("{:#}", e));
            return ExitCode::SUCCESS;
        }
    };

    init_logging(&config);
    debug!("Configuration: {:?}", config);

    let Some(path) = args.path else {
        emit_error(NO_PATH_MESSAGE);
        return ExitCode::SUCCESS;
    };

    let outcome = analyze(&path);
    debug!("Outcome for {}: {:?}", path.display(), outcome);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_outcome(&mut handle, &outcome, &path, config.report_not_found) {
        error!("Failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
