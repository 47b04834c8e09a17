//! Kani Morse - Main entrypoint.
//!
//! Parses the command line, loads configuration, initializes logging and runs
//! the selected encode or decode mode.

use clap::{Parser, Subcommand};
use kani_morse_lib::codec::MorseCodec;
use kani_morse_lib::config::{ConfigLoader, KaniConfig, LogConfig, ENV_PREFIX};
use kani_morse_lib::error::{KaniError, KaniResult};
use kani_morse_lib::session::{self, Direction, Source};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kani Morse.
#[derive(Parser, Debug)]
#[clap(name = "Kani Morse", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Where encode/decode read from. Without either flag, one line is read from stdin.
#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Read the whole input from this file
    #[clap(short, long, value_parser, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Use this text as the input
    #[clap(short, long)]
    text: Option<String>,
}

impl InputArgs {
    fn into_source(self) -> Source {
        match (self.file, self.text) {
            (Some(path), _) => Source::File(path),
            (None, Some(text)) => Source::Text(text),
            (None, None) => Source::Interactive,
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a mode from the interactive menu
    Menu,

    /// Convert letters to Morse code
    Encode(InputArgs),

    /// Convert whitespace-separated Morse tokens to letters
    Decode(InputArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> KaniResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| KaniError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Write the default configuration as TOML.
fn gen_config(output: &Path) -> KaniResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&KaniConfig::default())
        .map_err(|e| KaniError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Load and validate configuration, then initialize logging from it.
///
/// Exits the process if the configuration is invalid.
fn load_config(config_path: Option<&Path>) -> KaniResult<KaniConfig> {
    let config_loader = ConfigLoader::new(config_path, ENV_PREFIX);
    match config_loader.load() {
        Ok(config) => {
            init_logging(&config.log)?;
            Ok(config)
        }
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Run one encode or decode pass over the given input.
fn run_direction(direction: Direction, args: InputArgs, config_path: Option<&Path>) -> KaniResult<()> {
    let config = load_config(config_path)?;
    let codec = MorseCodec::new()?;
    session::run(
        direction,
        &args.into_source(),
        &codec,
        &config,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> KaniResult<()> {
    let args = <Args as clap::Parser>::parse();
    let config_path = args.config.as_deref();

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let config = load_config(config_path)?;
            let codec = MorseCodec::new()?;
            session::run_menu(&codec, &config, &mut io::stdin().lock(), &mut io::stdout().lock())?;
            Ok(())
        }
        Command::Encode(input) => run_direction(Direction::Encode, input, config_path),
        Command::Decode(input) => run_direction(Direction::Decode, input, config_path),
        Command::Validate => {
            load_config(config_path)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            gen_config(&output)
        }
    }
}
