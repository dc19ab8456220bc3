use clap::{Parser, Subcommand};
use spdump::commands::{
    config::{self, ConfigAction},
    decode::{self, DecodeCommand},
    dump::{self, DumpCommand},
};
use spdump::{CliError, GlobalOpts};
use spdump_config::Config;
use spdump_logger as logger;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "spdump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Swift package manifest decoder",
    long_about = "spdump decodes `swift package dump-package` output into typed manifests."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode dump-package JSON from a file or stdin
    Decode(DecodeCommand),
    /// Run `swift package dump-package` and decode its output
    Dump(DumpCommand),
    /// Configure spdump
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn run(cli: Cli, settings: &Config) -> Result<(), CliError> {
    match cli.command {
        Commands::Decode(cmd) => {
            print!("{}", decode::handle_decode(&cmd)?);
        }
        Commands::Dump(cmd) => {
            print!("{}", dump::handle_dump(&cmd, settings)?);
        }
        Commands::Config { action } => {
            config::handle_config(action, &cli.global)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Config::load() {
        Ok(settings) => settings,
        Err(e) => {
            logger::warn(&format!("Failed to load config: {}", e));
            Config::default()
        }
    };

    let log_file = settings.log_file.as_ref().map(PathBuf::from);
    if let Err(e) = logger::init(cli.global.verbosity_level(), log_file.as_deref()) {
        logger::warn(&format!("Failed to initialize logger: {}", e));
    }

    match run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
