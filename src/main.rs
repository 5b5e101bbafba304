mod commands;
mod error;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use minic_core::Stage;

use crate::commands::CheckOptions;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the lexical, syntax and semantic stages over source files, stopping at the first
    /// stage that fails
    Check {
        /// Source files, each analysed independently
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// The last stage to run
        #[arg(long, value_enum, default_value_t = StageArg::Semantic)]
        stage: StageArg,
        /// Config file to use instead of ./minic.toml
        #[arg(long)]
        config: Option<PathBuf>,
        /// Prefix diagnostics with line:column
        #[arg(long)]
        locations: bool,
    },
    /// Creates a minic.toml on the current working directory or on the specified path
    Init {
        /// The path to create the minic.toml file in.
        path: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StageArg {
    Lexical,
    Syntax,
    Semantic,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Lexical => Stage::Lexical,
            StageArg::Syntax => Stage::Syntax,
            StageArg::Semantic => Stage::Semantic,
        }
    }
}

fn run(command: Commands) -> error::Result<bool> {
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Check {
            files,
            stage,
            config,
            locations,
        } => {
            let options = CheckOptions {
                files,
                last_stage: stage.into(),
                config,
                show_locations: locations,
            };
            let config = commands::resolve_config(options.config.as_deref())?;
            commands::check(&options, &config, &mut stdout)
        }
        Commands::Init { path } => {
            commands::init(path.as_deref(), &mut stdout)?;
            Ok(true)
        }
    }
}

/// 0 when every stage passed, 1 when any stage reported diagnostics, 2 when the host failed.
fn exit_code(result: &error::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    logging::init_tracing().ok();
    let cli = Cli::parse();

    let result = run(cli.command);
    if let Err(error) = &result {
        tracing::error!(%error, "minic failed");
        eprintln!("error: {error}");
    }

    ExitCode::from(exit_code(&result))
}
