//! Seaward CLI - replay or interactively drive the turtle game

use anyhow::Result;
use clap::{Parser, Subcommand};
use seaward::driver::Driver;
use seaward::script::Script;
use seaward::Config;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seaward")]
#[command(about = "Guide the turtle to the sea to reveal the memories")]
#[command(version)]
struct Cli {
    /// Config file path (defaults to XDG config)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a JSON-lines input script and print the view after each step
    Play {
        /// Script file
        #[arg(short, long)]
        script: PathBuf,
        /// Wait for each step's timestamp instead of running back to back
        #[arg(long)]
        realtime: bool,
    },
    /// Read commands from stdin (down X Y, move X Y, up, status, back, ...)
    Interactive,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries replies
    let filter = if cli.verbose {
        EnvFilter::new("seaward=debug")
    } else {
        EnvFilter::new("seaward=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    // Single-threaded, like the UI event loop the game models
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(run(cli.command, config))
}

async fn run(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Play { script, realtime } => {
            let script = Script::load(&script)?;
            info!(steps = script.steps.len(), realtime, "Replaying script");
            let mut driver = Driver::new(config);
            driver.run_script(script, realtime, tokio::io::stdout()).await
        }
        Commands::Interactive => {
            info!("Reading commands from stdin");
            let mut driver = Driver::new(config);
            driver
                .run_interactive(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
