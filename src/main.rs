use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scicalc::calculator::AngleMode;
use scicalc::config::Config;
use scicalc::shell::{OutputFormat, Shell, spawn_stdin_reader};

#[derive(Parser, Debug)]
#[command(name = "scicalc", version, about = "A keyboard-driven scientific calculator")]
struct Cli {
    /// Run one line of input and print the result instead of starting the shell.
    #[arg(long, value_name = "INPUT")]
    eval: Option<String>,

    /// Print every view as a JSON object.
    #[arg(long)]
    json: bool,

    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in radians mode.
    #[arg(long)]
    radians: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.radians {
        config.angle_mode = AngleMode::Rad;
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut shell = Shell::new(&config, format, std::io::stdout());

    if let Some(input) = cli.eval {
        return shell.eval(&input);
    }

    tracing::debug!(?config, "starting shell");
    shell.run(spawn_stdin_reader()).await
}
