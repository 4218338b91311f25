use std::path::{Path, PathBuf};

mod config;
mod menu;
mod report;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use records::{Config, Registry};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = "records.toml", global = true)]
    config: PathBuf,

    /// Start with an empty registry, even if sample data is configured
    #[arg(long, global = true)]
    no_sample_data: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_default()
            .run(&self.config, self.no_sample_data)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the menu and reports
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu(menu::Command),

    /// Print a report over the starting registry
    ///
    /// Records are not persisted, so this reports on the sample data (if
    /// enabled).
    Report(report::Command),

    /// Show or initialise the configuration file
    Config(config::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Menu(menu::Command::default())
    }
}

impl Command {
    fn run(self, config_path: &Path, no_sample_data: bool) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(registry(config_path, no_sample_data)?)?,
            Self::Report(command) => command.run(&registry(config_path, no_sample_data)?)?,
            Self::Config(command) => command.run(config_path)?,
        }
        Ok(())
    }
}

/// Build the starting registry from the configuration at `config_path`.
fn registry(config_path: &Path, no_sample_data: bool) -> anyhow::Result<Registry> {
    let mut config = Config::load_or_default(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if no_sample_data {
        config.sample_data = false;
    }
    Ok(Registry::from_config(&config))
}
