use std::path::Path;

use anyhow::Context;
use records::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or initialise the configuration
///
/// Available configuration keys:
///   `sample_data`          Seed the registry with sample records (default:
/// true)
///   `allow_duplicate_ids`  Allow records to share an ID (default: false)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write the default configuration to the configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    #[instrument]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => Self::show(path),
            ConfigCommand::Init { force } => Self::init(path, force),
        }
    }

    fn show(path: &Path) -> anyhow::Result<()> {
        let config = Config::load_or_default(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        let source = if path.exists() {
            path.display().to_string()
        } else {
            "defaults".to_string()
        };

        println!("{}", format!("# Configuration ({source})").dim());
        print!("{}", config.to_toml()?);
        Ok(())
    }

    fn init(path: &Path, force: bool) -> anyhow::Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        Config::default()
            .save(path)
            .with_context(|| format!("failed to initialise {}", path.display()))?;

        println!("{}", format!("✅ Wrote {}", path.display()).success());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn init_writes_default_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("records.toml");

        Command::init(&path, false).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn show_reports_an_invalid_config_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("records.toml");
        std::fs::write(&path, "_version = \"1\"\nallow_duplicate_ids = \"yes\"\n").unwrap();

        let error = Command::show(&path).unwrap_err();
        assert!(error.to_string().starts_with("failed to load"));
    }

    #[test]
    fn show_falls_back_to_defaults_without_a_file() {
        let tmp = tempdir().unwrap();

        Command::show(&tmp.path().join("records.toml")).unwrap();
    }

    #[test]
    fn init_replaces_an_invalid_config_file_with_force() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("records.toml");
        std::fs::write(&path, "sample_data = [").unwrap();

        Command::init(&path, true).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("records.toml");
        std::fs::write(&path, "_version = \"1\"\nsample_data = false\n").unwrap();

        assert!(Command::init(&path, false).is_err());
        assert!(!Config::load(&path).unwrap().sample_data);

        Command::init(&path, true).unwrap();
        assert!(Config::load(&path).unwrap().sample_data);
    }
}
