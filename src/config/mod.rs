pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::RosterConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bestiary")]
#[command(about = "Walks the Animal -> Mammal -> Dog -> Bulldog chain and prints what each one says")]
pub struct CliConfig {
    /// TOML file overriding the names in the roster
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as a single JSON document
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log records as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Built-in roster unless `--config` was given. Always validated.
    pub fn load_roster(&self) -> Result<RosterConfig> {
        let roster = match &self.config {
            Some(path) => {
                tracing::debug!("Loading roster from {}", path.display());
                RosterConfig::from_file(path)?
            }
            None => RosterConfig::default(),
        };
        roster.validate()?;
        Ok(roster)
    }
}
