//! Configuration commands for CLI.

use clap::Subcommand;

use moodplan_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Dotted key, e.g. defaults.duration_minutes
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Dotted key, e.g. defaults.duration_minutes
        key: String,
        /// New value
        value: String,
    },
    /// List all configuration values
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list() {
                println!("{key} = {value}");
            }
        }
    }

    Ok(())
}
