use crate::args::ConfigCommand;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use lumio_runtime::Config;
use std::path::Path;

pub fn handle(command: ConfigCommand, config_path: &Path, format: OutputFormat) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = Config::load_from(config_path)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                OutputFormat::Plain => print!("{}", toml::to_string_pretty(&config)?),
            }
        }

        ConfigCommand::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "config file already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(config_path)?;
            tracing::info!(path = %config_path.display(), "wrote default config");
            println!("{}", config_path.display());
        }

        ConfigCommand::Path => println!("{}", config_path.display()),
    }
    Ok(())
}
