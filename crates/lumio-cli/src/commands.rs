use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use lumio_runtime::{Config, resolve_config_path};
use std::path::Path;

/// Active locale and its attachment label
fn resolve_label(config_path: &Path, locale: Option<String>) -> Result<(String, String)> {
    let config = Config::load_from(config_path)?;
    let locale = locale.unwrap_or_else(|| config.locale.clone());
    let label = config.attachment_label(Some(&locale));
    tracing::debug!(%locale, %label, "resolved attachment label");
    Ok((locale, label))
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            file,
            lenient,
            skip_empty,
        } => {
            let (_, label) = resolve_label(&config_path, cli.locale)?;
            handlers::render::handle(file.as_deref(), &label, lenient, skip_empty, cli.format)
        }

        Commands::Mode { text, all } => handlers::mode::handle(text, all, cli.format),

        Commands::Settings { text } => handlers::settings::handle(text, cli.format),

        Commands::Labels => {
            let (locale, label) = resolve_label(&config_path, cli.locale)?;
            handlers::labels::handle(&locale, &label, cli.format)
        }

        Commands::Config { command } => {
            handlers::config::handle(command, &config_path, cli.format)
        }
    }
}
