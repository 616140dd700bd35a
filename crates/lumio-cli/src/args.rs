use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lumio")]
#[command(about = "Turn raw chat events into the text a chat view displays", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (defaults to LUMIO_CONFIG, then the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Locale for the attachment label (overrides the config file)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the display text of each event in a JSONL stream
    Render {
        /// Event file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Skip lines that are not valid events instead of failing
        #[arg(long)]
        lenient: bool,

        /// Omit messages whose display text is empty
        #[arg(long)]
        skip_empty: bool,
    },

    /// Print the agent mode requested by a message
    Mode {
        /// Message text; reads stdin when omitted
        text: Option<String>,

        /// Print every mode switch instead of the first
        #[arg(long)]
        all: bool,
    },

    /// Print the attributes of the first settings tag in a message
    Settings {
        /// Message text; reads stdin when omitted
        text: Option<String>,
    },

    /// Print the attachment label for the active locale
    Labels,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file location
    Path,
}
