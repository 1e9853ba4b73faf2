use crate::types::{LogLevel, ResourceKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tradier")]
#[command(about = "Render Tradier brokerage API responses as tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Output raw JSON instead of formatted tables"
    )]
    pub json: bool,

    #[arg(long, global = true, help = "Log level (defaults to the config file, then warn)")]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a saved API response
    Render {
        #[arg(value_enum)]
        kind: ResourceKind,

        #[arg(help = "Response file; reads stdin when omitted or '-'")]
        file: Option<PathBuf>,
    },

    /// List every response kind `render` understands
    Kinds,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,
}
