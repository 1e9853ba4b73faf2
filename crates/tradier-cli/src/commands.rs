use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::presentation::ConsoleRenderer;
use crate::telemetry::init_tracing;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    init_tracing(cli.log_level.unwrap_or(config.log.level));
    debug!(path = %config_path.display(), "loaded configuration");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let color = config.output.color && std::io::stdout().is_terminal();
    let renderer = ConsoleRenderer::new(format, color);

    match cli.command {
        Commands::Render { kind, file } => handlers::render::handle(&renderer, kind, file)?,

        Commands::Kinds => handlers::kinds::handle(&renderer)?,

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config)?,
            ConfigCommand::Path => handlers::config::path(&config_path)?,
        },
    }

    Ok(())
}
