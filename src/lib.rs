pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

use std::sync::Arc;

use api::client::TvClient;
use cli::handler::ConsoleHandler;
use cli::output::print_error;
use config::{OutputMode, RuntimeConfig, TvConfig};
use error::AppError;
use service::ambilight::AmbilightService;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        output_mode: if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
    };

    let result = dispatch(cli_args, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(cli_args: cli::Cli, config: &RuntimeConfig) -> Result<(), AppError> {
    let tv = TvConfig::resolve(
        cli_args.url.as_deref(),
        cli_args.host.as_deref(),
        cli_args.timeout,
    )?;
    tracing::debug!("Using TV at {}", tv.base_url);

    let connection = Arc::new(TvClient::new(&tv)?);
    let handler = Arc::new(ConsoleHandler::new(config.output_mode));
    let ambilight = AmbilightService::new(handler.clone(), connection);

    match cli_args.command {
        cli::Commands::Power(cmd) => cli::power::handle(&cmd, &ambilight, config).await,
        cli::Commands::HuePower { state } => {
            cli::power::handle_hue(state, &ambilight, config).await
        }
        cli::Commands::Style(cmd) => cli::style::handle(&cmd, &ambilight, config).await,
        cli::Commands::Color(cmd) => cli::color::handle(&cmd, &ambilight, config).await,
        cli::Commands::Brightness { level } => {
            cli::color::handle_brightness(level, &ambilight, config).await
        }
        cli::Commands::Topology => cli::info::handle_topology(&ambilight, config).await,
        cli::Commands::Mode => cli::info::handle_mode(&ambilight, config).await,
        cli::Commands::Send { channel, command } => {
            cli::send::handle(&channel, &command, &ambilight, &handler).await
        }
    }
}
