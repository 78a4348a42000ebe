use clap::Subcommand;
use serde_json::json;

use crate::cli::output::print_output;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::ambilight::AmbilightStyle;
use crate::models::channel::Channel;
use crate::models::command::Command;
use crate::service::ambilight::AmbilightService;

#[derive(Subcommand)]
pub enum StyleCommand {
    /// Set style and algorithm, e.g. "FOLLOW_VIDEO STANDARD"
    Set {
        /// "<STYLE> <ALGORITHM>"
        #[arg(value_parser = parse_style)]
        style: AmbilightStyle,
    },

    /// Show the current style and algorithm
    Get,
}

fn parse_style(s: &str) -> Result<AmbilightStyle, String> {
    s.parse().map_err(|e: AppError| e.to_string())
}

pub async fn handle(
    cmd: &StyleCommand,
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    match cmd {
        StyleCommand::Set { style } => {
            ambilight
                .execute(Channel::Style, Command::String(style.to_string()))
                .await?;
            print_output(
                &json!({
                    "channel": Channel::Style.id(),
                    "style": style.style(),
                    "algorithm": style.algorithm(),
                }),
                config.output_mode,
            );
            Ok(())
        }
        StyleCommand::Get => ambilight.execute(Channel::Style, Command::Refresh).await,
    }
}
