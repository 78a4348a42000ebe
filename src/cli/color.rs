use clap::Subcommand;
use serde_json::json;

use crate::cli::output::print_output;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::channel::{AmbilightSide, Channel};
use crate::models::command::{Command, HsbColor, Percent};
use crate::service::ambilight::AmbilightService;

#[derive(Subcommand)]
pub enum ColorCommand {
    /// Set color by HSB
    Set {
        /// Hue (0-360)
        #[arg(long, value_parser = clap::value_parser!(u16).range(0..=360))]
        hue: u16,
        /// Saturation (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        saturation: u8,
        /// Brightness (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        brightness: u8,
        /// Only color one side: left, right, top or bottom
        #[arg(long, value_parser = parse_side)]
        side: Option<AmbilightSide>,
    },

    /// Show the current whole-panel color, if a static color is active
    Get,
}

fn parse_side(s: &str) -> Result<AmbilightSide, String> {
    s.parse().map_err(|e: AppError| e.to_string())
}

pub async fn handle(
    cmd: &ColorCommand,
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    match cmd {
        ColorCommand::Set {
            hue,
            saturation,
            brightness,
            side,
        } => {
            let color = HsbColor::new(*hue, *saturation, *brightness)?;
            let channel = match side {
                Some(side) => Channel::SideColor(*side),
                None => Channel::Color,
            };
            ambilight.execute(channel, Command::Hsb(color)).await?;
            print_output(
                &json!({
                    "channel": channel.id(),
                    "hue": hue,
                    "saturation": saturation,
                    "brightness": brightness,
                }),
                config.output_mode,
            );
            Ok(())
        }
        ColorCommand::Get => ambilight.execute(Channel::Color, Command::Refresh).await,
    }
}

pub async fn handle_brightness(
    level: u8,
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let percent = Percent::new(level)?;
    ambilight
        .execute(Channel::Color, Command::Percent(percent))
        .await?;
    print_output(
        &json!({
            "channel": Channel::Color.id(),
            "brightness": level,
            "device_level": level / 10,
        }),
        config.output_mode,
    );
    Ok(())
}
