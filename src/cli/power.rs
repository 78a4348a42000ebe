use clap::Subcommand;
use serde_json::json;

use crate::cli::output::print_output;
use crate::cli::PowerAction;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::channel::Channel;
use crate::models::command::{Command, OnOff};
use crate::service::ambilight::AmbilightService;

#[derive(Subcommand)]
pub enum PowerCommand {
    /// Turn Ambilight on (follow video)
    On,

    /// Turn Ambilight off
    Off,

    /// Check Ambilight power status
    Status,
}

pub async fn handle(
    cmd: &PowerCommand,
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    match cmd {
        PowerCommand::On => set(ambilight, config, Channel::Power, OnOff::On).await,
        PowerCommand::Off => set(ambilight, config, Channel::Power, OnOff::Off).await,
        PowerCommand::Status => ambilight.execute(Channel::Power, Command::Refresh).await,
    }
}

pub async fn handle_hue(
    state: PowerAction,
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    set(ambilight, config, Channel::HuePower, state.into()).await
}

async fn set(
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
    channel: Channel,
    state: OnOff,
) -> Result<(), AppError> {
    ambilight.execute(channel, Command::OnOff(state)).await?;
    print_output(
        &json!({"channel": channel.id(), "power": state}),
        config.output_mode,
    );
    Ok(())
}
