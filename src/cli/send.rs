use crate::cli::handler::ConsoleHandler;
use crate::error::AppError;
use crate::models::command::Command;
use crate::service::ambilight::AmbilightService;
use crate::service::TvService;

/// Deliver a command the way the automation platform would.
///
/// Failures never come back from the service; an offline report from the
/// handler is turned into an error so the exit code reflects it.
pub async fn handle(
    channel: &str,
    command: &str,
    ambilight: &AmbilightService,
    handler: &ConsoleHandler,
) -> Result<(), AppError> {
    let command: Command = command.parse()?;
    ambilight.handle_command(channel, command).await;
    match handler.take_offline() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
