pub mod ambilight;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AppError, Connectivity};
use crate::models::channel::Channel;
use crate::models::command::{Command, State};

pub const TV_OFFLINE_MSG: &str = "TV is not reachable, it may be switched off";
pub const TV_NOT_LISTENING_MSG: &str =
    "TV did not accept the request, check that the JointSpace API is enabled and paired";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThingStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThingStatusDetail {
    None,
    CommunicationError,
}

/// Callbacks into the automation platform that owns the TV.
pub trait ThingHandler: Send + Sync {
    fn post_update_channel(&self, channel: Channel, state: State);

    fn post_update_thing(&self, status: ThingStatus, detail: ThingStatusDetail, message: &str);
}

/// A slice of TV functionality addressed through channels.
#[async_trait]
pub trait TvService: Send + Sync {
    /// Handle a channel command. Failures are reported to the handler, never returned.
    async fn handle_command(&self, channel_id: &str, command: Command);
}

/// Report a failed command according to what it says about the TV.
///
/// Returns whether the TV was reported offline.
pub(crate) fn report_failure(
    handler: &dyn ThingHandler,
    err: &AppError,
    channel: Channel,
    command: &str,
) -> bool {
    match err.connectivity() {
        Connectivity::Unreachable => {
            tracing::debug!("TV unreachable while handling {}: {}", channel, err);
            handler.post_update_thing(
                ThingStatus::Offline,
                ThingStatusDetail::None,
                TV_OFFLINE_MSG,
            );
            true
        }
        Connectivity::Rejecting => {
            tracing::debug!("TV rejected request for {}: {}", channel, err);
            handler.post_update_thing(
                ThingStatus::Offline,
                ThingStatusDetail::CommunicationError,
                TV_NOT_LISTENING_MSG,
            );
            true
        }
        Connectivity::Unaffected => {
            tracing::warn!(
                "Error during handling the command {} for Channel {}: {}",
                command,
                channel,
                err
            );
            false
        }
    }
}
