use std::sync::Mutex;

use serde_json::json;

use crate::cli::output::print_output;
use crate::config::OutputMode;
use crate::error::AppError;
use crate::models::channel::Channel;
use crate::models::command::State;
use crate::service::{ThingHandler, ThingStatus, ThingStatusDetail};

/// Prints channel updates to stdout and remembers whether the TV went offline.
pub struct ConsoleHandler {
    output_mode: OutputMode,
    offline: Mutex<Option<(ThingStatusDetail, String)>>,
}

impl ConsoleHandler {
    pub fn new(output_mode: OutputMode) -> Self {
        Self {
            output_mode,
            offline: Mutex::new(None),
        }
    }

    /// Turn a reported offline status into an error for the exit code.
    pub fn take_offline(&self) -> Option<AppError> {
        let offline = self.offline.lock().ok()?.take()?;
        Some(match offline {
            (ThingStatusDetail::CommunicationError, message) => AppError::NotListening(message),
            (ThingStatusDetail::None, message) => AppError::DeviceOffline(message),
        })
    }
}

impl ThingHandler for ConsoleHandler {
    fn post_update_channel(&self, channel: Channel, state: State) {
        print_output(
            &json!({"channel": channel.id(), "state": state}),
            self.output_mode,
        );
    }

    fn post_update_thing(&self, status: ThingStatus, detail: ThingStatusDetail, message: &str) {
        tracing::info!("TV status {:?} ({:?}): {}", status, detail, message);
        if status == ThingStatus::Offline {
            if let Ok(mut offline) = self.offline.lock() {
                *offline = Some((detail, message.to_string()));
            }
        }
    }
}
