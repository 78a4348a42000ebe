use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;

use super::{report_failure, ThingHandler, ThingStatus, ThingStatusDetail, TvService};
use crate::api::connection::DeviceConnection;
use crate::api::paths::*;
use crate::error::AppError;
use crate::models::ambilight::{
    AmbilightColor, AmbilightConfig, AmbilightMode, AmbilightPower, AmbilightStyle,
    AmbilightTopology,
};
use crate::models::channel::{AmbilightSide, Channel};
use crate::models::command::{Command, HsbColor, OnOff, Percent, State};
use crate::models::settings::{DataValue, SettingsUpdate};

const AMBILIGHT_HUE_NODE_ID: u32 = 2131230774;
const AMBILIGHT_BRIGHTNESS_NODE_ID: u32 = 2131230769;

/// Ambilight channels of one TV.
pub struct AmbilightService {
    handler: Arc<dyn ThingHandler>,
    connection: Arc<dyn DeviceConnection>,
    /// Fetched on first per-side color command, kept for the service's lifetime.
    topology: OnceCell<AmbilightTopology>,
    reported_offline: AtomicBool,
}

impl AmbilightService {
    pub fn new(handler: Arc<dyn ThingHandler>, connection: Arc<dyn DeviceConnection>) -> Self {
        Self {
            handler,
            connection,
            topology: OnceCell::new(),
            reported_offline: AtomicBool::new(false),
        }
    }

    /// Run a command against the TV, returning any failure to the caller.
    pub async fn execute(&self, channel: Channel, command: Command) -> Result<(), AppError> {
        match (channel, command) {
            (Channel::Power, Command::OnOff(state)) => self.set_power(state).await,
            (Channel::Power, Command::Refresh) => {
                let power = self.power().await?;
                self.handler.post_update_channel(
                    Channel::Power,
                    State::OnOff(power.is_powered_on().into()),
                );
                Ok(())
            }
            (Channel::HuePower, Command::OnOff(state)) => self.set_hue_power(state).await,
            (Channel::Style, Command::String(style)) => self.set_style(&style.parse()?).await,
            (Channel::Style, Command::Refresh) => {
                let config = self.config().await?;
                self.handler.post_update_channel(
                    Channel::Style,
                    State::String(config.style_with_algorithm()),
                );
                Ok(())
            }
            (Channel::Color, Command::Hsb(color)) => self.set_all_colors(&color).await,
            (Channel::Color, Command::Refresh) => {
                // Only expert configurations carry a static color.
                if let Some(color) = self.config().await?.color() {
                    self.handler
                        .post_update_channel(Channel::Color, State::Hsb(color.to_hsb()?));
                }
                Ok(())
            }
            (Channel::SideColor(side), Command::Hsb(color)) => {
                self.set_side_color(side, &color).await
            }
            (channel, Command::Percent(percent)) if channel.is_color() => {
                self.set_brightness(percent).await
            }
            (_, Command::Refresh) => Ok(()),
            (channel, command) => {
                tracing::warn!("Unknown command: {} for Channel {}", command, channel);
                Ok(())
            }
        }
    }

    /// Pixel layout of the strip, fetched from the TV at most once.
    pub async fn topology(&self) -> Result<AmbilightTopology, AppError> {
        self.topology
            .get_or_try_init(|| self.get_json(AMBILIGHT_TOPOLOGY_PATH))
            .await
            .copied()
    }

    pub async fn mode(&self) -> Result<AmbilightMode, AppError> {
        self.get_json(AMBILIGHT_MODE_PATH).await
    }

    async fn power(&self) -> Result<AmbilightPower, AppError> {
        self.get_json(AMBILIGHT_POWERSTATE_PATH).await
    }

    async fn config(&self) -> Result<AmbilightConfig, AppError> {
        self.get_json(AMBILIGHT_CONFIG_PATH).await
    }

    async fn set_power(&self, state: OnOff) -> Result<(), AppError> {
        match state {
            OnOff::Off => {
                self.post_json(AMBILIGHT_POWERSTATE_PATH, &AmbilightPower::off())
                    .await
            }
            // Powering on through the power path selects FOLLOW_COLOR, so go via the style.
            OnOff::On => self.set_style(&AmbilightStyle::follow_video()).await,
        }
    }

    async fn set_hue_power(&self, state: OnOff) -> Result<(), AppError> {
        let update = SettingsUpdate::toggle(AMBILIGHT_HUE_NODE_ID, state == OnOff::On);
        self.post_json(UPDATE_SETTINGS_PATH, &update).await
    }

    async fn set_style(&self, style: &AmbilightStyle) -> Result<(), AppError> {
        self.post_json(AMBILIGHT_CONFIG_PATH, &AmbilightConfig::from_style(style))
            .await
    }

    async fn set_all_colors(&self, color: &HsbColor) -> Result<(), AppError> {
        let config = AmbilightConfig::static_color(AmbilightColor::from_hsb(color));
        self.post_json(AMBILIGHT_CONFIG_PATH, &config).await
    }

    async fn set_side_color(&self, side: AmbilightSide, color: &HsbColor) -> Result<(), AppError> {
        let topology = self.topology().await?;
        // the TV only renders cached pixels in manual mode
        self.post_json(AMBILIGHT_MODE_PATH, &AmbilightMode::manual())
            .await?;
        let frame = topology.side_frame(side, color.to_rgb_percent());
        self.post_json(AMBILIGHT_CACHED_PATH, &frame).await
    }

    async fn set_brightness(&self, percent: Percent) -> Result<(), AppError> {
        let level = i64::from(percent.value() / 10);
        let update = SettingsUpdate::single(AMBILIGHT_BRIGHTNESS_NODE_ID, DataValue::Integer(level));
        self.post_json(UPDATE_SETTINGS_PATH, &update).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let body = self.connection.get(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<(), AppError> {
        let json = serde_json::to_string(body)?;
        tracing::debug!("Post {} json: {}", path, json);
        self.connection.post(path, &json).await
    }
}

#[async_trait]
impl TvService for AmbilightService {
    async fn handle_command(&self, channel_id: &str, command: Command) {
        let Some(channel) = Channel::from_id(channel_id) else {
            if !command.is_refresh() {
                tracing::warn!("Unknown command: {} for Channel {}", command, channel_id);
            }
            return;
        };

        let description = command.to_string();
        match self.execute(channel, command).await {
            Ok(()) => {
                if self.reported_offline.swap(false, Ordering::Relaxed) {
                    self.handler
                        .post_update_thing(ThingStatus::Online, ThingStatusDetail::None, "");
                }
            }
            Err(err) => {
                if report_failure(self.handler.as_ref(), &err, channel, &description) {
                    self.reported_offline.store(true, Ordering::Relaxed);
                }
            }
        }
    }
}
