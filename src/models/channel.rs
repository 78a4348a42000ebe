use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

pub const CHANNEL_AMBILIGHT_POWER: &str = "ambilightPower";
pub const CHANNEL_AMBILIGHT_HUE_POWER: &str = "ambilightHuePower";
pub const CHANNEL_AMBILIGHT_STYLE: &str = "ambilightStyle";
pub const CHANNEL_AMBILIGHT_COLOR: &str = "ambilightColor";
pub const CHANNEL_AMBILIGHT_LEFT_COLOR: &str = "ambilightLeftColor";
pub const CHANNEL_AMBILIGHT_RIGHT_COLOR: &str = "ambilightRightColor";
pub const CHANNEL_AMBILIGHT_TOP_COLOR: &str = "ambilightTopColor";
pub const CHANNEL_AMBILIGHT_BOTTOM_COLOR: &str = "ambilightBottomColor";

/// One edge of the Ambilight strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbilightSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl AmbilightSide {
    pub const ALL: [AmbilightSide; 4] = [
        AmbilightSide::Left,
        AmbilightSide::Right,
        AmbilightSide::Top,
        AmbilightSide::Bottom,
    ];

    /// Key used by the TV for this side in pixel payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbilightSide::Left => "left",
            AmbilightSide::Right => "right",
            AmbilightSide::Top => "top",
            AmbilightSide::Bottom => "bottom",
        }
    }
}

impl fmt::Display for AmbilightSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmbilightSide {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AmbilightSide::ALL
            .into_iter()
            .find(|side| side.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown Ambilight side: {}", s)))
    }
}

/// Ambilight channels exposed to the automation platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Power,
    HuePower,
    Style,
    Color,
    SideColor(AmbilightSide),
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::Power,
        Channel::HuePower,
        Channel::Style,
        Channel::Color,
        Channel::SideColor(AmbilightSide::Left),
        Channel::SideColor(AmbilightSide::Right),
        Channel::SideColor(AmbilightSide::Top),
        Channel::SideColor(AmbilightSide::Bottom),
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Channel::Power => CHANNEL_AMBILIGHT_POWER,
            Channel::HuePower => CHANNEL_AMBILIGHT_HUE_POWER,
            Channel::Style => CHANNEL_AMBILIGHT_STYLE,
            Channel::Color => CHANNEL_AMBILIGHT_COLOR,
            Channel::SideColor(AmbilightSide::Left) => CHANNEL_AMBILIGHT_LEFT_COLOR,
            Channel::SideColor(AmbilightSide::Right) => CHANNEL_AMBILIGHT_RIGHT_COLOR,
            Channel::SideColor(AmbilightSide::Top) => CHANNEL_AMBILIGHT_TOP_COLOR,
            Channel::SideColor(AmbilightSide::Bottom) => CHANNEL_AMBILIGHT_BOTTOM_COLOR,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Channel::ALL.into_iter().find(|channel| channel.id() == id)
    }

    /// Whole-panel and per-side color channels accept brightness percentages.
    pub fn is_color(&self) -> bool {
        matches!(self, Channel::Color | Channel::SideColor(_))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
