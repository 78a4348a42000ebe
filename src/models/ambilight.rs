use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::channel::AmbilightSide;
use super::command::{HsbColor, Rgb};
use crate::error::AppError;

pub const POWER_ON: &str = "On";
pub const POWER_OFF: &str = "Off";

pub const MODE_MANUAL: &str = "manual";

pub const STYLE_FOLLOW_VIDEO: &str = "FOLLOW_VIDEO";
pub const STYLE_FOLLOW_COLOR: &str = "FOLLOW_COLOR";
pub const ALGORITHM_STANDARD: &str = "STANDARD";
pub const ALGORITHM_MANUAL_HUE: &str = "MANUAL HUE";
/// Algorithm name used for expert whole-panel colors.
pub const ALGORITHM_MANUAL_HUE_EXPERT: &str = "MANUAL_HUE";

/// Maximum transition speed.
pub const SPEED_MAX: u16 = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbilightPower {
    pub power: String,
}

impl AmbilightPower {
    pub fn off() -> Self {
        Self {
            power: POWER_OFF.into(),
        }
    }

    pub fn is_powered_on(&self) -> bool {
        self.power == POWER_ON
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbilightMode {
    pub current: String,
}

impl AmbilightMode {
    /// Manual mode makes the TV render the cached pixel values.
    pub fn manual() -> Self {
        Self {
            current: MODE_MANUAL.into(),
        }
    }
}

/// Pixel counts per side and the number of layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbilightTopology {
    pub layers: u32,
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl AmbilightTopology {
    pub fn pixels_on(&self, side: AmbilightSide) -> u32 {
        match side {
            AmbilightSide::Left => self.left,
            AmbilightSide::Right => self.right,
            AmbilightSide::Top => self.top,
            AmbilightSide::Bottom => self.bottom,
        }
    }

    /// Payload for the cached-pixel endpoint painting every pixel of `side`,
    /// on every layer, with one color.
    ///
    /// Layers are numbered from 1, pixels from 0.
    pub fn side_frame(&self, side: AmbilightSide, rgb: Rgb) -> serde_json::Value {
        let pixel = serde_json::json!({"r": rgb.r, "g": rgb.g, "b": rgb.b});

        let mut side_pixels = serde_json::Map::new();
        for i in 0..self.pixels_on(side) {
            side_pixels.insert(i.to_string(), pixel.clone());
        }

        let mut frame = serde_json::Map::new();
        for layer in 1..=self.layers {
            let mut sides = serde_json::Map::new();
            sides.insert(
                side.as_str().into(),
                serde_json::Value::Object(side_pixels.clone()),
            );
            frame.insert(format!("layer{}", layer), serde_json::Value::Object(sides));
        }
        serde_json::Value::Object(frame)
    }
}

/// Device-native color, every component 0-255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbilightColor {
    pub hue: u8,
    pub saturation: u8,
    pub brightness: u8,
}

impl AmbilightColor {
    /// Scale platform ranges (360/100/100) down to 0-255, truncating.
    pub fn from_hsb(hsb: &HsbColor) -> Self {
        Self {
            hue: scale(u32::from(hsb.hue()), 360, 255),
            saturation: scale(u32::from(hsb.saturation()), 100, 255),
            brightness: scale(u32::from(hsb.brightness()), 100, 255),
        }
    }

    pub fn to_hsb(&self) -> Result<HsbColor, AppError> {
        HsbColor::new(
            (u32::from(self.hue) * 360 / 255) as u16,
            scale(u32::from(self.saturation), 255, 100),
            scale(u32::from(self.brightness), 255, 100),
        )
    }
}

fn scale(value: u32, from_max: u32, to_max: u32) -> u8 {
    (value.min(from_max) * to_max / from_max) as u8
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbilightColorDelta {
    pub hue: i16,
    pub saturation: i16,
    pub brightness: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbilightColorSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<AmbilightColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_delta: Option<AmbilightColorDelta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbilightConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_setting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_settings: Option<AmbilightColorSettings>,
}

impl AmbilightConfig {
    pub fn from_style(style: &AmbilightStyle) -> Self {
        let mut config = Self {
            style_name: Some(style.style().into()),
            menu_setting: Some(style.algorithm().into()),
            ..Self::default()
        };
        if style.is_manual_hue() {
            config.algorithm = Some(style.algorithm().into());
            config.is_expert = Some(true);
            config.color_settings = Some(AmbilightColorSettings {
                color: None,
                color_delta: Some(AmbilightColorDelta::default()),
                speed: Some(SPEED_MAX),
            });
        }
        config
    }

    /// Expert configuration showing one static color on the whole panel.
    pub fn static_color(color: AmbilightColor) -> Self {
        Self {
            style_name: Some(STYLE_FOLLOW_COLOR.into()),
            is_expert: Some(true),
            menu_setting: None,
            algorithm: Some(ALGORITHM_MANUAL_HUE_EXPERT.into()),
            color_settings: Some(AmbilightColorSettings {
                color: Some(color),
                color_delta: Some(AmbilightColorDelta::default()),
                speed: Some(SPEED_MAX),
            }),
        }
    }

    /// `"<style> <setting>"` as shown on the style channel.
    ///
    /// Expert configurations carry no menu setting, so the algorithm stands in.
    pub fn style_with_algorithm(&self) -> String {
        let style = self.style_name.as_deref().unwrap_or_default();
        match self.menu_setting.as_deref().or(self.algorithm.as_deref()) {
            Some(setting) => format!("{} {}", style, setting),
            None => style.to_string(),
        }
    }

    pub fn color(&self) -> Option<AmbilightColor> {
        self.color_settings.as_ref().and_then(|s| s.color)
    }
}

/// A style together with its algorithm, e.g. `FOLLOW_VIDEO STANDARD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbilightStyle {
    style: String,
    algorithm: String,
}

impl AmbilightStyle {
    pub fn new(style: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            algorithm: algorithm.into(),
        }
    }

    /// Power on is done by switching to the default video style.
    pub fn follow_video() -> Self {
        Self::new(STYLE_FOLLOW_VIDEO, ALGORITHM_STANDARD)
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn is_manual_hue(&self) -> bool {
        self.style == STYLE_FOLLOW_COLOR && self.algorithm == ALGORITHM_MANUAL_HUE
    }
}

impl FromStr for AmbilightStyle {
    type Err = AppError;

    /// Exactly two tokens separated by a single space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(' ').collect();
        match tokens.as_slice() {
            [style, algorithm] if !style.is_empty() && !algorithm.is_empty() => {
                Ok(Self::new(*style, *algorithm))
            }
            _ => Err(AppError::InvalidInput(format!(
                "Style and/or algorithm is missing: '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for AmbilightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style, self.algorithm)
    }
}
