use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsv, Srgb};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OnOff {
    On,
    Off,
}

impl From<bool> for OnOff {
    fn from(on: bool) -> Self {
        if on {
            OnOff::On
        } else {
            OnOff::Off
        }
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OnOff::On => "ON",
            OnOff::Off => "OFF",
        })
    }
}

/// A platform percentage, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u8) -> Result<Self, AppError> {
        if value > 100 {
            return Err(AppError::InvalidInput(format!(
                "Percent must be 0-100, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Red, green and blue channel levels, each a percentage 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Platform-native color: hue 0-360, saturation and brightness 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HsbColor {
    hue: u16,
    saturation: u8,
    brightness: u8,
}

impl HsbColor {
    pub fn new(hue: u16, saturation: u8, brightness: u8) -> Result<Self, AppError> {
        if hue > 360 {
            return Err(AppError::InvalidInput(format!(
                "Hue must be 0-360, got {}",
                hue
            )));
        }
        if saturation > 100 {
            return Err(AppError::InvalidInput(format!(
                "Saturation must be 0-100, got {}",
                saturation
            )));
        }
        if brightness > 100 {
            return Err(AppError::InvalidInput(format!(
                "Brightness must be 0-100, got {}",
                brightness
            )));
        }
        Ok(Self {
            hue,
            saturation,
            brightness,
        })
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// RGB channels of this color as whole percentages, truncated.
    pub fn to_rgb_percent(&self) -> Rgb {
        let hsv = Hsv::new(
            f32::from(self.hue),
            f32::from(self.saturation) / 100.0,
            f32::from(self.brightness) / 100.0,
        );
        let rgb: Srgb = Srgb::from_color(hsv);
        Rgb {
            r: channel_percent(rgb.red),
            g: channel_percent(rgb.green),
            b: channel_percent(rgb.blue),
        }
    }
}

fn channel_percent(level: f32) -> u8 {
    // nudge past f32 noise so 0.33 truncates to 33, not 32
    (level * 100.0 + 1e-3).floor().clamp(0.0, 100.0) as u8
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.hue, self.saturation, self.brightness)
    }
}

/// Inbound channel command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OnOff(OnOff),
    String(String),
    Percent(Percent),
    Hsb(HsbColor),
    Refresh,
}

impl Command {
    pub fn is_refresh(&self) -> bool {
        matches!(self, Command::Refresh)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::OnOff(v) => write!(f, "{}", v),
            Command::String(s) => f.write_str(s),
            Command::Percent(p) => write!(f, "{}", p.value()),
            Command::Hsb(c) => write!(f, "{}", c),
            Command::Refresh => f.write_str("REFRESH"),
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    /// Parse a command as typed by a user: `REFRESH`, `ON`/`OFF`, `h,s,b`,
    /// a bare percentage, or any other text as a string command.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::InvalidInput("Command is empty".into()));
        }
        if s.eq_ignore_ascii_case("REFRESH") {
            return Ok(Command::Refresh);
        }
        if s.eq_ignore_ascii_case("ON") {
            return Ok(Command::OnOff(OnOff::On));
        }
        if s.eq_ignore_ascii_case("OFF") {
            return Ok(Command::OnOff(OnOff::Off));
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if let [h, sat, b] = parts.as_slice() {
            if let (Ok(h), Ok(sat), Ok(b)) = (h.parse::<u16>(), sat.parse::<u8>(), b.parse::<u8>()) {
                return Ok(Command::Hsb(HsbColor::new(h, sat, b)?));
            }
        }
        if let Ok(value) = s.parse::<u8>() {
            return Ok(Command::Percent(Percent::new(value)?));
        }
        Ok(Command::String(s.to_string()))
    }
}

/// Value reported back to the platform for a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum State {
    OnOff(OnOff),
    String(String),
    Hsb(HsbColor),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsb_validation() {
        assert!(HsbColor::new(360, 100, 100).is_ok());
        assert!(matches!(
            HsbColor::new(361, 0, 0),
            Err(AppError::InvalidInput(_))
        ));
        assert!(HsbColor::new(0, 101, 0).is_err());
        assert!(HsbColor::new(0, 0, 101).is_err());
    }

    #[test]
    fn test_percent_validation() {
        assert_eq!(Percent::new(55).unwrap().value(), 55);
        assert!(Percent::new(101).is_err());
    }

    fn rgb(h: u16, s: u8, b: u8) -> Rgb {
        HsbColor::new(h, s, b).unwrap().to_rgb_percent()
    }

    #[test]
    fn test_primary_colors_to_rgb() {
        assert_eq!(rgb(0, 100, 100), Rgb { r: 100, g: 0, b: 0 });
        assert_eq!(rgb(120, 100, 100), Rgb { r: 0, g: 100, b: 0 });
        assert_eq!(rgb(240, 100, 100), Rgb { r: 0, g: 0, b: 100 });
    }

    #[test]
    fn test_desaturated_and_dark_to_rgb() {
        assert_eq!(rgb(200, 0, 100), Rgb { r: 100, g: 100, b: 100 });
        assert_eq!(rgb(200, 100, 0), Rgb { r: 0, g: 0, b: 0 });
        // 360 wraps to red
        assert_eq!(rgb(360, 100, 100), Rgb { r: 100, g: 0, b: 0 });
    }

    #[test]
    fn test_rgb_channels_are_truncated_percentages() {
        assert_eq!(rgb(120, 50, 50), Rgb { r: 25, g: 50, b: 25 });
        assert_eq!(rgb(0, 100, 33), Rgb { r: 33, g: 0, b: 0 });
        // 66.67 truncates
        assert_eq!(rgb(40, 100, 100), Rgb { r: 100, g: 66, b: 0 });
        assert_eq!(rgb(20, 100, 100), Rgb { r: 100, g: 33, b: 0 });
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::OnOff(OnOff::On).to_string(), "ON");
        assert_eq!(
            Command::Hsb(HsbColor::new(120, 50, 25).unwrap()).to_string(),
            "120,50,25"
        );
        assert_eq!(Command::Refresh.to_string(), "REFRESH");
    }

    #[test]
    fn test_command_parse() {
        assert_eq!("refresh".parse::<Command>().unwrap(), Command::Refresh);
        assert_eq!("ON".parse::<Command>().unwrap(), Command::OnOff(OnOff::On));
        assert_eq!(
            "240, 100, 50".parse::<Command>().unwrap(),
            Command::Hsb(HsbColor::new(240, 100, 50).unwrap())
        );
        assert_eq!(
            "55".parse::<Command>().unwrap(),
            Command::Percent(Percent::new(55).unwrap())
        );
        assert_eq!(
            "FOLLOW_VIDEO STANDARD".parse::<Command>().unwrap(),
            Command::String("FOLLOW_VIDEO STANDARD".into())
        );
        assert!("400,0,0".parse::<Command>().is_err());
        assert!("150".parse::<Command>().is_err());
        assert!("  ".parse::<Command>().is_err());
    }
}
