pub mod color;
pub mod handler;
pub mod info;
pub mod output;
pub mod power;
pub mod send;
pub mod style;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::models::command::OnOff;

#[derive(Parser)]
#[command(
    name = "ambictl",
    version,
    about = "Philips TV Ambilight CLI - power, styles, colors and brightness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TV host or IP address (port 1926 is assumed)
    #[arg(long, global = true, env = "AMBICTL_HOST")]
    pub host: Option<String>,

    /// Full base URL of the TV API, overrides --host
    #[arg(long, global = true, env = "AMBICTL_URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AMBICTL_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (log HTTP requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ambilight power
    #[command(subcommand)]
    Power(power::PowerCommand),

    /// Switch the Ambilight+Hue lamps on or off
    HuePower {
        #[arg(value_enum)]
        state: PowerAction,
    },

    /// Ambilight style and algorithm
    #[command(subcommand)]
    Style(style::StyleCommand),

    /// Whole-panel or per-side color
    #[command(subcommand)]
    Color(color::ColorCommand),

    /// Set Ambilight brightness (0-100)
    Brightness {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },

    /// Show pixel counts per side
    Topology,

    /// Show the current Ambilight mode
    Mode,

    /// Send a raw command to a channel, e.g. `ambilightLeftColor 120,100,80`
    Send {
        /// Channel id
        channel: String,
        /// ON, OFF, REFRESH, h,s,b, a percentage, or text
        command: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PowerAction {
    On,
    Off,
}

impl From<PowerAction> for OnOff {
    fn from(action: PowerAction) -> Self {
        match action {
            PowerAction::On => OnOff::On,
            PowerAction::Off => OnOff::Off,
        }
    }
}
