//! JointSpace v6 endpoint paths, relative to the TV's base URL.

pub const AMBILIGHT_POWERSTATE_PATH: &str = "/6/ambilight/power";
pub const AMBILIGHT_CONFIG_PATH: &str = "/6/ambilight/currentconfiguration";
pub const AMBILIGHT_MODE_PATH: &str = "/6/ambilight/mode";
pub const AMBILIGHT_TOPOLOGY_PATH: &str = "/6/ambilight/topology";
pub const AMBILIGHT_CACHED_PATH: &str = "/6/ambilight/cached";
pub const UPDATE_SETTINGS_PATH: &str = "/6/menuitems/settings/update";
