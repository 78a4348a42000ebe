pub mod ambilight;
pub mod channel;
pub mod command;
pub mod settings;
