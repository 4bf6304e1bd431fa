#![no_std]

pub mod command;
pub mod command_loop;
pub mod config;
pub mod input;
pub mod light;
pub mod sequencer;
pub mod status;

pub use command::{Command, UnknownCommand};
pub use command_loop::CommandLoop;
pub use config::{BAUD_RATE, NUM_LIGHTS};
pub use input::{ByteSource, PolledReader};
pub use light::LightDriver;
pub use sequencer::{Advance, SequencerState};
pub use status::{StatusLine, StatusWriter};
