//! Host-to-device commands
//!
//! Every command is a single ASCII byte. Anything outside this set is not a
//! command and is dropped by the command loop.

use core::fmt;

const COMMAND_BYTE_CONNECT: u8 = b'C';
const COMMAND_BYTE_BEGIN_IMAGING: u8 = b'I';
const COMMAND_BYTE_IMAGE_TAKEN: u8 = b'T';
const COMMAND_BYTE_END: u8 = b'E';

const COMMAND_NAME_CONNECT: &str = "connect";
const COMMAND_NAME_BEGIN_IMAGING: &str = "begin_imaging";
const COMMAND_NAME_IMAGE_TAKEN: &str = "image_taken";
const COMMAND_NAME_END: &str = "end";

/// Commands the host can send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Host software connected
    Connect = COMMAND_BYTE_CONNECT,
    /// Start (or resume) an imaging pass at the current light
    BeginImaging = COMMAND_BYTE_BEGIN_IMAGING,
    /// Host captured an image, move on to the next light
    ImageTaken = COMMAND_BYTE_IMAGE_TAKEN,
    /// Stop and switch every light off
    End = COMMAND_BYTE_END,
}

/// A received byte that does not map to any [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCommand(pub u8);

impl Command {
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            COMMAND_BYTE_CONNECT => Self::Connect,
            COMMAND_BYTE_BEGIN_IMAGING => Self::BeginImaging,
            COMMAND_BYTE_IMAGE_TAKEN => Self::ImageTaken,
            COMMAND_BYTE_END => Self::End,
            _ => return None,
        })
    }

    /// Wire representation of the command
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connect => COMMAND_NAME_CONNECT,
            Self::BeginImaging => COMMAND_NAME_BEGIN_IMAGING,
            Self::ImageTaken => COMMAND_NAME_IMAGE_TAKEN,
            Self::End => COMMAND_NAME_END,
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = UnknownCommand;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(UnknownCommand(byte))
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.as_byte()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command byte {:#04x}", self.0)
    }
}
