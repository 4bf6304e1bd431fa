//! Device-to-host status text
//!
//! Status lines are plain text meant for the host's diagnostic log. They are
//! not part of any machine-readable protocol.

use core::fmt;

use embedded_io::Write;

/// Terminator appended to every status line
pub const LINE_ENDING: &str = "\r\n";

/// Every line the device can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    /// Startup banner
    PoweredOn,
    ConnectionAcknowledged,
    AwaitingImaging,
    StartingImaging,
    ImageTaken,
    ImagingComplete,
    Ending,
    /// About to drive the given light on
    TurningOn(usize),
    /// Light is on, the host may capture
    LightOn(usize),
    TurningOff(usize),
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoweredOn => f.write_str("System Powered On. Awaiting connection..."),
            Self::ConnectionAcknowledged => f.write_str("Connection acknowledged."),
            Self::AwaitingImaging => f.write_str("Awaiting prompt to begin imaging..."),
            Self::StartingImaging => f.write_str("Starting imaging process..."),
            Self::ImageTaken => f.write_str("Image taken, turning off light..."),
            Self::ImagingComplete => f.write_str("Imaging complete for all lights."),
            Self::Ending => f.write_str("Ending process..."),
            Self::TurningOn(index) => write!(f, "Turning on light {index}"),
            Self::LightOn(index) => write!(
                f,
                "Light {index} is on. Notifying PC capture software..."
            ),
            Self::TurningOff(index) => write!(f, "Turning off light {index}"),
        }
    }
}

/// Writes status lines to the serial output.
///
/// Write errors are dropped: the link is informational and the device has
/// no way to report that it failed.
pub struct StatusWriter<W> {
    output: W,
}

impl<W: Write> StatusWriter<W> {
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Emit a single status line
    pub fn line(&mut self, line: StatusLine) {
        let _ = write!(self.output, "{line}{LINE_ENDING}");
    }

    pub const fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}
