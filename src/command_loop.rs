//! Command loop
//!
//! Polls the serial input one byte at a time and runs the handler for each
//! recognized command. A handler always runs to completion before the next
//! byte is read.

use embedded_hal::digital::OutputPin;
use embedded_io::Write;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::Command;
use crate::config::NUM_LIGHTS;
use crate::input::ByteSource;
use crate::light::LightDriver;
use crate::sequencer::{Advance, SequencerState};
use crate::status::{StatusLine, StatusWriter};

/// Command loop - owns the lights, the serial link and the sequence state
pub struct CommandLoop<P, I, W, const N: usize = NUM_LIGHTS> {
    lights: LightDriver<P, N>,
    input: I,
    status: StatusWriter<W>,
    state: SequencerState,
}

impl<P, I, W, const N: usize> CommandLoop<P, I, W, N>
where
    P: OutputPin,
    I: ByteSource,
    W: Write,
{
    /// Bring up the rig
    ///
    /// Switches every light off and prints the startup banner. `output`
    /// must already be configured at [`BAUD_RATE`](crate::BAUD_RATE).
    pub fn new(lights: LightDriver<P, N>, input: I, output: W) -> Self {
        let mut this = Self {
            lights,
            input,
            status: StatusWriter::new(output),
            state: SequencerState::new(),
        };
        this.lights.configure();
        this.status.line(StatusLine::PoweredOn);
        this
    }

    /// Run one polling step
    ///
    /// Returns the command that was handled, or `None` if no byte was
    /// waiting or the byte was not a command.
    pub fn poll(&mut self) -> Option<Command> {
        let byte = self.input.poll_byte()?;
        match Command::try_from(byte) {
            Ok(command) => {
                self.dispatch(command);
                Some(command)
            }
            #[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
            Err(unknown) => {
                #[cfg(feature = "esp32-log")]
                println!("[CommandLoop.poll] ignoring {}", unknown);
                None
            }
        }
    }

    /// Run the handler for a command
    pub fn dispatch(&mut self, command: Command) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[CommandLoop.dispatch] {} at light {}",
            command,
            self.state.current_light()
        );
        match command {
            Command::Connect => acknowledge(&mut self.status),
            Command::BeginImaging => {
                begin_imaging(&mut self.state, &mut self.lights, &mut self.status);
            }
            Command::ImageTaken => {
                image_taken(&mut self.state, &mut self.lights, &mut self.status);
            }
            Command::End => end(&mut self.lights, &mut self.status),
        }
    }

    /// Poll forever
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    pub const fn state(&self) -> SequencerState {
        self.state
    }

    pub const fn lights(&self) -> &LightDriver<P, N> {
        &self.lights
    }

    pub const fn output(&self) -> &W {
        self.status.output()
    }

    pub fn output_mut(&mut self) -> &mut W {
        self.status.output_mut()
    }

    pub fn into_parts(self) -> (LightDriver<P, N>, I, W) {
        (self.lights, self.input, self.status.into_inner())
    }
}

fn acknowledge<W: Write>(status: &mut StatusWriter<W>) {
    status.line(StatusLine::ConnectionAcknowledged);
    status.line(StatusLine::AwaitingImaging);
}

fn begin_imaging<P: OutputPin, W: Write, const N: usize>(
    state: &mut SequencerState,
    lights: &mut LightDriver<P, N>,
    status: &mut StatusWriter<W>,
) {
    let light = state.begin();
    status.line(StatusLine::StartingImaging);
    lights.turn_on(light, status);
}

fn image_taken<P: OutputPin, W: Write, const N: usize>(
    state: &mut SequencerState,
    lights: &mut LightDriver<P, N>,
    status: &mut StatusWriter<W>,
) {
    status.line(StatusLine::ImageTaken);
    let advance = state.advance(N);
    lights.turn_off(advance.off(), status);
    match advance {
        Advance::Next { on, .. } => lights.turn_on(on, status),
        Advance::Complete { .. } => status.line(StatusLine::ImagingComplete),
    }
}

fn end<P: OutputPin, W: Write, const N: usize>(
    lights: &mut LightDriver<P, N>,
    status: &mut StatusWriter<W>,
) {
    status.line(StatusLine::Ending);
    lights.turn_off_all(status);
}
