//! Light driver
//!
//! Maps a light index to its output line and reports each switch on the
//! status channel. The driver keeps no record of which lights are on; the
//! output lines are the only source of truth.

use embedded_hal::digital::OutputPin;
use embedded_io::Write;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::NUM_LIGHTS;
use crate::status::{StatusLine, StatusWriter};

/// Drives `N` lights, one output line each. High is on, low is off.
pub struct LightDriver<P, const N: usize = NUM_LIGHTS> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> LightDriver<P, N> {
    /// Create a driver over the given lines, indexed in array order
    pub const fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Drive every line to its inactive level
    pub fn configure(&mut self) {
        for pin in &mut self.pins {
            let _ = pin.set_low();
        }
    }

    /// Switch a light on
    ///
    /// The status text is emitted even for an index this driver does not
    /// own, but no line is touched in that case.
    pub fn turn_on<W: Write>(&mut self, index: usize, status: &mut StatusWriter<W>) {
        status.line(StatusLine::TurningOn(index));
        if let Some(pin) = self.pin(index) {
            let _ = pin.set_high();
        }
        status.line(StatusLine::LightOn(index));
    }

    /// Switch a light off
    pub fn turn_off<W: Write>(&mut self, index: usize, status: &mut StatusWriter<W>) {
        status.line(StatusLine::TurningOff(index));
        if let Some(pin) = self.pin(index) {
            let _ = pin.set_low();
        }
    }

    /// Switch every light off, in index order
    pub fn turn_off_all<W: Write>(&mut self, status: &mut StatusWriter<W>) {
        for index in 0..N {
            self.turn_off(index, status);
        }
    }

    pub const fn pins(&self) -> &[P; N] {
        &self.pins
    }

    pub fn into_pins(self) -> [P; N] {
        self.pins
    }

    fn pin(&mut self, index: usize) -> Option<&mut P> {
        #[cfg(feature = "esp32-log")]
        if index >= N {
            println!("[LightDriver.pin] light {} is out of range (0..{})", index, N);
        }
        self.pins.get_mut(index)
    }
}
