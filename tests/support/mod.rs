#![allow(dead_code)]

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_io::{ErrorKind, ErrorType as IoErrorType, Read, ReadReady, Write};
use imaging_light_sequencer::{ByteSource, CommandLoop, LightDriver, NUM_LIGHTS, PolledReader};

/// Output line that remembers its level and how often it was written
#[derive(Debug, Default, Clone)]
pub struct TestPin {
    pub high: bool,
    pub writes: usize,
}

impl PinErrorType for TestPin {
    type Error = Infallible;
}

impl OutputPin for TestPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

/// Serial output captured in memory
#[derive(Debug, Default)]
pub struct TestSerial {
    pub written: Vec<u8>,
}

impl TestSerial {
    /// Status lines written so far, without terminators
    pub fn lines(&self) -> Vec<String> {
        let text = String::from_utf8_lossy(&self.written);
        text.split_terminator("\r\n").map(String::from).collect()
    }

    pub fn clear(&mut self) {
        self.written.clear();
    }
}

impl IoErrorType for TestSerial {
    type Error = Infallible;
}

impl Write for TestSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Receive side of a UART, fed by the test through a shared handle
#[derive(Debug, Default, Clone)]
pub struct ScriptedUart {
    pending: Rc<RefCell<VecDeque<u8>>>,
    broken: Rc<Cell<bool>>,
}

impl ScriptedUart {
    /// Bytes arriving on the line
    pub fn receive(&self, bytes: &[u8]) {
        self.pending.borrow_mut().extend(bytes);
    }

    /// Bytes not yet consumed
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Make every readiness check and read fail
    pub fn set_broken(&self, broken: bool) {
        self.broken.set(broken);
    }
}

impl IoErrorType for ScriptedUart {
    type Error = ErrorKind;
}

impl ReadReady for ScriptedUart {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        if self.broken.get() {
            return Err(ErrorKind::Other);
        }
        Ok(!self.pending.borrow().is_empty())
    }
}

impl Read for ScriptedUart {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.broken.get() {
            return Err(ErrorKind::Other);
        }
        let mut pending = self.pending.borrow_mut();
        let mut count = 0;
        while count < buf.len() {
            let Some(byte) = pending.pop_front() else {
                break;
            };
            buf[count] = byte;
            count += 1;
        }
        Ok(count)
    }
}

pub type TestLoop = CommandLoop<TestPin, PolledReader<ScriptedUart>, TestSerial>;

/// Power up a rig and keep a handle to its receive line
pub fn start() -> (TestLoop, ScriptedUart) {
    let uart = ScriptedUart::default();
    let command_loop = CommandLoop::new(
        test_driver(),
        PolledReader::new(uart.clone()),
        TestSerial::default(),
    );
    (command_loop, uart)
}

pub fn test_driver() -> LightDriver<TestPin> {
    LightDriver::new(core::array::from_fn(|_| TestPin::default()))
}

pub fn levels<I: ByteSource, W: Write>(
    command_loop: &CommandLoop<TestPin, I, W>,
) -> [bool; NUM_LIGHTS] {
    let pins = command_loop.lights().pins();
    core::array::from_fn(|index| pins[index].high)
}
