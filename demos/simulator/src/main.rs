//! Host-side simulator for the imaging light sequencer
//!
//! Feeds command bytes through the real command loop with in-memory output
//! lines. The device's status text goes to stdout, followed by the light
//! levels after every handled command.

use std::collections::VecDeque;
use std::io::{self, Read as _, Write as _};

use clap::Parser;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_io::{ErrorKind, ErrorType as IoErrorType, ReadReady};
use imaging_light_sequencer::{BAUD_RATE, CommandLoop, LightDriver, NUM_LIGHTS, PolledReader};

#[derive(Parser, Debug)]
#[command(name = "imaging-light-simulator")]
#[command(about = "Run capture-host commands against a simulated light rig")]
struct Args {
    /// Command bytes to send, e.g. "CITTTTE". Reads stdin when omitted.
    commands: Option<String>,

    /// Only print the device's own status text
    #[arg(long)]
    quiet: bool,
}

/// Output line kept in memory
#[derive(Debug, Default)]
struct SimulatedLight {
    high: bool,
}

impl PinErrorType for SimulatedLight {
    type Error = Infallible;
}

impl OutputPin for SimulatedLight {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

/// Receive side of the simulated serial link, preloaded with the host's bytes
struct HostLine {
    pending: VecDeque<u8>,
}

impl IoErrorType for HostLine {
    type Error = Infallible;
}

impl ReadReady for HostLine {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pending.is_empty())
    }
}

impl embedded_io::Read for HostLine {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut count = 0;
        for slot in buf.iter_mut() {
            let Some(byte) = self.pending.pop_front() else {
                break;
            };
            *slot = byte;
            count += 1;
        }
        Ok(count)
    }
}

/// Serial output routed to stdout
struct Console {
    out: io::Stdout,
}

impl IoErrorType for Console {
    type Error = ErrorKind;
}

impl embedded_io::Write for Console {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.out.write(buf).map_err(|_| ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.out.flush().map_err(|_| ErrorKind::Other)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let commands = match args.commands {
        Some(commands) => commands.into_bytes(),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    if !args.quiet {
        println!("[simulator] {NUM_LIGHTS} lights, serial at {BAUD_RATE} baud");
    }

    let driver = LightDriver::new(core::array::from_fn(|_| SimulatedLight::default()));
    let console = Console { out: io::stdout() };
    let byte_count = commands.len();
    let line = HostLine {
        pending: commands.into(),
    };
    let mut device = CommandLoop::new(driver, PolledReader::new(line), console);

    // The line is always ready, so every poll consumes exactly one byte
    for _ in 0..byte_count {
        let Some(command) = device.poll() else {
            continue;
        };
        if !args.quiet {
            println!(
                "[simulator] after {command}: {}",
                render_levels(device.lights().pins())
            );
        }
    }

    io::stdout().flush()?;
    Ok(())
}

fn render_levels(lights: &[SimulatedLight]) -> String {
    lights
        .iter()
        .enumerate()
        .map(|(index, light)| format!("{index}:{}", if light.high { "on" } else { "off" }))
        .collect::<Vec<_>>()
        .join(" ")
}
