//! Compile-time configuration of the light rig.

/// Number of lights wired to the controller
pub const NUM_LIGHTS: usize = 4;

/// Serial link rate the board configures its UART with
pub const BAUD_RATE: u32 = 9600;
