//! Imaging sequence state
//!
//! Tracks which light the pass is on and whether the last pass finished.
//! Transitions are pure; switching the lights is left to the caller.

/// Outcome of stepping past the current light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// `off` is done and `on` is the next light to illuminate
    Next { off: usize, on: usize },
    /// `off` was the last light; the index wrapped back to 0
    Complete { off: usize },
}

impl Advance {
    /// Light that has to be switched off
    pub const fn off(self) -> usize {
        match self {
            Self::Next { off, .. } | Self::Complete { off } => off,
        }
    }
}

/// State of the imaging sequence, owned by the command loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerState {
    current_light: usize,
    imaging_complete: bool,
}

impl SequencerState {
    /// Power-on state: first light targeted, no pass completed
    pub const fn new() -> Self {
        Self {
            current_light: 0,
            imaging_complete: false,
        }
    }

    /// Index of the light currently lit, or next to be lit
    pub const fn current_light(&self) -> usize {
        self.current_light
    }

    pub const fn is_imaging_complete(&self) -> bool {
        self.imaging_complete
    }

    /// Start a pass and return the light to switch on
    ///
    /// A pass started mid-sequence resumes from the current index rather
    /// than restarting at 0.
    pub fn begin(&mut self) -> usize {
        self.imaging_complete = false;
        self.current_light
    }

    /// Step to the next of `light_count` lights
    pub fn advance(&mut self, light_count: usize) -> Advance {
        let off = self.current_light;
        self.current_light += 1;
        if self.current_light < light_count {
            return Advance::Next {
                off,
                on: self.current_light,
            };
        }
        self.current_light = 0;
        self.imaging_complete = true;
        Advance::Complete { off }
    }
}
