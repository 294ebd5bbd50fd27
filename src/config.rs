use crate::keyboard::{CHIP8_CONVENTIONAL_KEYMAP, CHIP8_LITERAL_KEYMAP, KEY_COUNT};
use std::time::Duration;

/// which host keys drive the hex keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Keymap {
    /// 1234/qwer/asdf/zxcv block, shaped like the COSMAC pad
    #[default]
    Conventional,
    /// 0-9 and a-f press the key they name
    Literal,
}

impl Keymap {
    pub fn table(&self) -> &'static [(char, u8); KEY_COUNT] {
        match self {
            Keymap::Conventional => &CHIP8_CONVENTIONAL_KEYMAP,
            Keymap::Literal => &CHIP8_LITERAL_KEYMAP,
        }
    }
}

/// Knobs for a run of the emulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// how many instructions to get through between timer ticks
    pub instructions_per_frame: u32,
    /// timer tick and redraw rate
    pub frame_rate_hz: u32,
    /// fixed seed for 0xCxkk; None seeds from the OS once at start up
    pub seed: Option<u64>,
    pub keymap: Keymap,
    /// stop after this many frames
    pub max_frames: Option<u64>,
    pub mute: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_per_frame: 10,
            frame_rate_hz: 60,
            seed: None,
            keymap: Keymap::default(),
            max_frames: None,
            mute: false,
        }
    }
}

impl Config {
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate_hz.max(1)
    }
}
