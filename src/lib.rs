//! A CHIP-8 virtual machine.
//!
//! ## Design
//!
//! * the interpreter owns all machine state; nothing global
//! * it doesn't know about time or the outside world: the environment steps
//!   it, ticks its timers at 60Hz and feeds it key presses
//! * waiting on a key (0xFx0A) is a state the interpreter sits in, not a loop
//!   it spins in, so the environment keeps drawing and polling meanwhile
//! * abstract display so can plug alternatives; starting with TUI in-console
//! * input device, with trait for reading key-presses
//! * audio device, with trait for making beeps
//!
//! Model
//!
//! ```text
//! Environment
//!  |-- display, input, sound, config
//!  |-- interpreter(config)
//!  |    |-- memory (glyphs at 0x000, program at 0x200)
//!  |    |-- registers, stack, screen, keyboard
//!  |    `-- instruction decoder
//!  `-- main loop
//!       |-- input.poll() -> interpreter.key_down/key_up
//!       |-- interpreter.step() * instructions_per_frame
//!       |-- interpreter.tick_timers(); sound.follow_timer()
//!       |-- display.draw(interpreter.screen())
//!       `-- sleep out the rest of the frame
//! ```
pub mod config;
pub mod display;
pub mod environment;
pub mod error;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod keyboard;
pub mod memory;
pub mod registers;
pub mod screen;
pub mod sound;
pub mod stack;

pub use error::{Chip8Error, Result};
