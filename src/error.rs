use std::io;
use thiserror::Error;

/// Everything that can stop a CHIP-8 program in its tracks
#[derive(Error, Debug)]
pub enum Chip8Error {
    #[error("program is too large ({size} bytes), at most {max_size} bytes fit")]
    LoadOverflow { size: usize, max_size: usize },

    #[error("stack overflow: call depth exceeds {0} frames")]
    StackOverflow(usize),

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("memory access out of bounds at {address:#06x}")]
    OutOfBounds { address: usize },

    #[error("no such key {key:#04x}")]
    InvalidKey { key: u8 },

    #[error("i/o error ({0})")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
