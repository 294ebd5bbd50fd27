use crate::error::{Chip8Error, Result};

pub const STACK_DEPTH: usize = 16;

/// Return addresses for 0x2nnn/0x00EE
#[derive(Debug, Clone, Default)]
pub struct Stack {
    frames: [u16; STACK_DEPTH],
    depth: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.depth == STACK_DEPTH {
            return Err(Chip8Error::StackOverflow(STACK_DEPTH));
        }
        self.frames[self.depth] = addr;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.depth == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.depth -= 1;
        Ok(self.frames[self.depth])
    }

    pub fn len(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
}
