use crate::error::{Chip8Error, Result};
use std::collections::HashMap;

pub const KEY_COUNT: usize = 16;

/// map of characters read from the keyboard to what the chip8 might expect
/// where '1' => 0x01 and 'a' => 0x0a
pub const CHIP8_LITERAL_KEYMAP: [(char, u8); KEY_COUNT] = [
    ('0', 0x00),
    ('1', 0x01),
    ('2', 0x02),
    ('3', 0x03),
    ('4', 0x04),
    ('5', 0x05),
    ('6', 0x06),
    ('7', 0x07),
    ('8', 0x08),
    ('9', 0x09),
    ('a', 0x0a),
    ('b', 0x0b),
    ('c', 0x0c),
    ('d', 0x0d),
    ('e', 0x0e),
    ('f', 0x0f),
];

/// ditto using left-hand side of qwerty keyboard, laid out like the COSMAC pad
///   1 2 3 4      1 2 3 C
///   q w e r  =>  4 5 6 D
///   a s d f      7 8 9 E
///   z x c v      A 0 B F
pub const CHIP8_CONVENTIONAL_KEYMAP: [(char, u8); KEY_COUNT] = [
    ('x', 0x00),
    ('1', 0x01),
    ('2', 0x02),
    ('3', 0x03),
    ('q', 0x04),
    ('w', 0x05),
    ('e', 0x06),
    ('a', 0x07),
    ('s', 0x08),
    ('d', 0x09),
    ('z', 0x0a),
    ('c', 0x0b),
    ('4', 0x0c),
    ('r', 0x0d),
    ('f', 0x0e),
    ('v', 0x0f),
];

/// Up/down state of the 16 hex keys, plus the table that turns whatever the
/// host hands us into one of them
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    down: [bool; KEY_COUNT],
    keymap: HashMap<char, u8>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// replace the key mapping; every target has to be a real key
    pub fn set_map(&mut self, map: &[(char, u8)]) -> Result<()> {
        if let Some(&(_, key)) = map.iter().find(|(_, key)| *key as usize >= KEY_COUNT) {
            return Err(Chip8Error::InvalidKey { key });
        }
        self.keymap = map.iter().copied().collect();
        Ok(())
    }

    /// None means the host key isn't one of ours
    pub fn map(&self, code: char) -> Option<u8> {
        self.keymap.get(&code).copied()
    }

    pub fn key_down(&mut self, key: u8) -> Result<()> {
        *self.slot(key)? = true;
        Ok(())
    }

    pub fn key_up(&mut self, key: u8) -> Result<()> {
        *self.slot(key)? = false;
        Ok(())
    }

    pub fn is_down(&self, key: u8) -> Result<bool> {
        self.down
            .get(key as usize)
            .copied()
            .ok_or(Chip8Error::InvalidKey { key })
    }

    fn slot(&mut self, key: u8) -> Result<&mut bool> {
        self.down
            .get_mut(key as usize)
            .ok_or(Chip8Error::InvalidKey { key })
    }
}
