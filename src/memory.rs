use crate::error::{Chip8Error, Result};

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless casting

/// Represents the flat, byte-addressed memory of the machine
pub trait MemoryMap {
    /// write a chunk of bytes into "RAM"
    fn write(&mut self, data: &[u8], addr: u16) -> Result<()> {
        self.get_rw_slice(addr, data.len())?.copy_from_slice(data);
        Ok(())
    }

    fn set(&mut self, addr: u16, value: u8) -> Result<()> {
        self.get_rw_slice(addr, 1)?[0] = value;
        Ok(())
    }

    fn get(&self, addr: u16) -> Result<u8> {
        Ok(self.get_ro_slice(addr, 1)?[0])
    }

    /// get a big-endian two-byte word (opcodes)
    fn get_word(&self, addr: u16) -> Result<u16> {
        let word = self.get_ro_slice(addr, 2)?;
        Ok(u16::from_be_bytes([word[0], word[1]]))
    }

    /// get a r/w slice of the underlying memory
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Result<&mut [u8]>;

    /// get a r/o slice of the underlying memory
    fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8]>;
}

/// how much RAM we have
pub const CHIP8_RAM_SIZE_BYTES: usize = 4096;

/// where the program is loaded
pub const CHIP8_PROGRAM_ADDR: u16 = 0x0200;

/// where the hex digit glyphs live; 0xFx29 relies on this being zero
pub const CHIP8_FONT_ADDR: u16 = 0x0000;

/// bytes per glyph, one per scanline
pub const CHIP8_GLYPH_HEIGHT: u8 = 5;

/// Defines the CHIP-8 standard 4K memory map
///   0x0000-0x004f  hex digit glyphs
///   0x0050-0x01ff  unused (interpreter on real hardware)
///   0x0200-0x0fff  program
///
/// nothing stops a program from scribbling over the glyphs, it just shouldn't
pub struct Chip8MemoryMap {
    bytes: Box<[u8]>,
}

impl MemoryMap for Chip8MemoryMap {
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Result<&mut [u8]> {
        let a = addr as usize;
        let end = check_range(a, len)?;
        Ok(&mut self.bytes[a..end])
    }

    fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let a = addr as usize;
        let end = check_range(a, len)?;
        Ok(&self.bytes[a..end])
    }
}

/// returns the (exclusive) end of the range, or the first address that's off the end
fn check_range(addr: usize, len: usize) -> Result<usize> {
    let end = addr + len;
    if end > CHIP8_RAM_SIZE_BYTES {
        return Err(Chip8Error::OutOfBounds {
            address: addr.max(CHIP8_RAM_SIZE_BYTES),
        });
    }
    Ok(end)
}

impl Chip8MemoryMap {
    /// initialises memory with the glyph table baked in
    pub fn new() -> Self {
        let mut bytes = vec![0u8; CHIP8_RAM_SIZE_BYTES].into_boxed_slice();
        let font = CHIP8_FONT_ADDR as usize;
        bytes[font..font + CHIP8_FONT.len()].copy_from_slice(&CHIP8_FONT);
        Chip8MemoryMap { bytes }
    }

    /// biggest program that will fit at 0x200
    pub fn max_program_size() -> usize {
        CHIP8_RAM_SIZE_BYTES - CHIP8_PROGRAM_ADDR as usize - 1
    }

    /// load a CHIP-8 program at 0x200; memory is untouched if it doesn't fit
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() + CHIP8_PROGRAM_ADDR as usize >= CHIP8_RAM_SIZE_BYTES {
            return Err(Chip8Error::LoadOverflow {
                size: program.len(),
                max_size: Self::max_program_size(),
            });
        }
        self.write(program, CHIP8_PROGRAM_ADDR)
    }
}

impl Default for Chip8MemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

#[rustfmt::skip]
const CHIP8_FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
