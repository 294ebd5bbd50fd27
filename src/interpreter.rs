//! # interpreter
//!
//! Owns all of the machine state and runs one opcode at a time. The caller is
//! in charge of time: it calls [`Chip8Interpreter::step`] as often as it likes,
//! ticks the timers at 60Hz and feeds in key presses.
//!
//! 0xFx0A is the only instruction that can't finish straight away. Rather than
//! block, it parks the interpreter in [`RunState::WaitingForKey`]; `step`
//! does nothing in that state and the next [`Chip8Interpreter::key_down`]
//! completes the instruction.
use crate::config::Config;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::keyboard::Keyboard;
use crate::memory::{
    Chip8MemoryMap, MemoryMap, CHIP8_FONT_ADDR, CHIP8_GLYPH_HEIGHT, CHIP8_PROGRAM_ADDR,
};
use crate::registers::{Registers, TimerEvent};
use crate::screen::Screen;
use crate::stack::Stack;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// half way through 0xFx0A; the next key down lands in Vx
    WaitingForKey { x: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Executed(Instruction),
    /// nothing happened, still waiting on a key
    Waiting,
}

pub struct Chip8Interpreter {
    memory: Chip8MemoryMap,
    registers: Registers,
    stack: Stack,
    screen: Screen,
    keyboard: Keyboard,
    rng: StdRng,
    state: RunState,
}

impl Chip8Interpreter {
    /// fresh machine with a random number generator seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// fresh machine whose 0xCxkk sequence is repeatable
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// seed and keymap from the run configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut i = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        i.keyboard.set_map(config.keymap.table())?;
        Ok(i)
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8Interpreter {
            memory: Chip8MemoryMap::new(),
            registers: Registers::new(),
            stack: Stack::new(),
            screen: Screen::new(),
            keyboard: Keyboard::new(),
            rng,
            state: RunState::Running,
        }
    }

    /// load a chip8 program at 0x200 and point the PC at it
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load_program(program)?;
        self.registers.pc = CHIP8_PROGRAM_ADDR;
        info!(size = program.len(), "Loaded program");
        Ok(())
    }

    /// load a chip8 program from a file or whatever
    pub fn load_program_from(&mut self, reader: &mut impl io::Read) -> Result<()> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.load(&buf)
    }

    /// read the opcode at PC and move PC past it
    pub fn fetch(&mut self) -> Result<u16> {
        let opcode = self.memory.get_word(self.registers.pc)?;
        self.registers.pc = self.registers.pc.wrapping_add(2);
        Ok(opcode)
    }

    /// fetch, then execute; a no-op while waiting for a key
    pub fn step(&mut self) -> Result<StepResult> {
        if self.is_waiting_for_key() {
            return Ok(StepResult::Waiting);
        }
        let pc = self.registers.pc;
        let opcode = self.fetch()?;
        let instruction = Instruction::decode(opcode);
        trace!(pc, "{}", instruction);
        self.execute(instruction)?;
        Ok(StepResult::Executed(instruction))
    }

    /// run a single raw opcode; PC should already point past it
    pub fn exec(&mut self, opcode: u16) -> Result<()> {
        self.execute(Instruction::decode(opcode))
    }

    /// Every arm either succeeds or leaves the machine as it found it.
    pub fn execute(&mut self, instruction: Instruction) -> Result<()> {
        use Instruction::*;
        let r = &mut self.registers;
        match instruction {
            Cls => self.screen.clear(),
            Ret => r.pc = self.stack.pop()?,
            Jp { nnn } => r.pc = nnn,
            Call { nnn } => {
                self.stack.push(r.pc)?;
                r.pc = nnn;
            }
            SeImm { x, kk } => r.skip_if(r.v[x] == kk),
            SneImm { x, kk } => r.skip_if(r.v[x] != kk),
            SeReg { x, y } => r.skip_if(r.v[x] == r.v[y]),
            LdImm { x, kk } => r.v[x] = kk,
            AddImm { x, kk } => r.v[x] = r.v[x].wrapping_add(kk),
            LdReg { x, y } => r.v[x] = r.v[y],
            Or { x, y } => r.v[x] |= r.v[y],
            And { x, y } => r.v[x] &= r.v[y],
            Xor { x, y } => r.v[x] ^= r.v[y],
            // flag first, result last: with x = F the result is what sticks
            Add { x, y } => {
                let (sum, carry) = r.v[x].overflowing_add(r.v[y]);
                r.set_flag(carry);
                r.v[x] = sum;
            }
            Sub { x, y } => {
                let (vx, vy) = (r.v[x], r.v[y]);
                r.set_flag(vx > vy);
                r.v[x] = vx.wrapping_sub(vy);
            }
            Shr { x } => {
                let vx = r.v[x];
                r.set_flag(vx & 0x01 == 1);
                r.v[x] = vx >> 1;
            }
            Subn { x, y } => {
                let (vx, vy) = (r.v[x], r.v[y]);
                r.set_flag(vy > vx);
                r.v[x] = vy.wrapping_sub(vx);
            }
            Shl { x } => {
                let vx = r.v[x];
                r.set_flag(vx & 0x80 != 0);
                r.v[x] = vx << 1;
            }
            SneReg { x, y } => r.skip_if(r.v[x] != r.v[y]),
            LdI { nnn } => r.i = nnn,
            JpV0 { nnn } => r.pc = nnn + r.v[0] as u16,
            Rnd { x, kk } => r.v[x] = self.rng.gen::<u8>() & kk,
            Drw { x, y, n } => {
                let sprite = self.memory.get_ro_slice(r.i, n as usize)?;
                let (vx, vy) = (r.v[x] as usize, r.v[y] as usize);
                let collision = self.screen.draw_sprite(vx, vy, sprite, n as usize);
                r.set_flag(collision);
            }
            Skp { x } => {
                let down = self.keyboard.is_down(r.v[x])?;
                r.skip_if(down);
            }
            Sknp { x } => {
                let down = self.keyboard.is_down(r.v[x])?;
                r.skip_if(!down);
            }
            LdVxDt { x } => r.v[x] = r.delay_timer,
            LdKey { x } => {
                debug!(x, "Waiting for key");
                self.state = RunState::WaitingForKey { x };
            }
            LdDtVx { x } => r.delay_timer = r.v[x],
            LdStVx { x } => r.sound_timer = r.v[x],
            AddI { x } => r.i = r.i.wrapping_add(r.v[x] as u16),
            LdGlyph { x } => {
                r.i = CHIP8_FONT_ADDR + r.v[x] as u16 * CHIP8_GLYPH_HEIGHT as u16
            }
            Bcd { x } => {
                let v = r.v[x];
                self.memory.write(&[v / 100, v / 10 % 10, v % 10], r.i)?;
            }
            Store { x } => self.memory.write(&r.v[..=x], r.i)?,
            Load { x } => {
                let bytes = self.memory.get_ro_slice(r.i, x + 1)?;
                r.v[..=x].copy_from_slice(bytes);
            }
            Unknown(opcode) => debug!("Ignoring unknown opcode {:#06x}", opcode),
        }
        Ok(())
    }

    /// a key went down; finishes off a pending 0xFx0A
    pub fn key_down(&mut self, key: u8) -> Result<()> {
        self.keyboard.key_down(key)?;
        if let RunState::WaitingForKey { x } = self.state {
            debug!(key, x, "Got the key we were waiting for");
            self.registers.v[x] = key;
            self.state = RunState::Running;
        }
        Ok(())
    }

    pub fn key_up(&mut self, key: u8) -> Result<()> {
        self.keyboard.key_up(key)
    }

    pub fn is_key_down(&self, key: u8) -> Result<bool> {
        self.keyboard.is_down(key)
    }

    /// the host's 60Hz tick
    pub fn tick_timers(&mut self) -> TimerEvent {
        self.registers.tick_timers()
    }

    pub fn is_waiting_for_key(&self) -> bool {
        matches!(self.state, RunState::WaitingForKey { .. })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn sound_timer(&self) -> u8 {
        self.registers.sound_timer
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Chip8MemoryMap {
        &self.memory
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// for callers that bring their own key mapping
    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }
}

impl Default for Chip8Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Chip8Error;
    use crate::registers::FLAG;
    use pretty_assertions::assert_eq;

    fn interpreter() -> Chip8Interpreter {
        let mut i = Chip8Interpreter::with_seed(0x5eed);
        i.registers.pc = CHIP8_PROGRAM_ADDR;
        i
    }

    fn run(i: &mut Chip8Interpreter, opcodes: &[u16]) -> Result<()> {
        for &op in opcodes {
            i.exec(op)?;
        }
        Ok(())
    }

    #[test]
    fn test_program_load_ok() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        let mut prog: &[u8] = &[0x00, 0xe0]; // clear screen
        i.load_program_from(&mut prog)?;
        assert_eq!(i.registers.pc, 0x200);
        assert_eq!(i.memory.get_word(0x200)?, 0x00e0);
        Ok(())
    }

    #[test]
    fn test_program_load_too_big() {
        let mut i = Chip8Interpreter::new();
        let prog = vec![0xaa; 0xe00];
        assert!(matches!(i.load(&prog), Err(Chip8Error::LoadOverflow { .. })));
        assert_eq!(i.registers.pc, 0);
    }

    #[test]
    fn test_fetch_advances_pc() -> Result<()> {
        let mut i = interpreter();
        i.load(&[0x12, 0x34, 0x56, 0x78])?;
        assert_eq!(i.fetch()?, 0x1234);
        assert_eq!(i.fetch()?, 0x5678);
        assert_eq!(i.registers.pc, 0x204);
        Ok(())
    }

    #[test]
    fn test_fetch_off_the_end() {
        let mut i = interpreter();
        i.registers.pc = 0xfff;
        assert!(matches!(i.fetch(), Err(Chip8Error::OutOfBounds { .. })));
        assert_eq!(i.registers.pc, 0xfff);
    }

    #[test]
    fn test_step_jump_isnt_clobbered() -> Result<()> {
        let mut i = interpreter();
        i.load(&[0x13, 0x00])?;
        assert_eq!(i.step()?, StepResult::Executed(Instruction::Jp { nnn: 0x300 }));
        assert_eq!(i.registers.pc, 0x300);
        Ok(())
    }

    #[test]
    fn test_ld_then_add_wraps() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x63f0, 0x7320])?;
        assert_eq!(i.registers.v[3], 0x10);
        // no flag for 7xkk
        assert_eq!(i.registers.v[FLAG], 0);
        Ok(())
    }

    #[test]
    fn test_skips() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x6105, 0x6205])?;
        i.exec(0x3105)?;
        assert_eq!(i.registers.pc, 0x202);
        i.exec(0x3106)?;
        assert_eq!(i.registers.pc, 0x202);
        i.exec(0x4106)?;
        assert_eq!(i.registers.pc, 0x204);
        i.exec(0x5120)?;
        assert_eq!(i.registers.pc, 0x206);
        i.exec(0x9120)?;
        assert_eq!(i.registers.pc, 0x206);
        i.exec(0x6206)?;
        i.exec(0x9120)?;
        assert_eq!(i.registers.pc, 0x208);
        Ok(())
    }

    #[test]
    fn test_logic() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x60f0, 0x613c, 0x8011])?;
        assert_eq!(i.registers.v[0], 0xfc);
        run(&mut i, &[0x60f0, 0x8012])?;
        assert_eq!(i.registers.v[0], 0x30);
        run(&mut i, &[0x60f0, 0x8013])?;
        assert_eq!(i.registers.v[0], 0xcc);
        i.exec(0x8010)?;
        assert_eq!(i.registers.v[0], 0x3c);
        Ok(())
    }

    #[test]
    fn test_add_with_carry() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x60ff, 0x6101, 0x8014])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0x00, 1));
        run(&mut i, &[0x6001, 0x6101, 0x8014])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0x02, 0));
        Ok(())
    }

    #[test]
    fn test_sub_with_borrow() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x6001, 0x6102, 0x8015])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0xff, 0));
        run(&mut i, &[0x6002, 0x6101, 0x8015])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0x01, 1));
        // equal operands borrow nothing but still clear the flag
        run(&mut i, &[0x6007, 0x6107, 0x8015])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0x00, 0));
        Ok(())
    }

    #[test]
    fn test_subn() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x6001, 0x6102, 0x8017])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0x01, 1));
        run(&mut i, &[0x6002, 0x6101, 0x8017])?;
        assert_eq!((i.registers.v[0], i.registers.v[FLAG]), (0xff, 0));
        Ok(())
    }

    #[test]
    fn test_shifts() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x6505, 0x8506])?;
        assert_eq!((i.registers.v[5], i.registers.v[FLAG]), (0x02, 1));
        i.exec(0x8506)?;
        assert_eq!((i.registers.v[5], i.registers.v[FLAG]), (0x01, 0));
        run(&mut i, &[0x65c1, 0x850e])?;
        assert_eq!((i.registers.v[5], i.registers.v[FLAG]), (0x82, 1));
        i.exec(0x850e)?;
        assert_eq!((i.registers.v[5], i.registers.v[FLAG]), (0x04, 1));
        i.exec(0x850e)?;
        assert_eq!((i.registers.v[5], i.registers.v[FLAG]), (0x08, 0));
        Ok(())
    }

    #[test]
    fn test_flag_register_as_destination_keeps_the_result() -> Result<()> {
        let mut i = interpreter();
        // 0xff + 1 carries, but VF ends up holding the sum
        run(&mut i, &[0x6fff, 0x6001, 0x8f04])?;
        assert_eq!(i.registers.v[FLAG], 0x00);
        run(&mut i, &[0x6f03, 0x8f06])?;
        assert_eq!(i.registers.v[FLAG], 0x01);
        run(&mut i, &[0x6f81, 0x8f0e])?;
        assert_eq!(i.registers.v[FLAG], 0x02);
        run(&mut i, &[0x6f05, 0x6003, 0x8f05])?;
        assert_eq!(i.registers.v[FLAG], 0x02);
        run(&mut i, &[0x6f05, 0x6003, 0x8f07])?;
        assert_eq!(i.registers.v[FLAG], 0xfe);
        Ok(())
    }

    #[test]
    fn test_flag_register_as_source() -> Result<()> {
        let mut i = interpreter();
        // V0 = 0x10 - VF(0x20) borrows; flag uses VF as it was before the write
        run(&mut i, &[0x6010, 0x6f20, 0x80f5])?;
        assert_eq!(i.registers.v[0], 0xf0);
        assert_eq!(i.registers.v[FLAG], 0);
        Ok(())
    }

    #[test]
    fn test_index_and_jumps() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0xa123, 0x6010, 0xb300])?;
        assert_eq!(i.registers.i, 0x123);
        assert_eq!(i.registers.pc, 0x310);
        run(&mut i, &[0x6220, 0xf21e])?;
        assert_eq!(i.registers.i, 0x143);
        Ok(())
    }

    #[test]
    fn test_call_and_return() -> Result<()> {
        let mut i = interpreter();
        i.registers.pc = 0x206;
        i.exec(0x2400)?;
        assert_eq!(i.registers.pc, 0x400);
        i.exec(0x00ee)?;
        assert_eq!(i.registers.pc, 0x206);
        Ok(())
    }

    #[test]
    fn test_return_on_empty_stack() {
        let mut i = interpreter();
        assert!(matches!(i.exec(0x00ee), Err(Chip8Error::StackUnderflow)));
        assert_eq!(i.registers.pc, 0x200);
    }

    #[test]
    fn test_call_too_deep() -> Result<()> {
        let mut i = interpreter();
        for _ in 0..16 {
            i.exec(0x2200)?;
        }
        assert!(matches!(i.exec(0x2300), Err(Chip8Error::StackOverflow(_))));
        assert_eq!(i.registers.pc, 0x200);
        Ok(())
    }

    #[test]
    fn test_random_masked_and_repeatable() -> Result<()> {
        let mut a = Chip8Interpreter::with_seed(42);
        let mut b = Chip8Interpreter::with_seed(42);
        for _ in 0..32 {
            a.exec(0xc00f)?;
            b.exec(0xc00f)?;
            assert_eq!(a.registers.v[0], b.registers.v[0]);
            assert_eq!(a.registers.v[0] & 0xf0, 0);
        }
        a.exec(0xc100)?;
        assert_eq!(a.registers.v[1], 0);
        Ok(())
    }

    #[test]
    fn test_draw_glyph_and_collide() -> Result<()> {
        let mut i = interpreter();
        // glyph 0 at (1, 2)
        run(&mut i, &[0x6000, 0xf029, 0x6101, 0x6202, 0xd125])?;
        assert_eq!(i.registers.v[FLAG], 0);
        assert!(i.screen.is_set(1, 2));
        assert!(i.screen.is_set(4, 6));
        assert!(!i.screen.is_set(2, 3));
        i.exec(0xd125)?;
        assert_eq!(i.registers.v[FLAG], 1);
        assert_eq!(i.screen.lit().count(), 0);
        i.exec(0x00e0)?;
        Ok(())
    }

    #[test]
    fn test_draw_from_past_end_of_memory() {
        let mut i = interpreter();
        i.registers.i = 0xffe;
        i.registers.v[FLAG] = 0x7;
        assert!(matches!(i.exec(0xd005), Err(Chip8Error::OutOfBounds { .. })));
        assert_eq!(i.registers.v[FLAG], 0x7);
        assert_eq!(i.screen.lit().count(), 0);
    }

    #[test]
    fn test_glyph_address() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x6a0f, 0xfa29])?;
        assert_eq!(i.registers.i, 75);
        let glyph = i.memory.get_ro_slice(i.registers.i, 5)?;
        assert_eq!(glyph, &[0xF0, 0x80, 0xF0, 0x80, 0x80]);
        Ok(())
    }

    #[test]
    fn test_bcd() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x659d, 0xa300, 0xf533])?;
        assert_eq!(i.memory.get_ro_slice(0x300, 3)?, &[1, 5, 7]);
        run(&mut i, &[0x6508, 0xf533])?;
        assert_eq!(i.memory.get_ro_slice(0x300, 3)?, &[0, 0, 8]);
        Ok(())
    }

    #[test]
    fn test_store_and_load_round_trip() -> Result<()> {
        let mut i = interpreter();
        for x in 0..=0xf {
            i.registers.v[x] = (x as u8) * 3 + 1;
        }
        let saved = i.registers.v;
        run(&mut i, &[0xa400, 0xf755])?;
        assert_eq!(i.memory.get_ro_slice(0x400, 9)?, &[1, 4, 7, 10, 13, 16, 19, 22, 0]);

        i.registers.v = [0; 16];
        i.exec(0xf765)?;
        assert_eq!(i.registers.v[..=7], saved[..=7]);
        assert_eq!(i.registers.v[8..], [0; 8]);
        // I is left alone
        assert_eq!(i.registers.i, 0x400);
        Ok(())
    }

    #[test]
    fn test_store_past_end_writes_nothing() -> Result<()> {
        let mut i = interpreter();
        i.registers.v[0] = 0x11;
        run(&mut i, &[0xaffe, 0xf255]).unwrap_err();
        assert_eq!(i.memory.get(0xffe)?, 0);
        Ok(())
    }

    #[test]
    fn test_timers() -> Result<()> {
        let mut i = interpreter();
        run(&mut i, &[0x6302, 0xf315, 0xf318])?;
        assert_eq!(i.sound_timer(), 2);
        assert!(!i.tick_timers().sound_stopped);
        i.exec(0xf407)?;
        assert_eq!(i.registers.v[4], 1);
        assert!(i.tick_timers().sound_stopped);
        i.tick_timers();
        i.exec(0xf407)?;
        assert_eq!(i.registers.v[4], 0);
        assert_eq!(i.registers.delay_timer, 0);
        Ok(())
    }

    #[test]
    fn test_key_skips() -> Result<()> {
        let mut i = interpreter();
        i.exec(0x6e0c)?;
        i.exec(0xee9e)?;
        assert_eq!(i.registers.pc, 0x200);
        i.exec(0xeea1)?;
        assert_eq!(i.registers.pc, 0x202);
        i.key_down(0xc)?;
        assert!(i.is_key_down(0xc)?);
        i.exec(0xee9e)?;
        assert_eq!(i.registers.pc, 0x204);
        i.exec(0xeea1)?;
        assert_eq!(i.registers.pc, 0x204);
        i.key_up(0xc)?;
        assert!(!i.is_key_down(0xc)?);
        Ok(())
    }

    #[test]
    fn test_key_skip_with_silly_key() {
        let mut i = interpreter();
        i.registers.v[0] = 0x42;
        assert!(matches!(i.exec(0xe09e), Err(Chip8Error::InvalidKey { key: 0x42 })));
    }

    #[test]
    fn test_wait_for_key() -> Result<()> {
        let mut i = interpreter();
        i.load(&[0xf3, 0x0a, 0x60, 0x01])?;
        i.step()?;
        assert!(i.is_waiting_for_key());
        assert_eq!(i.state(), RunState::WaitingForKey { x: 3 });
        assert_eq!(i.step()?, StepResult::Waiting);
        assert_eq!(i.registers.pc, 0x202);

        i.key_down(5)?;
        assert!(!i.is_waiting_for_key());
        assert_eq!(i.registers.v[3], 5);
        i.step()?;
        assert_eq!(i.registers.v[0], 1);
        Ok(())
    }

    #[test]
    fn test_held_key_doesnt_satisfy_wait() -> Result<()> {
        let mut i = interpreter();
        i.key_down(2)?;
        i.exec(0xf10a)?;
        assert!(i.is_waiting_for_key());
        i.key_up(2)?;
        assert!(i.is_waiting_for_key());
        i.key_down(9)?;
        assert_eq!(i.registers.v[1], 9);
        Ok(())
    }

    #[test]
    fn test_ignored_opcodes_change_nothing() -> Result<()> {
        let mut i = interpreter();
        i.registers.v[1] = 0x33;
        let before = i.registers.clone();
        run(&mut i, &[0x0123, 0x8128, 0xe1ff, 0xf1ff])?;
        assert_eq!(i.registers, before);
        assert_eq!(i.screen.lit().count(), 0);
        Ok(())
    }

    #[test]
    fn test_from_config() -> Result<()> {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        let mut a = Chip8Interpreter::from_config(&config)?;
        let mut b = Chip8Interpreter::with_seed(7);
        a.exec(0xc0ff)?;
        b.exec(0xc0ff)?;
        assert_eq!(a.registers.v[0], b.registers.v[0]);
        assert_eq!(a.keyboard().map('v'), Some(0x0f));
        Ok(())
    }
}
