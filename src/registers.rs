/// VF doubles as the carry/borrow/collision flag
pub const FLAG: usize = 0xf;

/// The CHIP-8 register file. The interpreter pokes these directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    /// general purpose V0-VF
    pub v: [u8; 16],
    /// index register, usually an address
    pub i: u16,
    pub pc: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
}

/// what happened on a timer tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerEvent {
    /// the sound timer just ran out, so whoever is beeping should stop
    pub sound_stopped: bool,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// always a full overwrite, never or'd in
    pub fn set_flag(&mut self, on: bool) {
        self.v[FLAG] = on as u8;
    }

    /// step over the next instruction
    pub fn skip_if(&mut self, cond: bool) {
        if cond {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    /// count both timers down by one, bottoming out at zero
    pub fn tick_timers(&mut self) -> TimerEvent {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        let was_sounding = self.sound_timer > 0;
        self.sound_timer = self.sound_timer.saturating_sub(1);
        TimerEvent {
            sound_stopped: was_sounding && self.sound_timer == 0,
        }
    }
}
