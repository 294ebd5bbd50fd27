use std::fmt;

/// A decoded CHIP-8 opcode. `x`/`y` are register numbers, `nnn` is an
/// address, `kk` a byte and `n` a nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jp { nnn: u16 },
    /// 2nnn
    Call { nnn: u16 },
    /// 3xkk
    SeImm { x: usize, kk: u8 },
    /// 4xkk
    SneImm { x: usize, kk: u8 },
    /// 5xy0
    SeReg { x: usize, y: usize },
    /// 6xkk
    LdImm { x: usize, kk: u8 },
    /// 7xkk
    AddImm { x: usize, kk: u8 },
    /// 8xy0
    LdReg { x: usize, y: usize },
    /// 8xy1
    Or { x: usize, y: usize },
    /// 8xy2
    And { x: usize, y: usize },
    /// 8xy3
    Xor { x: usize, y: usize },
    /// 8xy4
    Add { x: usize, y: usize },
    /// 8xy5
    Sub { x: usize, y: usize },
    /// 8xy6
    Shr { x: usize },
    /// 8xy7
    Subn { x: usize, y: usize },
    /// 8xyE
    Shl { x: usize },
    /// 9xy0
    SneReg { x: usize, y: usize },
    /// Annn
    LdI { nnn: u16 },
    /// Bnnn
    JpV0 { nnn: u16 },
    /// Cxkk
    Rnd { x: usize, kk: u8 },
    /// Dxyn
    Drw { x: usize, y: usize, n: u8 },
    /// Ex9E
    Skp { x: usize },
    /// ExA1
    Sknp { x: usize },
    /// Fx07
    LdVxDt { x: usize },
    /// Fx0A
    LdKey { x: usize },
    /// Fx15
    LdDtVx { x: usize },
    /// Fx18
    LdStVx { x: usize },
    /// Fx1E
    AddI { x: usize },
    /// Fx29
    LdGlyph { x: usize },
    /// Fx33
    Bcd { x: usize },
    /// Fx55
    Store { x: usize },
    /// Fx65
    Load { x: usize },
    /// anything else; executes as a no-op
    Unknown(u16),
}

impl Instruction {
    pub fn decode(opcode: u16) -> Self {
        let nnn = opcode & 0x0fff;
        let kk = (opcode & 0x00ff) as u8;
        let n = (opcode & 0x000f) as u8;
        let x = ((opcode >> 8) & 0xf) as usize;
        let y = ((opcode >> 4) & 0xf) as usize;

        use Instruction::*;
        match opcode >> 12 {
            0x0 => match opcode {
                0x00e0 => Cls,
                0x00ee => Ret,
                _ => Unknown(opcode),
            },
            0x1 => Jp { nnn },
            0x2 => Call { nnn },
            0x3 => SeImm { x, kk },
            0x4 => SneImm { x, kk },
            // the low nibble isn't checked, same as the reference machine
            0x5 => SeReg { x, y },
            0x6 => LdImm { x, kk },
            0x7 => AddImm { x, kk },
            0x8 => match n {
                0x0 => LdReg { x, y },
                0x1 => Or { x, y },
                0x2 => And { x, y },
                0x3 => Xor { x, y },
                0x4 => Add { x, y },
                0x5 => Sub { x, y },
                0x6 => Shr { x },
                0x7 => Subn { x, y },
                0xe => Shl { x },
                _ => Unknown(opcode),
            },
            0x9 => SneReg { x, y },
            0xa => LdI { nnn },
            0xb => JpV0 { nnn },
            0xc => Rnd { x, kk },
            0xd => Drw { x, y, n },
            0xe => match kk {
                0x9e => Skp { x },
                0xa1 => Sknp { x },
                _ => Unknown(opcode),
            },
            0xf => match kk {
                0x07 => LdVxDt { x },
                0x0a => LdKey { x },
                0x15 => LdDtVx { x },
                0x18 => LdStVx { x },
                0x1e => AddI { x },
                0x29 => LdGlyph { x },
                0x33 => Bcd { x },
                0x55 => Store { x },
                0x65 => Load { x },
                _ => Unknown(opcode),
            },
            _ => unreachable!("opcode >> 12 is a nibble"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jp { nnn } => write!(f, "JP {:#05x}", nnn),
            Call { nnn } => write!(f, "CALL {:#05x}", nnn),
            SeImm { x, kk } => write!(f, "SE V{:X}, {:#04x}", x, kk),
            SneImm { x, kk } => write!(f, "SNE V{:X}, {:#04x}", x, kk),
            SeReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LdImm { x, kk } => write!(f, "LD V{:X}, {:#04x}", x, kk),
            AddImm { x, kk } => write!(f, "ADD V{:X}, {:#04x}", x, kk),
            LdReg { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            Add { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            Shr { x } => write!(f, "SHR V{:X}", x),
            Subn { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Shl { x } => write!(f, "SHL V{:X}", x),
            SneReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LdI { nnn } => write!(f, "LD I, {:#05x}", nnn),
            JpV0 { nnn } => write!(f, "JP V0, {:#05x}", nnn),
            Rnd { x, kk } => write!(f, "RND V{:X}, {:#04x}", x, kk),
            Drw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Skp { x } => write!(f, "SKP V{:X}", x),
            Sknp { x } => write!(f, "SKNP V{:X}", x),
            LdVxDt { x } => write!(f, "LD V{:X}, DT", x),
            LdKey { x } => write!(f, "LD V{:X}, K", x),
            LdDtVx { x } => write!(f, "LD DT, V{:X}", x),
            LdStVx { x } => write!(f, "LD ST, V{:X}", x),
            AddI { x } => write!(f, "ADD I, V{:X}", x),
            LdGlyph { x } => write!(f, "LD F, V{:X}", x),
            Bcd { x } => write!(f, "LD B, V{:X}", x),
            Store { x } => write!(f, "LD [I], V{:X}", x),
            Load { x } => write!(f, "LD V{:X}, [I]", x),
            Unknown(opcode) => write!(f, "DW {:#06x}", opcode),
        }
    }
}
