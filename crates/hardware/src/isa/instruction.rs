//! Instruction encoding model.
//!
//! Provides bit extraction for the three MIPS instruction formats and the
//! closed [`Instruction`] union the rest of the pipeline operates on. Pipeline
//! stages never re-interpret raw words; they dispatch on the decoded variants.

use crate::isa::abi;

/// Bit mask for extracting the opcode field (bits 31-26) after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for extracting a 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the shamt field (bits 10-6) after shifting.
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for extracting the 16-bit immediate field (bits 15-0).
pub const IMM16_MASK: u32 = 0xFFFF;
/// Bit mask for extracting the 26-bit jump target field (bits 25-0).
pub const TARGET26_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract every MIPS field from a 32-bit instruction
/// encoding. Which fields are meaningful depends on the format selected by
/// the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    ///
    /// The opcode determines the instruction format: zero selects the
    /// R-format, every other supported value selects an I- or J-format
    /// operation directly.
    fn opcode(&self) -> u32;

    /// Extracts the first source register field rs (bits 25-21).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rs(&self) -> usize;

    /// Extracts the second register field rt (bits 20-16).
    ///
    /// For R-format operations, stores, and branches rt is a source; for
    /// I-format ALU operations and loads it is the destination.
    fn rt(&self) -> usize;

    /// Extracts the destination register field rd (bits 15-11, R-format).
    ///
    /// Returns the 5-bit register index (0-31). Register 0 (`$zero`) is
    /// hardwired and writes to it are discarded.
    fn rd(&self) -> usize;

    /// Extracts the shift amount field shamt (bits 10-6, R-format shifts).
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 5-0).
    ///
    /// Selects the operation when the opcode is zero.
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 15-0, I-format).
    ///
    /// Extension (sign vs zero) is applied by the decoder, not here.
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 25-0, J-format).
    fn target26(&self) -> u32;
}

impl InstructionBits for u32 {
    /// Shifts out the low 26 bits and masks the 6-bit opcode.
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & OPCODE_MASK
    }

    /// Aligns and masks the 5-bit rs field.
    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    /// Aligns and masks the 5-bit rt field.
    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    /// Aligns and masks the 5-bit rd field.
    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    /// Aligns and masks the 5-bit shamt field.
    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & SHAMT_MASK
    }

    /// Masks the low 6 funct bits.
    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    /// Masks the low 16 immediate bits.
    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM16_MASK
    }

    /// Masks the low 26 target bits.
    #[inline(always)]
    fn target26(&self) -> u32 {
        self & TARGET26_MASK
    }
}

/// R-format operations, selected by the funct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegOp {
    /// Shift left logical: `rd = rt << shamt`.
    Sll,
    /// Shift right logical: `rd = rt >> shamt`, zero-filling.
    Srl,
    /// Shift right arithmetic: `rd = rt >> shamt`, sign-filling.
    Sra,
    /// Jump register: `pc = rs`.
    Jr,
    /// Add: `rd = rs + rt`.
    Add,
    /// Subtract: `rd = rs - rt`.
    Sub,
    /// Bitwise and: `rd = rs & rt`.
    And,
    /// Bitwise or: `rd = rs | rt`.
    Or,
    /// Bitwise nor: `rd = !(rs | rt)`.
    Nor,
    /// Set on less than, signed: `rd = (rs < rt) as u32`.
    Slt,
}

/// I-format operations, selected by the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmOp {
    /// Add immediate: `rt = rs + imm` (sign-extended).
    Addi,
    /// Set on less than immediate, signed: `rt = (rs < imm) as u32`.
    Slti,
    /// And immediate: `rt = rs & imm` (zero-extended).
    Andi,
    /// Or immediate: `rt = rs | imm` (zero-extended).
    Ori,
    /// Load word: `rt = mem[rs + imm]`.
    Lw,
    /// Store word: `mem[rs + imm] = rt`.
    Sw,
    /// Branch on equal: taken iff `rs == rt`.
    Beq,
    /// Branch on not equal: taken iff `rs != rt`.
    Bne,
}

/// J-format operations, selected by the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOp {
    /// Jump to the in-segment absolute target.
    J,
    /// Jump and link: as `J`, plus the return address is written to `$ra`.
    Jal,
}

/// Broad instruction classification used for retirement statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstClass {
    /// Arithmetic, logical, shift, and comparison operations.
    Alu,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Conditional branches and jumps.
    Branch,
}

/// A fully decoded instruction.
///
/// The closed union over the three MIPS formats. Every value is produced by
/// [`decode`](crate::isa::decode::decode); an encoding outside this set is a
/// decode fault, never a silent no-op. Immediates are already extended with
/// the rule their operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// R-format: operation on rs and rt (or a shift of rt), result in rd.
    R {
        /// Operation selected by funct.
        op: RegOp,
        /// First source register.
        rs: usize,
        /// Second source register (shift operand for sll/srl/sra).
        rt: usize,
        /// Destination register.
        rd: usize,
        /// Shift distance for sll/srl/sra, zero otherwise.
        shamt: u32,
    },
    /// I-format: operation on rs and a 16-bit immediate, result in rt
    /// (ALU ops and loads); stores and branches use rt as a source.
    I {
        /// Operation selected by opcode.
        op: ImmOp,
        /// Source register.
        rs: usize,
        /// Second register field: destination for ALU/load, source for
        /// store data and branch comparison.
        rt: usize,
        /// Immediate, sign- or zero-extended per the operation's rule.
        imm: i32,
    },
    /// J-format: absolute in-segment jump.
    J {
        /// Operation selected by opcode.
        op: JumpOp,
        /// 26-bit word-aligned target field.
        target: u32,
    },
}

impl Instruction {
    /// The canonical no-op, `sll $zero, $zero, 0` — the decoding of an
    /// all-zero word. A real instruction that architecturally does nothing,
    /// used as the placeholder in latch entries whose semantics are
    /// suppressed by an in-flight fault.
    pub const NOP: Self = Self::R {
        op: RegOp::Sll,
        rs: 0,
        rt: 0,
        rd: 0,
        shamt: 0,
    };

    /// The destination register this instruction writes at write-back, if
    /// any.
    ///
    /// `jr`, stores, branches, and plain jumps write no register; `jal`
    /// links into `$ra`. A destination of register 0 is reported as-is and
    /// discarded at the register-file write port.
    pub fn dest_reg(&self) -> Option<usize> {
        match *self {
            Self::R { op: RegOp::Jr, .. } => None,
            Self::R { rd, .. } => Some(rd),
            Self::I { op, rt, .. } => match op {
                ImmOp::Addi | ImmOp::Slti | ImmOp::Andi | ImmOp::Ori | ImmOp::Lw => Some(rt),
                ImmOp::Sw | ImmOp::Beq | ImmOp::Bne => None,
            },
            Self::J { op: JumpOp::Jal, .. } => Some(abi::REG_RA),
            Self::J { op: JumpOp::J, .. } => None,
        }
    }

    /// The source registers whose values this instruction actually consumes,
    /// as `(rs, rt)` slots.
    ///
    /// Hazard detection and forwarding key off these rather than the raw
    /// encoding fields: the rt field of an I-format ALU operation is its
    /// destination, and shifts read only rt while `jr` reads only rs.
    pub fn used_sources(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Self::R { op, rs, rt, .. } => match op {
                RegOp::Sll | RegOp::Srl | RegOp::Sra => (None, Some(rt)),
                RegOp::Jr => (Some(rs), None),
                _ => (Some(rs), Some(rt)),
            },
            Self::I { op, rs, rt, .. } => match op {
                ImmOp::Addi | ImmOp::Slti | ImmOp::Andi | ImmOp::Ori | ImmOp::Lw => {
                    (Some(rs), None)
                }
                ImmOp::Sw | ImmOp::Beq | ImmOp::Bne => (Some(rs), Some(rt)),
            },
            Self::J { .. } => (None, None),
        }
    }

    /// True for memory loads.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::I { op: ImmOp::Lw, .. })
    }

    /// True for memory stores.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::I { op: ImmOp::Sw, .. })
    }

    /// Classification bucket for retirement statistics.
    pub fn class(&self) -> InstClass {
        match *self {
            Self::R { op: RegOp::Jr, .. } | Self::J { .. } => InstClass::Branch,
            Self::R { .. } => InstClass::Alu,
            Self::I { op, .. } => match op {
                ImmOp::Lw => InstClass::Load,
                ImmOp::Sw => InstClass::Store,
                ImmOp::Beq | ImmOp::Bne => InstClass::Branch,
                ImmOp::Addi | ImmOp::Slti | ImmOp::Andi | ImmOp::Ori => InstClass::Alu,
            },
        }
    }

    /// Assembly mnemonic for this instruction.
    pub fn mnemonic(&self) -> &'static str {
        match *self {
            Self::R { op, .. } => match op {
                RegOp::Sll => "sll",
                RegOp::Srl => "srl",
                RegOp::Sra => "sra",
                RegOp::Jr => "jr",
                RegOp::Add => "add",
                RegOp::Sub => "sub",
                RegOp::And => "and",
                RegOp::Or => "or",
                RegOp::Nor => "nor",
                RegOp::Slt => "slt",
            },
            Self::I { op, .. } => match op {
                ImmOp::Addi => "addi",
                ImmOp::Slti => "slti",
                ImmOp::Andi => "andi",
                ImmOp::Ori => "ori",
                ImmOp::Lw => "lw",
                ImmOp::Sw => "sw",
                ImmOp::Beq => "beq",
                ImmOp::Bne => "bne",
            },
            Self::J { op, .. } => match op {
                JumpOp::J => "j",
                JumpOp::Jal => "jal",
            },
        }
    }
}
