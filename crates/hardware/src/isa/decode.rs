//! Instruction decoding.
//!
//! The single place where raw 32-bit words become [`Instruction`] values.
//! Pipeline stages dispatch on the decoded variants and never re-interpret
//! encodings, so an encoding outside the supported set is rejected exactly
//! once, here.

use crate::common::Fault;
use crate::isa::funct::{F_ADD, F_AND, F_JR, F_NOR, F_OR, F_SLL, F_SLT, F_SRA, F_SRL, F_SUB};
use crate::isa::instruction::{ImmOp, Instruction, InstructionBits, JumpOp, RegOp};
use crate::isa::opcodes::{
    OP_ADDI, OP_ANDI, OP_BEQ, OP_BNE, OP_J, OP_JAL, OP_LW, OP_ORI, OP_RTYPE, OP_SLTI, OP_SW,
};

/// Sign-extends a 16-bit immediate field to 32 bits.
#[inline(always)]
pub fn sign_extend16(imm: u32) -> i32 {
    imm as u16 as i16 as i32
}

/// Zero-extends a 16-bit immediate field to 32 bits.
///
/// Used by the bitwise-immediate operations `andi` and `ori`.
#[inline(always)]
pub fn zero_extend16(imm: u32) -> i32 {
    (imm & 0xFFFF) as i32
}

/// Decodes a raw instruction word.
///
/// The format is fully determined by the opcode (and by funct when the
/// opcode is zero); immediates come back already extended with the rule
/// their operation requires.
///
/// # Errors
///
/// Returns [`Fault::UnsupportedEncoding`] for any opcode or funct value
/// outside the supported set.
///
/// # Examples
///
/// ```
/// use mips_core::isa::{decode, Instruction};
/// use mips_core::isa::instruction::ImmOp;
///
/// // addi $t0, $zero, 5
/// let inst = decode(0x2008_0005).unwrap();
/// assert_eq!(
///     inst,
///     Instruction::I { op: ImmOp::Addi, rs: 0, rt: 8, imm: 5 }
/// );
/// ```
pub fn decode(raw: u32) -> Result<Instruction, Fault> {
    match raw.opcode() {
        OP_RTYPE => {
            let op = match raw.funct() {
                F_SLL => RegOp::Sll,
                F_SRL => RegOp::Srl,
                F_SRA => RegOp::Sra,
                F_JR => RegOp::Jr,
                F_ADD => RegOp::Add,
                F_SUB => RegOp::Sub,
                F_AND => RegOp::And,
                F_OR => RegOp::Or,
                F_NOR => RegOp::Nor,
                F_SLT => RegOp::Slt,
                _ => return Err(Fault::UnsupportedEncoding { raw }),
            };
            Ok(Instruction::R {
                op,
                rs: raw.rs(),
                rt: raw.rt(),
                rd: raw.rd(),
                shamt: raw.shamt(),
            })
        }
        OP_J => Ok(Instruction::J {
            op: JumpOp::J,
            target: raw.target26(),
        }),
        OP_JAL => Ok(Instruction::J {
            op: JumpOp::Jal,
            target: raw.target26(),
        }),
        opcode => {
            let op = match opcode {
                OP_ADDI => ImmOp::Addi,
                OP_SLTI => ImmOp::Slti,
                OP_ANDI => ImmOp::Andi,
                OP_ORI => ImmOp::Ori,
                OP_LW => ImmOp::Lw,
                OP_SW => ImmOp::Sw,
                OP_BEQ => ImmOp::Beq,
                OP_BNE => ImmOp::Bne,
                _ => return Err(Fault::UnsupportedEncoding { raw }),
            };
            // andi/ori operate on the zero-extended immediate, everything
            // else sign-extends.
            let imm = match op {
                ImmOp::Andi | ImmOp::Ori => zero_extend16(raw.imm16()),
                _ => sign_extend16(raw.imm16()),
            };
            Ok(Instruction::I {
                op,
                rs: raw.rs(),
                rt: raw.rt(),
                imm,
            })
        }
    }
}
