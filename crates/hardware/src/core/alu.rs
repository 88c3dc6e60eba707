//! Arithmetic logic unit.
//!
//! Pure combinational logic: every operation maps two 32-bit inputs to one
//! 32-bit output with no access to architectural state. The execute stage
//! selects the operands (register values, extended immediates, or shift
//! distances) before calling in.

/// Operations the ALU implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise nor.
    Nor,
    /// Logical left shift of `a` by `b`.
    Sll,
    /// Logical right shift of `a` by `b`.
    Srl,
    /// Arithmetic right shift of `a` by `b`.
    Sra,
    /// Signed less-than comparison, producing 0 or 1.
    Slt,
}

/// The arithmetic logic unit.
///
/// # Examples
///
/// ```
/// use mips_core::core::alu::{Alu, AluOp};
///
/// assert_eq!(Alu::execute(AluOp::Add, 2, 3), 5);
/// assert_eq!(Alu::execute(AluOp::Slt, 0xFFFF_FFFF, 0), 1); // -1 < 0 signed
/// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), 0xF800_0000);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Applies `op` to the operands.
    ///
    /// Shift distances are masked to 5 bits the way the hardware shifter
    /// ignores upper bits.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Nor => !(a | b),
            AluOp::Sll => a << (b & 0x1F),
            AluOp::Srl => a >> (b & 0x1F),
            AluOp::Sra => ((a as i32) >> (b & 0x1F)) as u32,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        }
    }
}
