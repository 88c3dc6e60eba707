//! R-format funct field values.
//!
//! When the major opcode is zero the operation is selected by the funct
//! field (bits 5-0). Shift instructions take their distance from the shamt
//! field; all other R-format operations combine the rs and rt registers.

/// Shift Left Logical (SLL). `sll $zero, $zero, 0` is the canonical no-op.
pub const F_SLL: u32 = 0b000000;

/// Shift Right Logical (SRL).
pub const F_SRL: u32 = 0b000010;

/// Shift Right Arithmetic (SRA), sign-preserving.
pub const F_SRA: u32 = 0b000011;

/// Jump Register (JR).
pub const F_JR: u32 = 0b001000;

/// Add (ADD).
pub const F_ADD: u32 = 0b100000;

/// Subtract (SUB).
pub const F_SUB: u32 = 0b100010;

/// Bitwise And (AND).
pub const F_AND: u32 = 0b100100;

/// Bitwise Or (OR).
pub const F_OR: u32 = 0b100101;

/// Bitwise Nor (NOR).
pub const F_NOR: u32 = 0b100111;

/// Set on Less Than (SLT), signed compare.
pub const F_SLT: u32 = 0b101010;
