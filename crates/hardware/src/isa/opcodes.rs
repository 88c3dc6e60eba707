//! MIPS-I major opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the supported instruction
//! subset. Opcode zero selects the R-format, where the operation is chosen
//! by the funct field instead (see [`crate::isa::funct`]).

/// R-format instructions (operation selected by funct).
pub const OP_RTYPE: u32 = 0b000000;

/// Jump (J).
pub const OP_J: u32 = 0b000010;

/// Jump And Link (JAL).
pub const OP_JAL: u32 = 0b000011;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add Immediate (ADDI), sign-extended.
pub const OP_ADDI: u32 = 0b001000;

/// Set on Less Than Immediate (SLTI), signed compare.
pub const OP_SLTI: u32 = 0b001010;

/// And Immediate (ANDI), zero-extended.
pub const OP_ANDI: u32 = 0b001100;

/// Or Immediate (ORI), zero-extended.
pub const OP_ORI: u32 = 0b001101;

/// Load Word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store Word (SW).
pub const OP_SW: u32 = 0b101011;
