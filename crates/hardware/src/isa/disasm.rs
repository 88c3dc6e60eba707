//! Instruction disassembler.
//!
//! Renders raw instruction words as assembly text for trace output and
//! fault reports. Encodings outside the supported set render as `.word`
//! directives rather than failing, since the disassembler is called on
//! whatever the pipeline happens to be holding.

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{ImmOp, Instruction, RegOp};

/// Disassembles a raw instruction word into assembly text.
pub fn disassemble(raw: u32) -> String {
    decode(raw).map_or_else(|_| format!(".word {raw:#010x}"), |inst| render(&inst))
}

/// Renders an already-decoded instruction.
pub fn render(inst: &Instruction) -> String {
    let mn = inst.mnemonic();
    match *inst {
        // ── R-format ────────────────────────────────────────────────────
        Instruction::R {
            op,
            rs,
            rt,
            rd,
            shamt,
        } => match op {
            RegOp::Sll | RegOp::Srl | RegOp::Sra => {
                format!("{mn} {}, {}, {shamt}", reg_name(rd), reg_name(rt))
            }
            RegOp::Jr => format!("{mn} {}", reg_name(rs)),
            _ => format!("{mn} {}, {}, {}", reg_name(rd), reg_name(rs), reg_name(rt)),
        },

        // ── I-format ────────────────────────────────────────────────────
        Instruction::I { op, rs, rt, imm } => match op {
            ImmOp::Lw | ImmOp::Sw => format!("{mn} {}, {imm}({})", reg_name(rt), reg_name(rs)),
            ImmOp::Beq | ImmOp::Bne => {
                format!("{mn} {}, {}, {imm}", reg_name(rs), reg_name(rt))
            }
            ImmOp::Andi | ImmOp::Ori => {
                format!("{mn} {}, {}, {:#x}", reg_name(rt), reg_name(rs), imm)
            }
            ImmOp::Addi | ImmOp::Slti => {
                format!("{mn} {}, {}, {imm}", reg_name(rt), reg_name(rs))
            }
        },

        // ── J-format ────────────────────────────────────────────────────
        Instruction::J { target, .. } => format!("{mn} {:#x}", target << 2),
    }
}
