//! Instruction decode and register read stage.

use crate::common::{Stage, Trap};
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::Cpu;
use crate::isa::disasm;
use crate::isa::{decode, Instruction, InstructionBits};

/// Decodes the fetched word, reads the register file, and resolves operand
/// forwarding.
///
/// Both register fields are read unconditionally; forwarding then overrides
/// the sources the instruction actually consumes (see
/// [`hazards::forward_operands`]). An encoding outside the supported set
/// becomes a trapped entry here — the decoder is the only place raw words
/// are interpreted — and rides the pipe to write-back.
pub fn decode_stage(cpu: &mut Cpu) {
    let Some(ifid) = cpu.if_id.take() else {
        cpu.id_ex = None;
        return;
    };

    // A fetch fault passes through undecoded.
    if ifid.trap.is_some() {
        cpu.id_ex = Some(trapped_entry(&ifid, ifid.trap));
        return;
    }

    let inst = match decode(ifid.raw) {
        Ok(inst) => inst,
        Err(fault) => {
            let trap = cpu.trap_at(Stage::Decode, fault, ifid.pc, ifid.raw);
            cpu.id_ex = Some(trapped_entry(&ifid, Some(trap)));
            return;
        }
    };

    // Architectural read of both register fields, used or not.
    let rs_val = cpu.regs.read(ifid.raw.rs());
    let rt_val = cpu.regs.read(ifid.raw.rt());

    let forwarded = hazards::forward_operands(
        &inst,
        rs_val,
        rt_val,
        cpu.ex_mem.as_ref(),
        cpu.mem_wb.as_ref(),
        ifid.pc,
        cpu.trace,
    );
    let (op_a, op_b) = match forwarded {
        Ok(ops) => ops,
        Err(fault) => {
            let trap = cpu.trap_at(Stage::Decode, fault, ifid.pc, ifid.raw);
            cpu.id_ex = Some(trapped_entry(&ifid, Some(trap)));
            return;
        }
    };

    let imm = match inst {
        Instruction::I { imm, .. } => imm,
        Instruction::R { .. } | Instruction::J { .. } => 0,
    };

    if cpu.trace {
        eprintln!("ID  pc={:#010x} {}", ifid.pc, disasm::render(&inst));
    }

    cpu.id_ex = Some(IdEx {
        pc: ifid.pc,
        next_pc: ifid.next_pc,
        inst,
        raw: ifid.raw,
        op_a,
        op_b,
        imm,
        dest: inst.dest_reg(),
        trap: None,
    });
}

/// Builds an ID/EX entry whose semantics are suppressed by a fault.
fn trapped_entry(ifid: &IfId, trap: Option<Trap>) -> IdEx {
    IdEx {
        pc: ifid.pc,
        next_pc: ifid.next_pc,
        inst: Instruction::NOP,
        raw: ifid.raw,
        op_a: 0,
        op_b: 0,
        imm: 0,
        dest: None,
        trap,
    }
}
