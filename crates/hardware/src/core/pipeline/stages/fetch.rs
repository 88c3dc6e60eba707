//! Instruction fetch stage.

use crate::common::Stage;
use crate::core::pipeline::latches::IfId;
use crate::core::Cpu;

/// Reads one big-endian instruction word at `pc` and advances it.
///
/// Fetch never runs past the loaded program text: once `pc` leaves it the
/// stage produces bubbles so the pipeline drains and the driver can halt.
/// A misaligned `pc` (reachable only through `jr` on a garbage value) is
/// latched as a fault instead of being read.
pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.pc >= cpu.text_end {
        cpu.if_id = None;
        return;
    }

    let pc = cpu.pc;
    let next_pc = pc.wrapping_add(4);
    let (raw, trap) = match cpu.mem.read_word(pc) {
        Ok(raw) => (raw, None),
        Err(fault) => (0, Some(cpu.trap_at(Stage::Fetch, fault, pc, 0))),
    };

    if cpu.trace {
        eprintln!("IF  pc={pc:#010x} inst={raw:#010x}");
    }

    cpu.if_id = Some(IfId {
        pc,
        next_pc,
        raw,
        trap,
    });
    cpu.pc = next_pc;
}
