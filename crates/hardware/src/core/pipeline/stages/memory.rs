//! Memory access stage.

use crate::common::Stage;
use crate::core::pipeline::latches::{MemOpKind, MemWb};
use crate::core::Cpu;

/// Performs the load or store computed by execute, or passes the ALU result
/// through.
///
/// Alignment and range are validated before any byte moves; a violation
/// latches the fault without performing the access. The final write-back
/// value is selected here — the loaded word for loads, the ALU result for
/// everything else — so write-back is a pure register commit.
pub fn memory_stage(cpu: &mut Cpu) {
    let Some(ex) = cpu.ex_mem.take() else {
        cpu.mem_wb = None;
        return;
    };

    if ex.trap.is_some() {
        cpu.mem_wb = Some(MemWb {
            pc: ex.pc,
            inst: ex.inst,
            raw: ex.raw,
            value: 0,
            dest: None,
            trap: ex.trap,
        });
        return;
    }

    let (value, trap) = match ex.mem_op {
        MemOpKind::None => (ex.result, None),
        MemOpKind::Load => match cpu.mem.read_word(ex.result) {
            Ok(word) => {
                if cpu.trace {
                    eprintln!("MEM pc={:#010x} load [{:#010x}] => {word:#x}", ex.pc, ex.result);
                }
                (word, None)
            }
            Err(fault) => (0, Some(cpu.trap_at(Stage::Memory, fault, ex.pc, ex.raw))),
        },
        MemOpKind::Store => match cpu.mem.write_word(ex.result, ex.store_value) {
            Ok(()) => {
                if cpu.trace {
                    eprintln!(
                        "MEM pc={:#010x} store [{:#010x}] <= {:#x}",
                        ex.pc, ex.result, ex.store_value
                    );
                }
                (0, None)
            }
            Err(fault) => (0, Some(cpu.trap_at(Stage::Memory, fault, ex.pc, ex.raw))),
        },
    };

    cpu.mem_wb = Some(MemWb {
        pc: ex.pc,
        inst: ex.inst,
        raw: ex.raw,
        value,
        dest: if trap.is_some() { None } else { ex.dest },
        trap,
    });
}
