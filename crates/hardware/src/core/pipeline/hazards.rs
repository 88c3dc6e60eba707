//! Hazard detection and operand forwarding.
//!
//! Data hazards are resolved in the decode stage by overriding its operand
//! selection with the youngest in-flight producer of each source register:
//!
//! 1. **EX/MEM forwarding** covers a producer one instruction ahead.
//! 2. **MEM/WB forwarding** covers a producer two instructions ahead.
//! 3. Producers three or more ahead have already committed, because
//!    write-back runs first within every tick.
//!
//! The one case forwarding cannot cover is a load immediately followed by a
//! consumer of its destination: the loaded word exists only after the memory
//! stage, one cycle too late for EX/MEM forwarding. Decode requests a
//! one-cycle stall of the fetch/decode pair; the load's departure from
//! execute leaves the bubble, and the held consumer picks the word up from
//! MEM/WB forwarding on the next tick.
//!
//! ```ignore
//! lw  $t0, 0($a0)    # load in ID/EX when the consumer is in IF/ID
//! add $t1, $t0, $t0  # held one cycle, then forwarded from MEM/WB
//! ```

use crate::common::Fault;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemOpKind, MemWb};
use crate::isa::abi::{reg_name, REG_ZERO};
use crate::isa::{decode, Instruction};

/// Returns true when the instruction sitting in IF/ID consumes the
/// destination of a load sitting in ID/EX and must be held for one cycle.
///
/// Faulted entries never stall: a trapped load performs no access, and a
/// consumer whose word does not decode is about to fault itself.
pub fn need_stall_load_use(id_ex: Option<&IdEx>, if_id: Option<&IfId>) -> bool {
    let (Some(producer), Some(consumer)) = (id_ex, if_id) else {
        return false;
    };
    if producer.trap.is_some() || consumer.trap.is_some() || !producer.inst.is_load() {
        return false;
    }
    let Some(dest) = producer.dest else {
        return false;
    };
    if dest == REG_ZERO {
        return false;
    }
    let Ok(inst) = decode(consumer.raw) else {
        return false;
    };
    let (src_a, src_b) = inst.used_sources();
    src_a == Some(dest) || src_b == Some(dest)
}

/// Overrides decode's architectural operand reads with in-flight results.
///
/// Takes the values read from the register file for the rs and rt fields and
/// returns them with any pending producer's result substituted in. Only the
/// sources the instruction actually consumes are overridden; the MEM/WB
/// candidate is applied first so the younger EX/MEM result wins when both
/// latches target the same register.
///
/// # Errors
///
/// [`Fault::HazardUnresolved`] when a used source matches a load still in
/// EX/MEM: its datum does not exist yet, and the load-use stall should have
/// kept this instruction out of decode. Reaching this is an invariant
/// violation, not a recoverable state.
pub fn forward_operands(
    inst: &Instruction,
    rs_val: u32,
    rt_val: u32,
    ex_mem: Option<&ExMem>,
    mem_wb: Option<&MemWb>,
    pc: u32,
    trace: bool,
) -> Result<(u32, u32), Fault> {
    let (src_a, src_b) = inst.used_sources();
    let op_a = forward_one(src_a, rs_val, ex_mem, mem_wb, pc, trace)?;
    let op_b = forward_one(src_b, rt_val, ex_mem, mem_wb, pc, trace)?;
    Ok((op_a, op_b))
}

/// Forwarding for a single operand slot.
fn forward_one(
    src: Option<usize>,
    arch_val: u32,
    ex_mem: Option<&ExMem>,
    mem_wb: Option<&MemWb>,
    pc: u32,
    trace: bool,
) -> Result<u32, Fault> {
    let Some(src) = src else {
        return Ok(arch_val);
    };
    if src == REG_ZERO {
        return Ok(arch_val);
    }

    let mut value = arch_val;

    if let Some(wb) = mem_wb {
        if wb.trap.is_none() && wb.dest == Some(src) {
            if trace {
                eprintln!(
                    "[Forward] pc={:#010x} {}={:#x} source=MEM/WB (prev: {:#x})",
                    pc,
                    reg_name(src),
                    wb.value,
                    value
                );
            }
            value = wb.value;
        }
    }

    if let Some(ex) = ex_mem {
        if ex.trap.is_none() && ex.dest == Some(src) {
            // A load's result is still in memory; the stall logic must have
            // kept any consumer a cycle behind it.
            if ex.mem_op == MemOpKind::Load {
                return Err(Fault::HazardUnresolved { reg: src });
            }
            if trace {
                eprintln!(
                    "[Forward] pc={:#010x} {}={:#x} source=EX/MEM (prev: {:#x})",
                    pc,
                    reg_name(src),
                    ex.result,
                    value
                );
            }
            value = ex.result;
        }
    }

    Ok(value)
}
