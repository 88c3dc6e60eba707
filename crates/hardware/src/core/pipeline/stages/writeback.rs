//! Write-back stage.

use crate::common::Trap;
use crate::core::Cpu;
use crate::isa::abi::reg_name;
use crate::isa::instruction::InstClass;

/// Commits the final value to the destination register and retires the
/// instruction.
///
/// The single point of register mutation. A fault that rode the pipe
/// surfaces here as the fatal simulation error, after every older
/// instruction has committed and before any younger one can.
///
/// # Errors
///
/// Returns the [`Trap`] carried by the retiring entry, ending the
/// simulation.
pub fn writeback_stage(cpu: &mut Cpu) -> Result<(), Trap> {
    let Some(wb) = cpu.mem_wb.take() else {
        cpu.retired = None;
        return Ok(());
    };

    if let Some(trap) = wb.trap {
        cpu.retired = None;
        return Err(trap);
    }

    if let Some(dest) = wb.dest {
        if cpu.trace {
            eprintln!(
                "WB  pc={:#010x} {} <= {:#x}",
                wb.pc,
                reg_name(dest),
                wb.value
            );
        }
        cpu.regs.write(dest, wb.value);
    }

    cpu.stats.instructions_retired += 1;
    match wb.inst.class() {
        InstClass::Alu => cpu.stats.inst_alu += 1,
        InstClass::Load => cpu.stats.inst_load += 1,
        InstClass::Store => cpu.stats.inst_store += 1,
        InstClass::Branch => cpu.stats.inst_branch += 1,
    }

    cpu.retired = Some(wb);
    Ok(())
}
