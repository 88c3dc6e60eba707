//! Execute stage: ALU operations, effective addresses, and control flow.

use crate::core::alu::{Alu, AluOp};
use crate::core::pipeline::latches::{ExMem, MemOpKind};
use crate::core::Cpu;
use crate::isa::instruction::{ImmOp, Instruction, JumpOp, RegOp};

/// Dispatches the decoded instruction: two levels, format first, then the
/// operation within it.
///
/// Branches and jumps resolve here. A taken transfer overwrites `pc` and
/// flushes the two younger slots (the fetched-but-undecoded word and this
/// tick's would-be fetch), which is the entire control-hazard penalty.
/// Trapped entries pass through untouched so the fault surfaces in order.
pub fn execute_stage(cpu: &mut Cpu) {
    let Some(id) = cpu.id_ex.take() else {
        cpu.ex_mem = None;
        return;
    };

    if id.trap.is_some() {
        cpu.ex_mem = Some(ExMem {
            pc: id.pc,
            next_pc: id.next_pc,
            inst: id.inst,
            raw: id.raw,
            result: 0,
            store_value: 0,
            dest: None,
            mem_op: MemOpKind::None,
            trap: id.trap,
        });
        return;
    }

    let mut result = 0u32;
    let mut store_value = 0u32;
    let mut mem_op = MemOpKind::None;

    match id.inst {
        Instruction::R { op, shamt, .. } => match op {
            // Shifts take the rt operand and the encoded distance.
            RegOp::Sll => result = Alu::execute(AluOp::Sll, id.op_b, shamt),
            RegOp::Srl => result = Alu::execute(AluOp::Srl, id.op_b, shamt),
            RegOp::Sra => result = Alu::execute(AluOp::Sra, id.op_b, shamt),
            RegOp::Jr => cpu.redirect(id.op_a),
            RegOp::Add => result = Alu::execute(AluOp::Add, id.op_a, id.op_b),
            RegOp::Sub => result = Alu::execute(AluOp::Sub, id.op_a, id.op_b),
            RegOp::And => result = Alu::execute(AluOp::And, id.op_a, id.op_b),
            RegOp::Or => result = Alu::execute(AluOp::Or, id.op_a, id.op_b),
            RegOp::Nor => result = Alu::execute(AluOp::Nor, id.op_a, id.op_b),
            RegOp::Slt => result = Alu::execute(AluOp::Slt, id.op_a, id.op_b),
        },
        Instruction::I { op, .. } => {
            let imm = id.imm as u32;
            match op {
                ImmOp::Addi => result = Alu::execute(AluOp::Add, id.op_a, imm),
                ImmOp::Slti => result = Alu::execute(AluOp::Slt, id.op_a, imm),
                ImmOp::Andi => result = Alu::execute(AluOp::And, id.op_a, imm),
                ImmOp::Ori => result = Alu::execute(AluOp::Or, id.op_a, imm),
                ImmOp::Lw => {
                    result = Alu::execute(AluOp::Add, id.op_a, imm);
                    mem_op = MemOpKind::Load;
                }
                ImmOp::Sw => {
                    result = Alu::execute(AluOp::Add, id.op_a, imm);
                    store_value = id.op_b;
                    mem_op = MemOpKind::Store;
                }
                ImmOp::Beq | ImmOp::Bne => {
                    let equal = id.op_a == id.op_b;
                    let taken = if op == ImmOp::Beq { equal } else { !equal };
                    let target = branch_target(id.next_pc, id.imm);
                    if taken {
                        result = target;
                        cpu.redirect(target);
                    }
                }
            }
        }
        Instruction::J { op, target } => {
            let target = jump_target(id.next_pc, target);
            if op == JumpOp::Jal {
                // The link value commits through the normal write-back path.
                result = id.next_pc;
            }
            cpu.redirect(target);
        }
    }

    if cpu.trace {
        eprintln!(
            "EX  pc={:#010x} {} result={result:#x}",
            id.pc,
            id.inst.mnemonic()
        );
    }

    cpu.ex_mem = Some(ExMem {
        pc: id.pc,
        next_pc: id.next_pc,
        inst: id.inst,
        raw: id.raw,
        result,
        store_value,
        dest: id.dest,
        mem_op,
        trap: None,
    });
}

/// Branch target: `next_pc` plus the sign-extended immediate scaled to
/// bytes.
pub fn branch_target(next_pc: u32, imm: i32) -> u32 {
    next_pc.wrapping_add((imm << 2) as u32)
}

/// Jump target: the 26-bit field scaled to bytes, placed in the 256 MiB
/// segment of the advanced program counter.
pub fn jump_target(next_pc: u32, target26: u32) -> u32 {
    (next_pc & 0xF000_0000) | (target26 << 2)
}
