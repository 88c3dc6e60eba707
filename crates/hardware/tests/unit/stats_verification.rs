//! Statistics counters checked against hand-traced pipelines.

use mips_core::stats::SimStats;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn fresh_stats_are_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.stalls_data, 0);
    assert_eq!(stats.stalls_control, 0);
    assert_eq!(stats.inst_alu, 0);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.inst_branch, 0);
}

#[test]
fn mixed_program_buckets_every_counter() {
    // Three ALU ops, a store, a load feeding a taken branch: one data
    // stall from the load-use pair, two control stalls from the branch.
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().addi(9, 0, 2).build(),
        InstructionBuilder::new().add(10, 8, 9).build(),
        InstructionBuilder::new().sw(10, 0, 0).build(),
        InstructionBuilder::new().lw(11, 0, 0).build(),
        InstructionBuilder::new().beq(11, 10, 1).build(),
        InstructionBuilder::new().addi(16, 0, 9).build(), // squashed
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    let cycles = tc.run_to_halt();
    let stats = &tc.sim.cpu.stats;

    assert_eq!(stats.cycles, cycles);
    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.inst_alu, 3);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.stalls_data, 1);
    assert_eq!(stats.stalls_control, 2);
    assert_eq!(tc.get_reg(16), 0, "the squashed slot must not count");
}

#[test]
fn counted_cycles_match_the_returned_total() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().addi(9, 0, 2).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);
    let cycles = tc.run_to_halt();
    assert_eq!(tc.sim.cpu.stats.cycles, cycles);
}

#[test]
fn identical_programs_produce_identical_stats() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().lw(9, 0, 0).build(),
        InstructionBuilder::new().add(10, 9, 9).build(),
    ];
    let mut first = TestContext::new().load_program(0, &program);
    let mut second = TestContext::new().load_program(0, &program);
    let _ = first.run_to_halt();
    let _ = second.run_to_halt();
    assert_eq!(first.sim.cpu.stats, second.sim.cpu.stats);
}

#[test]
fn report_printing_handles_every_shape() {
    // Zero-cycle stats exercise the divide guards.
    SimStats::default().print();

    let mut tc = TestContext::new().load_program(
        0,
        &[
            InstructionBuilder::new().addi(8, 0, 1).build(),
            InstructionBuilder::new().beq(8, 8, 0).build(),
        ],
    );
    let _ = tc.run_to_halt();
    tc.sim.cpu.stats.print();
}
