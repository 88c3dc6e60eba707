//! Control transfers through the full pipeline.
//!
//! Branches resolve in execute, so a taken transfer always discards the
//! two younger slots behind it: the fetched-but-undecoded word and the
//! word fetch would have produced that tick. The squashed slots never
//! retire and never touch architectural state; the cost is booked as two
//! control-stall cycles per taken transfer.

use mips_core::common::Stage;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn taken_beq_squashes_the_fetched_slot() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().beq(8, 8, 1).build(),
        InstructionBuilder::new().addi(9, 0, 99).build(), // squashed
        InstructionBuilder::new().addi(10, 0, 42).build(), // branch target
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    // Ride up to the redirect tick and observe the two bubbles.
    tc.run(4);
    assert!(tc.cpu().is_bubble(Stage::Fetch));
    assert!(tc.cpu().is_bubble(Stage::Decode));
    assert!(!tc.cpu().is_bubble(Stage::Execute));

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 9);
    assert_eq!(tc.get_reg(8), 1);
    assert_eq!(tc.get_reg(9), 0, "the squashed slot must not retire");
    assert_eq!(tc.get_reg(10), 42);
    assert_eq!(tc.sim.cpu.stats.stalls_control, 2);
    assert_eq!(tc.sim.cpu.stats.instructions_retired, 3);
    assert_eq!(tc.sim.cpu.stats.inst_branch, 1);
}

#[test]
fn not_taken_beq_falls_straight_through() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().beq(8, 0, 1).build(),
        InstructionBuilder::new().addi(9, 0, 33).build(),
        InstructionBuilder::new().addi(10, 0, 44).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 8, "no bubbles on the fall-through path");
    assert_eq!(tc.get_reg(9), 33);
    assert_eq!(tc.get_reg(10), 44);
    assert_eq!(tc.sim.cpu.stats.stalls_control, 0);
    assert_eq!(tc.sim.cpu.stats.instructions_retired, 4);
}

#[test]
fn bne_takes_on_unequal_operands() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().bne(8, 0, 1).build(),
        InstructionBuilder::new().addi(9, 0, 99).build(), // squashed
        InstructionBuilder::new().addi(10, 0, 7).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 9);
    assert_eq!(tc.get_reg(9), 0);
    assert_eq!(tc.get_reg(10), 7);
    assert_eq!(tc.sim.cpu.stats.stalls_control, 2);
}

#[test]
fn bne_falls_through_on_equal_operands() {
    let program = [
        InstructionBuilder::new().bne(0, 0, 1).build(),
        InstructionBuilder::new().addi(9, 0, 33).build(),
        InstructionBuilder::new().addi(10, 0, 44).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 7);
    assert_eq!(tc.get_reg(9), 33);
    assert_eq!(tc.get_reg(10), 44);
    assert_eq!(tc.sim.cpu.stats.stalls_control, 0);
}

#[test]
fn backward_branch_forms_a_counted_loop() {
    // $t0 counts up to $t1 = 3; the decision always consumes the
    // increment from the EX/MEM latch.
    let program = [
        InstructionBuilder::new().addi(8, 0, 0).build(),
        InstructionBuilder::new().addi(9, 0, 3).build(),
        InstructionBuilder::new().addi(8, 8, 1).build(),
        InstructionBuilder::new().bne(8, 9, -2).build(),
        InstructionBuilder::new().addi(10, 0, 100).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    let cycles = tc.run_to_halt();
    assert!(cycles > 0);
    assert_eq!(tc.get_reg(8), 3);
    assert_eq!(tc.get_reg(10), 100);
    assert_eq!(
        tc.sim.cpu.stats.stalls_control, 4,
        "two taken iterations, one fall-through"
    );
    assert_eq!(tc.sim.cpu.stats.instructions_retired, 9);
}

#[test]
fn call_and_return_round_trip() {
    // jal into a two-instruction body, jr back on the linked address,
    // then jump past the end of text to drain. The word after the final
    // jump is fetched and squashed, never retired.
    let program = [
        InstructionBuilder::new().jal(4).build(),          // 0x00: call 0x10
        InstructionBuilder::new().addi(9, 0, 5).build(),   // 0x04: after return
        InstructionBuilder::new().j(6).build(),            // 0x08: jump to 0x18 (end)
        InstructionBuilder::new().addi(11, 0, 99).build(), // 0x0c: squashed
        InstructionBuilder::new().addi(8, 0, 9).build(),   // 0x10: body
        InstructionBuilder::new().jr(31).build(),          // 0x14: return
    ];
    let mut tc = TestContext::new().load_program(0, &program);

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 13);
    assert_eq!(tc.get_reg(31), 4, "jal links the instruction after itself");
    assert_eq!(tc.get_reg(8), 9, "body runs after the call");
    assert_eq!(tc.get_reg(9), 5, "execution resumes at the linked address");
    assert_eq!(tc.get_reg(11), 0, "the slot behind the final jump is squashed");
    assert_eq!(tc.sim.cpu.stats.stalls_control, 6, "three taken transfers");
    assert_eq!(tc.sim.cpu.stats.instructions_retired, 5);
    assert_eq!(tc.sim.cpu.stats.inst_branch, 3);
}

#[test]
fn identical_runs_are_deterministic() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 1).build(),
        InstructionBuilder::new().beq(8, 8, 1).build(),
        InstructionBuilder::new().addi(9, 0, 99).build(),
        InstructionBuilder::new().addi(10, 0, 42).build(),
    ];
    let mut first = TestContext::new().load_program(0, &program);
    let mut second = TestContext::new().load_program(0, &program);

    let cycles_first = first.run_to_halt();
    let cycles_second = second.run_to_halt();

    assert_eq!(cycles_first, cycles_second);
    assert_eq!(first.sim.cpu.stats, second.sim.cpu.stats);
    for reg in 0..32 {
        assert_eq!(first.get_reg(reg), second.get_reg(reg), "register {reg}");
    }
}
