//! The load-use interlock.
//!
//! A load in ID/EX whose destination is consumed by the word in IF/ID
//! cannot be covered by forwarding; the front end is held for one cycle
//! and the consumer picks the word up from MEM/WB on the next tick. The
//! unit tests pin exactly when the interlock fires; the pipeline tests at
//! the bottom pin the cost at one bubble.

use mips_core::common::{Fault, Stage, Trap};
use mips_core::core::pipeline::hazards::need_stall_load_use;
use mips_core::core::pipeline::latches::{IdEx, IfId};

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::builder::pipeline_state::{IdExBuilder, IfIdBuilder};
use crate::common::harness::TestContext;

/// `lw dest, 0($a0)` sitting in ID/EX.
fn load_in_ex(dest: u32) -> IdEx {
    IdExBuilder::new()
        .decoded(InstructionBuilder::new().lw(dest, 4, 0).build())
        .build()
}

/// A raw word sitting in IF/ID, not yet decoded.
fn fetched(raw: u32) -> IfId {
    IfIdBuilder::new().raw(raw).build()
}

fn poisoned() -> Trap {
    Trap {
        fault: Fault::UnsupportedEncoding { raw: 0xFC00_0000 },
        stage: Stage::Decode,
        cycle: 1,
        pc: 0,
        raw: 0xFC00_0000,
    }
}

// ══════════════════════════════════════════════════════════════════════
// 1. When the interlock fires
// ══════════════════════════════════════════════════════════════════════

#[test]
fn consumer_of_the_load_rs_slot_stalls() {
    // lw $t0, then add $t1, $t0, $zero
    let producer = load_in_ex(8);
    let consumer = fetched(InstructionBuilder::new().add(9, 8, 0).build());
    assert!(need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn consumer_of_the_load_rt_slot_stalls() {
    // lw $t0, then add $t1, $zero, $t0
    let producer = load_in_ex(8);
    let consumer = fetched(InstructionBuilder::new().add(9, 0, 8).build());
    assert!(need_stall_load_use(Some(&producer), Some(&consumer)));

    // Shifts read only rt, and that is enough.
    let consumer = fetched(InstructionBuilder::new().sll(9, 8, 1).build());
    assert!(need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn store_of_the_loaded_value_stalls() {
    // lw $t0, then sw $t0, 0($a0): the data operand is a real use.
    let producer = load_in_ex(8);
    let consumer = fetched(InstructionBuilder::new().sw(8, 4, 0).build());
    assert!(need_stall_load_use(Some(&producer), Some(&consumer)));
}

// ══════════════════════════════════════════════════════════════════════
// 2. When it must not fire
// ══════════════════════════════════════════════════════════════════════

#[test]
fn alu_producers_never_stall() {
    let producer = IdExBuilder::new()
        .decoded(InstructionBuilder::new().addi(8, 0, 5).build())
        .build();
    let consumer = fetched(InstructionBuilder::new().add(9, 8, 8).build());
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn unrelated_registers_do_not_stall() {
    let producer = load_in_ex(8);
    let consumer = fetched(InstructionBuilder::new().add(9, 10, 11).build());
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn destination_only_overlap_does_not_stall() {
    // lw $t0, then addi $t0, $zero, 1: the consumer's rt field names the
    // loaded register, but only as its own destination.
    let producer = load_in_ex(8);
    let consumer = fetched(InstructionBuilder::new().addi(8, 0, 1).build());
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn loads_into_zero_never_stall() {
    let producer = load_in_ex(0);
    let consumer = fetched(InstructionBuilder::new().add(9, 0, 0).build());
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn empty_slots_never_stall() {
    let producer = load_in_ex(8);
    let consumer = fetched(InstructionBuilder::new().add(9, 8, 0).build());
    assert!(!need_stall_load_use(None, Some(&consumer)));
    assert!(!need_stall_load_use(Some(&producer), None));
    assert!(!need_stall_load_use(None, None));
}

#[test]
fn trapped_entries_never_stall() {
    let mut producer = load_in_ex(8);
    producer.trap = Some(poisoned());
    let consumer = fetched(InstructionBuilder::new().add(9, 8, 0).build());
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));

    let producer = load_in_ex(8);
    let consumer = IfIdBuilder::new()
        .raw(InstructionBuilder::new().add(9, 8, 0).build())
        .trap(poisoned())
        .build();
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));
}

#[test]
fn undecodable_consumer_does_not_stall() {
    // The consumer is about to fault in decode; holding it would only
    // delay the trap.
    let producer = load_in_ex(8);
    let consumer = fetched(0xFC00_0000);
    assert!(!need_stall_load_use(Some(&producer), Some(&consumer)));
}

// ══════════════════════════════════════════════════════════════════════
// 3. The cost through the full pipeline
// ══════════════════════════════════════════════════════════════════════

#[test]
fn load_use_costs_exactly_one_bubble() {
    let program = [
        InstructionBuilder::new().lw(8, 0, 32).build(),
        InstructionBuilder::new().add(9, 8, 8).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);
    tc.sim.cpu.mem.write_word(32, 42).unwrap();

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 7, "two instructions, four fill cycles, one bubble");
    assert_eq!(tc.get_reg(8), 42);
    assert_eq!(tc.get_reg(9), 84, "consumer must see the loaded word");
    assert_eq!(tc.sim.cpu.stats.stalls_data, 1);
    assert_eq!(tc.sim.cpu.stats.stalls_control, 0);
    assert_eq!(tc.sim.cpu.stats.instructions_retired, 2);
}

#[test]
fn address_dependency_chain_stalls_once() {
    // The second load's base register is the first load's destination.
    let program = [
        InstructionBuilder::new().lw(8, 0, 32).build(),
        InstructionBuilder::new().lw(9, 8, 0).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);
    tc.sim.cpu.mem.write_word(32, 36).unwrap();
    tc.sim.cpu.mem.write_word(36, 0xAB).unwrap();

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 7);
    assert_eq!(tc.get_reg(8), 36);
    assert_eq!(tc.get_reg(9), 0xAB);
    assert_eq!(tc.sim.cpu.stats.stalls_data, 1);
}

#[test]
fn spaced_load_needs_no_stall() {
    // One instruction between the load and its consumer: MEM/WB
    // forwarding covers it without a bubble.
    let program = [
        InstructionBuilder::new().lw(8, 0, 32).build(),
        InstructionBuilder::new().addi(10, 0, 1).build(),
        InstructionBuilder::new().add(9, 8, 8).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);
    tc.sim.cpu.mem.write_word(32, 21).unwrap();

    let cycles = tc.run_to_halt();
    assert_eq!(cycles, 7, "three instructions, no bubbles");
    assert_eq!(tc.get_reg(9), 42);
    assert_eq!(tc.sim.cpu.stats.stalls_data, 0);
}
