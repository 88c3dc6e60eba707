//! Fetch stage behaviour.

use mips_core::common::{Fault, Stage};
use mips_core::core::pipeline::latches::IfId;
use mips_core::core::pipeline::stages::fetch_stage;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn fetches_words_in_program_order() {
    let first = InstructionBuilder::new().addi(8, 0, 5).build();
    let second = InstructionBuilder::new().addi(9, 0, 7).build();
    let mut tc = TestContext::new().load_program(0, &[first, second]);

    fetch_stage(tc.cpu_mut());
    assert_eq!(
        tc.cpu().if_id,
        Some(IfId {
            pc: 0,
            next_pc: 4,
            raw: first,
            trap: None,
        })
    );
    assert_eq!(tc.cpu().pc, 4);

    fetch_stage(tc.cpu_mut());
    assert_eq!(
        tc.cpu().if_id,
        Some(IfId {
            pc: 4,
            next_pc: 8,
            raw: second,
            trap: None,
        })
    );
    assert_eq!(tc.cpu().pc, 8);
}

#[test]
fn idles_once_past_the_loaded_text() {
    let word = InstructionBuilder::new().addi(8, 0, 5).build();
    let mut tc = TestContext::new().load_program(0, &[word]);

    fetch_stage(tc.cpu_mut());
    assert!(tc.cpu().if_id.is_some());

    // pc is now at text_end; fetch produces bubbles and stops advancing.
    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().if_id, None);
    assert_eq!(tc.cpu().pc, 4);
}

#[test]
fn an_empty_machine_only_bubbles() {
    let mut tc = TestContext::new();
    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().if_id, None);
    assert_eq!(tc.cpu().pc, 0);
}

#[test]
fn misaligned_pc_latches_a_fetch_fault() {
    let program = [
        InstructionBuilder::new().addi(8, 0, 5).build(),
        InstructionBuilder::new().addi(9, 0, 7).build(),
    ];
    let mut tc = TestContext::new().load_program(0, &program);
    tc.cpu_mut().pc = 2;

    fetch_stage(tc.cpu_mut());
    let entry = tc.cpu().if_id.unwrap();
    let trap = entry.trap.unwrap();
    assert_eq!(trap.fault, Fault::MisalignedAccess { addr: 2 });
    assert_eq!(trap.stage, Stage::Fetch);
    assert_eq!(trap.pc, 2);
    assert_eq!(entry.raw, 0, "no word is read on a faulted fetch");
    assert_eq!(tc.cpu().pc, 6, "pc still advances so the machine drains");
}
