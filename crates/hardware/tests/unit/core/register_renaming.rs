//! Register Renaming Tests.
//!
//! A reader dispatched after a writer must wait on that writer's tag, and
//! only on the most recent dispatched writer of each source register.

use procsim_core::common::{RegId, Tag, UnitClass};
use procsim_core::core::arch::RegisterFile;
use procsim_core::core::pipeline::{Operand, ReservationPool};
use procsim_core::trace::InstRecord;

use crate::common::builder::instruction::{InstBuilder, program};
use crate::common::harness::TestContext;

fn record(tag: u64, builder: InstBuilder) -> InstRecord {
    InstRecord::new(Tag(tag), builder.build())
}

#[test]
fn test_reader_waits_on_latest_writer() {
    let mut regs = RegisterFile::new();
    let mut k2 = ReservationPool::new(UnitClass::K2, 4);
    let mut k0 = ReservationPool::new(UnitClass::K0, 4);

    k2.admit(record(1, InstBuilder::k2().dest(5)), &mut regs);
    k0.admit(record(2, InstBuilder::k0().dest(5)), &mut regs);
    k0.admit(record(3, InstBuilder::k0().src(5, 6)), &mut regs);

    let reader = k0.get(Tag(3)).unwrap();
    assert_eq!(reader.operands[0], Operand::waiting_on(Tag(2)));
    assert_eq!(reader.operands[1], Operand::READY);
}

#[test]
fn test_older_writer_completion_leaves_newer_tag() {
    let mut regs = RegisterFile::new();
    let r5 = RegId::new(5);
    let mut pool = ReservationPool::new(UnitClass::K1, 4);
    pool.admit(record(1, InstBuilder::k1().dest(5)), &mut regs);
    pool.admit(record(2, InstBuilder::k1().dest(5)), &mut regs);

    regs.mark_tag_ready(Tag(1));
    assert!(!regs.is_ready(r5));
    assert_eq!(regs.pending_producer(r5), Some(Tag(2)));

    regs.mark_tag_ready(Tag(2));
    assert!(regs.is_ready(r5));
    assert_eq!(regs.pending_producer(r5), None);
}

#[test]
fn test_no_destination_touches_no_register() {
    let mut regs = RegisterFile::new();
    let mut pool = ReservationPool::new(UnitClass::K0, 2);
    pool.admit(record(1, InstBuilder::k0().src(1, 2)), &mut regs);
    assert_eq!(regs.pending_count(), 0);
}

#[test]
fn test_reader_schedules_on_newer_writer_broadcast() {
    // r5 written by a slow K2 then a fast K0; the reader follows the K0
    let ctx = TestContext::new(program([
        InstBuilder::k2().dest(5),
        InstBuilder::k0().dest(5),
        InstBuilder::k0().src1(5),
    ]))
    .run();

    assert_eq!(ctx.scheduled(3), ctx.updated(2));
    assert!(ctx.scheduled(3) < ctx.updated(1));
}

#[test]
fn test_committed_writer_leaves_register_ready() {
    // The reader is fetched long after the writer retired
    let mut insts = vec![InstBuilder::k0().dest(9).build()];
    insts.extend((0..12).map(|_| InstBuilder::k1().build()));
    insts.push(InstBuilder::k0().src(9, 9).build());
    let ctx = TestContext::with_machine(1, [1, 2, 3], 2, 2, insts).run();

    let last = ctx.timing(14);
    assert!(ctx.timing(1).commit.unwrap() < last.dispatch.unwrap());
    // Ready at dispatch: scheduled on the very next cycle
    assert_eq!(last.schedule.unwrap(), last.dispatch.unwrap() + 1);
}
