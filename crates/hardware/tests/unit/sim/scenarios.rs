//! Timing Scenarios.
//!
//! Small programs whose stage cycles can be worked out by hand:
//!   1. A lone instruction walks one stage per cycle.
//!   2. Latency law: broadcast comes `latency + 1` cycles after issue.
//!   3. Independent instructions on one lane issue on consecutive cycles.
//!   4. A dependent instruction issues in its producer's broadcast cycle.
//!   5. Out-of-order completion still retires in program order.

use pretty_assertions::assert_eq;
use procsim_core::common::{Tag, UnitClass};
use procsim_core::timeline::InstTiming;
use rstest::rstest;

use crate::common::builder::instruction::{InstBuilder, program};
use crate::common::harness::TestContext;

fn stamps(t: &InstTiming) -> [Option<u64>; 6] {
    [
        t.fetch,
        t.dispatch,
        t.schedule,
        t.execute,
        t.state_update,
        t.commit,
    ]
}

#[test]
fn test_single_k0_instruction() {
    let ctx = TestContext::new(program([InstBuilder::k0().at(0x1000).dest(1).src(2, 3)])).run();

    assert_eq!(
        ctx.timing(1),
        InstTiming {
            tag: Tag(1),
            address: 0x1000,
            unit: UnitClass::K0,
            fetch: Some(0),
            dispatch: Some(1),
            schedule: Some(2),
            execute: Some(3),
            state_update: Some(4),
            commit: Some(5),
        }
    );
    assert_eq!(ctx.stats().cycles, 6);
    assert_eq!(ctx.stats().instructions_retired, 1);
}

#[rstest]
#[case::k0(1)]
#[case::k1(2)]
#[case::k2(3)]
fn test_latency_law(#[case] latency: u64) {
    let ctx = TestContext::new(program([InstBuilder::with_latency(latency as usize).dest(7)])).run();
    let t = ctx.timing(1);
    let schedule = t.schedule.unwrap();
    assert_eq!(t.execute, Some(schedule + latency));
    assert_eq!(t.state_update, Some(schedule + latency + 1));
    assert_eq!(ctx.stats().cycles, schedule + latency + 3);
}

#[rstest]
#[case::k0(InstBuilder::k0(), [1, 2, 3])]
#[case::k1(InstBuilder::k1(), [2, 1, 3])]
#[case::k2(InstBuilder::k2(), [2, 2, 1])]
fn test_independent_pair_on_single_lane(#[case] inst: InstBuilder, #[case] units: [usize; 3]) {
    let ctx = TestContext::with_machine(
        4,
        units,
        2,
        2,
        vec![inst.dest(1).build(), inst.dest(2).build()],
    )
    .run();

    assert_eq!(ctx.scheduled(2), ctx.scheduled(1) + 1);
    assert_eq!(ctx.retired(), &[Tag(1), Tag(2)]);
}

#[test]
fn test_two_lanes_issue_together() {
    let ctx = TestContext::new(program([
        InstBuilder::k1().dest(1),
        InstBuilder::k1().dest(2),
        InstBuilder::k1().dest(3),
    ]))
    .run();
    assert_eq!(ctx.scheduled(1), 2);
    assert_eq!(ctx.scheduled(2), 2);
    assert_eq!(ctx.scheduled(3), 3);
}

#[test]
fn test_dependent_issues_on_producer_broadcast() {
    let ctx = TestContext::new(program([
        InstBuilder::k2().dest(1).src(2, 3),
        InstBuilder::k0().dest(4).src(1, 5),
    ]))
    .run();

    assert_eq!(stamps(&ctx.timing(1)), [0, 1, 2, 5, 6, 7].map(Some));
    assert_eq!(stamps(&ctx.timing(2)), [0, 1, 6, 7, 8, 9].map(Some));
    assert_eq!(ctx.scheduled(2), ctx.updated(1));
    assert_eq!(ctx.stats().cycles, 10);
}

#[test]
fn test_out_of_order_completion_in_order_commit() {
    // The K0 finishes long before the K2 ahead of it
    let ctx = TestContext::new(program([InstBuilder::k2().dest(1), InstBuilder::k0().dest(2)])).run();

    assert!(ctx.updated(2) < ctx.updated(1));
    let first = ctx.timing(1).commit.unwrap();
    let second = ctx.timing(2).commit.unwrap();
    assert_eq!(first, ctx.updated(1) + 1);
    assert_eq!(second, first);
    assert_eq!(ctx.retired(), &[Tag(1), Tag(2)]);
}

#[test]
fn test_full_pool_blocks_younger_classes() {
    // One K2 station: the K0 behind the second K2 must wait for it
    let ctx = TestContext::with_machine(
        4,
        [1, 1, 1],
        2,
        1,
        program([
            InstBuilder::k2().dest(1),
            InstBuilder::k2().dest(2),
            InstBuilder::k0().dest(3),
        ]),
    )
    .run();

    let second = ctx.timing(2).dispatch.unwrap();
    assert_eq!(second, ctx.timing(1).execute.unwrap());
    assert_eq!(ctx.timing(3).dispatch, Some(second));
    assert!(ctx.stats().dispatch_stalls > 0);
}

#[test]
fn test_empty_trace() {
    let ctx = TestContext::new(Vec::new()).run();
    assert_eq!(ctx.stats().cycles, 1);
    assert!(ctx.retired().is_empty());
    assert_eq!(ctx.sim.timeline().map(|t| t.len()), Some(0));
}
