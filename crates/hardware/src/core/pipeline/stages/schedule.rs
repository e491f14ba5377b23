//! Schedule (SC) Stage.
//!
//! Issues waiting stations into free functional-unit lanes. Within a class
//! stations are visited oldest first, so the oldest ready instruction wins
//! a contended lane.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::ReservationPool;
use crate::timeline::Stage;

/// Executes the schedule stage.
///
/// A station issues when both operands are ready, it has not issued yet,
/// and its class's bank has a free lane at that moment. Operands woken by
/// this cycle's state-update stage are already visible here.
pub fn schedule_stage(cpu: &mut Cpu) {
    let Cpu {
        pools,
        banks,
        stats,
        timeline,
        cycle,
        ..
    } = cpu;

    for (pool, bank) in pools.iter_mut().zip(banks.iter_mut()) {
        let class = pool.class();
        for station in pool.iter_mut() {
            if !ReservationPool::ready_to_issue(station, bank) {
                continue;
            }
            let tag = station.tag();
            bank.issue(tag);
            station.issued = true;
            stats.record_fire(class);
            trace!("SC  tag={tag} class={class}");

            if let Some(timeline) = timeline.as_mut() {
                timeline.stamp(tag, Stage::Schedule, *cycle);
            }
        }
    }
}
