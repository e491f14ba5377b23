//! Fetch (FE) Stage.
//!
//! Reads up to `fetch_width` instructions from the trace source per cycle,
//! numbers them in program order, and appends them to the dispatch queue.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::trace::{InstRecord, TraceSource};

/// Executes the fetch stage.
///
/// Stops early when the dispatch queue is full or the source reports end of
/// trace. Once the source has ended it is never consulted again.
pub fn fetch_stage<S: TraceSource + ?Sized>(cpu: &mut Cpu, source: &mut S) {
    for _ in 0..cpu.fetch_width {
        if cpu.trace_exhausted || cpu.dispatch_queue.is_full() {
            break;
        }
        let Some(next) = source.next_inst() else {
            cpu.trace_exhausted = true;
            debug!("FE  end of trace after {} instructions", cpu.fetched());
            break;
        };

        let inst = InstRecord::new(cpu.next_tag, next);
        cpu.next_tag = cpu.next_tag.next();
        trace!("FE  {inst}");

        if let Some(timeline) = cpu.timeline.as_mut() {
            timeline.record_fetch(&inst, cpu.cycle);
        }
        cpu.dispatch_queue.push(inst);
    }
}
