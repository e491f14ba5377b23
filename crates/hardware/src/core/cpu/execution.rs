//! Main execution loop.
//!
//! One call to [`Cpu::tick`] simulates one cycle. Stages run in reverse
//! data-flow order so that no stage sees a result produced later in the
//! same cycle:
//!
//! ```text
//! Commit -> State-Update -> Execute -> Schedule -> Dispatch -> Fetch
//! ```

use tracing::debug;

use super::Cpu;
use crate::core::pipeline::stages::{
    commit_stage, dispatch_stage, execute_stage, fetch_stage, schedule_stage, state_update_stage,
};
use crate::trace::TraceSource;

impl Cpu {
    /// Advances the core by one cycle, fetching from `source`.
    pub fn tick<S: TraceSource + ?Sized>(&mut self, source: &mut S) {
        commit_stage(self);
        state_update_stage(self);
        execute_stage(self);
        schedule_stage(self);
        dispatch_stage(self);
        fetch_stage(self, source);

        self.stats.sample_dispatch_queue(self.dispatch_queue.len());

        debug!(
            "cycle {}: dq={} rs=[{} {} {}] cq={} retired={}",
            self.cycle,
            self.dispatch_queue.len(),
            self.pools[0].len(),
            self.pools[1].len(),
            self.pools[2].len(),
            self.commit_queue.len(),
            self.stats.instructions_retired
        );

        self.cycle += 1;
        self.stats.cycles = self.cycle;
    }
}
