//! Pipeline stage implementations.
//!
//! Each stage is a free function over the whole [`Cpu`](crate::core::Cpu)
//! state. [`Cpu::tick`](crate::core::Cpu::tick) calls them once per cycle in
//! this order:
//! 1. **Commit:** retires completed instructions in program order.
//! 2. **State-Update:** broadcasts last cycle's results and queues them for commit.
//! 3. **Execute:** advances every functional-unit lane.
//! 4. **Schedule:** issues ready stations into free lanes.
//! 5. **Dispatch:** renames queued instructions into reservation stations.
//! 6. **Fetch:** reads new instructions from the trace.

/// Commit stage implementation.
pub mod commit;

/// Dispatch stage implementation.
pub mod dispatch;

/// Execute stage implementation.
pub mod execute;

/// Fetch stage implementation.
pub mod fetch;

/// Schedule stage implementation.
pub mod schedule;

/// State-update stage implementation.
pub mod state_update;

/// Commit stage entry point (CM stage).
pub use commit::commit_stage;
/// Dispatch stage entry point (DP stage).
pub use dispatch::dispatch_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (FE stage).
pub use fetch::fetch_stage;
/// Schedule stage entry point (SC stage).
pub use schedule::schedule_stage;
/// State-update stage entry point (SU stage).
pub use state_update::state_update_stage;
