//! Instruction traces: record types and readers.
//!
//! 1. **Records:** [`TraceInst`] as read from a trace and [`InstRecord`] once fetched.
//! 2. **Sources:** The [`TraceSource`] trait, the text [`TraceReader`] and the in-memory [`MemoryTrace`].

/// Instruction record types.
pub mod inst;

/// Trace sources and the text trace parser.
pub mod reader;

pub use inst::{InstRecord, TraceInst};
pub use reader::{MemoryTrace, TraceReader, TraceSource, parse_line};
