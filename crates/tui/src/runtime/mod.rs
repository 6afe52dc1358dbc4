//! Runtime components for the demo binary.
//!
//! - Terminal management (TerminalGuard)
//! - Alert configuration loading from CLI, env and style file
//!
//! Does NOT handle:
//! - Alert rendering or input handling (see `spark_alert::controller`).
//!
//! Invariants:
//! - Both modules are used during startup in `main()`.

pub mod config;
pub mod terminal;
