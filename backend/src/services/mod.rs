//! Module for core business logic services.
//!
//! Services orchestrate interactions across the database layer and the
//! adapter clients; currently that is the PPDB status-change
//! notification fan-out.

pub mod notifier;
