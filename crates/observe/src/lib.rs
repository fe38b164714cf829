//! Initialization logic for the tracing stack, shared by tests and any
//! binary embedding the interaction core.
pub mod tracing;
