//! Adapters implementing the domain ports.
//!
//! The host platform normally provides these collaborators; the in-memory versions
//! back the command line harness and the tests.

pub mod in_memory;
