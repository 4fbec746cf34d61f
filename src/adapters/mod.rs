//! Adapter implementations of the port traits.
//!
//! `live` adapters talk to the real host (filesystem, clipboard, tmux,
//! stderr). `fake` adapters are in-memory doubles that record every call for
//! assertions in tests.

pub mod fake;
pub mod live;
