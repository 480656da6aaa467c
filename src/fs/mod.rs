//! Filesystem utilities for cs.
//!
//! Atomic writes keep a concurrently starting second invocation from reading
//! a half-written default configuration.

pub mod atomic;

pub use atomic::atomic_write_file;
