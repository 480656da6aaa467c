//! Exit code constants for the cs CLI.
//!
//! - 0: Success
//! - 1: User error (no argument, unknown environment, bad config, bad target)
//! - 1: Child failure when the child's own status cannot be passed through

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing argument, unknown environment, config or launch failure.
pub const USER_ERROR: i32 = 1;

/// Fallback when the child failed without a status that can be propagated
/// (killed by a signal, or a status outside `1..=255`).
pub const CHILD_FAILURE: i32 = 1;
