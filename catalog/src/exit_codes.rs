//! Stable exit codes for catalog CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, rejected add, configuration or I/O error.
pub const INVALID: i32 = 1;
/// `search`, `remove` or `status` matched no record.
pub const NOT_FOUND: i32 = 2;
/// `remove` or `status` matched several records and needs `--pick`.
pub const AMBIGUOUS: i32 = 3;
