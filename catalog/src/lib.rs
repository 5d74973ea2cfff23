//! Personal library catalog backed by a single JSON file.
//!
//! The crate keeps the same separation throughout:
//!
//! - **[`core`]**: Pure, deterministic logic (field matching, disambiguation,
//!   id and year rules). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and catalog files).
//!
//! [`store::BookStore`] combines the two into the load/save/add/delete/search/
//! update operations, and [`menu`] drives it from a numbered text menu.

pub mod book;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod menu;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
