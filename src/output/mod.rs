//! Output of the subnet inventory.
//!
//! - [`json`] - The inventory file
//! - [`summary`] - Per-router log summary

mod json;
mod summary;

pub use json::{to_json, write_subnets};
pub use summary::{log_summary, summary_lines};
