//! CLI operation mode handlers.
//!
//! - [`browse`]: Interactive TUI for filtering the directory
//! - [`export`]: Write the filtered directory as Markdown, JSONL, or a
//!   custom template

pub mod browse;
pub mod export;
