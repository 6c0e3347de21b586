//! Output formatting for shell consumers.
//!
//! The CLI prints directory listings as `NAME='value'` lines so that shell
//! scripts can `eval` them directly.

mod shell;

pub use shell::{escape_shell_arg, format_assignment, format_assignments};
