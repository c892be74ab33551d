//! Line-oriented driver that plays the part of the to-do screen: it parses
//! user actions, forwards them to the manager and prints what it reports.

pub mod commands;
pub mod event_loop_main;
pub mod handlers;
pub mod logging;

pub use commands::{parse_line, Command, CommandError};
pub use event_loop_main::{print_view, run_lines, LoopOptions, RunSummary};
pub use handlers::{handle_command, Outcome, Session};
