// CLI module
// Argument parsing, one-shot commands and the interactive terminal UI

pub mod app;
pub mod args;
pub mod commands;
pub mod form;
pub mod input;
pub mod macros_view;
pub mod pointer;
pub mod tui;

pub use app::{App, AppCommand, Route};
pub use args::{Cli, Commands, ComposeArgs, ListTarget};
pub use commands::{run_compose, run_list};
