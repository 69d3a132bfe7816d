//! Terminal shell for the calculator.
//!
//! This module provides functionality to:
//! - Tokenize typed lines into calculator commands
//! - Clear the display a fixed time after an error
//! - Run the interactive read/render loop

mod error_latch;
mod repl;
mod tokenize;

pub use error_latch::ErrorLatch;
pub use repl::{OutputFormat, Shell, render_text, spawn_stdin_reader};
pub use tokenize::{Input, parse_line};
