//! Command-line interface for the courses API.
//!
//! `main.rs` is the composition root; this library holds the argument
//! parser and command handlers so they can be tested.

pub mod handlers;
pub mod parser;

pub use parser::{Cli, Commands, ServeArgs};

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;
