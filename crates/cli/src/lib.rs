//! Interactive front end for the Rootline Newton solver.
//!
//! The `rootline` binary prompts for equations and initial guesses, solves
//! them, and prints each root with its iteration table. This library holds
//! everything but process setup so it can be driven from tests.
//!
//! # Modules
//!
//! - [`table`] — renders an iteration history as a text table
//!
//! Usage: `rootline [--system] [settings.toml]`. Without `--system`, every
//! equation is solved on its own; with it, one or two equations are solved
//! together as a system.

pub mod table;

mod args;
mod error;
mod session;
mod settings;

pub use args::Args;
pub use error::{CliError, Result};
pub use session::Session;
pub use settings::Settings;
