//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Loads the graph document and configuration it needs
//! 3. Formats and displays output
//!
//! Handlers that produce text also expose a pure function returning that
//! text, so the output can be checked without capturing stdout.

mod check;
mod completion;
mod config_cmd;
mod export;
mod neighbors;
mod outline;

// Re-export command functions for testing and direct invocation
pub use check::{check, summarize};
pub use completion::completion;
pub use config_cmd::config;
pub use export::{export, export_json};
pub use neighbors::{neighbor_listing, neighbors};
pub use outline::{outline, render_outline};

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::document::load_graph;
use crate::core::graph::Graph;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Outline { file, root, margin } => {
            outline::outline(ctx, &file, root.as_deref(), margin)
        }
        Command::Check { file } => check::check(ctx, &file),
        Command::Neighbors {
            file,
            id,
            node_type,
        } => neighbors::neighbors(ctx, &file, &id, node_type),
        Command::Export { file } => export::export(ctx, &file),
        Command::Config => config_cmd::config(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load a graph document, naming the file in the error.
fn open_graph(file: &Path) -> Result<Graph> {
    load_graph(file).with_context(|| format!("Failed to load graph from '{}'", file.display()))
}
