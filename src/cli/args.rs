//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the user config
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::NodeType;

/// itgraph - Render typed undirected graphs as numbered text outlines
#[derive(Parser, Debug)]
#[command(name = "itgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the numbered outline of a graph
    #[command(
        name = "outline",
        long_about = "Print the numbered outline of a graph.\n\n\
            The graph is walked depth-first from the root. Lexemes get a numbered \
            entry, divisions and oppositions open a nesting level shown as '<n>.0 *', \
            and links between lexemes are drawn as dotted leaders aligned in one column.",
        after_help = "\
EXAMPLES:
    # Outline from an explicit root
    itgraph outline graph.json --root ens

    # Use the root configured in .itgraph.toml
    itgraph outline graph.json

    # Wider leaders
    itgraph outline graph.json --root ens --margin 6"
    )]
    Outline {
        /// Graph document (JSON)
        file: PathBuf,

        /// Root node id (defaults to the configured root)
        #[arg(long, short)]
        root: Option<String>,

        /// Columns between the widest label and the end of the leaders
        #[arg(long)]
        margin: Option<usize>,
    },

    /// Validate a graph document
    Check {
        /// Graph document (JSON)
        file: PathBuf,
    },

    /// List the neighbors of a node in traversal order
    Neighbors {
        /// Graph document (JSON)
        file: PathBuf,

        /// Node id
        id: String,

        /// Only list neighbors of this type (lexeme, division, opposition)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        node_type: Option<NodeType>,
    },

    /// Print the canonical form of a graph document
    #[command(
        long_about = "Print the canonical form of a graph document.\n\n\
            Nodes are sorted by id, edges are written with the smaller id as source, \
            sorted, and duplicate edges (in either direction) are removed."
    )]
    Export {
        /// Graph document (JSON)
        file: PathBuf,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    itgraph completion bash > ~/.local/share/bash-completion/completions/itgraph

    # Zsh
    itgraph completion zsh > ~/.zfunc/_itgraph

    # Fish
    itgraph completion fish > ~/.config/fish/completions/itgraph.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}
