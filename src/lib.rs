//! itgraph - Numbered text outlines of typed undirected graphs
//!
//! A graph holds lexeme, division and opposition nodes joined by undirected
//! edges. Starting from a root node, itgraph walks the graph depth-first and
//! prints a hierarchically numbered outline, with dotted leaders pointing
//! from each lexeme to the other lexemes it is linked to.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the graph arena, snapshot documents, config
//! - [`outline`] - Traversal and leader layout
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! 1. `(a, b)` and `(b, a)` are the same edge
//! 2. A graph snapshot is accepted whole or rejected whole
//! 3. Rendering is deterministic: same graph and root, same bytes
//! 4. Every reachable node is expanded at most once, so cycles terminate

pub mod cli;
pub mod core;
pub mod outline;
pub mod ui;
