//! core
//!
//! Core domain types, the graph model, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: NodeId, NodeType, Node, Edge
//! - [`graph`] - Graph arena and neighbor queries
//! - [`document`] - JSON snapshot documents
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Edges are canonical values, not direction-aware objects
//! - All iteration orders are deterministic

pub mod config;
pub mod document;
pub mod graph;
pub mod types;
