//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`NodeId`] - Validated, non-blank node key
//! - [`NodeType`] - Lexeme, division or opposition
//! - [`Node`] - A typed graph node with layout coordinates
//! - [`Edge`] - Canonical undirected edge between two distinct nodes
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use itgraph::core::types::{Edge, NodeId};
//!
//! let a = NodeId::new("alpha").unwrap();
//! let b = NodeId::new("bravo").unwrap();
//!
//! // Undirected: both orientations are the same edge
//! assert_eq!(Edge::new(a.clone(), b.clone()).unwrap(), Edge::new(b, a).unwrap());
//!
//! // Invalid constructions fail at creation time
//! assert!(NodeId::new("   ").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid node id: {0}")]
    InvalidNodeId(String),

    #[error("invalid node type: {0}")]
    InvalidNodeType(String),

    #[error("invalid edge: {0}")]
    InvalidEdge(String),
}

/// A validated node id.
///
/// Node ids are natural keys: they are what the outline prints, so they
/// are kept as written (inner spaces included). The only rule is
/// that an id cannot be empty or consist solely of whitespace.
///
/// # Example
///
/// ```
/// use itgraph::core::types::NodeId;
///
/// let id = NodeId::new("fox trot").unwrap();
/// assert_eq!(id.as_str(), "fox trot");
///
/// assert!(NodeId::new("").is_err());
/// assert!(NodeId::new("\t").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Create a new validated node id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidNodeId` if the id is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TypeError::InvalidNodeId("id must not be blank".into()));
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a node.
///
/// Only lexemes receive their own outline entry; divisions and oppositions
/// structure the graph and surface as nesting placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// A labelled term.
    Lexeme,
    /// A division of a term into parts.
    Division,
    /// A binary division.
    Opposition,
}

impl NodeType {
    /// Whether this is [`NodeType::Lexeme`].
    pub fn is_lexeme(self) -> bool {
        self == NodeType::Lexeme
    }

    /// The serialized name (`LEXEME`, `DIVISION`, `OPPOSITION`).
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Lexeme => "LEXEME",
            NodeType::Division => "DIVISION",
            NodeType::Opposition => "OPPOSITION",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LEXEME" => Ok(NodeType::Lexeme),
            "DIVISION" => Ok(NodeType::Division),
            "OPPOSITION" => Ok(NodeType::Opposition),
            _ => Err(TypeError::InvalidNodeType(s.to_string())),
        }
    }
}

/// A graph node.
///
/// Equality, hashing and ordering look at the id only: two records with
/// the same id are the same node even if their coordinates differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl Node {
    /// Create a node.
    pub fn new(id: NodeId, x: u32, y: u32, node_type: NodeType) -> Self {
        Self {
            id,
            x,
            y,
            node_type,
        }
    }

    /// Whether this node is a lexeme.
    pub fn is_lexeme(&self) -> bool {
        self.node_type.is_lexeme()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// An undirected edge between two distinct nodes.
///
/// The constructor stores the smaller id first, so derived equality,
/// hashing and ordering are already direction independent: `(a, b)` and
/// `(b, a)` compare equal and collapse to one entry in any set.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use itgraph::core::types::{Edge, NodeId};
///
/// let a = NodeId::new("a").unwrap();
/// let b = NodeId::new("b").unwrap();
///
/// let mut edges = BTreeSet::new();
/// edges.insert(Edge::new(a.clone(), b.clone()).unwrap());
/// edges.insert(Edge::new(b.clone(), a.clone()).unwrap());
/// assert_eq!(edges.len(), 1);
///
/// // Self loops are rejected
/// assert!(Edge::new(a.clone(), a).is_err());
/// ```
///
/// Edges have no serialized form of their own; documents carry them as
/// unvalidated records (see `core::document`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// Create a canonical edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidEdge` if both endpoints are the same node.
    pub fn new(a: NodeId, b: NodeId) -> Result<Self, TypeError> {
        match a.cmp(&b) {
            Ordering::Less => Ok(Self {
                source: a,
                target: b,
            }),
            Ordering::Greater => Ok(Self {
                source: b,
                target: a,
            }),
            Ordering::Equal => Err(TypeError::InvalidEdge(format!(
                "source and target must be different, got '{a}' twice"
            ))),
        }
    }

    /// The smaller endpoint.
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    /// The larger endpoint.
    pub fn target(&self) -> &NodeId {
        &self.target
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.source, self.target)
    }
}
