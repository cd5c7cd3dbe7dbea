//! Error types for graphwalk
//!
//! Every fallible operation returns [`Result`]. A cyclic graph handed to a
//! topological sort is not an error; it is reported through
//! [`crate::graph::TopoOrder::acyclic`].

mod macros;

use crate::graph::{NodeId, Weight};
use thiserror::Error;

/// Errors that can occur during graph construction or traversal
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid node {node} (graph has {node_count} nodes)")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("{operation} is not supported: {reason}")]
    Unsupported { operation: String, reason: String },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an out-of-range node id
    pub fn invalid_node(node: NodeId, node_count: usize) -> Self {
        GraphError::InvalidNode { node, node_count }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an operation that cannot run on this graph
    pub fn unsupported(operation: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::Unsupported {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidNode { .. } => "invalid_node",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::InvalidNode { node, node_count } = self {
            error_obj["node"] = serde_json::json!(node);
            error_obj["node_count"] = serde_json::json!(node_count);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
