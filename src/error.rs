use crate::graph::NodeIndex;

/// Failures reported by the graph store and the tree builders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex index outside `[0, num_nodes)`.
    #[error("vertex {vertex} is invalid (graph has {num_nodes} vertices)")]
    InvalidVertex { vertex: NodeIndex, num_nodes: usize },
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: NodeIndex, to: NodeIndex },
    #[error("no path from {from} to {to}")]
    Unreachable { from: NodeIndex, to: NodeIndex },
    /// Vertex `vertex` cannot be reached from the part of the graph built so far.
    #[error("graph is disconnected: vertex {vertex} cannot be reached")]
    Disconnected { vertex: NodeIndex },
    /// The graph stores an edge against the lower-to-higher orientation
    /// that result graphs must follow.
    #[error("edge {from}->{to} is not in canonical orientation")]
    NotCanonical { from: NodeIndex, to: NodeIndex },
    #[error("no terminals given")]
    NoTerminals,
}

pub type GraphResult<T> = Result<T, GraphError>;
