//! Spanning trees and Steiner tree approximations over small weighted networks.
//!
//! The base [`Graph`] is built once (usually by parsing a [`Network`]) and only
//! read afterwards. Every builder returns a fresh result graph that stores each
//! edge once, from its lower to its higher endpoint.

mod error;
mod graph;
mod input;
mod shortest_paths;
mod spanning_tree;
mod steiner_tree;
mod util;

pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeWeight, Graph, NodeIndex};
pub use input::{parse_network, Network, ParseError, ParseResult, Ticket};
pub use shortest_paths::{ShortestPath, ShortestPathTree};
pub use spanning_tree::prim_minimum_spanning_tree;
pub use steiner_tree::algorithms::greedy_steiner_tree;
pub use steiner_tree::algorithms::shortest_paths_union;
pub use util::{GenericResult, NaturalOrInfinite};
