use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeWeight, NodeIndex};
use crate::util::NaturalOrInfinite;
use crate::Graph;

/// Prim's algorithm in its O(V²) array form.
///
/// Vertex 0 is the root. Each round adds the outside vertex with the cheapest
/// bridge into the tree (lowest index on ties) and stores the bridge in the
/// result at its lower endpoint, so the result satisfies the invariant checked
/// by [`Graph::total_weight`].
///
/// # Errors
/// [`GraphError::Disconnected`] if some vertex cannot be reached from vertex 0.
pub fn prim_minimum_spanning_tree(graph: &Graph) -> GraphResult<Graph> {
    let n = graph.num_nodes();
    let mut tree = Graph::new(n);
    let mut cheapest_cost = vec![NaturalOrInfinite::infinity(); n];
    let mut closest_tree_vertex: Vec<Option<(NodeIndex, EdgeWeight)>> = vec![None; n];
    let mut in_tree = vec![false; n];
    tracing::debug!(num_nodes = n, "building minimum spanning tree");

    for round in 0..n {
        let mut selected = None;
        let mut min = NaturalOrInfinite::infinity();
        for v in graph.node_indices() {
            if !in_tree[v] && (selected.is_none() || cheapest_cost[v] < min) {
                min = cheapest_cost[v];
                selected = Some(v);
            }
        }
        let Some(u) = selected else { break };
        if round > 0 && !min.is_finite() {
            return Err(GraphError::Disconnected { vertex: u });
        }
        in_tree[u] = true;
        if let Some((parent, weight)) = closest_tree_vertex[u] {
            tree.add_edge(parent.min(u), parent.max(u), weight)?;
        }
        tracing::trace!(vertex = u, cost = ?min, "added to spanning tree");

        for edge in graph.adjacent(u) {
            let v = edge.to();
            if !in_tree[v] && NaturalOrInfinite::from(edge.weight()) < cheapest_cost[v] {
                cheapest_cost[v] = edge.weight().into();
                closest_tree_vertex[v] = Some((u, edge.weight()));
            }
        }
    }

    tracing::debug!(
        num_edges = tree.num_edges(),
        total_weight = ?tree.total_weight().ok(),
        "minimum spanning tree done"
    );
    Ok(tree)
}
