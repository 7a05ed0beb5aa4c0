use crate::error::GraphResult;
use crate::shortest_paths::ShortestPath;
use crate::Graph;

/// Copy the edges of `path` from `base` into `result`.
///
/// Every edge is stored once, from its lower to its higher endpoint, and only
/// if `result` doesn't contain it yet. Returns the number of edges added.
pub(crate) fn merge_path(result: &mut Graph, base: &Graph, path: &ShortestPath) -> GraphResult<usize> {
    let mut added = 0;
    for (a, b) in path.canonical_edges() {
        if !result.edge_exists(a, b)? {
            result.add_edge(a, b, base.edge_weight(a, b)?)?;
            added += 1;
        }
    }
    Ok(added)
}
