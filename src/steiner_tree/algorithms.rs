use crate::error::{GraphError, GraphResult};
use crate::graph::NodeIndex;
use crate::shortest_paths::ShortestPathTree;
use crate::steiner_tree::tree::merge_path;
use crate::Graph;

/// Union of the shortest paths of all `(origin, destination)` pairs.
///
/// Edges shared by several paths appear once in the result. The result is not
/// necessarily a tree.
///
/// # Errors
/// [`GraphError::Unreachable`] if some destination cannot be reached from its origin.
pub fn shortest_paths_union(graph: &Graph, pairs: &[(NodeIndex, NodeIndex)]) -> GraphResult<Graph> {
    tracing::debug!(num_pairs = pairs.len(), "building shortest paths union");
    let mut result = Graph::new(graph.num_nodes());
    let mut trees: Vec<Option<ShortestPathTree>> = vec![None; graph.num_nodes()];
    for &(origin, destination) in pairs {
        graph.check_node(origin)?;
        let tree = match trees[origin].take() {
            Some(tree) => tree,
            None => ShortestPathTree::new(graph, origin)?,
        };
        let path = tree.path_to(destination)?;
        trees[origin] = Some(tree);
        let added = merge_path(&mut result, graph, &path)?;
        tracing::trace!(origin, destination, distance = path.distance(), added, "merged path");
    }
    tracing::debug!(
        num_edges = result.num_edges(),
        total_weight = ?result.total_weight().ok(),
        "shortest paths union done"
    );
    Ok(result)
}

/// Greedy Steiner tree approximation (Takahashi & Matsuyama).
///
/// Starts with the first terminal and repeatedly connects the terminal closest
/// to any vertex of the tree so far. All vertices on the connecting path join
/// the tree. Ties go to the lowest tree vertex, then to the lowest terminal.
/// Duplicate terminals are ignored.
///
/// # Errors
/// - [`GraphError::NoTerminals`] if `terminals` is empty.
/// - [`GraphError::Disconnected`] if a terminal cannot be reached from the tree.
pub fn greedy_steiner_tree(graph: &Graph, terminals: &[NodeIndex]) -> GraphResult<Graph> {
    let &first = terminals.first().ok_or(GraphError::NoTerminals)?;
    let n = graph.num_nodes();
    let mut is_terminal = vec![false; n];
    for &terminal in terminals {
        graph.check_node(terminal)?;
        is_terminal[terminal] = true;
    }
    tracing::debug!(num_terminals = terminals.len(), "building greedy steiner tree");

    let mut result = Graph::new(n);
    let mut in_tree = vec![false; n];
    in_tree[first] = true;
    // the base graph never changes, so a tree vertex's distances are computed once
    let mut trees: Vec<Option<ShortestPathTree>> = vec![None; n];

    loop {
        let remaining = graph
            .node_indices()
            .filter(|&v| is_terminal[v] && !in_tree[v])
            .collect::<Vec<_>>();
        if remaining.is_empty() {
            break;
        }
        let sources = graph
            .node_indices()
            .filter(|&v| in_tree[v] && trees[v].is_none())
            .collect::<Vec<_>>();
        for tree in shortest_path_trees(graph, &sources)? {
            let source = tree.source();
            trees[source] = Some(tree);
        }

        let mut closest: Option<(u64, NodeIndex, &ShortestPathTree)> = None;
        for tree in trees.iter().flatten() {
            if !in_tree[tree.source()] {
                continue;
            }
            for &terminal in &remaining {
                let Some(distance) = tree.distance(terminal)?.finite() else {
                    continue;
                };
                if closest.map_or(true, |(min, _, _)| distance < min) {
                    closest = Some((distance, terminal, tree));
                }
            }
        }
        let (distance, terminal, tree) = closest.ok_or(GraphError::Disconnected {
            vertex: remaining[0],
        })?;

        let path = tree.path_to(terminal)?;
        merge_path(&mut result, graph, &path)?;
        for &v in path.path() {
            in_tree[v] = true;
        }
        tracing::trace!(source = tree.source(), terminal, distance, "connected terminal");
    }

    tracing::debug!(
        num_edges = result.num_edges(),
        total_weight = ?result.total_weight().ok(),
        "greedy steiner tree done"
    );
    Ok(result)
}

#[cfg(not(feature = "parallel"))]
fn shortest_path_trees(graph: &Graph, sources: &[NodeIndex]) -> GraphResult<Vec<ShortestPathTree>> {
    sources
        .iter()
        .map(|&source| ShortestPathTree::new(graph, source))
        .collect()
}

/// The Dijkstra runs only read the base graph, so they are independent of each other.
#[cfg(feature = "parallel")]
fn shortest_path_trees(graph: &Graph, sources: &[NodeIndex]) -> GraphResult<Vec<ShortestPathTree>> {
    use rayon::prelude::*;
    sources
        .par_iter()
        .map(|&source| ShortestPathTree::new(graph, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::{
        disconnected_network, example_network, shortcut_network, steiner_example_wiki,
        tied_terminals_network, tied_tree_vertices_network,
    };
    use crate::util::TestResult;

    fn sorted_edges(graph: &Graph) -> Vec<(NodeIndex, NodeIndex, u32)> {
        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort_unstable();
        edges
    }

    #[test]
    fn test_union_example() -> TestResult {
        let network = example_network()?;
        let union = shortest_paths_union(&network.graph, &network.ticket_pairs())?;
        assert_eq!(sorted_edges(&union), vec![(0, 1, 1), (1, 2, 2), (2, 3, 1)]);
        assert_eq!(union.total_weight()?, 4);
        Ok(())
    }

    #[test]
    fn test_union_shares_edges() -> TestResult {
        let network = shortcut_network()?;
        let union = shortest_paths_union(&network.graph, &network.ticket_pairs())?;
        assert_eq!(sorted_edges(&union), vec![(0, 1, 1), (1, 2, 1), (1, 3, 2)]);
        assert_eq!(union.num_edges(), 3);
        Ok(())
    }

    #[test]
    fn test_union_wiki() -> TestResult {
        let network = steiner_example_wiki()?;
        let union = shortest_paths_union(&network.graph, &network.ticket_pairs())?;
        assert_eq!(union.num_edges(), 7);
        assert_eq!(union.total_weight()?, 190);
        Ok(())
    }

    #[test]
    fn test_union_same_vertex_and_empty() -> TestResult {
        let graph = example_network()?.graph;
        assert_eq!(shortest_paths_union(&graph, &[(2, 2)])?, Graph::new(4));
        assert_eq!(shortest_paths_union(&graph, &[])?, Graph::new(4));
        Ok(())
    }

    #[test]
    fn test_union_unreachable() -> TestResult {
        let network = disconnected_network()?;
        assert_eq!(
            shortest_paths_union(&network.graph, &network.ticket_pairs()),
            Err(GraphError::Unreachable { from: 0, to: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_greedy_example() -> TestResult {
        let graph = example_network()?.graph;
        let tree = greedy_steiner_tree(&graph, &[0, 3])?;
        assert_eq!(sorted_edges(&tree), vec![(0, 1, 1), (1, 2, 2), (2, 3, 1)]);
        assert_eq!(tree.total_weight()?, 4);
        Ok(())
    }

    #[test]
    fn test_greedy_tie_prefers_lowest_tree_vertex() -> TestResult {
        let graph = tied_tree_vertices_network()?.graph;
        let tree = greedy_steiner_tree(&graph, &[0, 1, 2])?;
        assert_eq!(sorted_edges(&tree), vec![(0, 1, 1), (0, 2, 5)]);
        let tree = greedy_steiner_tree(&graph, &[1, 0, 2])?;
        assert_eq!(sorted_edges(&tree), vec![(0, 1, 1), (0, 2, 5)]);
        Ok(())
    }

    #[test]
    fn test_greedy_tie_prefers_lowest_terminal() -> TestResult {
        let graph = tied_terminals_network()?.graph;
        // 1 joins first via 3, then 2 hangs off 1
        let tree = greedy_steiner_tree(&graph, &[0, 2, 1])?;
        assert_eq!(sorted_edges(&tree), vec![(0, 3, 1), (1, 2, 1), (1, 3, 1)]);
        Ok(())
    }

    #[test]
    fn test_greedy_wiki() -> TestResult {
        let network = steiner_example_wiki()?;
        let terminals = network.terminals();
        let tree = greedy_steiner_tree(&network.graph, &terminals)?;
        assert!(tree.connects(&terminals)?);
        assert_eq!(
            sorted_edges(&tree),
            vec![
                (0, 4, 25),
                (4, 8, 30),
                (6, 7, 20),
                (7, 9, 50),
                (8, 10, 15),
                (9, 10, 40),
                (10, 11, 10),
            ]
        );
        assert_eq!(tree.total_weight()?, 25 + 30 + 15 + 10 + 40 + 50 + 20);
        Ok(())
    }

    #[test]
    fn test_greedy_duplicate_terminals() -> TestResult {
        let graph = shortcut_network()?.graph;
        let tree = greedy_steiner_tree(&graph, &[0, 3, 0, 3])?;
        assert_eq!(sorted_edges(&tree), vec![(0, 1, 1), (1, 3, 2)]);
        Ok(())
    }

    #[test]
    fn test_greedy_single_terminal() -> TestResult {
        let graph = shortcut_network()?.graph;
        assert_eq!(greedy_steiner_tree(&graph, &[2])?, Graph::new(4));
        Ok(())
    }

    #[test]
    fn test_greedy_errors() -> TestResult {
        let graph = disconnected_network()?.graph;
        assert_eq!(greedy_steiner_tree(&graph, &[]), Err(GraphError::NoTerminals));
        assert_eq!(
            greedy_steiner_tree(&graph, &[1, 3]),
            Err(GraphError::Disconnected { vertex: 3 })
        );
        assert_eq!(
            greedy_steiner_tree(&graph, &[0, 7]),
            Err(GraphError::InvalidVertex {
                vertex: 7,
                num_nodes: 4
            })
        );
        Ok(())
    }
}
