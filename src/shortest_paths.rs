use crate::error::{GraphError, GraphResult};
use crate::graph::NodeIndex;
use crate::util::NaturalOrInfinite;
use crate::Graph;

/// A reachable destination: its distance and the vertices on the way, source first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    distance: u64,
    path: Vec<NodeIndex>,
}

impl ShortestPath {
    pub fn new(path: Vec<NodeIndex>, distance: u64) -> Self {
        Self { path, distance }
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn path(&self) -> &[NodeIndex] {
        &self.path
    }

    /// Consecutive vertex pairs on the path, each ordered `(lower, higher)`.
    pub fn canonical_edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.path
            .windows(2)
            .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
    }
}

/// Single source shortest paths from one vertex to every other vertex.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: NodeIndex,
    distance: Vec<NaturalOrInfinite>,
    predecessor: Vec<Option<NodeIndex>>,
}

impl ShortestPathTree {
    pub fn new(graph: &Graph, source: NodeIndex) -> GraphResult<Self> {
        graph.check_node(source)?;
        let n = graph.num_nodes();
        let mut res = ShortestPathTree {
            source,
            distance: vec![NaturalOrInfinite::infinity(); n],
            predecessor: vec![None; n],
        };
        res.dijkstra(graph);
        Ok(res)
    }

    /// Dijkstra's algorithm without a priority queue: every round scans for the
    /// closest unvisited vertex, the first one in index order winning ties.
    fn dijkstra(&mut self, graph: &Graph) {
        let mut visited = vec![false; graph.num_nodes()];
        self.distance[self.source] = 0u32.into();
        for _ in graph.node_indices() {
            let mut closest = None;
            let mut min = NaturalOrInfinite::infinity();
            for v in graph.node_indices() {
                if !visited[v] && self.distance[v] < min {
                    min = self.distance[v];
                    closest = Some(v);
                }
            }
            // everything left is unreachable
            let Some(u) = closest else { break };
            visited[u] = true;
            tracing::trace!(source = self.source, vertex = u, distance = ?min, "dijkstra visit");
            for edge in graph.adjacent(u) {
                let v = edge.to();
                let through_u = min + edge.weight().into();
                if !visited[v] && through_u < self.distance[v] {
                    self.distance[v] = through_u;
                    self.predecessor[v] = Some(u);
                }
            }
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Distance to `destination`, infinite if it cannot be reached.
    pub fn distance(&self, destination: NodeIndex) -> GraphResult<NaturalOrInfinite> {
        self.distance
            .get(destination)
            .copied()
            .ok_or(GraphError::InvalidVertex {
                vertex: destination,
                num_nodes: self.distance.len(),
            })
    }

    /// Walk the predecessor links back from `destination`.
    ///
    /// # Errors
    /// [`GraphError::Unreachable`] if there is no path from the source.
    pub fn path_to(&self, destination: NodeIndex) -> GraphResult<ShortestPath> {
        let distance = self.distance(destination)?.finite().ok_or(GraphError::Unreachable {
            from: self.source,
            to: destination,
        })?;
        let mut path = vec![destination];
        let mut v = destination;
        while let Some(pred) = self.predecessor[v] {
            path.push(pred);
            v = pred;
        }
        debug_assert_eq!(v, self.source);
        path.reverse();
        Ok(ShortestPath::new(path, distance))
    }
}

impl Graph {
    /// Shortest path from `source` to `destination`.
    pub fn shortest_path(
        &self,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> GraphResult<ShortestPath> {
        self.check_node(destination)?;
        ShortestPathTree::new(self, source)?.path_to(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::{
        disconnected_network, example_network, shortcut_network, square_network,
        steiner_example_wiki,
    };
    use crate::util::TestResult;

    fn path_weight(graph: &Graph, path: &ShortestPath) -> Result<u64, GraphError> {
        path.path()
            .windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]).map(u64::from))
            .sum()
    }

    #[test]
    fn test_example_path() -> TestResult {
        let graph = example_network()?.graph;
        let path = graph.shortest_path(0, 3)?;
        assert_eq!(path, ShortestPath::new(vec![0, 1, 2, 3], 4));
        assert_eq!(graph.shortest_path(3, 0)?, ShortestPath::new(vec![3, 2, 1, 0], 4));
        assert_eq!(graph.shortest_path(2, 2)?, ShortestPath::new(vec![2], 0));
        Ok(())
    }

    #[test]
    fn test_equal_paths_go_through_lowest_vertex() -> TestResult {
        let graph = square_network()?.graph;
        assert_eq!(graph.shortest_path(0, 3)?, ShortestPath::new(vec![0, 1, 3], 2));
        assert_eq!(graph.shortest_path(3, 0)?, ShortestPath::new(vec![3, 1, 0], 2));
        assert_eq!(graph.shortest_path(1, 2)?, ShortestPath::new(vec![1, 0, 2], 2));
        Ok(())
    }

    #[test]
    fn test_shortcut_paths() -> TestResult {
        let graph = shortcut_network()?.graph;
        let tree = ShortestPathTree::new(&graph, 0)?;
        assert_eq!(tree.path_to(2)?, ShortestPath::new(vec![0, 1, 2], 2));
        assert_eq!(tree.path_to(3)?, ShortestPath::new(vec![0, 1, 3], 3));
        assert_eq!(graph.shortest_path(3, 2)?, ShortestPath::new(vec![3, 1, 2], 3));
        Ok(())
    }

    #[test]
    fn test_wiki_paths() -> TestResult {
        let graph = steiner_example_wiki()?.graph;
        assert_eq!(
            graph.shortest_path(11, 0)?,
            ShortestPath::new(vec![11, 10, 8, 4, 0], 10 + 15 + 30 + 25)
        );
        assert_eq!(
            graph.shortest_path(6, 9)?,
            ShortestPath::new(vec![6, 7, 9], 50 + 20)
        );
        assert_eq!(
            graph.shortest_path(6, 0)?,
            ShortestPath::new(vec![6, 3, 2, 1, 0], 30 + 50 + 30 + 15)
        );
        Ok(())
    }

    #[test]
    fn test_distance_matches_path_weight() -> TestResult {
        let graph = steiner_example_wiki()?.graph;
        for source in graph.node_indices() {
            let tree = ShortestPathTree::new(&graph, source)?;
            for destination in graph.node_indices() {
                let path = tree.path_to(destination)?;
                assert_eq!(path.path().first(), Some(&source));
                assert_eq!(path.path().last(), Some(&destination));
                assert_eq!(path_weight(&graph, &path)?, path.distance());
                assert_eq!(
                    graph.shortest_path(destination, source)?.distance(),
                    path.distance()
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_repeated_queries_agree() -> TestResult {
        let graph = shortcut_network()?.graph;
        assert_eq!(graph.shortest_path(3, 0)?, graph.shortest_path(3, 0)?);
        Ok(())
    }

    #[test]
    fn test_unreachable() -> TestResult {
        let graph = disconnected_network()?.graph;
        let tree = ShortestPathTree::new(&graph, 0)?;
        assert_eq!(tree.distance(3)?, NaturalOrInfinite::infinity());
        assert_eq!(tree.path_to(3), Err(GraphError::Unreachable { from: 0, to: 3 }));
        assert_eq!(tree.path_to(1)?, ShortestPath::new(vec![0, 1], 3));
        Ok(())
    }

    #[test]
    fn test_invalid_vertices() -> TestResult {
        let graph = example_network()?.graph;
        let invalid = GraphError::InvalidVertex {
            vertex: 4,
            num_nodes: 4,
        };
        assert_eq!(graph.shortest_path(4, 0), Err(invalid.clone()));
        assert_eq!(graph.shortest_path(0, 4), Err(invalid.clone()));
        assert_eq!(ShortestPathTree::new(&graph, 0)?.distance(4), Err(invalid));
        Ok(())
    }

    #[test]
    fn test_canonical_edges() {
        let path = ShortestPath::new(vec![3, 1, 2], 9);
        assert_eq!(path.canonical_edges().collect::<Vec<_>>(), vec![(1, 3), (1, 2)]);
        assert_eq!(ShortestPath::new(vec![5], 0).canonical_edges().count(), 0);
    }
}
