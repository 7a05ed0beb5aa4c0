use crate::error::{GraphError, GraphResult};

pub type NodeIndex = usize;
pub type EdgeWeight = u32;

/// A directed adjacency entry: the edge `from -> to` is stored in the list of `from`.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Edge {
    to: NodeIndex,
    weight: EdgeWeight,
}

impl Edge {
    pub fn to(&self) -> NodeIndex {
        self.to
    }

    pub fn weight(&self) -> EdgeWeight {
        self.weight
    }
}

/// Weighted graph stored as an adjacency vector.
///
/// The vertex count is fixed when the graph is created. Undirected graphs store
/// every edge in both directions; result graphs produced by the tree builders
/// store each edge once, at its lower-indexed endpoint.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Graph {
    edges: Vec<Vec<Edge>>,
}

impl Graph {
    /// A graph with `num_nodes` vertices and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            edges: vec![vec![]; num_nodes],
        }
    }

    /// Build an undirected graph from edges given as `(from, to, weight)`.
    ///
    /// Every listed edge is inserted as given and mirrored unless the reverse
    /// direction was listed as well, so `u -> v` exists iff `v -> u` does.
    /// Upper triangular input is the usual case, but either direction works.
    pub fn from_upper_triangular<I>(num_nodes: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex, EdgeWeight)>,
    {
        let mut graph = Self::new(num_nodes);
        let mut listed = vec![];
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
            listed.push((from, to, weight));
        }
        for (from, to, weight) in listed {
            if from != to && !graph.edge_exists(to, from)? {
                graph.add_edge(to, from, weight)?;
            }
        }
        Ok(graph)
    }

    pub fn num_nodes(&self) -> usize {
        self.edges.len() // since `edges` is an adjacency vector this is the number of *nodes*
    }

    /// Number of directed adjacency entries.
    pub fn num_edges(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Iterator over the node indices.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        0..self.num_nodes()
    }

    /// Fail with [`GraphError::InvalidVertex`] unless `node` is in `[0, num_nodes)`.
    pub fn check_node(&self, node: NodeIndex) -> GraphResult<()> {
        if node < self.num_nodes() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: node,
                num_nodes: self.num_nodes(),
            })
        }
    }

    /// Append the directed edge `from -> to`. No check for an existing edge is made.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: EdgeWeight) -> GraphResult<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.edges[from].push(Edge { to, weight });
        Ok(())
    }

    /// The outgoing edges of `node`.
    pub fn neighbors(&self, node: NodeIndex) -> GraphResult<&[Edge]> {
        self.check_node(node)?;
        Ok(&self.edges[node])
    }

    /// Unchecked variant of [`Graph::neighbors`] for indices the caller has already validated.
    pub(crate) fn adjacent(&self, node: NodeIndex) -> &[Edge] {
        &self.edges[node]
    }

    /// Every vertex together with its adjacency entry.
    pub fn adjacency(&self) -> impl Iterator<Item = (NodeIndex, &[Edge])> + '_ {
        self.edges.iter().enumerate().map(|(from, e)| (from, e.as_slice()))
    }

    /// Return an iterator over all edges. Only edges `(a,b)` with `a < b` are returned since
    /// this is an undirected graph.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, EdgeWeight)> + '_ {
        self.adjacency()
            .flat_map(|(from, e)| e.iter().map(move |&Edge { to, weight }| (from, to, weight)))
            .filter(|&(from, to, _)| from < to)
    }

    fn find(&self, from: NodeIndex, to: NodeIndex) -> GraphResult<Option<&Edge>> {
        self.check_node(to)?;
        Ok(self.neighbors(from)?.iter().find(|e| e.to == to))
    }

    /// Weight of the first edge `from -> to`.
    pub fn edge_weight(&self, from: NodeIndex, to: NodeIndex) -> GraphResult<EdgeWeight> {
        self.find(from, to)?
            .map(Edge::weight)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    pub fn edge_exists(&self, from: NodeIndex, to: NodeIndex) -> GraphResult<bool> {
        Ok(self.find(from, to)?.is_some())
    }

    /// Total weight of a result graph.
    ///
    /// Sums the edges stored at vertices `[0, num_nodes - 1)`. This counts every
    /// edge exactly once only if each edge is stored at its lower endpoint, which
    /// is checked: an entry `from -> to` with `from >= to` yields
    /// [`GraphError::NotCanonical`]. Undirected base graphs therefore fail here.
    pub fn total_weight(&self) -> GraphResult<u64> {
        if let Some((from, to, _)) = self
            .adjacency()
            .flat_map(|(from, e)| e.iter().map(move |e| (from, e.to, e.weight)))
            .find(|&(from, to, _)| from >= to)
        {
            return Err(GraphError::NotCanonical { from, to });
        }
        let last = self.num_nodes().saturating_sub(1);
        Ok(self.edges[..last]
            .iter()
            .flatten()
            .map(|e| u64::from(e.weight))
            .sum())
    }

    /// Whether all `nodes` lie in one connected component, treating every
    /// stored edge as undirected. Trivially true for fewer than two nodes.
    pub fn connects(&self, nodes: &[NodeIndex]) -> GraphResult<bool> {
        for &node in nodes {
            self.check_node(node)?;
        }
        let Some(&start) = nodes.first() else {
            return Ok(true);
        };
        let mut undirected = vec![vec![]; self.num_nodes()];
        for (from, to, _) in self
            .adjacency()
            .flat_map(|(from, e)| e.iter().map(move |e| (from, e.to, e.weight)))
        {
            undirected[from].push(to);
            undirected[to].push(from);
        }
        let mut found = vec![false; self.num_nodes()];
        found[start] = true;
        let mut stack = vec![start];
        while let Some(top) = stack.pop() {
            for &neighbor in &undirected[top] {
                if !found[neighbor] {
                    found[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
        Ok(nodes.iter().all(|&n| found[n]))
    }
}
