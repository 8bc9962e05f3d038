// Path and neighborhood graphs for presentation layers
//
// Data only: nodes and directed edges. Rendering is left to the consumer.

use hashbrown::HashSet;
use wordpath_core::PathResult;

use crate::search::{Clock, SearchEngine};

/// Which view an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Consecutive words on the path.
    Path,
    /// A path word to one of its neighbors.
    Neighborhood,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphNode {
    pub word: String,
    pub on_path: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

/// A directed graph of words.
///
/// Nodes and edges keep insertion order: path words first, in path order,
/// then neighbors sorted per path word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    node_index: HashSet<String>,
    edge_index: HashSet<(String, String)>,
}

impl PathGraph {
    /// Only the edges along `path`.
    pub fn from_path(path: &[String]) -> Self {
        let mut graph = Self::default();
        for word in path {
            graph.add_node(word, true);
        }
        for pair in path.windows(2) {
            graph.add_edge(&pair[0], &pair[1], EdgeKind::Path);
        }
        graph
    }

    /// The path edges plus, for every path word, an edge to each of its
    /// neighbors unless that directed edge already exists.
    pub fn with_neighborhood<F, I>(path: &[String], mut neighbors: F) -> Self
    where
        F: FnMut(&str) -> I,
        I: IntoIterator<Item = String>,
    {
        let mut graph = Self::from_path(path);
        for word in path {
            let mut around: Vec<String> = neighbors(word).into_iter().collect();
            around.sort_unstable();
            for neighbor in around {
                graph.add_node(&neighbor, false);
                graph.add_edge(word, &neighbor, EdgeKind::Neighborhood);
            }
        }
        graph
    }

    fn add_node(&mut self, word: &str, on_path: bool) {
        if self.node_index.insert(word.to_string()) {
            self.nodes.push(GraphNode {
                word: word.to_string(),
                on_path,
            });
        }
    }

    fn add_edge(&mut self, from: &str, to: &str, kind: EdgeKind) {
        if self.edge_index.insert((from.to_string(), to.to_string())) {
            self.edges.push(GraphEdge {
                from: from.to_string(),
                to: to.to_string(),
                kind,
            });
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge_index.contains(&(from.to_string(), to.to_string()))
    }
}

impl<C: Clock> SearchEngine<C> {
    /// Path edges of `result` plus every path word's neighborhood.
    ///
    /// Computes (and caches) neighbor sets for path words as needed.
    /// `None` when no path was found.
    pub fn path_graph(&mut self, result: &PathResult) -> Option<PathGraph> {
        let path = result.path()?;
        Some(PathGraph::with_neighborhood(path, |word| {
            self.neighbors(word).iter().cloned().collect::<Vec<_>>()
        }))
    }

    /// Only the path edges of `result`. `None` when no path was found.
    pub fn min_path_graph(&self, result: &PathResult) -> Option<PathGraph> {
        result.path().map(PathGraph::from_path)
    }
}
