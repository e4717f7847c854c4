//! Graph input model
//!
//! Nodes are identified by caller-chosen ids; algorithms work on positions
//! in [`Graph::nodes`] and translate back to ids when reporting.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

pub type NodeId = u32;

/// A weighted edge. Undirected features ignore the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: i64) -> Self {
        Edge { from, to, weight }
    }

    /// The endpoint opposite `id`, for undirected use
    pub fn other(&self, id: NodeId) -> NodeId {
        if self.from == id {
            self.to
        } else {
            self.from
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (w={})", self.from, self.to, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Graph {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        Graph { nodes, edges }
    }

    /// Map from node id to its position in `nodes`
    pub fn index(&self) -> FxHashMap<NodeId, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Outgoing `(neighbor position, edge index)` lists in edge input order.
    /// Undirected adjacency lists every edge from both ends. Edges with
    /// unknown endpoints are skipped.
    pub fn adjacency(&self, directed: bool) -> Vec<Vec<(usize, usize)>> {
        let index = self.index();
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for (e, edge) in self.edges.iter().enumerate() {
            let (Some(&u), Some(&v)) = (index.get(&edge.from), index.get(&edge.to)) else {
                continue;
            };
            adjacency[u].push((v, e));
            if !directed {
                adjacency[v].push((u, e));
            }
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_follows_edge_order() {
        let graph = Graph::new(
            vec![10, 20, 30],
            vec![Edge::new(10, 30, 1), Edge::new(10, 20, 2), Edge::new(20, 30, 3)],
        );
        let directed = graph.adjacency(true);
        assert_eq!(directed[0], vec![(2, 0), (1, 1)]);
        assert!(directed[2].is_empty());

        let undirected = graph.adjacency(false);
        assert_eq!(undirected[2], vec![(0, 0), (1, 2)]);
        assert_eq!(graph.index()[&20], 1);
    }
}
