//! Graph validators shared by the directed and undirected features
//!
//! Directed consumers (Dijkstra, topological sort) call
//! [`validate_directed`]; undirected consumers (Kruskal, Prim) call
//! [`validate_undirected`], which also requires the graph to be connected.
//! Feature-specific rules (weights, cycles, start node) are separate checks
//! composed by each feature's validator.

use super::model::{Graph, NodeId};
use crate::constants::{MAX_NODES, MAX_WEIGHT};
use crate::errors::GraphError;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

fn check_nodes(graph: &Graph) -> Result<(), GraphError> {
    if graph.nodes.is_empty() {
        return Err(GraphError::NoNodes);
    }
    if graph.nodes.len() > MAX_NODES {
        return Err(GraphError::TooManyNodes {
            count: graph.nodes.len(),
            max: MAX_NODES,
        });
    }
    let mut seen = FxHashSet::default();
    for &id in &graph.nodes {
        if !seen.insert(id) {
            return Err(GraphError::DuplicateNode { id });
        }
    }
    Ok(())
}

/// Endpoints exist, no self-loops, weights within the cap, no repeated
/// edges. Undirected graphs treat `u-v` and `v-u` as the same edge.
fn check_edges(graph: &Graph, directed: bool) -> Result<(), GraphError> {
    let nodes: FxHashSet<NodeId> = graph.nodes.iter().copied().collect();
    let mut seen = FxHashSet::default();
    for edge in &graph.edges {
        for endpoint in [edge.from, edge.to] {
            if !nodes.contains(&endpoint) {
                return Err(GraphError::UnknownEndpoint {
                    from: edge.from,
                    to: edge.to,
                    missing: endpoint,
                });
            }
        }
        if edge.from == edge.to {
            return Err(GraphError::SelfLoop { id: edge.from });
        }
        if edge.weight.unsigned_abs() > MAX_WEIGHT.unsigned_abs() {
            return Err(GraphError::WeightTooLarge {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
                max: MAX_WEIGHT,
            });
        }
        let key = if directed || edge.from < edge.to {
            (edge.from, edge.to)
        } else {
            (edge.to, edge.from)
        };
        if !seen.insert(key) {
            return Err(GraphError::DuplicateEdge {
                from: edge.from,
                to: edge.to,
            });
        }
    }
    Ok(())
}

pub fn validate_directed(graph: &Graph) -> Result<(), GraphError> {
    check_nodes(graph)?;
    check_edges(graph, true)
}

pub fn validate_undirected(graph: &Graph) -> Result<(), GraphError> {
    check_nodes(graph)?;
    check_edges(graph, false)?;
    check_connected(graph)
}

pub fn check_non_negative_weights(graph: &Graph) -> Result<(), GraphError> {
    match graph.edges.iter().find(|e| e.weight < 0) {
        Some(edge) => Err(GraphError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

pub fn check_source(graph: &Graph, source: NodeId) -> Result<(), GraphError> {
    if graph.contains(source) {
        Ok(())
    } else {
        Err(GraphError::UnknownSource { id: source })
    }
}

/// Every node reachable from the first one, ignoring edge direction
pub fn check_connected(graph: &Graph) -> Result<(), GraphError> {
    let adjacency = graph.adjacency(false);
    let mut reached = vec![false; graph.nodes.len()];
    let mut queue = VecDeque::from([0]);
    reached[0] = true;
    while let Some(u) = queue.pop_front() {
        for &(v, _) in &adjacency[u] {
            if !reached[v] {
                reached[v] = true;
                queue.push_back(v);
            }
        }
    }
    match reached.iter().position(|&r| !r) {
        Some(pos) => Err(GraphError::Disconnected {
            id: graph.nodes[pos],
        }),
        None => Ok(()),
    }
}

/// No directed cycle. Reports the node a back edge points to.
pub fn check_acyclic(graph: &Graph) -> Result<(), GraphError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        Active,
        Done,
    }

    let adjacency = graph.adjacency(true);
    let mut marks = vec![Mark::Unvisited; graph.nodes.len()];

    for start in 0..graph.nodes.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        // explicit stack of (node, next adjacency slot)
        let mut stack = vec![(start, 0)];
        marks[start] = Mark::Active;
        while let Some(top) = stack.last_mut() {
            let (u, slot) = *top;
            if let Some(&(v, _)) = adjacency[u].get(slot) {
                top.1 += 1;
                match marks[v] {
                    Mark::Active => return Err(GraphError::Cycle { id: graph.nodes[v] }),
                    Mark::Unvisited => {
                        marks[v] = Mark::Active;
                        stack.push((v, 0));
                    }
                    Mark::Done => {}
                }
            } else {
                marks[u] = Mark::Done;
                stack.pop();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Edge;

    fn graph(nodes: &[NodeId], edges: &[(NodeId, NodeId, i64)]) -> Graph {
        Graph::new(
            nodes.to_vec(),
            edges.iter().map(|&(u, v, w)| Edge::new(u, v, w)).collect(),
        )
    }

    #[test]
    fn test_structural_rules() {
        assert_eq!(validate_directed(&graph(&[], &[])), Err(GraphError::NoNodes));
        assert_eq!(
            validate_directed(&graph(&[1, 1], &[])),
            Err(GraphError::DuplicateNode { id: 1 })
        );
        assert_eq!(
            validate_directed(&graph(&[1, 2], &[(1, 3, 1)])),
            Err(GraphError::UnknownEndpoint { from: 1, to: 3, missing: 3 })
        );
        assert_eq!(
            validate_directed(&graph(&[1], &[(1, 1, 1)])),
            Err(GraphError::SelfLoop { id: 1 })
        );
    }

    #[test]
    fn test_weight_magnitude_is_capped() {
        let edge = |w| graph(&[1, 2], &[(1, 2, w)]);
        assert!(validate_directed(&edge(MAX_WEIGHT)).is_ok());
        assert!(validate_undirected(&edge(-MAX_WEIGHT)).is_ok());
        assert_eq!(
            validate_directed(&edge(MAX_WEIGHT + 1)),
            Err(GraphError::WeightTooLarge {
                from: 1,
                to: 2,
                weight: MAX_WEIGHT + 1,
                max: MAX_WEIGHT
            })
        );
        assert!(matches!(
            validate_undirected(&edge(i64::MIN)),
            Err(GraphError::WeightTooLarge { .. })
        ));
    }

    #[test]
    fn test_duplicate_depends_on_direction() {
        let g = graph(&[1, 2], &[(1, 2, 1), (2, 1, 1)]);
        assert!(validate_directed(&g).is_ok());
        assert_eq!(
            validate_undirected(&g),
            Err(GraphError::DuplicateEdge { from: 2, to: 1 })
        );
    }

    #[test]
    fn test_undirected_requires_connection() {
        let g = graph(&[1, 2, 3], &[(1, 2, 1)]);
        assert_eq!(validate_undirected(&g), Err(GraphError::Disconnected { id: 3 }));
        // directed consumers accept unreachable nodes
        assert!(validate_directed(&g).is_ok());
    }

    #[test]
    fn test_cycle_detection() {
        let dag = graph(&[1, 2, 3], &[(1, 2, 0), (2, 3, 0), (1, 3, 0)]);
        assert!(check_acyclic(&dag).is_ok());
        let cyclic = graph(&[1, 2, 3], &[(1, 2, 0), (2, 3, 0), (3, 2, 0)]);
        assert_eq!(check_acyclic(&cyclic), Err(GraphError::Cycle { id: 2 }));
    }

    #[test]
    fn test_weights_and_source() {
        let g = graph(&[1, 2], &[(1, 2, -3)]);
        assert_eq!(
            check_non_negative_weights(&g),
            Err(GraphError::NegativeWeight { from: 1, to: 2, weight: -3 })
        );
        assert_eq!(check_source(&g, 5), Err(GraphError::UnknownSource { id: 5 }));
        assert!(check_source(&g, 2).is_ok());
    }
}
