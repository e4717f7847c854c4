//! Single-source shortest paths, array-based Dijkstra
//!
//! Each round scans the unvisited vertices for the smallest tentative
//! distance (ties go to the earlier node), finalizes it and relaxes its
//! outgoing edges in input order. The run stops early once no unvisited
//! vertex is reachable; those vertices keep an infinite distance.

use super::model::{Edge, Graph, NodeId};
use super::validate::{check_non_negative_weights, check_source, validate_directed};
use crate::errors::GraphError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use serde::Serialize;

pub const PSEUDOCODE: &[&str] = &[
    "Dijkstra(G, s):",
    "  dist[v] = INF, prev[v] = NIL for all v; dist[s] = 0",
    "  repeat |V| times:",
    "    u = unvisited vertex with the smallest dist",
    "    if dist[u] == INF: stop",
    "    mark u visited",
    "    for each edge (u, v, w):",
    "      if dist[u] + w < dist[v]: dist[v] = dist[u] + w; prev[v] = u",
    "  return dist, prev",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraInput {
    pub graph: Graph,
    pub source: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DijkstraKind {
    Init,
    Select,
    Relax,
    Skip,
    Unreachable,
    Complete,
}

impl StepKind for DijkstraKind {
    fn label(self) -> &'static str {
        match self {
            DijkstraKind::Init => "init",
            DijkstraKind::Select => "select",
            DijkstraKind::Relax => "relax",
            DijkstraKind::Skip => "skip",
            DijkstraKind::Unreachable => "unreachable",
            DijkstraKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == DijkstraKind::Init
    }

    fn is_terminal(self) -> bool {
        self == DijkstraKind::Complete
    }
}

/// Distances and predecessors, indexed by node position. `None` distance
/// means unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub distances: Vec<Option<i64>>,
    pub predecessors: Vec<Option<NodeId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DijkstraState {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    pub source: NodeId,
    pub distances: Vec<Option<i64>>,
    pub predecessors: Vec<Option<NodeId>>,
    pub visited: Vec<bool>,
    /// Position of the vertex being expanded
    pub current: Option<usize>,
    /// Index into `edges` of the edge being relaxed
    pub edge: Option<usize>,
}

fn closest_unvisited(distances: &[Option<i64>], visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (pos, dist) in distances.iter().enumerate() {
        if visited[pos] {
            continue;
        }
        if let Some(d) = *dist {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((pos, d));
            }
        }
    }
    best.map(|(pos, _)| pos)
}

/// Shortest paths from `source`. Expects a validated graph.
pub fn dijkstra(graph: &Graph, source: NodeId) -> ShortestPaths {
    let n = graph.nodes.len();
    let index = graph.index();
    let adjacency = graph.adjacency(true);
    let mut distances = vec![None; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    distances[index[&source]] = Some(0);

    for _ in 0..n {
        let Some(u) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[u] = true;
        let du = distances[u].unwrap_or_default();
        for &(v, e) in &adjacency[u] {
            let candidate = du + graph.edges[e].weight;
            if distances[v].map_or(true, |dv| candidate < dv) {
                distances[v] = Some(candidate);
                predecessors[v] = Some(graph.nodes[u]);
            }
        }
    }

    ShortestPaths {
        distances,
        predecessors,
    }
}

pub fn validate(input: &DijkstraInput) -> Result<(), GraphError> {
    validate_directed(&input.graph)?;
    check_non_negative_weights(&input.graph)?;
    check_source(&input.graph, input.source)
}

fn show(distance: Option<i64>) -> String {
    distance.map_or_else(|| "∞".to_string(), |d| d.to_string())
}

pub fn generate_steps(input: &DijkstraInput) -> Recorder<DijkstraKind, DijkstraState> {
    let graph = &input.graph;
    let n = graph.nodes.len();
    let index = graph.index();
    let adjacency = graph.adjacency(true);
    let mut state = DijkstraState {
        nodes: graph.nodes.clone(),
        edges: graph.edges.clone(),
        source: input.source,
        distances: vec![None; n],
        predecessors: vec![None; n],
        visited: vec![false; n],
        current: None,
        edge: None,
    };
    state.distances[index[&input.source]] = Some(0);
    let mut rec = Recorder::new();

    rec.record(
        DijkstraKind::Init,
        &state,
        format!(
            "Start at node {}: its distance is 0, every other node is ∞",
            input.source
        ),
    )
    .at_line(1)
    .var("s", input.source);

    for _ in 0..n {
        state.edge = None;
        let Some(u) = closest_unvisited(&state.distances, &state.visited) else {
            state.current = None;
            let unreachable: Vec<NodeId> = state
                .visited
                .iter()
                .enumerate()
                .filter(|(_, &v)| !v)
                .map(|(pos, _)| state.nodes[pos])
                .collect();
            rec.record(
                DijkstraKind::Unreachable,
                &state,
                format!("Nodes {:?} cannot be reached from {}: stop", unreachable, input.source),
            )
            .at_line(4);
            break;
        };

        let du = state.distances[u].unwrap_or_default();
        let uid = state.nodes[u];
        state.visited[u] = true;
        state.current = Some(u);
        rec.record(
            DijkstraKind::Select,
            &state,
            format!("Visit node {}, the closest unvisited node (distance {})", uid, du),
        )
        .at_line(5)
        .var("u", uid)
        .var("dist[u]", du);

        for &(v, e) in &adjacency[u] {
            let weight = state.edges[e].weight;
            let vid = state.nodes[v];
            let candidate = du + weight;
            let old = state.distances[v];
            state.edge = Some(e);
            if old.map_or(true, |dv| candidate < dv) {
                state.distances[v] = Some(candidate);
                state.predecessors[v] = Some(uid);
                rec.record(
                    DijkstraKind::Relax,
                    &state,
                    format!(
                        "Edge {} -> {}: {} + {} = {} < {}, update dist[{}] and prev[{}] = {}",
                        uid,
                        vid,
                        du,
                        weight,
                        candidate,
                        show(old),
                        vid,
                        vid,
                        uid
                    ),
                )
                .at_line(7)
                .var("u", uid)
                .var("v", vid)
                .var("w", weight)
                .var("dist[v]", candidate);
            } else {
                rec.record(
                    DijkstraKind::Skip,
                    &state,
                    format!(
                        "Edge {} -> {}: {} + {} = {} is not shorter than {}",
                        uid,
                        vid,
                        du,
                        weight,
                        candidate,
                        show(old)
                    ),
                )
                .at_line(7)
                .var("u", uid)
                .var("v", vid)
                .var("w", weight)
                .var("dist[v]", show(old));
            }
        }
    }

    state.current = None;
    state.edge = None;
    let reached = state.distances.iter().filter(|d| d.is_some()).count();
    rec.record(
        DijkstraKind::Complete,
        &state,
        format!(
            "Shortest paths from {} are final; {} of {} nodes reachable",
            input.source, reached, n
        ),
    )
    .at_line(8);
    rec
}

pub struct Dijkstra;

impl Visualization for Dijkstra {
    const NAME: &'static str = "dijkstra";

    type Input = DijkstraInput;
    type Kind = DijkstraKind;
    type State = DijkstraState;
    type Artifact = ();
    type Error = GraphError;

    fn validate(input: &Self::Input) -> Result<(), Self::Error> {
        validate(input)
    }

    fn generate(input: &Self::Input) -> Output<Self::Kind, Self::State> {
        Output::new(generate_steps(input).finish())
    }

    fn pseudocode(_input: &Self::Input) -> &'static [&'static str] {
        PSEUDOCODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            vec![0, 1, 2],
            vec![Edge::new(0, 1, 2), Edge::new(1, 2, 2), Edge::new(0, 2, 10)],
        )
    }

    #[test]
    fn test_core_distances() {
        let paths = dijkstra(&triangle(), 0);
        assert_eq!(paths.distances, vec![Some(0), Some(2), Some(4)]);
        assert_eq!(paths.predecessors, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn test_trace_matches_core() {
        let input = DijkstraInput {
            graph: triangle(),
            source: 0,
        };
        let out = Dijkstra::execute(&input).unwrap();
        use DijkstraKind::*;
        assert_eq!(
            out.trace.kinds(),
            vec![Init, Select, Relax, Relax, Select, Relax, Select, Complete]
        );
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.distances, vec![Some(0), Some(2), Some(4)]);
        assert_eq!(last.state.predecessors, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn test_unreachable_keeps_infinity() {
        let graph = Graph::new(vec![5, 6, 7], vec![Edge::new(5, 6, 1), Edge::new(7, 5, 1)]);
        let out = Dijkstra::execute(&DijkstraInput { graph, source: 5 }).unwrap();
        assert_eq!(out.trace.count(DijkstraKind::Unreachable), 1);
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.distances, vec![Some(0), Some(1), None]);
        assert_eq!(last.state.predecessors[2], None);
    }

    #[test]
    fn test_skip_when_not_shorter() {
        let graph = Graph::new(
            vec![0, 1, 2],
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(1, 2, 5)],
        );
        let out = Dijkstra::execute(&DijkstraInput { graph, source: 0 }).unwrap();
        assert_eq!(out.trace.count(DijkstraKind::Skip), 1);
    }

    #[test]
    fn test_rejects_missing_source_and_negative_weight() {
        let missing = DijkstraInput {
            graph: triangle(),
            source: 9,
        };
        assert_eq!(
            Dijkstra::execute(&missing).unwrap_err(),
            GraphError::UnknownSource { id: 9 }
        );
        let negative = DijkstraInput {
            graph: Graph::new(vec![0, 1], vec![Edge::new(0, 1, -1)]),
            source: 0,
        };
        assert!(matches!(
            Dijkstra::execute(&negative).unwrap_err(),
            GraphError::NegativeWeight { .. }
        ));
    }
}
