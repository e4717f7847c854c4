//! Topological order by Kahn's algorithm
//!
//! Nodes with no incoming edges are queued in node order. Dequeuing a node
//! appends it to the order and removes its outgoing edges in input order;
//! any neighbour left without incoming edges joins the back of the queue.

use super::model::{Edge, Graph, NodeId};
use super::validate::{check_acyclic, validate_directed};
use crate::errors::GraphError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use serde::Serialize;
use std::collections::VecDeque;

pub const PSEUDOCODE: &[&str] = &[
    "TopologicalSort(G):",
    "  indeg[v] = number of edges into v",
    "  Q = all v with indeg[v] == 0",
    "  while Q is not empty:",
    "    u = Q.dequeue(); append u to L",
    "    for each edge (u, v):",
    "      remove (u, v); indeg[v] = indeg[v] - 1",
    "      if indeg[v] == 0: Q.enqueue(v)",
    "  return L",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalInput {
    pub graph: Graph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologicalKind {
    Init,
    Enqueue,
    Dequeue,
    RemoveEdge,
    Complete,
}

impl StepKind for TopologicalKind {
    fn label(self) -> &'static str {
        match self {
            TopologicalKind::Init => "init",
            TopologicalKind::Enqueue => "enqueue",
            TopologicalKind::Dequeue => "dequeue",
            TopologicalKind::RemoveEdge => "remove_edge",
            TopologicalKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == TopologicalKind::Init
    }

    fn is_terminal(self) -> bool {
        self == TopologicalKind::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalState {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    /// Remaining incoming edges, by node position
    pub in_degree: Vec<usize>,
    pub queue: VecDeque<NodeId>,
    pub order: Vec<NodeId>,
    pub current: Option<NodeId>,
    /// Index into `edges` of the edge just removed
    pub edge: Option<usize>,
    pub removed: Vec<bool>,
}

fn in_degrees(graph: &Graph) -> Vec<usize> {
    let mut in_degree = vec![0; graph.nodes.len()];
    for targets in graph.adjacency(true) {
        for (v, _) in targets {
            in_degree[v] += 1;
        }
    }
    in_degree
}

/// Kahn order of a DAG
pub fn topological_sort(graph: &Graph) -> Vec<NodeId> {
    let adjacency = graph.adjacency(true);
    let mut in_degree = in_degrees(graph);
    let mut queue: VecDeque<usize> = (0..graph.nodes.len())
        .filter(|&v| in_degree[v] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.nodes.len());
    while let Some(u) = queue.pop_front() {
        order.push(graph.nodes[u]);
        for &(v, _) in &adjacency[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }
    order
}

pub fn validate(input: &TopologicalInput) -> Result<(), GraphError> {
    validate_directed(&input.graph)?;
    check_acyclic(&input.graph)
}

pub fn generate_steps(input: &TopologicalInput) -> Recorder<TopologicalKind, TopologicalState> {
    let graph = &input.graph;
    let adjacency = graph.adjacency(true);
    let mut state = TopologicalState {
        nodes: graph.nodes.clone(),
        edges: graph.edges.clone(),
        in_degree: in_degrees(graph),
        queue: VecDeque::new(),
        order: Vec::with_capacity(graph.nodes.len()),
        current: None,
        edge: None,
        removed: vec![false; graph.edges.len()],
    };
    let mut rec = Recorder::new();

    rec.record(
        TopologicalKind::Init,
        &state,
        format!(
            "Count incoming edges for {} nodes and {} edges",
            graph.nodes.len(),
            graph.edges.len()
        ),
    )
    .at_line(1);

    for v in 0..state.nodes.len() {
        if state.in_degree[v] == 0 {
            let id = state.nodes[v];
            state.queue.push_back(id);
            rec.record(
                TopologicalKind::Enqueue,
                &state,
                format!("Node {} has no incoming edges: enqueue it", id),
            )
            .at_line(2)
            .var("v", id);
        }
    }

    let index = graph.index();
    while let Some(uid) = state.queue.pop_front() {
        let u = index[&uid];
        state.order.push(uid);
        state.current = Some(uid);
        state.edge = None;
        rec.record(
            TopologicalKind::Dequeue,
            &state,
            format!("Dequeue {} and append it to the order", uid),
        )
        .at_line(4)
        .var("u", uid)
        .var("|L|", state.order.len());

        for &(v, e) in &adjacency[u] {
            let vid = state.nodes[v];
            state.in_degree[v] -= 1;
            state.removed[e] = true;
            state.edge = Some(e);
            rec.record(
                TopologicalKind::RemoveEdge,
                &state,
                format!(
                    "Remove edge {} -> {}; node {} has {} incoming edge(s) left",
                    uid, vid, vid, state.in_degree[v]
                ),
            )
            .at_line(6)
            .var("v", vid)
            .var("indeg[v]", state.in_degree[v]);

            if state.in_degree[v] == 0 {
                state.queue.push_back(vid);
                rec.record(
                    TopologicalKind::Enqueue,
                    &state,
                    format!("Node {} has no incoming edges left: enqueue it", vid),
                )
                .at_line(7)
                .var("v", vid);
            }
        }
    }

    state.current = None;
    state.edge = None;
    let listed: Vec<String> = state.order.iter().map(|id| id.to_string()).collect();
    rec.record(
        TopologicalKind::Complete,
        &state,
        format!("Topological order: {}", listed.join(" -> ")),
    )
    .at_line(8);
    rec
}

pub struct TopologicalSort;

impl Visualization for TopologicalSort {
    const NAME: &'static str = "topological sort";

    type Input = TopologicalInput;
    type Kind = TopologicalKind;
    type State = TopologicalState;
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
