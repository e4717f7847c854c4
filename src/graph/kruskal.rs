//! Kruskal's minimum spanning tree over a union-find forest
//!
//! Edges are stably sorted by weight, so equal weights keep input order.
//! Each edge is accepted when its endpoints lie in different sets, rejected
//! otherwise. The scan stops as soon as the tree has `n - 1` edges; edges
//! never reached stay pending.

use super::model::{Edge, Graph, NodeId};
use super::union_find::{UnionFind, UnionFindState};
use super::validate::validate_undirected;
use crate::errors::GraphError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use serde::Serialize;

pub const PSEUDOCODE: &[&str] = &[
    "Kruskal(G):",
    "  make_set(v) for every vertex v",
    "  sort edges by weight",
    "  for each edge (u, v, w) in sorted order:",
    "    if find(u) != find(v):",
    "      add (u, v) to the tree; union(u, v)",
    "    else: skip, it would close a cycle",
    "    if the tree has |V| - 1 edges: stop",
    "  return the tree",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KruskalInput {
    pub graph: Graph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KruskalKind {
    Init,
    Sort,
    Consider,
    Accept,
    Reject,
    Complete,
}

impl StepKind for KruskalKind {
    fn label(self) -> &'static str {
        match self {
            KruskalKind::Init => "init",
            KruskalKind::Sort => "sort",
            KruskalKind::Consider => "consider",
            KruskalKind::Accept => "accept",
            KruskalKind::Reject => "reject",
            KruskalKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == KruskalKind::Init
    }

    fn is_terminal(self) -> bool {
        self == KruskalKind::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimumSpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KruskalState {
    pub nodes: Vec<NodeId>,
    /// Input order until the sort step, weight order afterwards
    pub sorted_edges: Vec<Edge>,
    pub statuses: Vec<EdgeStatus>,
    /// Index into `sorted_edges`
    pub current: Option<usize>,
    pub union_find: UnionFindState,
    pub mst: Vec<Edge>,
    pub total_weight: i64,
}

fn sorted_by_weight(edges: &[Edge]) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);
    sorted
}

/// Minimum spanning tree of a connected undirected graph
pub fn kruskal(graph: &Graph) -> MinimumSpanningTree {
    let index = graph.index();
    let target = graph.nodes.len().saturating_sub(1);
    let mut forest = UnionFind::new(graph.nodes.len());
    let mut mst = MinimumSpanningTree {
        edges: Vec::new(),
        total_weight: 0,
    };
    for edge in sorted_by_weight(&graph.edges) {
        if mst.edges.len() == target {
            break;
        }
        if forest.union(index[&edge.from], index[&edge.to]) {
            mst.total_weight += edge.weight;
            mst.edges.push(edge);
        }
    }
    mst
}

pub fn validate(input: &KruskalInput) -> Result<(), GraphError> {
    validate_undirected(&input.graph)
}

pub fn generate_steps(input: &KruskalInput) -> Recorder<KruskalKind, KruskalState> {
    let graph = &input.graph;
    let index = graph.index();
    let n = graph.nodes.len();
    let target = n.saturating_sub(1);
    let mut forest = UnionFind::new(n);
    let mut state = KruskalState {
        nodes: graph.nodes.clone(),
        sorted_edges: graph.edges.clone(),
        statuses: vec![EdgeStatus::Pending; graph.edges.len()],
        current: None,
        union_find: forest.snapshot(),
        mst: Vec::new(),
        total_weight: 0,
    };
    let mut rec = Recorder::new();

    rec.record(
        KruskalKind::Init,
        &state,
        format!("Each of the {} nodes starts in its own set", n),
    )
    .at_line(1)
    .var("|V|", n)
    .var("|E|", graph.edges.len());

    state.sorted_edges = sorted_by_weight(&graph.edges);
    let order: Vec<String> = state
        .sorted_edges
        .iter()
        .map(|e| format!("{}-{}", e.from, e.to))
        .collect();
    rec.record(
        KruskalKind::Sort,
        &state,
        format!("Sort edges by weight: {}", order.join(", ")),
    )
    .at_line(2);

    for i in 0..state.sorted_edges.len() {
        if state.mst.len() == target {
            break;
        }
        let edge = state.sorted_edges[i];
        let (u, v) = (index[&edge.from], index[&edge.to]);
        state.current = Some(i);
        let (ru, rv) = (forest.find(u), forest.find(v));
        state.union_find = forest.snapshot();
        rec.record(
            KruskalKind::Consider,
            &state,
            format!(
                "Consider {}: find({}) = {}, find({}) = {}",
                edge, edge.from, state.nodes[ru], edge.to, state.nodes[rv]
            ),
        )
        .at_line(4)
        .var("u", edge.from)
        .var("v", edge.to)
        .var("w", edge.weight);

        if forest.union(u, v) {
            state.statuses[i] = EdgeStatus::Accepted;
            state.mst.push(edge);
            state.total_weight += edge.weight;
            state.union_find = forest.snapshot();
            rec.record(
                KruskalKind::Accept,
                &state,
                format!(
                    "Accept {}: it joins two components; tree weight is now {}",
                    edge, state.total_weight
                ),
            )
            .at_line(5)
            .var("tree edges", state.mst.len())
            .var("weight", state.total_weight);
        } else {
            state.statuses[i] = EdgeStatus::Rejected;
            rec.record(
                KruskalKind::Reject,
                &state,
                format!(
                    "Reject {}: {} and {} are already connected",
                    edge, edge.from, edge.to
                ),
            )
            .at_line(6);
        }
    }

    state.current = None;
    rec.record(
        KruskalKind::Complete,
        &state,
        format!(
            "Minimum spanning tree has {} edge(s) with total weight {}",
            state.mst.len(),
            state.total_weight
        ),
    )
    .at_line(8)
    .var("weight", state.total_weight);
    rec
}

pub struct Kruskal;

impl Visualization for Kruskal {
    const NAME: &'static str = "kruskal";

    type Input = KruskalInput;
    type Kind = KruskalKind;
    type State = KruskalState;
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
