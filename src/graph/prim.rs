//! Prim's minimum spanning tree grown from a root
//!
//! Every round lists the edges crossing the cut between tree and non-tree
//! nodes, ordered by weight with input order breaking ties, and adds the
//! first one.

use super::kruskal::MinimumSpanningTree;
use super::model::{Edge, Graph, NodeId};
use super::validate::{check_source, validate_undirected};
use crate::errors::GraphError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use serde::Serialize;

pub const PSEUDOCODE: &[&str] = &[
    "Prim(G, r):",
    "  T = {r}",
    "  while T does not span G:",
    "    C = edges with exactly one endpoint in T",
    "    (u, v) = lightest edge in C",
    "    add v and (u, v) to T",
    "  return T",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimInput {
    pub graph: Graph,
    pub root: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimKind {
    Init,
    Candidates,
    Add,
    Complete,
}

impl StepKind for PrimKind {
    fn label(self) -> &'static str {
        match self {
            PrimKind::Init => "init",
            PrimKind::Candidates => "candidates",
            PrimKind::Add => "add",
            PrimKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == PrimKind::Init
    }

    fn is_terminal(self) -> bool {
        self == PrimKind::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimState {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    pub root: NodeId,
    pub in_tree: Vec<bool>,
    /// Indices into `edges` crossing the cut, lightest first
    pub candidates: Vec<usize>,
    /// Index into `edges` of the edge just added
    pub chosen: Option<usize>,
    pub mst: Vec<Edge>,
    pub total_weight: i64,
}

/// Edges with exactly one endpoint in the tree, by weight then input order
fn crossing_edges(graph: &Graph, endpoints: &[usize], in_tree: &[bool]) -> Vec<usize> {
    let mut crossing: Vec<usize> = (0..graph.edges.len())
        .filter(|&e| {
            let (u, v) = (endpoints[2 * e], endpoints[2 * e + 1]);
            in_tree[u] != in_tree[v]
        })
        .collect();
    crossing.sort_by_key(|&e| (graph.edges[e].weight, e));
    crossing
}

/// Endpoint positions flattened as `[from0, to0, from1, to1, ...]`
fn endpoint_positions(graph: &Graph) -> Vec<usize> {
    let index = graph.index();
    graph
        .edges
        .iter()
        .flat_map(|e| [index[&e.from], index[&e.to]])
        .collect()
}

/// The position of `edge`'s endpoint that is outside the tree
fn outside_endpoint(endpoints: &[usize], edge: usize, in_tree: &[bool]) -> usize {
    let (u, v) = (endpoints[2 * edge], endpoints[2 * edge + 1]);
    if in_tree[u] {
        v
    } else {
        u
    }
}

/// Minimum spanning tree of a connected undirected graph, grown from `root`
pub fn prim(graph: &Graph, root: NodeId) -> MinimumSpanningTree {
    let endpoints = endpoint_positions(graph);
    let mut in_tree = vec![false; graph.nodes.len()];
    in_tree[graph.index()[&root]] = true;
    let mut mst = MinimumSpanningTree {
        edges: Vec::new(),
        total_weight: 0,
    };
    while let Some(&e) = crossing_edges(graph, &endpoints, &in_tree).first() {
        let v = outside_endpoint(&endpoints, e, &in_tree);
        in_tree[v] = true;
        mst.edges.push(graph.edges[e]);
        mst.total_weight += graph.edges[e].weight;
    }
    mst
}

pub fn validate(input: &PrimInput) -> Result<(), GraphError> {
    validate_undirected(&input.graph)?;
    check_source(&input.graph, input.root)
}

pub fn generate_steps(input: &PrimInput) -> Recorder<PrimKind, PrimState> {
    let graph = &input.graph;
    let endpoints = endpoint_positions(graph);
    let mut state = PrimState {
        nodes: graph.nodes.clone(),
        edges: graph.edges.clone(),
        root: input.root,
        in_tree: vec![false; graph.nodes.len()],
        candidates: Vec::new(),
        chosen: None,
        mst: Vec::new(),
        total_weight: 0,
    };
    state.in_tree[graph.index()[&input.root]] = true;
    let mut rec = Recorder::new();

    rec.record(
        PrimKind::Init,
        &state,
        format!("Grow the tree from node {}", input.root),
    )
    .at_line(1)
    .var("r", input.root);

    loop {
        state.chosen = None;
        state.candidates = crossing_edges(graph, &endpoints, &state.in_tree);
        let Some(&e) = state.candidates.first() else {
            break;
        };
        let listed: Vec<String> = state
            .candidates
            .iter()
            .map(|&c| state.edges[c].to_string())
            .collect();
        rec.record(
            PrimKind::Candidates,
            &state,
            format!("Edges crossing the cut: {}", listed.join(", ")),
        )
        .at_line(3)
        .var("|C|", state.candidates.len());

        let edge = state.edges[e];
        let v = outside_endpoint(&endpoints, e, &state.in_tree);
        state.in_tree[v] = true;
        state.chosen = Some(e);
        state.mst.push(edge);
        state.total_weight += edge.weight;
        rec.record(
            PrimKind::Add,
            &state,
            format!(
                "Add {}, the lightest crossing edge, bringing node {} into the tree",
                edge, state.nodes[v]
            ),
        )
        .at_line(5)
        .var("u", edge.other(state.nodes[v]))
        .var("v", state.nodes[v])
        .var("weight", state.total_weight);
    }

    rec.record(
        PrimKind::Complete,
        &state,
        format!(
            "Minimum spanning tree has {} edge(s) with total weight {}",
            state.mst.len(),
            state.total_weight
        ),
    )
    .at_line(6)
    .var("weight", state.total_weight);
    rec
}

pub struct Prim;

impl Visualization for Prim {
    const NAME: &'static str = "prim";

    type Input = PrimInput;
    type Kind = PrimKind;
    type State = PrimState;
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
