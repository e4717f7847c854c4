// Property tests: the instrumented run ends where the plain algorithm ends,
// for arbitrary valid input

use algotrace::graph::dijkstra::dijkstra;
use algotrace::graph::kruskal::kruskal;
use algotrace::graph::prim::prim;
use algotrace::graph::topological::topological_sort;
use algotrace::graph::{
    Dijkstra, DijkstraInput, Edge, Graph, Kruskal, KruskalInput, Prim, PrimInput,
    TopologicalInput, TopologicalSort,
};
use algotrace::search::binary::binary_search;
use algotrace::search::{BinarySearch, BinarySearchInput, BinarySearchKind};
use algotrace::sorting::divide_conquer::{merge_sort, quick_sort};
use algotrace::sorting::radix::radix_sort;
use algotrace::sorting::{
    DivideConquerAlgorithm, DivideConquerSort, DivideConquerSortInput, ElementaryAlgorithm,
    ElementarySort, ElementarySortInput, HeapSort, HeapSortInput, RadixSort, RadixSortInput,
};
use algotrace::strings::boyer_moore::boyer_moore_search;
use algotrace::strings::kmp::kmp_search;
use algotrace::strings::lcs::lcs;
use algotrace::strings::{BoyerMoore, BoyerMooreInput, Kmp, KmpInput, Lcs, LcsInput};
use algotrace::Visualization;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn naive_matches(text: &[char], pattern: &[char]) -> Vec<usize> {
    (0..=text.len() - pattern.len())
        .filter(|&s| text[s..s + pattern.len()] == *pattern)
        .collect()
}

fn is_subsequence(sub: &str, of: &str) -> bool {
    let mut rest = of.chars();
    sub.chars().all(|c| rest.any(|d| d == c))
}

/// Connected graph on `0..n`: a random spanning tree plus extra edges.
/// With `directed`, tree edges point away from node 0 and extras point
/// from the smaller id to the larger one, so the result is also acyclic.
fn build_graph(
    parents: &[(usize, i64)],
    extras: &[(usize, usize, i64)],
    directed: bool,
) -> Graph {
    let n = parents.len() + 1;
    let mut seen = BTreeSet::new();
    let mut edges = Vec::new();
    for (i, &(p, w)) in parents.iter().enumerate() {
        let child = i + 1;
        let parent = p % child;
        seen.insert((parent.min(child), parent.max(child)));
        edges.push(Edge::new(parent as u32, child as u32, w));
    }
    for &(a, b, w) in extras {
        let (a, b) = (a % n, b % n);
        if a == b || !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        let (from, to) = if directed { (a.min(b), a.max(b)) } else { (a, b) };
        edges.push(Edge::new(from as u32, to as u32, w));
    }
    Graph::new((0..n as u32).collect(), edges)
}

/// Reference distances by repeated relaxation
fn bellman_ford(graph: &Graph, source: u32) -> Vec<Option<i64>> {
    let mut dist = vec![None; graph.nodes.len()];
    dist[source as usize] = Some(0);
    for _ in 0..graph.nodes.len() {
        for e in &graph.edges {
            if let Some(d) = dist[e.from as usize] {
                let candidate = d + e.weight;
                if dist[e.to as usize].map_or(true, |cur| candidate < cur) {
                    dist[e.to as usize] = Some(candidate);
                }
            }
        }
    }
    dist
}

fn graph_parts() -> impl Strategy<Value = (Vec<(usize, i64)>, Vec<(usize, usize, i64)>)> {
    (
        prop::collection::vec((0usize..100, 0i64..20), 0..7),
        prop::collection::vec((0usize..8, 0usize..8, 0i64..20), 0..10),
    )
}

proptest! {
    #[test]
    fn prop_sorts_end_sorted(array in prop::collection::vec(-50i64..50, 1..20)) {
        let mut expected = array.clone();
        expected.sort();

        for algorithm in [
            ElementaryAlgorithm::Bubble,
            ElementaryAlgorithm::Selection,
            ElementaryAlgorithm::Insertion,
        ] {
            let input = ElementarySortInput { algorithm, array: array.clone() };
            let out = ElementarySort::execute(&input).unwrap();
            prop_assert_eq!(&out.trace.last().unwrap().state.array, &expected);
        }

        let merge = DivideConquerSort::execute(&DivideConquerSortInput {
            algorithm: DivideConquerAlgorithm::Merge,
            array: array.clone(),
        })
        .unwrap();
        prop_assert_eq!(&merge.trace.last().unwrap().state.array, &merge_sort(&array));

        let quick = DivideConquerSort::execute(&DivideConquerSortInput {
            algorithm: DivideConquerAlgorithm::Quick,
            array: array.clone(),
        })
        .unwrap();
        prop_assert_eq!(&quick.trace.last().unwrap().state.array, &quick_sort(&array));

        let heap = HeapSort::execute(&HeapSortInput { array: array.clone() }).unwrap();
        prop_assert_eq!(&heap.trace.last().unwrap().state.array, &expected);
    }

    #[test]
    fn prop_radix_matches_plain_sort(
        array in prop::collection::vec(0i64..5000, 1..20),
        base in 2u32..=16,
    ) {
        let out = RadixSort::execute(&RadixSortInput { array: array.clone(), base }).unwrap();
        let last = &out.trace.last().unwrap().state.array;
        prop_assert_eq!(last, &radix_sort(&array, base));

        let mut expected = array;
        expected.sort();
        prop_assert_eq!(last, &expected);
    }

    #[test]
    fn prop_binary_search_agrees(
        mut array in prop::collection::vec(-30i64..30, 1..20),
        target in -35i64..35,
    ) {
        array.sort();
        let input = BinarySearchInput { array: array.clone(), target };
        let out = BinarySearch::execute(&input).unwrap();
        let last = out.trace.last().unwrap();

        let expected = binary_search(&array, target);
        prop_assert_eq!(last.state.found, expected);
        prop_assert_eq!(last.kind == BinarySearchKind::Found, array.contains(&target));
    }

    #[test]
    fn prop_pattern_matchers_find_every_occurrence(
        text in "[AB]{1,30}",
        pattern in "[AB]{1,4}",
    ) {
        prop_assume!(pattern.len() <= text.len());
        let t: Vec<char> = text.chars().collect();
        let p: Vec<char> = pattern.chars().collect();
        let expected = naive_matches(&t, &p);

        let kmp = Kmp::execute(&KmpInput { text: text.clone(), pattern: pattern.clone() })
            .unwrap();
        prop_assert_eq!(&kmp.trace.last().unwrap().state.matches, &expected);
        prop_assert_eq!(kmp_search(&t, &p), expected.clone());

        let bm = BoyerMoore::execute(&BoyerMooreInput { text, pattern }).unwrap();
        prop_assert_eq!(&bm.trace.last().unwrap().state.matches, &expected);
        prop_assert_eq!(boyer_moore_search(&t, &p), expected);
    }

    #[test]
    fn prop_lcs_is_common_subsequence(first in "[ABCD]{1,10}", second in "[ABCD]{1,10}") {
        let out = Lcs::execute(&LcsInput { first: first.clone(), second: second.clone() })
            .unwrap();
        let result = &out.trace.last().unwrap().state.lcs;

        prop_assert_eq!(result, &lcs(&first, &second));
        prop_assert!(is_subsequence(result, &first));
        prop_assert!(is_subsequence(result, &second));
    }

    #[test]
    fn prop_dijkstra_matches_relaxation((parents, extras) in graph_parts()) {
        let graph = build_graph(&parents, &extras, true);
        let expected = dijkstra(&graph, 0);
        let out = Dijkstra::execute(&DijkstraInput { graph: graph.clone(), source: 0 }).unwrap();
        let last = out.trace.last().unwrap();

        prop_assert_eq!(&last.state.distances, &expected.distances);
        prop_assert_eq!(&last.state.predecessors, &expected.predecessors);
        prop_assert_eq!(last.state.distances.clone(), bellman_ford(&graph, 0));
    }

    #[test]
    fn prop_spanning_trees_agree((parents, extras) in graph_parts()) {
        let graph = build_graph(&parents, &extras, false);
        let n = graph.nodes.len();

        let k = Kruskal::execute(&KruskalInput { graph: graph.clone() }).unwrap();
        let k_last = &k.trace.last().unwrap().state;
        let expected = kruskal(&graph);
        prop_assert_eq!(&k_last.mst, &expected.edges);
        prop_assert_eq!(k_last.total_weight, expected.total_weight);
        prop_assert_eq!(k_last.mst.len(), n - 1);

        let p = Prim::execute(&PrimInput { graph: graph.clone(), root: 0 }).unwrap();
        let p_last = &p.trace.last().unwrap().state;
        prop_assert_eq!(p_last.total_weight, prim(&graph, 0).total_weight);
        prop_assert_eq!(p_last.total_weight, expected.total_weight);
        prop_assert_eq!(p_last.mst.len(), n - 1);
    }

    #[test]
    fn prop_topological_order_respects_edges((parents, extras) in graph_parts()) {
        let graph = build_graph(&parents, &extras, true);
        let out = TopologicalSort::execute(&TopologicalInput { graph: graph.clone() }).unwrap();
        let order = &out.trace.last().unwrap().state.order;

        prop_assert_eq!(order, &topological_sort(&graph));
        prop_assert_eq!(order.len(), graph.nodes.len());
        let position = |id: u32| order.iter().position(|&o| o == id);
        for e in &graph.edges {
            prop_assert!(position(e.from) < position(e.to));
        }
    }

    #[test]
    fn prop_replay_is_deterministic(array in prop::collection::vec(0i64..100, 1..16)) {
        let input = DivideConquerSortInput {
            algorithm: DivideConquerAlgorithm::Quick,
            array,
        };
        let a = DivideConquerSort::execute(&input).unwrap();
        let b = DivideConquerSort::execute(&input).unwrap();
        prop_assert_eq!(a.trace, b.trace);
    }
}
