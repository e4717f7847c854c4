// Integration tests replaying concrete inputs end to end through `execute`

use algotrace::graph::{
    Dijkstra, DijkstraInput, Edge, EdgeStatus, Graph, Kruskal, KruskalInput, KruskalKind,
};
use algotrace::search::{BinarySearch, BinarySearchInput, BinarySearchKind};
use algotrace::sorting::{RadixSort, RadixSortInput, RadixSortKind};
use algotrace::strings::{Kmp, KmpInput, KmpKind};
use algotrace::Visualization;

#[test]
fn test_binary_search_finds_seven() {
    let input = BinarySearchInput {
        array: vec![1, 3, 5, 7, 9, 11],
        target: 7,
    };
    let out = BinarySearch::execute(&input).expect("valid input");
    let last = out.trace.last().unwrap();

    assert_eq!(last.kind, BinarySearchKind::Found);
    assert_eq!(last.state.found, Some(3), "7 sits at index 3");
    assert_eq!(last.variable("q"), Some("3"));
}

#[test]
fn test_radix_sort_base_ten() {
    let input = RadixSortInput {
        array: vec![170, 45, 75, 90, 802, 24, 2, 66],
        base: 10,
    };
    let out = RadixSort::execute(&input).expect("valid input");
    let last = out.trace.last().unwrap();

    assert_eq!(last.kind, RadixSortKind::Complete);
    assert_eq!(last.state.array, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    // 802 has three digits
    assert_eq!(out.trace.count(RadixSortKind::PassComplete), 3);
}

#[test]
fn test_radix_sort_base_two() {
    let input = RadixSortInput {
        array: vec![5, 3, 7, 1],
        base: 2,
    };
    let out = RadixSort::execute(&input).expect("valid input");

    assert_eq!(out.trace.last().unwrap().state.array, vec![1, 3, 5, 7]);
    assert_eq!(out.trace.count(RadixSortKind::PassComplete), 3);
}

#[test]
fn test_kmp_reports_offset_and_failure_table() {
    let input = KmpInput {
        text: "XXABABYY".to_string(),
        pattern: "ABAB".to_string(),
    };
    let out = Kmp::execute(&input).expect("valid input");

    assert_eq!(out.artifact, vec![0, 0, 1, 2]);

    let found: Vec<_> = out
        .trace
        .iter()
        .filter(|s| s.kind == KmpKind::Found)
        .collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].variable("offset"), Some("2"));
    // Two mismatches on 'X', then four matches
    assert_eq!(found[0].state.comparisons, 6);
    assert_eq!(found[0].variable("comparisons"), Some("6"));

    let last = out.trace.last().unwrap();
    assert_eq!(last.kind, KmpKind::Complete);
    assert_eq!(last.state.matches, vec![2]);
    assert_eq!(last.state.failure, vec![0, 0, 1, 2]);
}

#[test]
fn test_dijkstra_prefers_two_hop_path() {
    let input = DijkstraInput {
        graph: Graph::new(
            vec![0, 1, 2],
            vec![Edge::new(0, 1, 2), Edge::new(1, 2, 2), Edge::new(0, 2, 10)],
        ),
        source: 0,
    };
    let out = Dijkstra::execute(&input).expect("valid input");
    let last = out.trace.last().unwrap();

    assert_eq!(last.state.distances, vec![Some(0), Some(2), Some(4)]);
    assert_eq!(last.state.predecessors, vec![None, Some(0), Some(1)]);
    assert!(last.state.visited.iter().all(|&v| v));
}

#[test]
fn test_kruskal_on_four_cycle() {
    let input = KruskalInput {
        graph: Graph::new(
            vec![0, 1, 2, 3],
            vec![
                Edge::new(0, 1, 4),
                Edge::new(1, 2, 1),
                Edge::new(2, 3, 3),
                Edge::new(3, 0, 2),
            ],
        ),
    };
    let out = Kruskal::execute(&input).expect("valid input");
    let last = out.trace.last().unwrap();

    assert_eq!(last.kind, KruskalKind::Complete);
    assert_eq!(last.state.mst.len(), 3);
    assert_eq!(last.state.total_weight, 1 + 2 + 3);

    let rejected: Vec<Edge> = out
        .trace
        .iter()
        .filter(|s| s.kind == KruskalKind::Reject)
        .filter_map(|s| s.state.current.map(|i| s.state.sorted_edges[i]))
        .collect();
    for edge in &rejected {
        assert!(
            !last.state.mst.contains(edge),
            "rejected edge {} ended up in the tree",
            edge
        );
    }
    assert!(!last.state.statuses.contains(&EdgeStatus::Rejected));
}

#[test]
fn test_kruskal_rejected_edges_stay_out_of_tree() {
    // Triangle plus a tail: the heaviest triangle edge closes a cycle
    let input = KruskalInput {
        graph: Graph::new(
            vec![0, 1, 2, 3],
            vec![
                Edge::new(0, 1, 1),
                Edge::new(1, 2, 2),
                Edge::new(0, 2, 3),
                Edge::new(2, 3, 4),
            ],
        ),
    };
    let out = Kruskal::execute(&input).expect("valid input");
    let last = out.trace.last().unwrap();

    assert_eq!(out.trace.count(KruskalKind::Reject), 1);
    assert_eq!(last.state.total_weight, 7);
    assert!(!last.state.mst.contains(&Edge::new(0, 2, 3)));
}
