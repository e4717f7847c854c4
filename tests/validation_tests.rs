// Integration tests for input rejection: each feature refuses its minimal
// invalid input with the documented error kind and records nothing

use algotrace::errors::{ArrayError, GraphError, TextError};
use algotrace::graph::{
    Dijkstra, DijkstraInput, Edge, Graph, Kruskal, KruskalInput, Prim, PrimInput,
    TopologicalInput, TopologicalSort,
};
use algotrace::search::{BinarySearch, BinarySearchInput};
use algotrace::sorting::{
    DivideConquerAlgorithm, DivideConquerSort, DivideConquerSortInput, ElementaryAlgorithm,
    ElementarySort, ElementarySortInput, HeapSort, HeapSortInput, RadixSort, RadixSortInput,
};
use algotrace::strings::{BoyerMoore, BoyerMooreInput, Kmp, KmpInput, Lcs, LcsInput};
use algotrace::{Error, ErrorKind, Visualization};

fn line() -> Graph {
    Graph::new(vec![0, 1, 2], vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1)])
}

#[test]
fn test_empty_arrays_are_rejected() {
    let search = BinarySearch::execute(&BinarySearchInput {
        array: vec![],
        target: 1,
    });
    assert_eq!(search.unwrap_err(), ArrayError::Empty);

    let bubble = ElementarySort::execute(&ElementarySortInput {
        algorithm: ElementaryAlgorithm::Bubble,
        array: vec![],
    });
    assert_eq!(bubble.unwrap_err(), ArrayError::Empty);

    let merge = DivideConquerSort::execute(&DivideConquerSortInput {
        algorithm: DivideConquerAlgorithm::Merge,
        array: vec![],
    });
    assert_eq!(merge.unwrap_err(), ArrayError::Empty);

    let heap = HeapSort::execute(&HeapSortInput { array: vec![] });
    assert_eq!(heap.unwrap_err().kind(), ErrorKind::InvalidArray);

    let radix = RadixSort::execute(&RadixSortInput {
        array: vec![],
        base: 10,
    });
    assert_eq!(radix.unwrap_err(), ArrayError::Empty);
}

#[test]
fn test_array_preconditions() {
    let unsorted = BinarySearch::execute(&BinarySearchInput {
        array: vec![1, 5, 3],
        target: 3,
    });
    assert_eq!(unsorted.unwrap_err(), ArrayError::Unsorted { index: 2 });

    let negative = RadixSort::execute(&RadixSortInput {
        array: vec![4, -2],
        base: 10,
    });
    assert_eq!(
        negative.unwrap_err(),
        ArrayError::NegativeValue {
            index: 1,
            value: -2
        }
    );

    let base = RadixSort::execute(&RadixSortInput {
        array: vec![4, 2],
        base: 1,
    });
    assert!(matches!(base.unwrap_err(), ArrayError::InvalidBase { base: 1, .. }));

    let long = ElementarySort::execute(&ElementarySortInput {
        algorithm: ElementaryAlgorithm::Insertion,
        array: vec![0; algotrace::constants::MAX_ARRAY_LEN + 1],
    });
    assert!(matches!(long.unwrap_err(), ArrayError::TooLong { .. }));
}

#[test]
fn test_text_inputs_are_rejected() {
    let kmp = |text: &str, pattern: &str| {
        Kmp::execute(&KmpInput {
            text: text.to_string(),
            pattern: pattern.to_string(),
        })
        .map(|_| ())
    };
    assert_eq!(kmp("", "A"), Err(TextError::EmptyText));
    assert_eq!(kmp("ABC", ""), Err(TextError::EmptyPattern));
    assert_eq!(
        kmp("AB", "ABC"),
        Err(TextError::PatternLongerThanText {
            pattern: 3,
            text: 2
        })
    );

    let bm = BoyerMoore::execute(&BoyerMooreInput {
        text: "AB".to_string(),
        pattern: "ABC".to_string(),
    });
    assert_eq!(bm.unwrap_err().kind(), ErrorKind::InvalidInput);

    let lcs = Lcs::execute(&LcsInput {
        first: "ABC".to_string(),
        second: String::new(),
    });
    assert_eq!(lcs.unwrap_err(), TextError::EmptyPattern);
}

#[test]
fn test_text_lengths_count_characters() {
    // Four characters, eight bytes
    let out = Kmp::execute(&KmpInput {
        text: "ééé".to_string(),
        pattern: "éééé".to_string(),
    });
    assert_eq!(
        out.unwrap_err(),
        TextError::PatternLongerThanText {
            pattern: 4,
            text: 3
        }
    );
}

#[test]
fn test_unknown_start_node() {
    let dijkstra = Dijkstra::execute(&DijkstraInput {
        graph: line(),
        source: 9,
    });
    let err = dijkstra.unwrap_err();
    assert_eq!(err, GraphError::UnknownSource { id: 9 });
    assert_eq!(err.kind(), ErrorKind::InvalidReference);

    let prim = Prim::execute(&PrimInput {
        graph: line(),
        root: 7,
    });
    assert_eq!(prim.unwrap_err().kind().label(), "invalid-reference");
}

#[test]
fn test_cyclic_graph_has_no_topological_order() {
    let cyclic = Graph::new(
        vec![1, 2, 3],
        vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)],
    );
    let err = TopologicalSort::execute(&TopologicalInput { graph: cyclic }).unwrap_err();
    assert!(matches!(err, GraphError::Cycle { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidGraph);
}

#[test]
fn test_malformed_graphs() {
    let empty = Kruskal::execute(&KruskalInput {
        graph: Graph::default(),
    });
    assert_eq!(empty.unwrap_err(), GraphError::NoNodes);

    let dangling = Kruskal::execute(&KruskalInput {
        graph: Graph::new(vec![0, 1], vec![Edge::new(0, 4, 1)]),
    });
    assert_eq!(
        dangling.unwrap_err(),
        GraphError::UnknownEndpoint {
            from: 0,
            to: 4,
            missing: 4
        }
    );

    let disconnected = Prim::execute(&PrimInput {
        graph: Graph::new(vec![0, 1, 2], vec![Edge::new(0, 1, 1)]),
        root: 0,
    });
    assert_eq!(disconnected.unwrap_err(), GraphError::Disconnected { id: 2 });

    let negative = Dijkstra::execute(&DijkstraInput {
        graph: Graph::new(vec![0, 1], vec![Edge::new(0, 1, -3)]),
        source: 0,
    });
    assert_eq!(negative.unwrap_err().kind(), ErrorKind::InvalidGraph);
}

#[test]
fn test_huge_weights_are_rejected_before_generation() {
    let huge = || {
        Graph::new(
            vec![0, 1, 2],
            vec![Edge::new(0, 1, i64::MAX), Edge::new(1, 2, 1)],
        )
    };
    let expected = GraphError::WeightTooLarge {
        from: 0,
        to: 1,
        weight: i64::MAX,
        max: algotrace::constants::MAX_WEIGHT,
    };

    let dijkstra = Dijkstra::execute(&DijkstraInput {
        graph: huge(),
        source: 0,
    });
    assert_eq!(dijkstra.unwrap_err(), expected);

    let kruskal = Kruskal::execute(&KruskalInput { graph: huge() });
    assert_eq!(kruskal.unwrap_err(), expected);

    let prim = Prim::execute(&PrimInput {
        graph: huge(),
        root: 0,
    });
    assert_eq!(prim.unwrap_err().kind(), ErrorKind::InvalidGraph);

    let topo = TopologicalSort::execute(&TopologicalInput { graph: huge() });
    assert_eq!(topo.unwrap_err(), expected);
}

#[test]
fn test_weights_at_the_cap_sum_without_overflow() {
    let max = algotrace::constants::MAX_WEIGHT;
    let out = Dijkstra::execute(&DijkstraInput {
        graph: Graph::new(
            vec![0, 1, 2],
            vec![Edge::new(0, 1, max), Edge::new(1, 2, max)],
        ),
        source: 0,
    })
    .expect("weights at the cap are valid");
    assert_eq!(
        out.trace.last().unwrap().state.distances,
        vec![Some(0), Some(max), Some(2 * max)]
    );
}

#[test]
fn test_first_violated_rule_wins() {
    // Negative weight and unknown source: weights are checked first
    let err = Dijkstra::execute(&DijkstraInput {
        graph: Graph::new(vec![0, 1], vec![Edge::new(0, 1, -3)]),
        source: 5,
    })
    .unwrap_err();
    assert!(matches!(err, GraphError::NegativeWeight { .. }));
}

#[test]
fn test_umbrella_error_keeps_message() {
    let err: Error = BinarySearch::execute(&BinarySearchInput {
        array: vec![],
        target: 0,
    })
    .unwrap_err()
    .into();
    assert_eq!(err.kind(), ErrorKind::InvalidArray);
    assert_eq!(err.to_string(), "array must contain at least one element");
}
