use std::io::Write;

use rainbow_core::errors::RcError;
use rainbow_core::rng::RngHandle;
use rainbow_graph::{
    build_random_graph, build_wheel, canonical_hash, graph_from_bytes, graph_from_json,
    graph_to_bytes, graph_to_json, is_adjacent, parse_dimacs, read_dimacs, to_dimacs, Graph,
};
use proptest::prelude::*;

const SQUARE: &str = "c a 4-cycle\nc second comment\np edge 4 4\ne 1 2\ne 2 3\n\ne 3 4\ne 4 1\n";

#[test]
fn parses_comments_and_one_indexed_edges() {
    let graph = parse_dimacs(SQUARE).unwrap();
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.edges(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(is_adjacent(&graph, 0, 3));
}

#[test]
fn repeated_edges_are_read_once() {
    let graph = parse_dimacs("p edge 3 3\ne 1 2\ne 2 1\ne 2 3\n").unwrap();
    assert_eq!(graph.num_edges(), 2);
}

#[test]
fn malformed_input_is_rejected() {
    let code = |text: &str| parse_dimacs(text).unwrap_err().code().to_string();
    assert_eq!(code("e 1 2\np edge 2 1\n"), "edge-before-problem");
    assert_eq!(code("c nothing here\n"), "missing-problem-line");
    assert_eq!(code("p edge four 1\n"), "bad-problem-line");
    assert_eq!(code("p edge 3 1\ne 1\n"), "bad-edge-line");
    assert_eq!(code("p edge 3 1\ne 0 2\n"), "bad-edge-line");
    assert_eq!(code("p edge 3 1\np edge 3 1\n"), "duplicate-problem-line");
    assert_eq!(code("p edge 65 0\n"), "vertex-capacity");
    assert_eq!(code("p edge 3 1\ne 1 4\n"), "vertex-out-of-range");
    assert_eq!(code("p edge 3 1\ne 2 2\n"), "self-loop");
}

#[test]
fn parse_errors_carry_line_numbers() {
    let err = parse_dimacs("c header\np edge 3 1\ne x y\n").unwrap_err();
    match err {
        RcError::Parse(info) => assert_eq!(info.context.get("line").map(String::as_str), Some("3")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SQUARE.as_bytes()).unwrap();
    let graph = read_dimacs(file.path()).unwrap();
    assert_eq!(graph.num_edges(), 4);

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.col");
    let err = read_dimacs(&missing).unwrap_err();
    assert_eq!(err.code(), "io");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn writer_output_parses_back() {
    let wheel = build_wheel(6).unwrap();
    let text = to_dimacs(&wheel);
    assert!(text.starts_with("p edge 7 12\ne 1 2\n"));
    let parsed = parse_dimacs(&text).unwrap();
    assert_eq!(parsed, wheel);
}

#[test]
fn hash_ignores_edge_order() {
    let a = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let b = Graph::from_edges(3, &[(2, 1), (1, 0)]).unwrap();
    let c = Graph::from_edges(4, &[(0, 1), (1, 2)]).unwrap();
    assert_eq!(canonical_hash(&a), canonical_hash(&b));
    assert_ne!(canonical_hash(&a), canonical_hash(&c));
}

#[test]
fn json_payloads_are_validated() {
    let err = graph_from_json(r#"{"num_vertices":3,"edges":[[0,0]]}"#).unwrap_err();
    assert_eq!(err.code(), "self-loop");
    let err = graph_from_json(r#"{"num_vertices":70,"edges":[]}"#).unwrap_err();
    assert_eq!(err.code(), "vertex-capacity");
    let err = graph_from_json("not json").unwrap_err();
    assert!(matches!(err, RcError::Serde(info) if info.code == "deserialize-json"));
}

proptest! {
    #[test]
    fn serialized_graphs_restore_identically(seed in any::<u64>(), n in 2usize..40) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = build_random_graph(n, 0.2, &mut rng).unwrap();

        let from_bytes = graph_from_bytes(&graph_to_bytes(&graph).unwrap()).unwrap();
        prop_assert_eq!(&from_bytes, &graph);
        let from_json = graph_from_json(&graph_to_json(&graph).unwrap()).unwrap();
        prop_assert_eq!(canonical_hash(&from_json), canonical_hash(&graph));
        let from_dimacs = parse_dimacs(&to_dimacs(&graph)).unwrap();
        prop_assert_eq!(from_dimacs.edges(), graph.edges());
    }
}
