use std::collections::BTreeSet;

use rainbow_core::rng::RngHandle;
use rainbow_graph::{
    build_biclique, build_clique, build_cycle, build_path, build_random_graph, distances_from,
    get_shortest_path, is_adjacent, list_paths, list_shortest_paths, EdgePath, Graph, OnPath,
    PathAccumulator, VertexPath, UNBOUNDED, UNREACHABLE,
};
use proptest::prelude::*;

fn sequences(paths: &[EdgePath]) -> Vec<Vec<usize>> {
    paths.iter().map(|path| path.as_slice().to_vec()).collect()
}

fn assert_simple_walk(graph: &Graph, path: &EdgePath, s: usize, t: usize) {
    let vertices = path.as_slice();
    assert_eq!(vertices.first(), Some(&s));
    assert_eq!(vertices.last(), Some(&t));
    let distinct: BTreeSet<_> = vertices.iter().collect();
    assert_eq!(distinct.len(), vertices.len(), "repeated vertex in {vertices:?}");
    for pair in vertices.windows(2) {
        assert!(is_adjacent(graph, pair[0], pair[1]));
    }
}

#[test]
fn four_cycle_opposite_corners() {
    let graph = build_cycle(4).unwrap();
    let paths: Vec<EdgePath> = list_paths(&graph, 0, 2, 3).unwrap();
    assert_eq!(sequences(&paths), vec![vec![0, 1, 2], vec![0, 3, 2]]);
    assert!(paths.iter().all(|path| path.size() == 2));

    let unbounded: Vec<EdgePath> = list_paths(&graph, 0, 2, UNBOUNDED).unwrap();
    assert_eq!(paths, unbounded);
    let tight: Vec<EdgePath> = list_paths(&graph, 0, 2, 1).unwrap();
    assert!(tight.is_empty());
}

#[test]
fn clique_path_counts() {
    // simple s-t paths in K_n: sum over k of (n-2)!/(n-2-k)!
    let graph = build_clique(5).unwrap();
    let all: Vec<EdgePath> = list_paths(&graph, 0, 4, UNBOUNDED).unwrap();
    assert_eq!(all.len(), 1 + 3 + 6 + 6);
    let short: Vec<EdgePath> = list_paths(&graph, 0, 4, 2).unwrap();
    assert_eq!(short.len(), 1 + 3);
    assert_eq!(short[0].as_slice(), &[0, 1, 4]);
    for path in &all {
        assert_simple_walk(&graph, path, 0, 4);
    }
}

#[test]
fn target_is_a_terminal_recording_point() {
    // 0 - 1 - 2 with 1 also adjacent to 3: paths to 1 never continue past it
    let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap();
    let paths: Vec<EdgePath> = list_paths(&graph, 0, 1, UNBOUNDED).unwrap();
    assert_eq!(sequences(&paths), vec![vec![0, 1]]);

    let to_self: Vec<EdgePath> = list_paths(&graph, 2, 2, UNBOUNDED).unwrap();
    assert_eq!(sequences(&to_self), vec![vec![2]]);
    assert_eq!(to_self[0].size(), 0);
}

#[test]
fn vertex_paths_mirror_edge_paths() {
    let graph = build_cycle(6).unwrap();
    let edge_paths: Vec<EdgePath> = list_paths(&graph, 0, 3, UNBOUNDED).unwrap();
    let vertex_paths: Vec<VertexPath> = list_paths(&graph, 0, 3, UNBOUNDED).unwrap();
    assert_eq!(edge_paths.len(), vertex_paths.len());
    for (edge_path, vertex_path) in edge_paths.iter().zip(&vertex_paths) {
        let mut ordered = edge_path.vertices();
        ordered.sort_unstable();
        assert_eq!(vertex_path.vertices(), ordered);
        assert_eq!(vertex_path.size(), edge_path.size());
    }
    assert_eq!(vertex_paths[0].internal_vertices(0, 3), vec![1, 2]);
    assert_eq!(vertex_paths[1].internal_vertices(0, 3), vec![4, 5]);
}

#[test]
fn edge_lists_are_normalized() {
    let graph = build_cycle(5).unwrap();
    let paths: Vec<EdgePath> = list_paths(&graph, 0, 2, UNBOUNDED).unwrap();
    assert_eq!(sequences(&paths), vec![vec![0, 1, 2], vec![0, 4, 3, 2]]);
    assert_eq!(paths[1].to_edge_list(), vec![(0, 4), (3, 4), (2, 3)]);
    assert_eq!(paths[1].to_flat_edge_list(), vec![0, 4, 3, 4, 2, 3]);
}

#[test]
fn shortest_paths_of_known_graphs() {
    let cycle = build_cycle(6).unwrap();
    let paths: Vec<EdgePath> = list_shortest_paths(&cycle, 0, 3).unwrap();
    assert_eq!(sequences(&paths), vec![vec![0, 1, 2, 3], vec![0, 5, 4, 3]]);

    let biclique = build_biclique(2, 3).unwrap();
    let paths: Vec<EdgePath> = list_shortest_paths(&biclique, 0, 1).unwrap();
    assert_eq!(
        sequences(&paths),
        vec![vec![0, 2, 1], vec![0, 3, 1], vec![0, 4, 1]]
    );

    let same: Vec<EdgePath> = list_shortest_paths(&cycle, 4, 4).unwrap();
    assert_eq!(sequences(&same), vec![vec![4]]);
}

#[test]
fn shortest_paths_between_components_are_empty() {
    let graph = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
    let paths: Vec<EdgePath> = list_shortest_paths(&graph, 0, 3).unwrap();
    assert!(paths.is_empty());
    assert!(get_shortest_path(&graph, 0, 3).unwrap().is_none());
    let paths: Vec<EdgePath> = list_paths(&graph, 0, 3, UNBOUNDED).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn single_shortest_path_prefers_low_indices() {
    let graph = build_cycle(6).unwrap();
    let path = get_shortest_path(&graph, 0, 3).unwrap().unwrap();
    assert_eq!(path.as_slice(), &[0, 1, 2, 3]);
    let path = get_shortest_path(&graph, 2, 2).unwrap().unwrap();
    assert_eq!(path.as_slice(), &[2]);
    let line = build_path(5).unwrap();
    let path = get_shortest_path(&line, 4, 0).unwrap().unwrap();
    assert_eq!(path.as_slice(), &[4, 3, 2, 1, 0]);
}

#[test]
fn queries_reject_out_of_range_vertices() {
    let graph = build_cycle(4).unwrap();
    let err = list_paths::<EdgePath>(&graph, 0, 4, UNBOUNDED).unwrap_err();
    assert_eq!(err.code(), "vertex-out-of-range");
    let err = list_shortest_paths::<VertexPath>(&graph, 9, 0).unwrap_err();
    assert_eq!(err.code(), "vertex-out-of-range");
    assert!(get_shortest_path(&graph, 0, 64).is_err());
}

#[test]
fn guards_pair_discover_with_backtrack() {
    let mut path = EdgePath::default();
    {
        let mut outer = OnPath::enter(&mut path, 3);
        assert!(outer.contains_vertex(3));
        {
            let inner = OnPath::enter(&mut *outer, 5);
            assert_eq!(inner.as_slice(), &[3, 5]);
            assert_eq!(inner.size(), 1);
        }
        assert_eq!(outer.as_slice(), &[3]);
    }
    assert!(path.as_slice().is_empty());
    assert!(!path.contains_vertex(3));

    let mut members = VertexPath::default();
    {
        let _guard = OnPath::enter(&mut members, 63);
    }
    assert!(members.is_empty());
}

proptest! {
    #[test]
    fn bounded_paths_are_simple_and_short(seed in any::<u64>(), n in 2usize..9, bound in 0usize..6) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = build_random_graph(n, 0.5, &mut rng).unwrap();
        let (s, t) = (0, n - 1);
        let paths: Vec<EdgePath> = list_paths(&graph, s, t, bound).unwrap();
        for path in &paths {
            prop_assert!(path.size() <= bound);
            assert_simple_walk(&graph, path, s, t);
        }
        let distinct: BTreeSet<_> = paths.iter().map(|path| path.as_slice().to_vec()).collect();
        prop_assert_eq!(distinct.len(), paths.len());

        let again: Vec<EdgePath> = list_paths(&graph, s, t, bound).unwrap();
        prop_assert_eq!(&paths, &again);
    }

    #[test]
    fn shortest_paths_are_the_minimal_simple_paths(seed in any::<u64>(), n in 2usize..9) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = build_random_graph(n, 0.45, &mut rng).unwrap();
        let (s, t) = (0, n - 1);
        let dist = distances_from(&graph, s).unwrap();
        let shortest: Vec<EdgePath> = list_shortest_paths(&graph, s, t).unwrap();
        let single = get_shortest_path(&graph, s, t).unwrap();

        if dist[t] == UNREACHABLE {
            prop_assert!(shortest.is_empty());
            prop_assert!(single.is_none());
        } else {
            let expected: Vec<EdgePath> = list_paths::<EdgePath>(&graph, s, t, UNBOUNDED)
                .unwrap()
                .into_iter()
                .filter(|path| path.size() as i64 == dist[t])
                .collect();
            prop_assert!(!shortest.is_empty());
            prop_assert!(shortest.iter().all(|path| path.size() as i64 == dist[t]));
            let lhs: BTreeSet<_> = shortest.iter().map(|p| p.as_slice().to_vec()).collect();
            let rhs: BTreeSet<_> = expected.iter().map(|p| p.as_slice().to_vec()).collect();
            prop_assert_eq!(lhs, rhs);

            let single = single.unwrap();
            prop_assert_eq!(single.size() as i64, dist[t]);
            assert_simple_walk(&graph, &single, s, t);
        }
    }
}
