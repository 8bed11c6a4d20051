use rainbow_core::rng::RngHandle;
use rainbow_core::vertex_pairs;
use rainbow_graph::{build_random_graph, is_adjacent};
use rainbow_model::{model_to_string, ModelConfig, ModelKind};
use proptest::prelude::*;

#[test]
fn config_defaults_and_json() {
    let config = ModelConfig::default();
    assert_eq!(config.kind, ModelKind::Edge);
    assert_eq!(config.solution_size, 3);
    assert!(config.bridge_constraints);
    assert!(config.comment.is_none());

    let parsed = ModelConfig::from_json(r#"{"kind":"minion","solution_size":4}"#).unwrap();
    assert_eq!(parsed.kind, ModelKind::Minion);
    assert_eq!(parsed.solution_size, 4);
    assert!(parsed.bridge_constraints);

    let err = ModelConfig::from_json(r#"{"solution_size":0}"#).unwrap_err();
    assert_eq!(err.code(), "bad-config");
    let err = ModelConfig::from_json(r#"{"kind":"sat"}"#).unwrap_err();
    assert_eq!(err.code(), "deserialize-json");
    let err = ModelConfig::from_json(r#"{"comment":"a\nb"}"#).unwrap_err();
    assert_eq!(err.code(), "bad-config");
}

proptest! {
    #[test]
    fn models_are_deterministic_and_ordered(seed in any::<u64>(), n in 2usize..8, k in 1usize..4) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = build_random_graph(n, 0.5, &mut rng).unwrap();
        let config = ModelConfig { solution_size: k, ..ModelConfig::default() };
        let first = model_to_string(&graph, config.clone()).unwrap();
        let second = model_to_string(&graph, config).unwrap();
        prop_assert_eq!(&first, &second);

        let announced: Vec<(usize, usize)> = first
            .lines()
            .filter_map(|line| line.strip_prefix("% Vertex pair "))
            .map(|rest| {
                let mut parts = rest.split(' ').map(|tok| tok.parse::<usize>().unwrap());
                (parts.next().unwrap(), parts.next().unwrap())
            })
            .collect();
        let expected: Vec<(usize, usize)> = vertex_pairs(n)
            .filter(|&(u, v)| !is_adjacent(&graph, u, v))
            .collect();
        prop_assert_eq!(announced, expected);
    }
}
