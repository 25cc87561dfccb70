use grass_core::AssociativeGraph;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u8, u8, f64),
    Set(u8, u8, f64),
    Remove(u8, u8),
    Decay(f64),
}

fn arb_node() -> impl Strategy<Value = u8> {
    0u8..6
}

fn arb_weight() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), -10.0f64..10.0]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (arb_node(), arb_node(), arb_weight()).prop_map(|(a, b, w)| Op::Add(a, b, w)),
        5 => (arb_node(), arb_node(), arb_weight()).prop_map(|(a, b, w)| Op::Set(a, b, w)),
        2 => (arb_node(), arb_node()).prop_map(|(a, b)| Op::Remove(a, b)),
        1 => (0.1f64..2.0).prop_map(Op::Decay),
    ]
}

/// Ops without `add_edge`, so every directed pair has at most one entry.
fn arb_set_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (arb_node(), arb_node(), arb_weight()).prop_map(|(a, b, w)| Op::Set(a, b, w)),
        1 => (arb_node(), arb_node()).prop_map(|(a, b)| Op::Remove(a, b)),
        1 => (0.1f64..2.0).prop_map(Op::Decay),
    ]
}

fn build(ops: &[Op], bidirectional: bool) -> AssociativeGraph<u8> {
    let mut graph = AssociativeGraph::empty(bidirectional);
    for op in ops {
        match *op {
            Op::Add(a, b, w) => graph.add_edge(a, b, w),
            Op::Set(a, b, w) => graph.set_weight(a, b, w),
            Op::Remove(a, b) => graph.remove_edge(&a, &b),
            Op::Decay(factor) => {
                graph.decay(factor).unwrap();
            }
        }
    }
    graph
}

fn all_nodes() -> Vec<u8> {
    (0u8..6).collect()
}

// ── Sorted adjacency ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn adjacency_always_sorted(
        ops in prop::collection::vec(arb_op(), 0..60),
        bidirectional in any::<bool>(),
    ) {
        let graph = build(&ops, bidirectional);

        for node in all_nodes() {
            let entries = graph.neighbors(&node);
            for pair in entries.windows(2) {
                prop_assert!(pair[0].weight() >= pair[1].weight());
                if pair[0].weight() == pair[1].weight() {
                    prop_assert!(pair[0].neighbor <= pair[1].neighbor);
                }
            }
        }
    }
}

// ── Bidirectional mirroring ───────────────────────────────────────────────

proptest! {
    #[test]
    fn bidirectional_edges_are_mirrored(ops in prop::collection::vec(arb_set_op(), 0..60)) {
        let graph = build(&ops, true);

        for node in all_nodes() {
            for entry in graph.neighbors(&node) {
                prop_assert!(graph.is_connected(&entry.neighbor, &node));
                prop_assert_eq!(graph.weight(&entry.neighbor, &node), graph.weight(&node, &entry.neighbor));
            }
        }
    }
}

// ── Connected set tracks storage ──────────────────────────────────────────

proptest! {
    #[test]
    fn connected_set_matches_storage(
        ops in prop::collection::vec(arb_set_op(), 0..60),
        bidirectional in any::<bool>(),
    ) {
        let graph = build(&ops, bidirectional);

        for start in all_nodes() {
            for end in all_nodes() {
                let stored = graph.neighbors(&start).iter().any(|e| e.neighbor == end);
                prop_assert_eq!(graph.is_connected(&start, &end), stored);
            }
        }
    }
}

// ── Idempotent set_weight ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn set_weight_is_idempotent(
        ops in prop::collection::vec(arb_op(), 0..40),
        bidirectional in any::<bool>(),
        a in arb_node(),
        b in arb_node(),
        w in arb_weight(),
    ) {
        let mut once = build(&ops, bidirectional);
        once.set_weight(a, b, w);

        let mut twice = once.clone();
        twice.set_weight(a, b, w);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn zero_weight_deletes(
        ops in prop::collection::vec(arb_op(), 0..40),
        bidirectional in any::<bool>(),
        a in arb_node(),
        b in arb_node(),
        w in 0.5f64..10.0,
    ) {
        let mut graph = build(&ops, bidirectional);
        graph.set_weight(a, b, w);
        graph.set_weight(a, b, 0.0);

        prop_assert!(!graph.is_connected(&a, &b));
        prop_assert!(graph.neighbors(&a).iter().all(|e| e.neighbor != b));
        if bidirectional {
            prop_assert!(graph.neighbors(&b).iter().all(|e| e.neighbor != a));
        }
    }
}

// ── Lookup shape ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn lookup_excludes_seeds_and_is_ranked(
        ops in prop::collection::vec(arb_op(), 0..80),
        bidirectional in any::<bool>(),
        seeds in prop::collection::vec(arb_node(), 1..4),
    ) {
        let graph = build(&ops, bidirectional);
        let result = graph.lookup(&seeds);

        prop_assert!(result.len() <= 10);
        for (node, _) in &result {
            prop_assert!(!seeds.contains(node));
        }
        for pair in result.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn lookup_caps_at_ten(fan_out in 11u32..40) {
        let edges: Vec<_> = (1..=fan_out).map(|n| (0u32, n, n as f64)).collect();
        let graph = AssociativeGraph::new(edges, false);

        let result = graph.lookup(&[0]);
        prop_assert_eq!(result.len(), 10);
        prop_assert_eq!(result[0].0, fan_out);
    }
}

// ── Decay guard ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn failed_decay_leaves_graph_unchanged(
        ops in prop::collection::vec(arb_op(), 0..40),
        bidirectional in any::<bool>(),
    ) {
        let mut graph = build(&ops, bidirectional);
        let before = graph.clone();

        prop_assert!(graph.decay(0.0).is_err());
        prop_assert_eq!(graph, before);
    }
}

// ── Persistence round trip ────────────────────────────────────────────────

proptest! {
    #[test]
    fn snapshot_round_trip_preserves_lookups(
        ops in prop::collection::vec(arb_op(), 0..60),
        bidirectional in any::<bool>(),
    ) {
        let graph = build(&ops, bidirectional);

        let from_json: AssociativeGraph<u8> =
            AssociativeGraph::from_json_str(&graph.to_json_string().unwrap()).unwrap();
        let from_bytes: AssociativeGraph<u8> =
            AssociativeGraph::from_bytes(&graph.to_bytes().unwrap()).unwrap();

        prop_assert_eq!(&from_json, &graph);
        prop_assert_eq!(&from_bytes, &graph);
        for node in all_nodes() {
            prop_assert_eq!(from_json.lookup(&[node]), graph.lookup(&[node]));
        }
    }
}
