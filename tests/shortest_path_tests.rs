use ordered_float::OrderedFloat;

use sssp_compare::graph::generators::generate_random_graph;
use sssp_compare::{
    shortest_paths_brute_force, shortest_paths_dijkstra, AdjacencyGraph, BruteForce, Dijkstra,
    Error, Graph, ShortestPathAlgorithm,
};

type W = OrderedFloat<f64>;

fn w(value: f64) -> W {
    OrderedFloat(value)
}

// The four-castle example: two routes to node 3, the cheaper one through 2
fn castle_graph() -> AdjacencyGraph<W> {
    AdjacencyGraph::from_entries([
        (0, vec![(1, w(4.0)), (2, w(1.0))]),
        (1, vec![(3, w(1.0))]),
        (2, vec![(1, w(2.0)), (3, w(5.0))]),
        (3, vec![]),
    ])
}

#[test]
fn test_castle_graph_exact_distances() {
    let graph = castle_graph();

    for result in [
        shortest_paths_brute_force(&graph, 0),
        shortest_paths_dijkstra(&graph, 0),
    ] {
        assert_eq!(result.source(), 0);
        assert_eq!(result.len(), 4);
        assert_eq!(result.get(0), Some(w(0.0)));
        assert_eq!(result.get(1), Some(w(3.0)));
        assert_eq!(result.get(2), Some(w(1.0)));
        assert_eq!(result.get(3), Some(w(4.0)));
    }
}

#[test]
fn test_cycle_terminates_with_exact_distances() {
    let graph = AdjacencyGraph::from_entries([
        (0, vec![(1, w(1.0))]),
        (1, vec![(2, w(1.0))]),
        (2, vec![(0, w(1.0))]),
    ]);

    for result in [
        shortest_paths_brute_force(&graph, 0),
        shortest_paths_dijkstra(&graph, 0),
    ] {
        assert_eq!(result.get(0), Some(w(0.0)));
        assert_eq!(result.get(1), Some(w(1.0)));
        assert_eq!(result.get(2), Some(w(2.0)));
    }
}

#[test]
fn test_unreachable_node_is_infinity() {
    let graph =
        AdjacencyGraph::from_entries([(0, vec![(1, w(5.0))]), (1, vec![]), (2, vec![])]);

    for result in [
        shortest_paths_brute_force(&graph, 0),
        shortest_paths_dijkstra(&graph, 0),
    ] {
        assert_eq!(result.get(2), Some(w(f64::INFINITY)));
        assert!(!result.is_reachable(2));
        assert!(result.is_reachable(1));
    }
}

#[test]
fn test_single_node_graph() {
    let graph = AdjacencyGraph::from_entries([(0, vec![])]);

    for result in [
        shortest_paths_brute_force(&graph, 0),
        shortest_paths_dijkstra(&graph, 0),
    ] {
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(0), Some(w(0.0)));
    }
}

#[test]
fn test_neighbor_only_node_appears_in_result() {
    // 7 is never declared as a key, only reached as a target
    let mut graph = AdjacencyGraph::new();
    graph.add_edge(0, 7, w(2.0));

    for result in [
        shortest_paths_brute_force(&graph, 0),
        shortest_paths_dijkstra(&graph, 0),
    ] {
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(7), Some(w(2.0)));
    }
}

#[test]
fn test_undeclared_start_degrades_to_source_only_zero() {
    let graph = AdjacencyGraph::from_entries([(0, vec![(1, w(5.0))])]);

    for result in [
        shortest_paths_brute_force(&graph, 9),
        shortest_paths_dijkstra(&graph, 9),
    ] {
        assert_eq!(result.source(), 9);
        assert_eq!(result.len(), 3);
        assert_eq!(result.get(9), Some(w(0.0)));
        assert!(!result.is_reachable(0));
        assert!(!result.is_reachable(1));
    }
}

#[test]
fn test_self_loop_is_skipped() {
    let graph = AdjacencyGraph::from_entries([(0, vec![(0, w(1.0)), (1, w(2.0))])]);

    for result in [
        shortest_paths_brute_force(&graph, 0),
        shortest_paths_dijkstra(&graph, 0),
    ] {
        assert_eq!(result.get(0), Some(w(0.0)));
        assert_eq!(result.get(1), Some(w(2.0)));
    }
}

#[test]
fn test_sparse_node_ids() {
    // Identifiers are arbitrary, not dense indices
    let graph = AdjacencyGraph::from_entries([
        (100, vec![(2000, w(1.5))]),
        (2000, vec![(30, w(0.5))]),
        (30, vec![]),
    ]);

    for result in [
        shortest_paths_brute_force(&graph, 100),
        shortest_paths_dijkstra(&graph, 100),
    ] {
        assert_eq!(result.get(100), Some(w(0.0)));
        assert_eq!(result.get(2000), Some(w(1.5)));
        assert_eq!(result.get(30), Some(w(2.0)));
    }
}

// Cross-validation: the exhaustive solver and the greedy solver must agree
// on every node of every non-negative graph
#[test]
fn test_solvers_agree_on_random_graphs() {
    for round in 0..20 {
        let graph = generate_random_graph(8, 2.0);
        for start in 0..8 {
            let brute = shortest_paths_brute_force(&graph, start);
            let dijkstra = shortest_paths_dijkstra(&graph, start);
            assert_eq!(
                brute, dijkstra,
                "solvers disagree on round {} from start {}",
                round, start
            );
        }
    }
}

#[test]
fn test_repeated_invocation_is_idempotent() {
    let graph = castle_graph();

    let brute = BruteForce::new();
    assert_eq!(
        brute.shortest_paths(&graph, 0),
        brute.shortest_paths(&graph, 0)
    );

    let dijkstra = Dijkstra::new();
    assert_eq!(
        dijkstra.shortest_paths(&graph, 0),
        dijkstra.shortest_paths(&graph, 0)
    );
}

#[test]
fn test_distance_map_iterates_in_ascending_id_order() {
    let graph = castle_graph();
    let result = shortest_paths_dijkstra(&graph, 0);

    let ids: Vec<_> = result.iter().map(|(node, _)| node).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_solver_metadata_labels() {
    let brute = BruteForce::new();
    let dijkstra = Dijkstra::new();

    assert_eq!(
        <BruteForce as ShortestPathAlgorithm<W, AdjacencyGraph<W>>>::name(&brute),
        "Brute Force (DFS)"
    );
    assert_eq!(
        <BruteForce as ShortestPathAlgorithm<W, AdjacencyGraph<W>>>::complexity(&brute),
        "O(V + E)"
    );
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<W, AdjacencyGraph<W>>>::name(&dijkstra),
        "Dijkstra (Greedy)"
    );
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<W, AdjacencyGraph<W>>>::complexity(&dijkstra),
        "O((V + E) log V)"
    );
}

#[test]
fn test_duplicate_add_edge_updates_weight_in_place() {
    let mut graph = AdjacencyGraph::new();
    assert!(graph.add_edge(0, 1, w(4.0)));
    assert!(graph.add_edge(0, 1, w(2.0)));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(0, 1), Some(w(2.0)));
}

#[test]
fn test_add_edge_rejects_negative_weight() {
    let mut graph: AdjacencyGraph<W> = AdjacencyGraph::new();
    assert!(!graph.add_edge(0, 1, w(-1.0)));

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_validate_non_negative_names_the_edge() {
    let graph = AdjacencyGraph::from_entries([(0, vec![(1, w(-3.0))])]);

    match graph.validate_non_negative() {
        Err(Error::NegativeWeight { from, to }) => assert_eq!((from, to), (0, 1)),
        other => panic!("expected NegativeWeight, got {:?}", other),
    }

    assert!(castle_graph().validate_non_negative().is_ok());
}

#[test]
fn test_graph_queries() {
    let graph = castle_graph();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert!(graph.has_node(2));
    assert!(!graph.has_node(4));
    assert!(graph.has_edge(0, 2));
    assert!(!graph.has_edge(2, 0));
    assert_eq!(graph.get_edge_weight(2, 1), Some(w(2.0)));
    assert_eq!(graph.get_edge_weight(1, 2), None);
    assert_eq!(graph.outgoing_edges(3).count(), 0);
    assert_eq!(graph.outgoing_edges(42).count(), 0);
}
