//! Phase 1 tests: Graph store, edge input and core types.

use graph_tutor::engine::input::{parse_edge, parse_edge_spec, parse_edge_words, parse_weight};
use graph_tutor::graph::{GraphBuilder, GraphStore};
use graph_tutor::types::{Algorithm, Edge, GraphError, DEFAULT_WEIGHT};

// ==================== Graph Store Tests ====================

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "B", Some(4)).unwrap();

    assert_eq!(graph.neighbors("A"), vec![("B", 4)]);
    assert_eq!(graph.neighbors("B"), vec![("A", 4)]);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_missing_weight_defaults_to_one() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "B", None).unwrap();
    assert_eq!(graph.neighbors("A"), vec![("B", DEFAULT_WEIGHT)]);
    assert_eq!(DEFAULT_WEIGHT, 1);
}

#[test]
fn test_empty_endpoint_rejected_without_mutation() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "B", Some(1)).unwrap();

    let result = graph.add_edge("", "C", Some(2));
    match result.unwrap_err() {
        GraphError::EmptyEndpoint => {}
        e => panic!("Expected EmptyEndpoint error, got {:?}", e),
    }
    assert!(graph.add_edge("C", "", None).is_err());
    assert!(matches!(
        graph.add_edge("   ", "C", None),
        Err(GraphError::EmptyEndpoint)
    ));
    assert!(matches!(
        graph.add_edge("C", "\t", Some(5)),
        Err(GraphError::EmptyEndpoint)
    ));

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains("C"));
    assert!(!graph.contains("   "));

    let built = GraphBuilder::new().edge("A", "B", 1).edge(" ", "B", 2).build();
    assert!(matches!(built, Err(GraphError::EmptyEndpoint)));
}

#[test]
fn test_adjacency_keeps_insertion_order() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "D", Some(3)).unwrap();
    graph.add_edge("A", "B", Some(1)).unwrap();
    graph.add_edge("C", "A", Some(2)).unwrap();

    assert_eq!(graph.neighbors("A"), vec![("D", 3), ("B", 1), ("C", 2)]);
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "B", Some(5)).unwrap();
    graph.add_edge("B", "A", Some(2)).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors("A"), vec![("B", 5), ("B", 2)]);
    assert_eq!(graph.neighbors("B"), vec![("A", 5), ("A", 2)]);
}

#[test]
fn test_self_loop_adds_two_entries() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "A", Some(3)).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors("A"), vec![("A", 3), ("A", 3)]);
}

#[test]
fn test_node_order_and_default_start() {
    let mut graph = GraphStore::new();
    graph.add_edge("C", "A", None).unwrap();
    graph.add_edge("B", "A", None).unwrap();

    assert_eq!(graph.nodes(), &["C", "A", "B"]);
    assert_eq!(graph.sorted_nodes(), vec!["A", "B", "C"]);
    assert_eq!(graph.default_start(), Some("A"));
}

#[test]
fn test_sorted_nodes_are_lexicographic() {
    let graph = GraphBuilder::new()
        .link("10", "9")
        .link("2", "b")
        .link("B", "a")
        .build()
        .unwrap();
    assert_eq!(graph.sorted_nodes(), vec!["10", "2", "9", "B", "a", "b"]);
}

#[test]
fn test_clear_drops_everything() {
    let mut graph = GraphStore::new();
    graph.add_edge("A", "B", Some(1)).unwrap();
    graph.add_edge("B", "C", Some(1)).unwrap();

    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors("A").is_empty());
    assert_eq!(graph.default_start(), None);

    // Usable again after a clear
    graph.add_edge("X", "Y", Some(7)).unwrap();
    assert_eq!(graph.nodes(), &["X", "Y"]);
    assert_eq!(graph.neighbors("X"), vec![("Y", 7)]);
}

#[test]
fn test_unknown_node_has_no_neighbors() {
    let graph = GraphBuilder::new().edge("A", "B", 1).build().unwrap();
    assert!(graph.neighbors("Z").is_empty());
    assert_eq!(graph.index_of("Z"), None);
}

#[test]
fn test_edges_in_insertion_order() {
    let graph = GraphBuilder::new()
        .edges([("A", "B", 4), ("B", "C", 1), ("A", "C", 2)])
        .build()
        .unwrap();
    assert_eq!(
        graph.edges(),
        &[
            Edge::new("A", "B", 4),
            Edge::new("B", "C", 1),
            Edge::new("A", "C", 2),
        ]
    );
}

#[test]
fn test_builder_propagates_errors() {
    let result = GraphBuilder::new().edge("A", "", 1).build();
    assert!(matches!(result, Err(GraphError::EmptyEndpoint)));
}

// ==================== Edge Input Tests ====================

#[test]
fn test_parse_edge_trims_fields() {
    let request = parse_edge("  A ", " B", "  ").unwrap();
    assert_eq!(request.source, "A");
    assert_eq!(request.target, "B");
    assert_eq!(request.weight, 1);
}

#[test]
fn test_parse_edge_blank_endpoint() {
    assert!(matches!(
        parse_edge("   ", "B", "2"),
        Err(GraphError::EmptyEndpoint)
    ));
    assert!(matches!(
        parse_edge("A", "", "2"),
        Err(GraphError::EmptyEndpoint)
    ));
}

#[test]
fn test_parse_weight_values() {
    assert_eq!(parse_weight("7").unwrap(), 7);
    assert_eq!(parse_weight(" -3 ").unwrap(), -3);
    assert_eq!(parse_weight("+5").unwrap(), 5);
    assert_eq!(parse_weight("").unwrap(), 1);
}

#[test]
fn test_parse_weight_rejects_non_integers() {
    for text in ["x", "1.5", "1e3", "4 4"] {
        match parse_weight(text).unwrap_err() {
            GraphError::InvalidWeight(got) => assert_eq!(got, text),
            e => panic!("Expected InvalidWeight error, got {:?}", e),
        }
    }
}

#[test]
fn test_invalid_weight_leaves_store_untouched() {
    let mut graph = GraphStore::new();
    let result = parse_edge("A", "B", "heavy").and_then(|req| req.apply(&mut graph));
    assert!(matches!(result, Err(GraphError::InvalidWeight(_))));
    assert!(graph.is_empty());
}

#[test]
fn test_parse_edge_spec_forms() {
    let request = parse_edge_spec("A,B").unwrap();
    assert_eq!((request.source.as_str(), request.target.as_str()), ("A", "B"));
    assert_eq!(request.weight, 1);

    let request = parse_edge_spec("A, B, 9").unwrap();
    assert_eq!(request.target, "B");
    assert_eq!(request.weight, 9);

    assert!(matches!(
        parse_edge_spec("A"),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
    assert!(matches!(
        parse_edge_spec("A,B,4,5"),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
    assert!(matches!(
        parse_edge_spec("A,,4"),
        Err(GraphError::EmptyEndpoint)
    ));
}

#[test]
fn test_parse_edge_words_forms() {
    let request = parse_edge_words("  A   B ").unwrap();
    assert_eq!(request.weight, 1);

    let request = parse_edge_words("A B 12").unwrap();
    assert_eq!(request.weight, 12);

    assert!(matches!(parse_edge_words(""), Err(GraphError::EmptyEndpoint)));
    assert!(matches!(parse_edge_words("A"), Err(GraphError::EmptyEndpoint)));
    assert!(matches!(
        parse_edge_words("A B 1 2"),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
}

// ==================== Type Tests ====================

#[test]
fn test_algorithm_names() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
    }
    assert_eq!(Algorithm::from_name(" KRUSKAL "), Some(Algorithm::Kruskal));
    assert_eq!(Algorithm::from_name("dijkstra"), None);
    assert!(matches!(
        Algorithm::parse("dijkstra"),
        Err(GraphError::UnknownAlgorithm(_))
    ));
    assert!(Algorithm::Bfs.is_traversal());
    assert!(!Algorithm::Prim.is_traversal());
}

#[test]
fn test_edge_display_and_pairs() {
    let edge = Edge::new("B", "A", 4);
    assert_eq!(edge.to_string(), "(B, A, 4)");
    assert_eq!(edge.unordered_pair(), ("A", "B"));
    assert!(edge.connects("A", "B"));
    assert!(edge.connects("B", "A"));
    assert!(!edge.connects("A", "C"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GraphError::EmptyEndpoint.to_string(),
        "Source and destination cannot be empty"
    );
    assert_eq!(
        GraphError::InvalidWeight("x".to_string()).to_string(),
        "Weight must be an integer, got \"x\""
    );
    assert!(GraphError::InvalidWeight("x".to_string()).is_input_error());
    assert!(!GraphError::NoStartNode.is_input_error());
}
