use dollar_core::errors::GameError;
use dollar_core::NodeId;
use dollar_graph::{Edge, Graph};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn three_nodes(graph: &mut Graph<bool>) -> (NodeId, NodeId, NodeId) {
    let a = graph.add_node(true, None);
    let b = graph.add_node(true, None);
    let c = graph.add_node(false, None);
    (a, b, c)
}

#[test]
fn duplicate_undirected_edge_is_rejected_in_both_orders() {
    init_logging();
    let mut graph = Graph::undirected();
    let (a, b, _) = three_nodes(&mut graph);

    graph.add_edge(a, b, 0).unwrap();
    let err = graph.add_edge(a, b, 0).unwrap_err();
    assert!(matches!(err, GameError::DuplicateEdge(ref info) if info.code == "duplicate-edge"));
    let err = graph.add_edge(b, a, 5).unwrap_err();
    assert_eq!(err.info().context.get("start"), Some(&b.to_string()));
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.edge_from_nodes(b, a), Some(Edge::new(a, b, 0)));
}

#[test]
fn directed_edges_keep_their_orientation() {
    let mut graph = Graph::directed();
    let (a, b, _) = three_nodes(&mut graph);

    let forward = graph.add_edge(a, b, 1).unwrap();
    assert!(graph.add_edge(a, b, 1).is_err());
    let backward = graph.add_edge(b, a, 2).unwrap();
    assert_ne!(forward, backward);
    assert_eq!(graph.num_edges(), 2);

    assert_eq!(graph.edge_id(a, b), Some(forward));
    assert_eq!(graph.edge_id(b, a), Some(backward));

    assert!(graph.remove_edge(b, a));
    assert!(!graph.remove_edge(b, a));
    assert!(graph.is_adjacent(a, b));
    assert!(!graph.is_adjacent(b, a));
}

#[test]
fn edge_lookup_matches_either_order_when_undirected() {
    let mut graph = Graph::undirected();
    let (a, b, c) = three_nodes(&mut graph);
    let ab = graph.add_edge(a, b, 4).unwrap();
    let bc = graph.add_edge(b, c, 0).unwrap();

    assert_eq!(graph.edge_id(a, b), Some(ab));
    assert_eq!(graph.edge_id(b, a), Some(ab));
    assert_eq!(graph.edge_id(c, b), Some(bc));
    assert_eq!(graph.edge_id(a, c), None);
    assert!(graph.is_adjacent(b, a));
    assert!(!graph.is_adjacent(a, c));
    assert_eq!(graph.edge_from_id(ab), Some(Edge::new(a, b, 4)));
}

#[test]
fn adjacency_follows_directedness() {
    let mut graph = Graph::directed();
    let (a, b, c) = three_nodes(&mut graph);
    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(c, a, 0).unwrap();

    assert_eq!(graph.all_adjacent_to(a), vec![b]);
    assert!(graph.all_adjacent_to(b).is_empty());

    let mut undirected = graph.all_adjacent_to_with(a, false);
    undirected.sort();
    assert_eq!(undirected, vec![b, c]);
}

#[test]
fn adjacency_is_empty_before_edges_exist() {
    let mut graph = Graph::undirected();
    let (a, b, c) = three_nodes(&mut graph);
    for node in [a, b, c] {
        assert!(graph.all_adjacent_to(node).is_empty());
    }

    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(b, c, 0).unwrap();
    graph.add_edge(c, a, 0).unwrap();
    for node in [a, b, c] {
        assert_eq!(graph.all_adjacent_to(node).len(), 2);
    }
}

#[test]
fn removing_node_cascades_to_edges() {
    let mut graph = Graph::undirected();
    let (a, b, c) = three_nodes(&mut graph);
    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(b, c, 0).unwrap();
    graph.add_edge(c, a, 0).unwrap();

    assert!(graph.remove_node(b));
    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(graph.num_edges(), 1);
    assert!(graph.all_edges().iter().all(|edge| !edge.touches(b)));
    assert!(!graph.remove_node(b));
}

#[test]
fn remove_edges_with_node_reports_count_and_keeps_node() {
    let mut graph = Graph::undirected();
    let (a, b, c) = three_nodes(&mut graph);
    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(a, c, 0).unwrap();
    graph.add_edge(b, c, 0).unwrap();

    assert_eq!(graph.remove_edges_with_node(a), 2);
    assert_eq!(graph.remove_edges_with_node(a), 0);
    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_edges(), 1);
}

#[test]
fn bulk_removal_clears_collections() {
    let mut graph = Graph::undirected();
    let (a, b, c) = three_nodes(&mut graph);
    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(b, c, 0).unwrap();

    graph.remove_all_edges();
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.num_nodes(), 3);

    graph.add_edge(a, c, 0).unwrap();
    graph.remove_all_nodes();
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn returned_collections_are_copies() {
    let mut graph = Graph::undirected();
    let (a, b, _) = three_nodes(&mut graph);
    graph.add_edge(a, b, 0).unwrap();

    let mut ids = graph.node_ids();
    ids.clear();
    let mut data = graph.all_node_data();
    data.iter_mut().for_each(|value| *value = !*value);
    let mut edges = graph.all_edges();
    edges[0].weight = 42;
    let mut edge_ids = graph.edge_ids();
    edge_ids.pop();

    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.all_node_data(), vec![true, true, false]);
    assert_eq!(graph.all_edges()[0].weight, 0);
    assert_eq!(graph.edge_ids().len(), 1);
}

#[test]
fn node_lookup_by_value_returns_a_matching_id() {
    let mut graph = Graph::undirected();
    let (a, b, c) = three_nodes(&mut graph);

    let found = graph.node_id_of(&true).unwrap();
    assert!(found == a || found == b);
    assert_eq!(graph.node_id_of(&false), Some(c));

    let mut empty: Graph<bool> = Graph::undirected();
    assert_eq!(empty.node_id_of(&true), None);
    empty.add_node(false, None);
    assert_eq!(empty.node_id_of(&true), None);
}

#[test]
fn display_lists_nodes_and_edges() {
    let mut graph: Graph<i32> = Graph::undirected();
    let a = graph.add_node(7, None);
    let b = graph.add_node(-2, None);
    graph.add_edge(a, b, 3).unwrap();

    let rendered = graph.to_string();
    assert_eq!(rendered, "Nodes[2]: (0: 7) (1: -2)\nEdges[1]: (0, 1: 3)");
}
