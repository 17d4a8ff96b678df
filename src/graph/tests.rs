// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{Connection, EdgeChange, GraphStore, NodeChange, Selected};
use crate::model::fixtures::{edge, eid, nid, node};
use crate::model::{EdgeKind, EdgePatch, Layer, NodeDataPatch, Weight};

/// a -> b -> c, a -> c
#[fixture]
fn graph() -> GraphStore {
    let mut graph = GraphStore::new();
    graph.initialize_with_data(
        vec![
            node("a", Layer::Layer1),
            node("b", Layer::Layer2),
            node("c", Layer::Layer3),
        ],
        vec![edge("ab", "a", "b"), edge("bc", "b", "c"), edge("ac", "a", "c")],
    );
    graph
}

#[rstest]
fn initialize_with_data_does_not_schedule_sync(graph: GraphStore) {
    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.edges().len(), 3);
    assert!(!graph.is_sync_pending());
}

#[rstest]
#[case::middle("b", &["ac"])]
#[case::source_only("a", &["bc"])]
#[case::target_only("c", &["ab"])]
fn delete_node_cascades_edges_in_both_directions(
    mut graph: GraphStore,
    #[case] victim: &str,
    #[case] surviving_edges: &[&str],
) {
    assert!(graph.delete_node(&nid(victim)));

    assert!(graph.node(&nid(victim)).is_none());
    assert!(graph.edges().iter().all(|e| !e.touches(&nid(victim))));
    let remaining = graph
        .edges()
        .iter()
        .map(|e| e.id().as_str())
        .collect::<Vec<_>>();
    assert_eq!(remaining, surviving_edges);
    assert!(graph.is_sync_pending());
}

#[rstest]
fn delete_node_clears_selection_of_deleted_node(mut graph: GraphStore) {
    graph.set_selected_id(Some("b".to_owned()));
    graph.delete_node(&nid("b"));
    assert_eq!(graph.selected_id(), None);
}

#[rstest]
fn delete_node_keeps_unrelated_selection(mut graph: GraphStore) {
    graph.set_selected_id(Some("ac".to_owned()));
    graph.delete_node(&nid("b"));
    assert_eq!(graph.selected_id(), Some("ac"));
}

#[rstest]
fn delete_unknown_node_is_a_no_op(mut graph: GraphStore) {
    let before = graph.clone();
    assert!(!graph.delete_node(&nid("ghost")));
    assert_eq!(graph, before);
    assert!(!graph.is_sync_pending());
}

#[rstest]
fn connect_without_source_leaves_edges_unchanged(mut graph: GraphStore) {
    let before = graph.edges().to_vec();

    let result = graph.connect(Connection {
        target: Some(nid("b")),
        ..Connection::default()
    });

    assert_eq!(result, None);
    assert_eq!(graph.edges(), before.as_slice());
    assert!(!graph.is_sync_pending());
}

#[rstest]
fn connect_to_unknown_node_is_rejected(mut graph: GraphStore) {
    assert_eq!(graph.connect(Connection::new(nid("a"), nid("ghost"))), None);
    assert_eq!(graph.edges().len(), 3);
}

#[rstest]
fn connect_rejects_duplicate_connection(mut graph: GraphStore) {
    assert_eq!(graph.connect(Connection::new(nid("a"), nid("b"))), None);
    assert_eq!(graph.edges().len(), 3);
}

#[rstest]
fn connect_assigns_id_and_defaults_animation(mut graph: GraphStore) {
    let id = graph
        .connect(Connection::new(nid("c"), nid("a")).with_kind(EdgeKind::ActionToAction))
        .expect("connect");

    let created = graph.edge(&id).expect("edge");
    assert!(!id.as_str().is_empty());
    assert!(created.animated());
    assert_eq!(created.kind(), EdgeKind::ActionToAction);
    assert_eq!(created.source(), &nid("c"));
    assert_eq!(created.target(), &nid("a"));
    assert!(graph.is_sync_pending());
}

#[rstest]
fn connect_keeps_explicit_id_and_animation(mut graph: GraphStore) {
    let id = graph
        .connect(Connection {
            id: Some(eid("ca")),
            animated: Some(false),
            ..Connection::new(nid("c"), nid("a"))
        })
        .expect("connect");

    assert_eq!(id, eid("ca"));
    assert!(!graph.edge(&id).expect("edge").animated());
}

#[rstest]
fn add_node_rejects_duplicate_id(mut graph: GraphStore) {
    assert!(!graph.add_node(node("a", Layer::Layer3)));
    assert_eq!(graph.node(&nid("a")).expect("node").layer(), Layer::Layer1);

    assert!(graph.add_node(node("d", Layer::Layer3)));
    assert_eq!(graph.nodes().last().map(|n| n.id()), Some(&nid("d")));
}

#[rstest]
fn update_node_merges_partial_data(mut graph: GraphStore) {
    let updated = graph.update_node(
        &nid("b"),
        &NodeDataPatch {
            description: Some("two pillars".to_owned()),
            weight: Some(Weight::clamped(9)),
            ..NodeDataPatch::default()
        },
    );

    assert!(updated);
    let data = graph.node(&nid("b")).expect("node").data();
    assert_eq!(data.title, "B");
    assert_eq!(data.description.as_deref(), Some("two pillars"));
    assert_eq!(data.weight.get(), 9);
}

#[rstest]
fn update_unknown_node_is_a_no_op(mut graph: GraphStore) {
    let patch = NodeDataPatch {
        title: Some("x".to_owned()),
        ..NodeDataPatch::default()
    };
    assert!(!graph.update_node(&nid("ghost"), &patch));
    assert!(!graph.is_sync_pending());
}

#[rstest]
fn update_edge_merges_fields_and_validates_endpoints(mut graph: GraphStore) {
    assert!(!graph.update_edge(
        &eid("ab"),
        &EdgePatch {
            target: Some(nid("ghost")),
            ..EdgePatch::default()
        },
    ));
    assert_eq!(graph.edge(&eid("ab")).expect("edge").target(), &nid("b"));

    assert!(graph.update_edge(
        &eid("ab"),
        &EdgePatch {
            kind: Some(EdgeKind::VisionToGoal),
            animated: Some(true),
            ..EdgePatch::default()
        },
    ));
    let updated = graph.edge(&eid("ab")).expect("edge");
    assert_eq!(updated.kind(), EdgeKind::VisionToGoal);
    assert!(updated.animated());
}

#[rstest]
fn delete_edge_removes_only_that_edge(mut graph: GraphStore) {
    assert!(graph.delete_edge(&eid("bc")));
    assert!(!graph.delete_edge(&eid("bc")));
    assert_eq!(graph.edges().len(), 2);
    assert_eq!(graph.nodes().len(), 3);
}

#[rstest]
fn remove_change_cascades_edges(mut graph: GraphStore) {
    graph.apply_node_changes(vec![NodeChange::Remove { id: nid("a") }]);

    assert_eq!(graph.nodes().len(), 2);
    let remaining = graph
        .edges()
        .iter()
        .map(|e| e.id().as_str())
        .collect::<Vec<_>>();
    assert_eq!(remaining, vec!["bc"]);
    assert!(graph.is_sync_pending());
}

#[rstest]
fn edge_remove_change_clears_edge_selection(mut graph: GraphStore) {
    graph.set_selected_id(Some("bc".to_owned()));
    graph.apply_edge_changes(vec![EdgeChange::Remove { id: eid("bc") }]);
    assert_eq!(graph.selected_id(), None);
}

#[rstest]
fn edge_add_change_with_unknown_endpoint_is_dropped(mut graph: GraphStore) {
    graph.apply_edge_changes(vec![
        EdgeChange::Add {
            item: edge("ax", "a", "ghost"),
        },
        EdgeChange::Add {
            item: edge("ca", "c", "a"),
        },
    ]);

    assert!(graph.edge(&eid("ax")).is_none());
    assert!(graph.edge(&eid("ca")).is_some());
}

#[rstest]
fn empty_change_batches_do_not_schedule_sync(mut graph: GraphStore) {
    graph.apply_node_changes(Vec::new());
    graph.apply_edge_changes(Vec::new());
    assert!(!graph.is_sync_pending());
}

#[rstest]
fn selection_resolves_nodes_then_edges(mut graph: GraphStore) {
    graph.set_selected_id(Some("a".to_owned()));
    assert!(matches!(graph.selected(), Some(Selected::Node(n)) if n.id() == &nid("a")));

    graph.set_selected_id(Some("bc".to_owned()));
    assert!(matches!(graph.selected(), Some(Selected::Edge(e)) if e.id() == &eid("bc")));

    graph.set_selected_id(Some("nowhere".to_owned()));
    assert_eq!(graph.selected(), None);

    assert!(!graph.is_sync_pending());
}

#[rstest]
fn take_pending_sync_drains_flag(mut graph: GraphStore) {
    graph.add_node(node("d", Layer::Layer3));
    assert!(graph.take_pending_sync());
    assert!(!graph.take_pending_sync());
}

#[test]
fn persisted_shape_uses_selected_id_key() {
    let mut graph = GraphStore::new();
    graph.add_node(node("a", Layer::Layer1));
    graph.set_selected_id(Some("a".to_owned()));

    let value = serde_json::to_value(&graph).expect("serialize");
    assert_eq!(value["selectedId"], "a");
    assert!(value.get("pendingSync").is_none());

    let back: GraphStore = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back.nodes(), graph.nodes());
    assert!(!back.is_sync_pending());
}
