// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use bearing::app::AppState;
use bearing::model::{
    Edge, EdgeId, EdgeKind, Layer, Node, NodeData, NodeId, NodeKind, Position, Weight,
};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn config() -> Criterion {
    let sample_size = env_usize("BENCH_SAMPLE_SIZE", 60).clamp(10, 200);
    let warmup_secs = env_u64("BENCH_WARMUP_SECS", 3).clamp(1, 60);
    let measurement_secs = env_u64("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
}

/// A structure with one purpose, `goals` goals and `practices_per_goal` practices under each.
fn state_with_tree(goals: usize, practices_per_goal: usize) -> AppState {
    let mut state = AppState::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    state.start_new_structure_at("bench", now);

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let purpose = NodeId::new("purpose").unwrap();
    nodes.push(Node::new(
        purpose.clone(),
        Position::new(0.0, 0.0),
        NodeData::new("Purpose", Layer::Layer1, NodeKind::Goal, Weight::clamped(10)),
    ));
    for g in 0..goals {
        let goal = NodeId::new(format!("goal-{g}")).unwrap();
        nodes.push(Node::new(
            goal.clone(),
            Position::new(g as f64 * 200.0, 200.0),
            NodeData::new(format!("Goal {g}"), Layer::Layer2, NodeKind::Goal, Weight::default()),
        ));
        edges.push(Edge::new(
            EdgeId::new(format!("e-purpose-{g}")).unwrap(),
            purpose.clone(),
            goal.clone(),
            EdgeKind::VisionToGoal,
        ));
        for p in 0..practices_per_goal {
            let practice = NodeId::new(format!("practice-{g}-{p}")).unwrap();
            nodes.push(Node::new(
                practice.clone(),
                Position::new(g as f64 * 200.0 + p as f64 * 40.0, 400.0),
                NodeData::new(
                    format!("Practice {g}.{p}"),
                    Layer::Layer3,
                    NodeKind::Task,
                    Weight::clamped(3),
                ),
            ));
            edges.push(Edge::new(
                EdgeId::new(format!("e-{g}-{p}")).unwrap(),
                goal.clone(),
                practice,
                EdgeKind::GoalToAction,
            ));
        }
    }

    for node in nodes {
        state.graph_mut().add_node(node);
    }
    for edge in edges {
        state
            .graph_mut()
            .apply_edge_changes(vec![bearing::graph::EdgeChange::Add { item: edge }]);
    }
    state.flush_sync();
    state
}

// Benchmark identity (keep stable):
// - Group names: `sync.flush`, `sync.snapshot`.
// - Case IDs must remain stable across refactors so results stay comparable.
fn benches_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync.flush");
    for (case, goals, practices) in [("small", 2, 3), ("medium", 10, 10), ("large", 40, 25)] {
        let base = state_with_tree(goals, practices);
        group.bench_function(format!("edit_then_flush_{case}"), |b| {
            b.iter_batched_ref(
                || base.clone(),
                |state| {
                    state.graph_mut().delete_node(&NodeId::new("goal-0").unwrap());
                    black_box(state.flush_sync())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sync.snapshot");
    for (case, goals, practices) in [("small", 2, 3), ("medium", 10, 10), ("large", 40, 25)] {
        let base = state_with_tree(goals, practices);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        group.bench_function(format!("take_snapshot_{case}"), |b| {
            b.iter_batched_ref(
                || base.clone(),
                |state| black_box(state.take_snapshot_at(now)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = config();
    targets = benches_sync
}
criterion_main!(benches);
