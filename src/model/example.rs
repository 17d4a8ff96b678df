// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in example: a three-layer structure for a balanced, healthy life.

use super::edge::{Edge, EdgeKind};
use super::ids::{EdgeId, NodeId};
use super::node::{Layer, Node, NodeData, NodeKind, Position, Weight};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("hard-coded example node id is valid")
}

fn example_node(
    id: &str,
    (x, y): (f64, f64),
    title: &str,
    description: &str,
    layer: Layer,
    kind: NodeKind,
    weight: i64,
) -> Node {
    let data =
        NodeData::new(title, layer, kind, Weight::clamped(weight)).with_description(description);
    Node::new(nid(id), Position::new(x, y), data)
}

fn example_edge(id: &str, source: &str, target: &str, kind: EdgeKind) -> Edge {
    let id = EdgeId::new(id).expect("hard-coded example edge id is valid");
    Edge::new(id, nid(source), nid(target), kind)
}

/// One core purpose, two pillars, six practices.
pub fn life_balance_example() -> (Vec<Node>, Vec<Edge>) {
    use EdgeKind::{GoalToAction, VisionToGoal};
    use Layer::{Layer1, Layer2, Layer3};
    use NodeKind::{Constraint, Goal, Task};

    let nodes = vec![
        example_node(
            "core-purpose",
            (300.0, 30.0),
            "Balanced Healthy Life",
            "Find sustainable balance between work, health, relationships, and growth",
            Layer1,
            Goal,
            10,
        ),
        example_node(
            "physical-health",
            (150.0, 180.0),
            "Physical Health & Vitality",
            "Maintain abundant energy and good physical condition",
            Layer2,
            Task,
            9,
        ),
        example_node(
            "mental-wellbeing",
            (450.0, 180.0),
            "Mental Health & Growth",
            "Cultivate positive mindset and continuous learning ability",
            Layer2,
            Task,
            8,
        ),
        example_node(
            "regular-exercise",
            (50.0, 320.0),
            "Regular Exercise",
            "At least 3 sessions of 30-minute cardio per week",
            Layer3,
            Constraint,
            7,
        ),
        example_node(
            "healthy-diet",
            (240.0, 350.0),
            "Balanced Diet",
            "Consume enough fruits and vegetables daily, control sugar intake",
            Layer3,
            Constraint,
            6,
        ),
        example_node(
            "adequate-sleep",
            (150.0, 500.0),
            "Adequate Sleep",
            "Ensure 7-8 hours of quality sleep every night",
            Layer3,
            Constraint,
            6,
        ),
        example_node(
            "daily-meditation",
            (340.0, 470.0),
            "Daily Meditation",
            "10 minutes of meditation practice daily",
            Layer3,
            Constraint,
            5,
        ),
        example_node(
            "reading-time",
            (570.0, 520.0),
            "Reading Time",
            "30 minutes of book reading daily",
            Layer3,
            Constraint,
            4,
        ),
        example_node(
            "social-connections",
            (450.0, 400.0),
            "Social Connections",
            "Stay in touch with family and friends weekly",
            Layer3,
            Constraint,
            3,
        ),
    ];

    let edges = vec![
        example_edge("e-core-physical", "core-purpose", "physical-health", VisionToGoal),
        example_edge("e-core-mental", "core-purpose", "mental-wellbeing", VisionToGoal),
        example_edge("e-physical-exercise", "physical-health", "regular-exercise", GoalToAction),
        example_edge("e-physical-diet", "physical-health", "healthy-diet", GoalToAction),
        example_edge("e-physical-sleep", "physical-health", "adequate-sleep", GoalToAction),
        example_edge("e-mental-meditation", "mental-wellbeing", "daily-meditation", GoalToAction),
        example_edge("e-mental-reading", "mental-wellbeing", "reading-time", GoalToAction),
        example_edge("e-mental-social", "mental-wellbeing", "social-connections", GoalToAction),
    ];

    (nodes, edges)
}
