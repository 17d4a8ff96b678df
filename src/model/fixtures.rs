// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, TimeZone, Utc};

use super::edge::{Edge, EdgeKind};
use super::ids::{EdgeId, NodeId};
use super::node::{Layer, Node, NodeData, NodeKind, Position, Weight};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

pub(crate) fn node(id: &str, layer: Layer) -> Node {
    let kind = match layer {
        Layer::Layer1 => NodeKind::Goal,
        Layer::Layer2 => NodeKind::Task,
        Layer::Layer3 => NodeKind::Constraint,
    };
    let data = NodeData::new(id.to_uppercase(), layer, kind, Weight::default());
    Node::new(nid(id), Position::default(), data)
}

pub(crate) fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(eid(id), nid(source), nid(target), EdgeKind::Default)
}

/// A fixed UTC instant on 2025-06-01.
pub(crate) fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0).unwrap()
}

/// A fixed UTC instant `days` after 2025-06-01 at noon.
pub(crate) fn day(days: i64) -> DateTime<Utc> {
    at(12, 0) + chrono::Duration::days(days)
}
