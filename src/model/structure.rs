// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::ids::{RecordId, StructureId};
use super::metrics::StructureMetrics;
use super::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureStatus {
    #[default]
    Active,
    /// Superseded by a newer structure.
    Archived,
    /// Concluded by sealing a chapter.
    Sealed,
}

/// One complete life structure: a graph plus naming and status metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    id: StructureId,
    /// Milliseconds since the Unix epoch of the last update.
    timestamp: i64,
    created_at: DateTime<Utc>,
    name: String,
    #[serde(default)]
    status: StructureStatus,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Structure {
    /// Creates an empty, active structure. An empty `name` falls back to the creation date.
    pub fn new_at(name: &str, now: DateTime<Utc>) -> Self {
        let name = if name.trim().is_empty() {
            now.format("%Y-%m-%d").to_string()
        } else {
            name.to_owned()
        };

        Self {
            id: StructureId::generate(),
            timestamp: now.timestamp_millis(),
            created_at: now,
            name,
            status: StructureStatus::Active,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &StructureId {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> StructureStatus {
        self.status
    }

    pub fn set_status(&mut self, status: StructureStatus) {
        self.status = status;
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Overwrites the graph with copies of `nodes`/`edges` and marks the structure active.
    pub fn replace_graph_at(&mut self, nodes: &[Node], edges: &[Edge], now: DateTime<Utc>) {
        self.nodes = nodes.to_vec();
        self.edges = edges.to_vec();
        self.timestamp = now.timestamp_millis();
        self.status = StructureStatus::Active;
    }

    pub fn metrics(&self) -> StructureMetrics {
        StructureMetrics::compute(&self.nodes, &self.edges)
    }
}

/// Which history collection a record belongs to; doubles as the timeline entry action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Snapshot,
    Journey,
    Chapter,
}

impl HistoryKind {
    pub const ALL: [HistoryKind; 3] = [
        HistoryKind::Snapshot,
        HistoryKind::Journey,
        HistoryKind::Chapter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Journey => "journey",
            Self::Chapter => "chapter",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped copy of a [`Structure`] held in one of the history collections.
///
/// The captured structure owns its own nodes and edges; later edits to the live structure never
/// reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    id: RecordId,
    timestamp: i64,
    created_at: DateTime<Utc>,
    structure: Structure,
}

pub type FlowSnapshot = HistoryRecord;
pub type PastJourney = HistoryRecord;
pub type SealedChapter = HistoryRecord;

impl HistoryRecord {
    pub fn capture_at(structure: &Structure, now: DateTime<Utc>) -> Self {
        Self::capture_with_id_at(RecordId::generate(), structure, now)
    }

    pub fn capture_with_id_at(id: RecordId, structure: &Structure, now: DateTime<Utc>) -> Self {
        Self {
            id,
            timestamp: now.timestamp_millis(),
            created_at: now,
            structure: structure.clone(),
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// UTC calendar day the record was captured on.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }
}
