// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Nodes and edges form a three-layer graph; a structure owns one graph; history records are
//! owned copies of a structure; timeline entries index the history records.

pub mod edge;
pub mod example;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod metrics;
pub mod node;
pub mod structure;
pub mod timeline;

pub use edge::{Edge, EdgeKind, EdgePatch};
pub use ids::{EdgeId, EntryId, Id, IdError, NodeId, RecordId, StructureId};
pub use metrics::{LayerDistribution, StructureMetrics};
pub use node::{
    Dimensions, Layer, Node, NodeData, NodeDataPatch, NodeKind, Position, Weight, WeightError,
};
pub use structure::{
    FlowSnapshot, HistoryKind, HistoryRecord, PastJourney, SealedChapter, Structure,
    StructureStatus,
};
pub use timeline::{MarkerKind, TimelineEntry, TimelineMarker};
