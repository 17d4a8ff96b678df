// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application state: the three stores plus the sync between the live graph and the current
//! structure.
//!
//! Graph edits only raise a dirty flag on the [`GraphStore`]. The flag is drained by
//! [`AppState::flush_sync`], which every consistency-sensitive read goes through:
//! [`AppState::structures_mut`], the lifecycle actions, and persistence. While a history record is
//! on screen the flush discards the edit instead of writing it into the current structure.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::graph::GraphStore;
use crate::model::example::life_balance_example;
use crate::model::{EntryId, HistoryKind, RecordId, StructureId, StructureStatus};
use crate::structure::StructureStore;
use crate::timeline::TimelineStore;

/// Name given to the structure seeded from the built-in example.
pub const EXAMPLE_STRUCTURE_NAME: &str = "Balanced Healthy Life";

/// Result of draining the graph's pending-sync flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing was pending.
    Clean,
    /// The live graph was written into the current structure.
    Synced,
    /// A history record is on screen; the pending edit was dropped.
    SuppressedViewingHistory,
    /// There is no current structure to write into; the pending edit was dropped.
    NoCurrentStructure,
}

/// Where [`AppState::bootstrap`] took the live graph from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapSource {
    CurrentStructure,
    Example,
}

/// Ids produced by a lifecycle action that captured a history record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub record_id: RecordId,
    pub entry_id: EntryId,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    graph: GraphStore,
    structures: StructureStore,
    timeline: TimelineStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(graph: GraphStore, structures: StructureStore, timeline: TimelineStore) -> Self {
        Self {
            graph,
            structures,
            timeline,
        }
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Edits made through this handle reach the current structure on the next flush.
    pub fn graph_mut(&mut self) -> &mut GraphStore {
        &mut self.graph
    }

    /// Read-only view. May lag behind the live graph until the next flush.
    pub fn structures(&self) -> &StructureStore {
        &self.structures
    }

    /// Flushes pending graph edits, then hands out the structure store.
    pub fn structures_mut(&mut self) -> &mut StructureStore {
        self.flush_sync();
        &mut self.structures
    }

    pub fn timeline(&self) -> &TimelineStore {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut TimelineStore {
        &mut self.timeline
    }

    pub fn flush_sync(&mut self) -> SyncOutcome {
        self.flush_sync_at(Utc::now())
    }

    fn flush_sync_at(&mut self, now: DateTime<Utc>) -> SyncOutcome {
        if !self.graph.take_pending_sync() {
            return SyncOutcome::Clean;
        }
        if self.structures.is_viewing_history() {
            debug!("sync suppressed: viewing history");
            return SyncOutcome::SuppressedViewingHistory;
        }
        let Some(id) = self.structures.current_structure_id().cloned() else {
            debug!("sync skipped: no current structure");
            return SyncOutcome::NoCurrentStructure;
        };
        self.structures
            .update_structure_at(&id, self.graph.nodes(), self.graph.edges(), now);
        SyncOutcome::Synced
    }

    pub fn bootstrap(&mut self) -> BootstrapSource {
        self.bootstrap_at(Utc::now())
    }

    /// Loads the current structure into the live graph. Without one, seeds a new structure from
    /// the built-in example.
    pub fn bootstrap_at(&mut self, now: DateTime<Utc>) -> BootstrapSource {
        if let Some(current) = self.structures.current_structure() {
            let (nodes, edges) = (current.nodes().to_vec(), current.edges().to_vec());
            self.graph.initialize_with_data(nodes, edges);
            self.graph.set_selected_id(None);
            return BootstrapSource::CurrentStructure;
        }

        let (nodes, edges) = life_balance_example();
        let id = self
            .structures
            .create_structure_at(EXAMPLE_STRUCTURE_NAME, now)
            .id()
            .clone();
        self.structures.update_structure_at(&id, &nodes, &edges, now);
        self.graph.initialize_with_data(nodes, edges);
        self.graph.set_selected_id(None);
        BootstrapSource::Example
    }

    pub fn take_snapshot(&mut self) -> Option<Recorded> {
        self.take_snapshot_at(Utc::now())
    }

    /// Snapshots the current structure and indexes it on the timeline.
    pub fn take_snapshot_at(&mut self, now: DateTime<Utc>) -> Option<Recorded> {
        self.flush_sync_at(now);
        let record_id = self.structures.save_snapshot_at(now)?;
        let title = format!("Snapshot ({})", now.format("%Y-%m-%d"));
        let entry_id = self.timeline.record_snapshot_at(record_id.clone(), title, now);
        Some(Recorded {
            record_id,
            entry_id,
        })
    }

    pub fn start_new_structure(&mut self, name: &str) -> StructureId {
        self.start_new_structure_at(name, Utc::now())
    }

    /// Retires the current structure as a past journey and starts an empty one.
    ///
    /// Without a current structure this only creates the new one.
    pub fn start_new_structure_at(&mut self, name: &str, now: DateTime<Utc>) -> StructureId {
        self.flush_sync_at(now);
        self.structures.exit_view_mode();

        if let Some(previous) = self.structures.current_structure() {
            let previous_id = previous.id().clone();
            let title = format!("Journey: {}", previous.name());
            if let Some(record_id) = self.structures.save_past_journey_at(now) {
                self.timeline.record_journey_at(record_id, title, now);
            }
            self.structures
                .set_structure_status(&previous_id, StructureStatus::Archived);
        }

        let id = self.structures.create_structure_at(name, now).id().clone();
        self.graph.initialize_with_data(Vec::new(), Vec::new());
        self.graph.set_selected_id(None);
        id
    }

    pub fn seal_chapter(&mut self, title: &str) -> Option<Recorded> {
        self.seal_chapter_at(title, Utc::now())
    }

    /// Seals the current structure. The live graph keeps showing it, but edits no longer sync
    /// anywhere until a new structure is started.
    pub fn seal_chapter_at(&mut self, title: &str, now: DateTime<Utc>) -> Option<Recorded> {
        self.flush_sync_at(now);
        let record_id = self.structures.save_sealed_chapter_at(now)?;
        let entry_id = self
            .timeline
            .record_seal_chapter_at(record_id.clone(), format!("Seal Chapter: {title}"), now);
        Some(Recorded {
            record_id,
            entry_id,
        })
    }

    /// Moves the timeline cursor to `id` and shows the record it points at.
    pub fn open_entry(&mut self, id: &EntryId) -> bool {
        let Some(entry) = self.timeline.go_to_entry(id) else {
            return false;
        };
        let (kind, record_id) = (entry.action(), entry.target_structure_id().clone());
        self.open_record(kind, &record_id)
    }

    /// Shows a history record in the live graph and enters view mode. Stale ids are a no-op.
    pub fn open_record(&mut self, kind: HistoryKind, id: &RecordId) -> bool {
        self.flush_sync();
        let Some(record) = self.structures.find_record(kind, id) else {
            debug!(%kind, record_id = %id, "open_record ignored: no such record");
            return false;
        };
        let structure = record.structure();
        let structure_id = structure.id().clone();
        let (nodes, edges) = (structure.nodes().to_vec(), structure.edges().to_vec());

        self.structures.enter_view_mode(structure_id);
        self.graph.initialize_with_data(nodes, edges);
        self.graph.set_selected_id(None);
        true
    }

    /// Leaves view mode and reloads the current structure, dropping edits made while browsing.
    pub fn return_to_current(&mut self) {
        self.flush_sync();
        self.structures.exit_view_mode();

        let (nodes, edges) = match self.structures.current_structure() {
            Some(current) => (current.nodes().to_vec(), current.edges().to_vec()),
            None => (Vec::new(), Vec::new()),
        };
        info!(nodes = nodes.len(), edges = edges.len(), "returned to current structure");
        self.graph.initialize_with_data(nodes, edges);
        self.graph.set_selected_id(None);
    }
}

/// A populated state for demos: the example structure with one snapshot on the timeline.
pub fn demo_state() -> AppState {
    let mut state = AppState::new();
    state.bootstrap();
    state.take_snapshot();
    state
}
