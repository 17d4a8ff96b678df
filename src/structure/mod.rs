// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structure lifecycle and history capture.
//!
//! The store owns the catalog of structures, the current-structure pointer, and three history
//! collections (snapshots, past journeys, sealed chapters). Capture operations deep-copy the
//! current structure and degrade to a logged no-op when there is no current structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::{
    Edge, FlowSnapshot, HistoryKind, HistoryRecord, Node, PastJourney, RecordId, SealedChapter,
    Structure, StructureId, StructureStatus, TimelineEntry,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureStore {
    #[serde(default)]
    structures: Vec<Structure>,
    #[serde(default)]
    snapshots: Vec<FlowSnapshot>,
    #[serde(default)]
    past_journeys: Vec<PastJourney>,
    #[serde(default)]
    sealed_chapters: Vec<SealedChapter>,
    #[serde(default)]
    current_structure_id: Option<StructureId>,
    #[serde(skip)]
    viewing_structure_id: Option<StructureId>,
    #[serde(skip)]
    is_viewing_history: bool,
}

impl StructureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn structure(&self, id: &StructureId) -> Option<&Structure> {
        self.structures.iter().find(|s| s.id() == id)
    }

    pub fn create_structure(&mut self, name: &str) -> &Structure {
        self.create_structure_at(name, Utc::now())
    }

    /// Adds an empty active structure and makes it current. Leaves view mode.
    pub fn create_structure_at(&mut self, name: &str, now: DateTime<Utc>) -> &Structure {
        let structure = Structure::new_at(name, now);
        info!(structure_id = %structure.id(), name = structure.name(), "structure created");

        self.current_structure_id = Some(structure.id().clone());
        self.viewing_structure_id = None;
        self.is_viewing_history = false;

        let index = self.structures.len();
        self.structures.push(structure);
        &self.structures[index]
    }

    pub fn current_structure_id(&self) -> Option<&StructureId> {
        self.current_structure_id.as_ref()
    }

    pub fn has_current_structure(&self) -> bool {
        self.current_structure().is_some()
    }

    pub fn current_structure(&self) -> Option<&Structure> {
        let id = self.current_structure_id.as_ref()?;
        self.structure(id)
    }

    pub fn update_structure(&mut self, id: &StructureId, nodes: &[Node], edges: &[Edge]) -> bool {
        self.update_structure_at(id, nodes, edges, Utc::now())
    }

    /// Overwrites the structure's graph with copies of `nodes`/`edges`.
    pub fn update_structure_at(
        &mut self,
        id: &StructureId,
        nodes: &[Node],
        edges: &[Edge],
        now: DateTime<Utc>,
    ) -> bool {
        let Some(structure) = self.structures.iter_mut().find(|s| s.id() == id) else {
            warn!(structure_id = %id, "update_structure ignored: unknown structure");
            return false;
        };
        structure.replace_graph_at(nodes, edges, now);
        true
    }

    pub fn set_structure_status(&mut self, id: &StructureId, status: StructureStatus) -> bool {
        let Some(structure) = self.structures.iter_mut().find(|s| s.id() == id) else {
            return false;
        };
        structure.set_status(status);
        true
    }

    pub fn save_snapshot(&mut self) -> Option<RecordId> {
        self.save_snapshot_at(Utc::now())
    }

    /// Captures the current structure into the snapshots collection.
    ///
    /// At most one snapshot exists per structure per UTC day: a same-day snapshot is replaced,
    /// and the replacement inherits its record id so timeline entries keep resolving.
    pub fn save_snapshot_at(&mut self, now: DateTime<Utc>) -> Option<RecordId> {
        let Some(current) = self.current_structure() else {
            warn!("save_snapshot ignored: no current structure");
            return None;
        };
        let structure_id = current.id().clone();
        let day = now.date_naive();
        let same_day =
            |snap: &FlowSnapshot| snap.structure().id() == &structure_id && snap.day() == day;

        let record = match self.snapshots.iter().find(|snap| same_day(snap)) {
            Some(previous) => HistoryRecord::capture_with_id_at(previous.id().clone(), current, now),
            None => HistoryRecord::capture_at(current, now),
        };
        self.snapshots.retain(|snap| !same_day(snap));

        let id = record.id().clone();
        info!(record_id = %id, structure_id = %structure_id, "snapshot saved");
        self.snapshots.push(record);
        Some(id)
    }

    pub fn snapshots(&self) -> &[FlowSnapshot] {
        &self.snapshots
    }

    pub fn snapshots_by_structure_id(&self, id: &StructureId) -> Vec<&FlowSnapshot> {
        self.snapshots
            .iter()
            .filter(|snap| snap.structure().id() == id)
            .collect()
    }

    pub fn save_past_journey(&mut self) -> Option<RecordId> {
        self.save_past_journey_at(Utc::now())
    }

    /// Captures the current structure into the past journeys collection. Never deduplicated.
    pub fn save_past_journey_at(&mut self, now: DateTime<Utc>) -> Option<RecordId> {
        let Some(current) = self.current_structure() else {
            warn!("save_past_journey ignored: no current structure");
            return None;
        };
        let record = HistoryRecord::capture_at(current, now);
        let id = record.id().clone();
        info!(record_id = %id, structure_id = %current.id(), "past journey saved");
        self.past_journeys.push(record);
        Some(id)
    }

    pub fn past_journeys(&self) -> &[PastJourney] {
        &self.past_journeys
    }

    pub fn save_sealed_chapter(&mut self) -> Option<RecordId> {
        self.save_sealed_chapter_at(Utc::now())
    }

    /// Captures the current structure into the sealed chapters collection and ends it: the
    /// structure is marked sealed and there is no current structure afterwards.
    pub fn save_sealed_chapter_at(&mut self, now: DateTime<Utc>) -> Option<RecordId> {
        let Some(current) = self.current_structure() else {
            warn!("save_sealed_chapter ignored: no current structure");
            return None;
        };
        let structure_id = current.id().clone();
        let record = HistoryRecord::capture_at(current, now);
        let id = record.id().clone();
        info!(record_id = %id, structure_id = %structure_id, "chapter sealed");

        self.sealed_chapters.push(record);
        self.set_structure_status(&structure_id, StructureStatus::Sealed);
        self.current_structure_id = None;
        Some(id)
    }

    pub fn sealed_chapters(&self) -> &[SealedChapter] {
        &self.sealed_chapters
    }

    pub fn records(&self, kind: HistoryKind) -> &[HistoryRecord] {
        match kind {
            HistoryKind::Snapshot => &self.snapshots,
            HistoryKind::Journey => &self.past_journeys,
            HistoryKind::Chapter => &self.sealed_chapters,
        }
    }

    /// Looks `id` up in the collection for `kind` only.
    pub fn find_record(&self, kind: HistoryKind, id: &RecordId) -> Option<&HistoryRecord> {
        self.records(kind).iter().find(|record| record.id() == id)
    }

    /// Resolves a timeline entry to the record it indexes, dispatching on its action.
    pub fn resolve_entry(&self, entry: &TimelineEntry) -> Option<&HistoryRecord> {
        self.find_record(entry.action(), entry.target_structure_id())
    }

    pub fn is_viewing_history(&self) -> bool {
        self.is_viewing_history
    }

    pub fn viewing_structure_id(&self) -> Option<&StructureId> {
        self.viewing_structure_id.as_ref()
    }

    pub fn enter_view_mode(&mut self, structure_id: StructureId) {
        info!(structure_id = %structure_id, "entering view mode");
        self.viewing_structure_id = Some(structure_id);
        self.is_viewing_history = true;
    }

    pub fn exit_view_mode(&mut self) {
        if self.is_viewing_history {
            info!("leaving view mode");
        }
        self.viewing_structure_id = None;
        self.is_viewing_history = false;
    }
}
