// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chronological index over the history collections.
//!
//! Entries only point at records (`action` + `target_structure_id`); resolving them is the job of
//! [`crate::structure::StructureStore::resolve_entry`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::model::{EntryId, HistoryKind, MarkerKind, RecordId, TimelineEntry, TimelineMarker};

pub const EXPORT_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStore {
    #[serde(default)]
    entries: Vec<TimelineEntry>,
    #[serde(default)]
    current_entry_id: Option<EntryId>,
}

/// Serialized form produced by [`TimelineStore::export_entries`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimelineExport<'a> {
    entries: &'a [TimelineEntry],
    current_entry_id: Option<&'a EntryId>,
    export_date: DateTime<Utc>,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineImport {
    entries: Vec<TimelineEntry>,
    #[serde(default)]
    current_entry_id: Option<String>,
}

#[derive(Debug)]
pub enum TimelineImportError {
    Json(serde_json::Error),
    EntriesNotArray,
    InvalidEntries(serde_json::Error),
}

impl fmt::Display for TimelineImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "timeline import is not valid json: {source}"),
            Self::EntriesNotArray => f.write_str("timeline import has no `entries` array"),
            Self::InvalidEntries(source) => write!(f, "timeline import has invalid entries: {source}"),
        }
    }
}

impl std::error::Error for TimelineImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) | Self::InvalidEntries(source) => Some(source),
            Self::EntriesNotArray => None,
        }
    }
}

impl TimelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &EntryId) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn current_entry_id(&self) -> Option<&EntryId> {
        self.current_entry_id.as_ref()
    }

    pub fn record_snapshot(&mut self, target: RecordId, title: impl Into<String>) -> EntryId {
        self.record_snapshot_at(target, title, Utc::now())
    }

    /// Appends a snapshot entry, first dropping any snapshot entry for the same target recorded
    /// on the same UTC day.
    pub fn record_snapshot_at(
        &mut self,
        target: RecordId,
        title: impl Into<String>,
        now: DateTime<Utc>,
    ) -> EntryId {
        let day = now.date_naive();
        let cursor = self.current_entry_id.take();
        self.entries.retain(|entry| {
            !(entry.action() == HistoryKind::Snapshot
                && entry.target_structure_id() == &target
                && entry.day() == day)
        });
        self.current_entry_id = cursor.filter(|id| self.entries.iter().any(|e| e.id() == id));

        self.push(TimelineEntry::new_at(HistoryKind::Snapshot, target, title, now))
    }

    pub fn record_journey(&mut self, target: RecordId, title: impl Into<String>) -> EntryId {
        self.record_journey_at(target, title, Utc::now())
    }

    pub fn record_journey_at(
        &mut self,
        target: RecordId,
        title: impl Into<String>,
        now: DateTime<Utc>,
    ) -> EntryId {
        self.push(TimelineEntry::new_at(HistoryKind::Journey, target, title, now))
    }

    pub fn record_seal_chapter(
        &mut self,
        target: RecordId,
        chapter_title: impl Into<String>,
    ) -> EntryId {
        self.record_seal_chapter_at(target, chapter_title, Utc::now())
    }

    pub fn record_seal_chapter_at(
        &mut self,
        target: RecordId,
        chapter_title: impl Into<String>,
        now: DateTime<Utc>,
    ) -> EntryId {
        self.push(TimelineEntry::new_at(HistoryKind::Chapter, target, chapter_title, now))
    }

    /// Appends and moves the cursor to the new entry.
    fn push(&mut self, entry: TimelineEntry) -> EntryId {
        let id = entry.id().clone();
        self.entries.push(entry);
        self.current_entry_id = Some(id.clone());
        id
    }

    /// Moves the cursor to `id` and returns the entry; unknown ids leave the cursor alone.
    pub fn go_to_entry(&mut self, id: &EntryId) -> Option<&TimelineEntry> {
        let index = self.entries.iter().position(|e| e.id() == id);
        let Some(index) = index else {
            debug!(entry_id = %id, "go_to_entry ignored: unknown entry");
            return None;
        };
        self.current_entry_id = Some(id.clone());
        Some(&self.entries[index])
    }

    pub fn current_entry(&self) -> Option<&TimelineEntry> {
        let id = self.current_entry_id.as_ref()?;
        self.entry(id)
    }

    pub fn delete_entry(&mut self, id: &EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        if self.current_entry_id.as_ref() == Some(id) {
            self.current_entry_id = None;
        }
        self.entries.len() != before
    }

    pub fn clear_all_entries(&mut self) {
        self.entries.clear();
        self.current_entry_id = None;
    }

    pub fn export_entries(&self) -> Result<String, serde_json::Error> {
        self.export_entries_at(Utc::now())
    }

    /// Serializes the whole log plus cursor with a format version tag.
    pub fn export_entries_at(&self, now: DateTime<Utc>) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&TimelineExport {
            entries: &self.entries,
            current_entry_id: self.current_entry_id.as_ref(),
            export_date: now,
            version: EXPORT_FORMAT_VERSION,
        })
    }

    /// Replaces the log with an exported payload. On failure nothing changes.
    pub fn try_import_entries(&mut self, serialized: &str) -> Result<(), TimelineImportError> {
        let value: serde_json::Value =
            serde_json::from_str(serialized).map_err(TimelineImportError::Json)?;
        if !value.get("entries").is_some_and(serde_json::Value::is_array) {
            return Err(TimelineImportError::EntriesNotArray);
        }
        let import: TimelineImport =
            serde_json::from_value(value).map_err(TimelineImportError::InvalidEntries)?;

        self.entries = import.entries;
        self.current_entry_id = import
            .current_entry_id
            .and_then(|raw| EntryId::new(raw).ok());
        Ok(())
    }

    /// Boolean form of [`Self::try_import_entries`]; failures are logged.
    pub fn import_entries(&mut self, serialized: &str) -> bool {
        match self.try_import_entries(serialized) {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "failed to import timeline data");
                false
            }
        }
    }

    /// Projects the entries onto a timeline strip, newest first.
    pub fn markers(&self) -> Vec<TimelineMarker> {
        let mut sorted = self.entries.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        let (Some(newest), Some(oldest)) = (sorted.first(), sorted.last()) else {
            return Vec::new();
        };
        // Imported timestamps may span the whole i64 range.
        let max_time = i128::from(newest.timestamp());
        let min_time = i128::from(oldest.timestamp());
        let range = max_time - min_time;
        let last_index = sorted.len() - 1;

        sorted
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let position = if range > 0 {
                    let offset = i128::from(entry.timestamp()) - min_time;
                    (offset as f64 / range as f64 * 100.0).clamp(0.0, 100.0)
                } else if last_index == 0 {
                    50.0
                } else {
                    index as f64 / last_index as f64 * 100.0
                };

                TimelineMarker {
                    entry_id: entry.id().clone(),
                    date: entry.day().format("%Y-%m-%d").to_string(),
                    position,
                    kind: if index == 0 {
                        MarkerKind::Current
                    } else {
                        MarkerKind::Past
                    },
                    action: entry.action(),
                }
            })
            .collect()
    }
}
