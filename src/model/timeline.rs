// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{EntryId, RecordId};
use super::structure::HistoryKind;

/// One line of the timeline index.
///
/// `target_structure_id` names a record inside the history collection selected by `action`;
/// record ids are not unique across collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    id: EntryId,
    timestamp: i64,
    created_at: DateTime<Utc>,
    action: HistoryKind,
    title: String,
    target_structure_id: RecordId,
}

impl TimelineEntry {
    pub fn new_at(
        action: HistoryKind,
        target_structure_id: RecordId,
        title: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            timestamp: now.timestamp_millis(),
            created_at: now,
            action,
            title: title.into(),
            target_structure_id,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn action(&self) -> HistoryKind {
        self.action
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_structure_id(&self) -> &RecordId {
        &self.target_structure_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Past,
    Current,
}

/// An entry placed on the timeline strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineMarker {
    pub entry_id: EntryId,
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Horizontal placement in percent, `0.0..=100.0`.
    pub position: f64,
    pub kind: MarkerKind,
    pub action: HistoryKind,
}
