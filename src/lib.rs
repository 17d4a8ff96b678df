// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bearing: state and version management for a three-layer life-structure diagram editor.
//!
//! - [`graph`] owns the live canvas graph.
//! - [`structure`] owns structures and their history (snapshots, past journeys, sealed chapters).
//! - [`timeline`] indexes the history chronologically.
//! - [`app`] ties the three together and keeps the current structure in sync with the canvas.
//! - [`store`] persists the whole state to a folder.

pub mod app;
pub mod graph;
pub mod model;
pub mod store;
pub mod structure;
pub mod timeline;
