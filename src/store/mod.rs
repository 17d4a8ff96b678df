// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence of the whole application state on disk.
//!
//! A state folder holds one JSON file per store. View mode and pending sync are process-local and
//! never written.

pub mod state_folder;

pub use state_folder::{StateFolder, StoreError, WriteDurability};
