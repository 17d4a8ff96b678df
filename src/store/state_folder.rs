// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::app::AppState;
use crate::graph::GraphStore;
use crate::structure::StructureStore;
use crate::timeline::TimelineStore;

pub const GRAPH_FILENAME: &str = "bearing-graph.json";
pub const STRUCTURES_FILENAME: &str = "bearing-structures.json";
pub const TIMELINE_FILENAME: &str = "bearing-timeline.json";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place, without fsync.
    #[default]
    BestEffort,

    /// Also flushes file contents and the rename to stable storage where the platform allows.
    Durable,
}

/// A directory holding one persisted file per store.
#[derive(Debug, Clone)]
pub struct StateFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl StateFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn graph_path(&self) -> PathBuf {
        self.root.join(GRAPH_FILENAME)
    }

    pub fn structures_path(&self) -> PathBuf {
        self.root.join(STRUCTURES_FILENAME)
    }

    pub fn timeline_path(&self) -> PathBuf {
        self.root.join(TIMELINE_FILENAME)
    }

    /// Loads every store. Missing or unparsable files start that store empty; other read
    /// failures are errors.
    pub fn load_state(&self) -> Result<AppState, StoreError> {
        let graph: GraphStore = self.load_json_or_default(&self.graph_path())?;
        let structures: StructureStore = self.load_json_or_default(&self.structures_path())?;
        let timeline = self.load_timeline()?;

        debug!(
            root = ?self.root,
            nodes = graph.nodes().len(),
            structures = structures.structures().len(),
            entries = timeline.entries().len(),
            "state loaded"
        );
        Ok(AppState::from_parts(graph, structures, timeline))
    }

    /// Flushes pending graph edits, then writes every store.
    ///
    /// While a history record is open the graph file receives the current structure's content,
    /// never the record on the canvas. Files are written timeline first and graph last; a failed
    /// save can leave the folder with some stores updated, but never a graph ahead of its
    /// structures.
    pub fn save_state(&self, state: &mut AppState) -> Result<(), StoreError> {
        state.flush_sync();

        let timeline_path = self.timeline_path();
        let timeline = state
            .timeline()
            .export_entries()
            .map_err(|source| StoreError::Json {
                path: timeline_path.clone(),
                source,
            })?;
        self.write(&timeline_path, &timeline)?;

        let structures_path = self.structures_path();
        let structures = to_json(&structures_path, state.structures())?;
        self.write(&structures_path, &structures)?;

        let graph_path = self.graph_path();
        let graph = if state.structures().is_viewing_history() {
            to_json(&graph_path, &current_structure_graph(state))?
        } else {
            to_json(&graph_path, state.graph())?
        };
        self.write(&graph_path, &graph)?;

        debug!(root = ?self.root, "state saved");
        Ok(())
    }

    fn load_timeline(&self) -> Result<TimelineStore, StoreError> {
        let path = self.timeline_path();
        let Some(contents) = read_if_exists(&path)? else {
            return Ok(TimelineStore::default());
        };
        let mut timeline = TimelineStore::default();
        if let Err(err) = timeline.try_import_entries(&contents) {
            warn!(path = ?path, error = %err, "ignoring unreadable timeline file");
        }
        Ok(timeline)
    }

    fn load_json_or_default<T>(&self, path: &Path) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(contents) = read_if_exists(path)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(path = ?path, error = %err, "ignoring unreadable state file");
                Ok(T::default())
            }
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        write_atomic(
            &self.root,
            path,
            format!("{contents}\n").as_bytes(),
            self.durability,
        )
    }
}

/// The canvas as it stands outside view mode: the current structure, or empty without one.
fn current_structure_graph(state: &AppState) -> GraphStore {
    let mut graph = GraphStore::new();
    if let Some(current) = state.structures().current_structure() {
        graph.initialize_with_data(current.nodes().to_vec(), current.edges().to_vec());
    }
    graph
}

fn to_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<String, StoreError> {
    serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_if_exists(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

/// Writes `contents` to `path` through a temp file in the same directory.
fn write_atomic(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(root).map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent or file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".bearing.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = file.write_all(contents) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }

    if durability == WriteDurability::Durable {
        if let Err(source) = file.sync_all() {
            drop(file);
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io {
                path: tmp_path,
                source,
            });
        }
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
