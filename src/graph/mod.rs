// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The live graph: the nodes and edges currently on the canvas.
//!
//! Every mutation except [`GraphStore::initialize_with_data`] and selection raises a pending-sync
//! flag. The owning [`crate::app::AppState`] drains that flag and pushes the graph into the current
//! structure. Invalid references are rejected as silent no-ops with a `debug` diagnostic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{
    Edge, EdgeId, EdgeKind, EdgePatch, Node, NodeDataPatch, NodeId, StructureMetrics,
};

pub mod changes;

pub use changes::{apply_edge_changes, apply_node_changes, EdgeChange, NodeChange};

/// A connection request from the canvas. Missing endpoints make the request a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub id: Option<EdgeId>,
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    pub kind: EdgeKind,
    /// Defaults to `true` when unspecified.
    pub animated: Option<bool>,
}

impl Connection {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }
}

/// What the current selection id names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selected<'a> {
    Node(&'a Node),
    Edge(&'a Edge),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStore {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    selected_id: Option<String>,
    #[serde(skip)]
    pending_sync: bool,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id() == id)
    }

    pub fn metrics(&self) -> StructureMetrics {
        StructureMetrics::compute(&self.nodes, &self.edges)
    }

    pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
        if changes.is_empty() {
            return;
        }
        let drops_nodes = changes
            .iter()
            .any(|c| matches!(c, NodeChange::Remove { .. } | NodeChange::Reset { .. }));

        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = apply_node_changes(changes, nodes);

        if drops_nodes {
            self.drop_dangling_edges();
            self.clear_selection_if_gone();
        }
        self.mark_changed();
    }

    /// Applies edge deltas. Added edges whose endpoints are not on the canvas are dropped.
    pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
        if changes.is_empty() {
            return;
        }
        let edges = std::mem::take(&mut self.edges);
        self.edges = apply_edge_changes(changes, edges);
        self.drop_dangling_edges();
        self.clear_selection_if_gone();
        self.mark_changed();
    }

    /// Appends a validated edge and returns its id.
    pub fn connect(&mut self, connection: Connection) -> Option<EdgeId> {
        let (Some(source), Some(target)) = (connection.source, connection.target) else {
            debug!("connect rejected: missing source or target");
            return None;
        };
        if self.node(&source).is_none() || self.node(&target).is_none() {
            debug!(%source, %target, "connect rejected: unknown node");
            return None;
        }
        if self
            .edges
            .iter()
            .any(|e| e.source() == &source && e.target() == &target)
        {
            debug!(%source, %target, "connect rejected: connection already exists");
            return None;
        }

        let id = connection.id.unwrap_or_else(EdgeId::generate);
        if self.edge(&id).is_some() {
            debug!(edge_id = %id, "connect rejected: edge id already in use");
            return None;
        }

        let edge = Edge::new(id.clone(), source, target, connection.kind)
            .with_animated(connection.animated.unwrap_or(true));
        self.edges.push(edge);
        self.mark_changed();
        Some(id)
    }

    /// Appends `node`. A node whose id is already present is rejected.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.node(node.id()).is_some() {
            debug!(node_id = %node.id(), "add_node rejected: id already in use");
            return false;
        }
        self.nodes.push(node);
        self.mark_changed();
        true
    }

    pub fn update_node(&mut self, id: &NodeId, patch: &NodeDataPatch) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id() == id) else {
            debug!(node_id = %id, "update_node ignored: unknown node");
            return false;
        };
        if patch.is_empty() {
            return true;
        }
        node.apply_patch(patch);
        self.mark_changed();
        true
    }

    /// Merges `patch` into the edge. Re-pointing an endpoint at an unknown node is rejected.
    pub fn update_edge(&mut self, id: &EdgeId, patch: &EdgePatch) -> bool {
        let endpoints = [patch.source.as_ref(), patch.target.as_ref()];
        if let Some(missing) = endpoints
            .into_iter()
            .flatten()
            .find(|node_id| self.node(node_id).is_none())
        {
            debug!(edge_id = %id, node_id = %missing, "update_edge rejected: unknown node");
            return false;
        }

        let Some(edge) = self.edges.iter_mut().find(|e| e.id() == id) else {
            debug!(edge_id = %id, "update_edge ignored: unknown edge");
            return false;
        };
        edge.apply_patch(patch);
        self.mark_changed();
        true
    }

    /// Removes the node and every edge that starts or ends at it.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id() != id);
        if self.nodes.len() == before {
            debug!(node_id = %id, "delete_node ignored: unknown node");
            return false;
        }
        self.edges.retain(|e| !e.touches(id));
        self.clear_selection_if_gone();
        self.mark_changed();
        true
    }

    pub fn delete_edge(&mut self, id: &EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id() != id);
        if self.edges.len() == before {
            debug!(edge_id = %id, "delete_edge ignored: unknown edge");
            return false;
        }
        self.clear_selection_if_gone();
        self.mark_changed();
        true
    }

    /// Replaces both collections at once. This is a load, not an edit: it never schedules a
    /// sync, and it drops any sync still pending for the replaced graph.
    pub fn initialize_with_data(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
        self.pending_sync = false;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn set_selected_id(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    /// Resolves the selection id against nodes first, then edges.
    pub fn selected(&self) -> Option<Selected<'_>> {
        let id = self.selected_id.as_deref()?;
        if let Some(node) = self.nodes.iter().find(|n| n.id().as_str() == id) {
            return Some(Selected::Node(node));
        }
        self.edges
            .iter()
            .find(|e| e.id().as_str() == id)
            .map(Selected::Edge)
    }

    pub fn is_sync_pending(&self) -> bool {
        self.pending_sync
    }

    /// Clears and returns the pending-sync flag.
    pub(crate) fn take_pending_sync(&mut self) -> bool {
        std::mem::take(&mut self.pending_sync)
    }

    fn mark_changed(&mut self) {
        self.pending_sync = true;
    }

    fn drop_dangling_edges(&mut self) {
        let node_ids = self.nodes.iter().map(Node::id).collect::<HashSet<_>>();
        self.edges
            .retain(|e| node_ids.contains(e.source()) && node_ids.contains(e.target()));
    }

    fn clear_selection_if_gone(&mut self) {
        if self.selected_id.is_some() && self.selected().is_none() {
            self.selected_id = None;
        }
    }
}

#[cfg(test)]
mod tests;
