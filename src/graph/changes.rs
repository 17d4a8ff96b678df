// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Incremental deltas emitted by the canvas (drag, resize, select, remove).
//!
//! The apply functions take the old collection by value and hand back the new one. Entries a
//! change does not name are moved through untouched.

use crate::model::{Dimensions, Edge, EdgeId, Node, NodeId, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    Position {
        id: NodeId,
        position: Option<Position>,
        dragging: Option<bool>,
    },
    Dimensions {
        id: NodeId,
        dimensions: Option<Dimensions>,
    },
    Select {
        id: NodeId,
        selected: bool,
    },
    Remove {
        id: NodeId,
    },
    Add {
        item: Node,
    },
    /// Replaces the whole collection with every `Reset` item in the batch.
    Reset {
        item: Node,
    },
}

impl NodeChange {
    fn is_reset(&self) -> bool {
        matches!(self, Self::Reset { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeChange {
    Select { id: EdgeId, selected: bool },
    Remove { id: EdgeId },
    Add { item: Edge },
    Reset { item: Edge },
}

impl EdgeChange {
    fn is_reset(&self) -> bool {
        matches!(self, Self::Reset { .. })
    }
}

pub fn apply_node_changes(changes: Vec<NodeChange>, mut nodes: Vec<Node>) -> Vec<Node> {
    if changes.iter().any(NodeChange::is_reset) {
        return changes
            .into_iter()
            .filter_map(|change| match change {
                NodeChange::Reset { item } => Some(item),
                _ => None,
            })
            .collect();
    }

    for change in changes {
        match change {
            NodeChange::Position {
                id,
                position,
                dragging,
            } => {
                if let Some(node) = nodes.iter_mut().find(|n| n.id() == &id) {
                    if let Some(position) = position {
                        node.set_position(position);
                    }
                    if let Some(dragging) = dragging {
                        node.set_dragging(dragging);
                    }
                }
            }
            NodeChange::Dimensions { id, dimensions } => {
                if let Some(node) = nodes.iter_mut().find(|n| n.id() == &id) {
                    node.set_dimensions(dimensions);
                }
            }
            NodeChange::Select { id, selected } => {
                if let Some(node) = nodes.iter_mut().find(|n| n.id() == &id) {
                    node.set_selected(selected);
                }
            }
            NodeChange::Remove { id } => nodes.retain(|n| n.id() != &id),
            NodeChange::Add { item } => {
                if nodes.iter().all(|n| n.id() != item.id()) {
                    nodes.push(item);
                }
            }
            NodeChange::Reset { .. } => {}
        }
    }

    nodes
}

pub fn apply_edge_changes(changes: Vec<EdgeChange>, mut edges: Vec<Edge>) -> Vec<Edge> {
    if changes.iter().any(EdgeChange::is_reset) {
        return changes
            .into_iter()
            .filter_map(|change| match change {
                EdgeChange::Reset { item } => Some(item),
                _ => None,
            })
            .collect();
    }

    for change in changes {
        match change {
            EdgeChange::Select { id, selected } => {
                if let Some(edge) = edges.iter_mut().find(|e| e.id() == &id) {
                    edge.set_selected(selected);
                }
            }
            EdgeChange::Remove { id } => edges.retain(|e| e.id() != &id),
            EdgeChange::Add { item } => {
                if edges.iter().all(|e| e.id() != item.id()) {
                    edges.push(item);
                }
            }
            EdgeChange::Reset { .. } => {}
        }
    }

    edges
}
