// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    VisionToGoal,
    GoalToAction,
    ActionToAction,
    #[default]
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    #[serde(rename = "type", default)]
    kind: EdgeKind,
    #[serde(default)]
    animated: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    selected: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, kind: EdgeKind) -> Self {
        Self {
            id,
            source,
            target,
            kind,
            animated: false,
            selected: false,
        }
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// True if either endpoint is `node_id`.
    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }

    pub fn apply_patch(&mut self, patch: &EdgePatch) {
        if let Some(source) = &patch.source {
            self.source = source.clone();
        }
        if let Some(target) = &patch.target {
            self.target = target.clone();
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(animated) = patch.animated {
            self.animated = animated;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgePatch {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    pub kind: Option<EdgeKind>,
    pub animated: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeKind, EdgePatch};
    use crate::model::{EdgeId, NodeId};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn edge_patch_updates_present_fields() {
        let mut edge = Edge::new(
            EdgeId::new("e1").expect("edge id"),
            nid("a"),
            nid("b"),
            EdgeKind::VisionToGoal,
        );

        edge.apply_patch(&EdgePatch {
            kind: Some(EdgeKind::GoalToAction),
            animated: Some(true),
            ..EdgePatch::default()
        });

        assert_eq!(edge.kind(), EdgeKind::GoalToAction);
        assert!(edge.animated());
        assert_eq!(edge.source(), &nid("a"));
        assert_eq!(edge.target(), &nid("b"));
        assert!(edge.touches(&nid("b")));
        assert!(!edge.touches(&nid("c")));
    }

    #[test]
    fn edge_json_defaults_missing_kind_and_animation() {
        let edge: Edge =
            serde_json::from_str(r#"{"id":"e","source":"a","target":"b"}"#).expect("deserialize");
        assert_eq!(edge.kind(), EdgeKind::Default);
        assert!(!edge.animated());

        let edge: Edge = serde_json::from_str(
            r#"{"id":"e","source":"a","target":"b","type":"visionToGoal","animated":true}"#,
        )
        .expect("deserialize");
        assert_eq!(edge.kind(), EdgeKind::VisionToGoal);
        assert!(edge.animated());
    }
}
