// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// The fixed tier a node lives in: core purpose, major goals, or foundational practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    #[serde(rename = "layer1")]
    Layer1,
    #[serde(rename = "layer2")]
    Layer2,
    #[serde(rename = "layer3")]
    Layer3,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Layer1, Layer::Layer2, Layer::Layer3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Layer1 => "layer1",
            Self::Layer2 => "layer2",
            Self::Layer3 => "layer3",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Goal,
    Task,
    Constraint,
    Resource,
}

/// Node importance on a `1..=10` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, WeightError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(WeightError { value });
        }
        Ok(Self(value as u8))
    }

    /// Saturating constructor for slider-style input.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<i64> for Weight {
    type Error = WeightError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightError {
    value: i64,
}

impl WeightError {
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node weight {} is outside {}..={}",
            self.value,
            Weight::MIN,
            Weight::MAX
        )
    }
}

impl std::error::Error for WeightError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub layer: Layer,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub weight: Weight,
}

impl NodeData {
    pub fn new(title: impl Into<String>, layer: Layer, kind: NodeKind, weight: Weight) -> Self {
        Self {
            title: title.into(),
            description: None,
            layer,
            kind,
            weight,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn merge(&mut self, patch: &NodeDataPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(layer) = patch.layer {
            self.layer = layer;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
    }
}

/// Partial update for [`NodeData`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDataPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub layer: Option<Layer>,
    pub kind: Option<NodeKind>,
    pub weight: Option<Weight>,
}

impl NodeDataPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.layer.is_none()
            && self.kind.is_none()
            && self.weight.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    position: Position,
    data: NodeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "is_false")]
    selected: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    dragging: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Node {
    pub fn new(id: NodeId, position: Position, data: NodeData) -> Self {
        Self {
            id,
            position,
            data,
            dimensions: None,
            selected: false,
            dragging: false,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn layer(&self) -> Layer {
        self.data.layer
    }

    pub fn apply_patch(&mut self, patch: &NodeDataPatch) {
        self.data.merge(patch);
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: Option<Dimensions>) {
        self.dimensions = dimensions;
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}
