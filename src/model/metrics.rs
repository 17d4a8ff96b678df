// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::edge::Edge;
use super::node::{Layer, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LayerDistribution {
    pub layer1: usize,
    pub layer2: usize,
    pub layer3: usize,
}

impl LayerDistribution {
    pub fn count(&self, layer: Layer) -> usize {
        match layer {
            Layer::Layer1 => self.layer1,
            Layer::Layer2 => self.layer2,
            Layer::Layer3 => self.layer3,
        }
    }
}

/// Summary figures for one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: u32,
    pub layer_distribution: LayerDistribution,
}

impl StructureMetrics {
    pub fn compute(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut metrics = Self {
            node_count: nodes.len(),
            edge_count: edges.len(),
            ..Self::default()
        };

        for node in nodes {
            metrics.total_weight += u32::from(node.data().weight.get());
            match node.layer() {
                Layer::Layer1 => metrics.layer_distribution.layer1 += 1,
                Layer::Layer2 => metrics.layer_distribution.layer2 += 1,
                Layer::Layer3 => metrics.layer_distribution.layer3 += 1,
            }
        }

        metrics
    }
}
