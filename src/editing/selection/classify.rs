//! Per-node geometric classification
//!
//! Everything here is a pure read of the layer. Nodes that can't be
//! classified (stray handles, isolated points, coincident neighbors)
//! simply fail the test.

use kurbo::Point;

use super::topology::{self, Direction};
use crate::core::state::outline::{GlyphLayer, Node, NodeId, NodeKind};
use crate::geometry::angles::{direction_degrees, is_axis_aligned, same_direction};

/// Three consecutive positions around an on-curve point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentTriple {
    pub prev: Point,
    pub node: Point,
    pub next: Point,
}

impl TangentTriple {
    /// Incoming and outgoing directions in degrees
    pub fn angles(&self) -> Option<(f64, f64)> {
        let incoming = direction_degrees(self.prev, self.node)?;
        let outgoing = direction_degrees(self.node, self.next)?;
        Some((incoming, outgoing))
    }

    /// Straight through and pointing along an axis
    pub fn is_extreme(&self) -> bool {
        self.angles()
            .is_some_and(|(incoming, outgoing)| same_direction(incoming, outgoing) && is_axis_aligned(incoming))
    }
}

fn kind_of(layer: &GlyphLayer, node: NodeId) -> Option<NodeKind> {
    layer.node(node).map(|n| n.kind)
}

/// Whether a real neighbor (not the open-end sentinel) is a handle
pub fn has_adjacent_handle(layer: &GlyphLayer, node: NodeId) -> bool {
    [Direction::Backward, Direction::Forward].into_iter().any(|direction| {
        topology::neighbor_node(layer, node, direction).is_some_and(|n| n.kind == NodeKind::OffCurve)
    })
}

/// The on-curve point a handle belongs to, preferring the one before it
pub fn handle_owner(layer: &GlyphLayer, handle: NodeId) -> Option<NodeId> {
    [Direction::Backward, Direction::Forward].into_iter().find_map(|direction| {
        let other = topology::neighbor(layer, handle, direction)?;
        kind_of(layer, other)?.is_on_curve().then_some(other)
    })
}

/// The triple that defines the tangent at `node`
///
/// On-curve points need at least one neighboring handle and a neighbor on
/// both sides. Handles resolve through the on-curve point they belong to.
pub fn tangent_triple(layer: &GlyphLayer, node: NodeId) -> Option<TangentTriple> {
    let data = layer.node(node)?;
    let center = if data.kind.is_on_curve() {
        if !has_adjacent_handle(layer, node) {
            return None;
        }
        node
    } else {
        handle_owner(layer, node)?
    };

    let prev = topology::neighbor(layer, center, Direction::Backward)?;
    let next = topology::neighbor(layer, center, Direction::Forward)?;
    Some(TangentTriple {
        prev: layer.node(prev)?.position,
        node: layer.node(center)?.position,
        next: layer.node(next)?.position,
    })
}

/// Whether the outline runs straight through `node` along an axis
pub fn is_extreme(layer: &GlyphLayer, node: NodeId) -> bool {
    tangent_triple(layer, node).is_some_and(|triple| triple.is_extreme())
}

/// Smooth-curve class
///
/// Smooth curve points away from open ends, plus every smooth line point.
/// A smooth line at an open end is therefore both smooth and sharp.
pub fn is_smooth_curve(layer: &GlyphLayer, id: NodeId, node: &Node) -> bool {
    node.is_smooth() && (node.kind == NodeKind::Line || !topology::is_open_end(layer, id))
}

/// Sharp-curve class
///
/// Sharp curve points, minus open ends that have no handle next to them,
/// plus sharp lines that touch a handle and smooth points at open ends.
pub fn is_sharp_curve(layer: &GlyphLayer, id: NodeId, node: &Node) -> bool {
    let open_end = topology::is_open_end(layer, id);
    match node.kind {
        NodeKind::Curve if !node.smooth => !open_end || has_adjacent_handle(layer, id),
        NodeKind::Line if !node.smooth => has_adjacent_handle(layer, id),
        NodeKind::Curve | NodeKind::Line => open_end,
        NodeKind::OffCurve => false,
    }
}

/// Line class: line points, except open ends that touch a handle
pub fn is_line(layer: &GlyphLayer, id: NodeId, node: &Node) -> bool {
    node.kind == NodeKind::Line && !(topology::is_open_end(layer, id) && has_adjacent_handle(layer, id))
}

pub fn is_handle(node: &Node) -> bool {
    node.kind == NodeKind::OffCurve
}
