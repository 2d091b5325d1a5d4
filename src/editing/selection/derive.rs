//! Selections derived from the current selection
//!
//! These walk the outline from what is already selected instead of
//! matching a category. Each one has a fixed way of touching the
//! selection, so none of them take a [`BooleanOp`](super::compose::BooleanOp).

use serde::{Deserialize, Serialize};

use super::compose::{self, BooleanOp};
use super::topology::{self, Direction};
use super::transaction::{SelectionDelta, SelectionTransaction};
use crate::core::errors::{Precondition, SelectionError, SelectionResult};
use crate::core::state::outline::{ElementId, GlyphLayer, NodeId};

/// The selection menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Derivation {
    Grow,
    Shrink,
    Continue,
    Between,
    UndoLast,
    LinkedHints,
}

impl Derivation {
    pub const ALL: [Derivation; 6] = [
        Derivation::Grow,
        Derivation::Shrink,
        Derivation::Continue,
        Derivation::Between,
        Derivation::UndoLast,
        Derivation::LinkedHints,
    ];

    /// Menu title
    pub fn name(&self) -> &'static str {
        match self {
            Derivation::Grow => "Grow Selection",
            Derivation::Shrink => "Shrink Selection",
            Derivation::Continue => "Continue Selection",
            Derivation::Between => "Select Between",
            Derivation::UndoLast => "Undo Selection",
            Derivation::LinkedHints => "Select Linked Hints",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grow" => Some(Derivation::Grow),
            "shrink" => Some(Derivation::Shrink),
            "continue" => Some(Derivation::Continue),
            "between" | "fill" => Some(Derivation::Between),
            "undo-last" | "undo" => Some(Derivation::UndoLast),
            "linked-hints" => Some(Derivation::LinkedHints),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Derivation::Grow => "grow",
            Derivation::Shrink => "shrink",
            Derivation::Continue => "continue",
            Derivation::Between => "between",
            Derivation::UndoLast => "undo-last",
            Derivation::LinkedHints => "linked-hints",
        }
    }

    pub fn apply(&self, layer: &mut GlyphLayer) -> SelectionResult<SelectionDelta> {
        match self {
            Derivation::Grow => Ok(grow(layer)),
            Derivation::Shrink => Ok(shrink(layer)),
            Derivation::Continue => continue_selection(layer),
            Derivation::Between => select_between(layer),
            Derivation::UndoLast => undo_last(layer),
            Derivation::LinkedHints => Ok(select_linked_hints(layer)),
        }
    }
}

/// Select every unselected node next to a selected one
pub fn grow(layer: &mut GlyphLayer) -> SelectionDelta {
    let candidates: Vec<ElementId> = layer
        .node_ids()
        .filter(|&id| {
            !layer.is_selected(id)
                && (layer.is_selected(topology::next(layer, id))
                    || layer.is_selected(topology::prev(layer, id)))
        })
        .map(ElementId::Node)
        .collect();
    compose::apply(layer, &candidates, BooleanOp::Add)
}

/// Deselect every selected node at the edge of its run
///
/// Open path ends count as edges: stepping off the path lands back on
/// the node itself, which is never "selected and different".
pub fn shrink(layer: &mut GlyphLayer) -> SelectionDelta {
    let selected_neighbor = |layer: &GlyphLayer, id: NodeId, direction: Direction| {
        topology::neighbor(layer, id, direction).is_some_and(|other| layer.is_selected(other))
    };
    let candidates: Vec<ElementId> = layer
        .node_ids()
        .filter(|&id| {
            layer.is_selected(id)
                && !(selected_neighbor(layer, id, Direction::Forward)
                    && selected_neighbor(layer, id, Direction::Backward))
        })
        .map(ElementId::Node)
        .collect();
    compose::apply(layer, &candidates, BooleanOp::Subtract)
}

/// The last two selected nodes, required to be on one path
fn last_two_on_same_path(layer: &GlyphLayer) -> SelectionResult<(NodeId, NodeId)> {
    let (origin, last) = layer
        .selection()
        .last_two_nodes()
        .ok_or(SelectionError::PreconditionUnmet(Precondition::TwoSelectedNodes))?;
    if origin.path != last.path {
        return Err(SelectionError::PreconditionUnmet(Precondition::SamePath));
    }
    if layer.node(origin).is_none() || layer.node(last).is_none() {
        return Err(SelectionError::missing(format!(
            "selected node {} or {} on '{}'",
            ElementId::Node(origin),
            ElementId::Node(last),
            layer.glyph_name
        )));
    }
    Ok((origin, last))
}

/// Forward distance from `origin` to `last`, wrapping past the path end
pub fn rhythm(origin: NodeId, last: NodeId, path_len: usize) -> usize {
    if last.index > origin.index {
        last.index - origin.index
    } else {
        (path_len - origin.index) + last.index
    }
}

/// Repeat the step between the last two selected nodes once more
pub fn continue_selection(layer: &mut GlyphLayer) -> SelectionResult<SelectionDelta> {
    let (origin, last) = last_two_on_same_path(layer)?;
    let path_len = layer.path(last.path).map_or(0, |path| path.len());
    let step = rhythm(origin, last, path_len);
    let target = topology::advance(layer, last, step);
    tracing::debug!(
        "Continuing selection from {} by {} to {}",
        ElementId::Node(last),
        step,
        ElementId::Node(target)
    );
    Ok(compose::apply(layer, &[ElementId::Node(target)], BooleanOp::Add))
}

/// Node indices between `a` and `b` on a path, taking the shorter way
/// around closed paths
///
/// The run is half-open: it starts at the lower index and stops before
/// the higher one, or on the wrapping side covers everything outside
/// that range.
pub fn between_indices(a: usize, b: usize, path_len: usize, closed: bool) -> Vec<usize> {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let direct = high - low;
    let wrap = low + path_len - high;
    if !closed || direct <= wrap {
        (low..high).collect()
    } else {
        (0..low).chain(high..path_len).collect()
    }
}

/// Select the run of nodes between the last two selected nodes
pub fn select_between(layer: &mut GlyphLayer) -> SelectionResult<SelectionDelta> {
    let (origin, last) = last_two_on_same_path(layer)?;
    let (path_len, closed) = layer
        .path(last.path)
        .map_or((0, false), |path| (path.len(), path.closed));
    let candidates: Vec<ElementId> = between_indices(origin.index, last.index, path_len, closed)
        .into_iter()
        .map(|index| ElementId::node(last.path, index))
        .collect();
    Ok(compose::apply(layer, &candidates, BooleanOp::Add))
}

/// Deselect the most recently selected element
pub fn undo_last(layer: &mut GlyphLayer) -> SelectionResult<SelectionDelta> {
    let last = *layer
        .selection()
        .last()
        .ok_or(SelectionError::PreconditionUnmet(Precondition::NonEmptySelection))?;
    Ok(compose::apply(layer, &[last], BooleanOp::Subtract))
}

/// Swap selected nodes for the hints that start or end on them
///
/// Nodes no hint refers to stay selected.
pub fn select_linked_hints(layer: &mut GlyphLayer) -> SelectionDelta {
    let mut swaps: Vec<(ElementId, ElementId)> = Vec::new();
    for element in layer.selection().iter() {
        let Some(node) = element.as_node() else { continue };
        for (index, hint) in layer.hints.iter().enumerate() {
            if hint.references(node) {
                swaps.push((*element, ElementId::hint(index)));
            }
        }
    }

    let mut transaction = SelectionTransaction::begin(layer);
    for (node, hint) in swaps {
        transaction.deselect(node);
        transaction.select(hint);
    }
    transaction.commit()
}
