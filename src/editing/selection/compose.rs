//! Merging a candidate set into the live selection

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::transaction::{SelectionDelta, SelectionTransaction};
use crate::core::state::outline::{ElementId, GlyphLayer};

/// How a candidate set is combined with the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// Union
    #[default]
    Add,
    /// Difference
    Subtract,
    /// Intersection
    Intersect,
}

impl BooleanOp {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" | "union" => Some(BooleanOp::Add),
            "subtract" => Some(BooleanOp::Subtract),
            "intersect" => Some(BooleanOp::Intersect),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOp::Add => "add",
            BooleanOp::Subtract => "subtract",
            BooleanOp::Intersect => "intersect",
        }
    }
}

/// Stage `candidates` into an open transaction
pub fn stage(transaction: &mut SelectionTransaction<'_>, candidates: &[ElementId], op: BooleanOp) {
    match op {
        BooleanOp::Add => {
            for &element in candidates {
                transaction.select(element);
            }
        }
        BooleanOp::Subtract => {
            for &element in candidates {
                transaction.deselect(element);
            }
        }
        BooleanOp::Intersect => {
            let keep: HashSet<ElementId> = candidates.iter().copied().collect();
            transaction.retain(|element| keep.contains(element));
        }
    }
}

/// Apply `candidates` to the layer's selection as one change
pub fn apply(layer: &mut GlyphLayer, candidates: &[ElementId], op: BooleanOp) -> SelectionDelta {
    let mut transaction = SelectionTransaction::begin(layer);
    stage(&mut transaction, candidates, op);
    transaction.commit()
}
