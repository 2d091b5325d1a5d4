//! Error types for selection operations

use std::fmt;
use thiserror::Error;

/// What a derivation needed but didn't find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Continue and Select Between look at the last two selected nodes
    TwoSelectedNodes,
    /// The last two selected nodes must share a path
    SamePath,
    /// Undo needs something to deselect
    NonEmptySelection,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Precondition::TwoSelectedNodes => "at least two selected nodes",
            Precondition::SamePath => "the last two selected nodes on the same path",
            Precondition::NonEmptySelection => "a non-empty selection",
        };
        f.write_str(text)
    }
}

/// Why a selection operation left the selection untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("precondition not met: requires {0}")]
    PreconditionUnmet(Precondition),

    /// A lookup (category or filter key, filter index, element handle)
    /// found nothing
    #[error("not found: {0}")]
    MissingTopology(String),
}

impl SelectionError {
    pub fn missing(what: impl Into<String>) -> Self {
        SelectionError::MissingTopology(what.into())
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, SelectionError::PreconditionUnmet(_))
    }
}

pub type SelectionResult<T> = Result<T, SelectionError>;
