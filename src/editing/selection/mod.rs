//! Selection palette engine
//!
//! Finds outline elements by category or by their relation to what is
//! already selected, and merges them into the layer's selection.

pub mod classify;
pub mod compose;
pub mod derive;
pub mod matchers;
pub mod palette;
pub mod state;
pub mod topology;
pub mod transaction;

// Explicit re-exports for public API
pub use compose::BooleanOp;
pub use derive::Derivation;
pub use matchers::{
    AnchorFilter, Category, ExtremeFilter, GuideFilter, HintFilter, LockFilter, Selector,
};
pub use palette::SelectionContext;
pub use state::Selection;
pub use topology::Direction;
pub use transaction::{SelectionDelta, SelectionTransaction};
