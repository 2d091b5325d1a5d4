//! Editing state handed to the selection engine by its caller

pub mod filter_state;
pub mod outline;

pub use filter_state::FilterState;
pub use outline::{
    Anchor, Component, ElementId, FontMaster, GlyphLayer, Guide, GuideId, GuideScope, Hint,
    HintKind, Node, NodeId, NodeKind, Path,
};
