//! Entry points for the selection palette
//!
//! The caller hands in the active layer, its master and (for category
//! rows) its own filter state. Each call is one selection change or none.

use tracing::{debug, warn};

use super::compose::{self, BooleanOp};
use super::derive::Derivation;
use super::matchers::{Category, Selector};
use super::transaction::SelectionDelta;
use crate::core::errors::{SelectionError, SelectionResult};
use crate::core::state::filter_state::FilterState;
use crate::core::state::outline::{FontMaster, GlyphLayer};

/// The active layer together with the master its global guides live on
pub struct SelectionContext<'a> {
    pub layer: &'a mut GlyphLayer,
    pub master: &'a FontMaster,
}

impl<'a> SelectionContext<'a> {
    pub fn new(layer: &'a mut GlyphLayer, master: &'a FontMaster) -> Self {
        Self { layer, master }
    }

    /// Apply every element `selector` matches with `op`
    pub fn select(&mut self, selector: Selector, op: BooleanOp) -> SelectionResult<SelectionDelta> {
        let candidates = selector.candidates(self.layer, self.master);
        debug!(
            "{} {} candidates for {:?}",
            op.as_str(),
            candidates.len(),
            selector
        );
        Ok(compose::apply(self.layer, &candidates, op))
    }

    /// Apply `category` with whatever filter the caller's row is on
    pub fn select_category(
        &mut self,
        category: Category,
        filters: &FilterState,
        op: BooleanOp,
    ) -> SelectionResult<SelectionDelta> {
        let selector = filters.selector(category).inspect_err(report)?;
        self.select(selector, op)
    }

    /// Run one of the selection menu commands
    pub fn derive(&mut self, derivation: Derivation) -> SelectionResult<SelectionDelta> {
        derivation
            .apply(self.layer)
            .inspect_err(report)
            .inspect(|delta| {
                debug!(
                    "{}: +{} -{}",
                    derivation.name(),
                    delta.added,
                    delta.removed
                )
            })
    }
}

/// Preconditions are routine; anything else is worth a warning
fn report(error: &SelectionError) {
    if error.is_precondition() {
        debug!("Selection unchanged: {error}");
    } else {
        warn!("Selection unchanged: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Precondition;
    use crate::core::state::outline::{ElementId, Guide, Node, Path};

    fn layer() -> GlyphLayer {
        let mut layer = GlyphLayer::new("n").with_paths(vec![Path::closed(vec![
            Node::line(0.0, 0.0),
            Node::line(0.0, 500.0),
            Node::off_curve(100.0, 550.0),
            Node::off_curve(200.0, 550.0),
            Node::curve(250.0, 450.0).with_smooth(true),
            Node::line(250.0, 0.0),
        ])]);
        layer.guides = vec![Guide::new(0.0, 250.0, 0.0)];
        layer
    }

    #[test]
    fn category_uses_caller_filter() {
        let mut layer = layer();
        let master = FontMaster {
            name: "Bold".into(),
            guides: vec![Guide::new(0.0, 700.0, 0.0)],
        };
        let mut filters = FilterState::new();
        filters.set(Category::Guides, "global").unwrap();

        let mut context = SelectionContext::new(&mut layer, &master);
        context
            .select_category(Category::Guides, &filters, BooleanOp::Add)
            .unwrap();
        assert!(layer.is_selected(ElementId::global_guide(0)));
        assert!(!layer.is_selected(ElementId::local_guide(0)));
    }

    #[test]
    fn stale_filter_leaves_selection_alone() {
        let mut layer = layer();
        let master = FontMaster::default();
        let filters: FilterState = serde_json::from_str(r#"{"handles": "sideways"}"#).unwrap();
        let mut context = SelectionContext::new(&mut layer, &master);
        let result = context.select_category(Category::Handles, &filters, BooleanOp::Add);
        assert!(matches!(result, Err(SelectionError::MissingTopology(_))));
        assert!(layer.selection().is_empty());
        assert_eq!(layer.revision(), 0);
    }

    #[test]
    fn intersect_narrows_a_select_all() {
        let mut layer = layer();
        let master = FontMaster::default();
        let mut context = SelectionContext::new(&mut layer, &master);
        context
            .select(Selector::Handles(Default::default()), BooleanOp::Add)
            .unwrap();
        context
            .select(Selector::SmoothCurves(Default::default()), BooleanOp::Add)
            .unwrap();
        context
            .select(Selector::SmoothCurves(Default::default()), BooleanOp::Intersect)
            .unwrap();
        let selected: Vec<_> = layer.selection().iter().copied().collect();
        assert_eq!(selected, vec![ElementId::node(0, 4)]);
    }

    #[test]
    fn derivation_preconditions_surface_as_errors() {
        let mut layer = layer();
        let master = FontMaster::default();
        let mut context = SelectionContext::new(&mut layer, &master);
        assert_eq!(
            context.derive(Derivation::Between),
            Err(SelectionError::PreconditionUnmet(Precondition::TwoSelectedNodes))
        );
        assert_eq!(
            context.derive(Derivation::UndoLast),
            Err(SelectionError::PreconditionUnmet(Precondition::NonEmptySelection))
        );
        assert_eq!(context.derive(Derivation::Grow), Ok(SelectionDelta::default()));
    }
}
