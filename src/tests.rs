#[cfg(test)]
mod support {
    use crate::core::state::outline::{GlyphLayer, Node, Path};

    /// Closed ring of `len` line points
    pub fn ring(len: usize) -> GlyphLayer {
        let nodes = (0..len)
            .map(|i| {
                let angle = i as f64 / len as f64 * std::f64::consts::TAU;
                Node::line(angle.cos() * 100.0, angle.sin() * 100.0)
            })
            .collect();
        GlyphLayer::new("ring").with_paths(vec![Path::closed(nodes)])
    }

    /// An "o" drawn the usual way: smooth points on the four extremes
    pub fn circle() -> GlyphLayer {
        GlyphLayer::new("o").with_paths(vec![Path::closed(vec![
            Node::curve(100.0, 0.0).with_smooth(true),
            Node::off_curve(155.0, 0.0),
            Node::off_curve(200.0, 45.0),
            Node::curve(200.0, 100.0).with_smooth(true),
            Node::off_curve(200.0, 155.0),
            Node::off_curve(155.0, 200.0),
            Node::curve(100.0, 200.0).with_smooth(true),
            Node::off_curve(45.0, 200.0),
            Node::off_curve(0.0, 155.0),
            Node::curve(0.0, 100.0).with_smooth(true),
            Node::off_curve(0.0, 45.0),
            Node::off_curve(45.0, 0.0),
        ])])
    }
}

#[cfg(test)]
mod topology_tests {
    use super::support::ring;
    use crate::core::state::outline::{GlyphLayer, Node, NodeId, Path};
    use crate::editing::selection::topology::{sibling, Direction};

    #[test]
    fn closed_paths_wrap_around() {
        let layer = ring(7);
        for i in 0..7 {
            assert_eq!(
                sibling(&layer, NodeId::new(0, i), Direction::Forward),
                NodeId::new(0, (i + 1) % 7)
            );
            assert_eq!(
                sibling(&layer, NodeId::new(0, (i + 1) % 7), Direction::Backward),
                NodeId::new(0, i)
            );
        }
    }

    #[test]
    fn open_paths_stop_at_their_ends() {
        let layer = GlyphLayer::new("l").with_paths(vec![Path::open(vec![
            Node::line(0.0, 0.0),
            Node::line(0.0, 100.0),
            Node::line(0.0, 200.0),
        ])]);
        let first = NodeId::new(0, 0);
        let last = NodeId::new(0, 2);
        assert_eq!(sibling(&layer, last, Direction::Forward), last);
        assert_eq!(sibling(&layer, first, Direction::Backward), first);
        assert_eq!(sibling(&layer, first, Direction::Forward), NodeId::new(0, 1));
    }
}

#[cfg(test)]
mod extreme_tests {
    use super::support::circle;
    use crate::core::state::outline::{Node, NodeId};
    use crate::editing::selection::classify::is_extreme;

    #[test]
    fn axis_aligned_tangents_are_extreme() {
        let layer = circle();
        for index in [0, 3, 6, 9] {
            assert!(is_extreme(&layer, NodeId::new(0, index)), "node {index}");
        }
    }

    #[test]
    fn any_tilt_breaks_the_extreme() {
        let mut layer = circle();
        layer.paths[0].nodes[1] = Node::off_curve(155.0, 0.5);
        assert!(!is_extreme(&layer, NodeId::new(0, 0)));
        // the other extremes are unaffected
        assert!(is_extreme(&layer, NodeId::new(0, 3)));
    }

    #[test]
    fn unresolvable_nodes_are_not_extreme() {
        let layer = circle();
        assert!(!is_extreme(&layer, NodeId::new(3, 0)));
        assert!(!is_extreme(&layer, NodeId::new(0, 40)));
    }
}

#[cfg(test)]
mod compose_tests {
    use super::support::ring;
    use crate::core::state::outline::ElementId;
    use crate::editing::selection::{compose, BooleanOp, Selection};

    fn nodes(indices: &[usize]) -> Vec<ElementId> {
        indices.iter().map(|&i| ElementId::node(0, i)).collect()
    }

    #[test]
    fn adding_twice_is_adding_once() {
        let mut layer = ring(8);
        compose::apply(&mut layer, &nodes(&[1]), BooleanOp::Add);
        let candidates = nodes(&[2, 3, 5]);
        compose::apply(&mut layer, &candidates, BooleanOp::Add);
        let once = layer.selection().clone();
        let revision = layer.revision();

        let delta = compose::apply(&mut layer, &candidates, BooleanOp::Add);
        assert!(delta.is_empty());
        assert_eq!(layer.selection(), &once);
        assert_eq!(layer.revision(), revision);
    }

    #[test]
    fn subtracting_disjoint_sets_is_a_no_op() {
        let mut layer = ring(8);
        compose::apply(&mut layer, &nodes(&[0, 1]), BooleanOp::Add);
        let before = layer.selection().clone();
        let delta = compose::apply(&mut layer, &nodes(&[4, 5]), BooleanOp::Subtract);
        assert!(delta.is_empty());
        assert_eq!(layer.selection(), &before);
    }

    #[test]
    fn intersect_is_exactly_the_overlap() {
        let cases: [(&[usize], &[usize]); 4] = [
            (&[0, 1, 2], &[1, 2, 3]),
            (&[0, 1, 2], &[]),
            (&[], &[4, 5]),
            (&[3, 6, 7], &[7, 3, 6]),
        ];
        for (current, candidates) in cases {
            let mut layer = ring(8);
            compose::apply(&mut layer, &nodes(current), BooleanOp::Add);
            compose::apply(&mut layer, &nodes(candidates), BooleanOp::Intersect);

            let expected: Selection = nodes(current)
                .into_iter()
                .filter(|element| nodes(candidates).contains(element))
                .collect();
            assert_eq!(layer.selection(), &expected, "{current:?} ∩ {candidates:?}");
        }
    }
}

#[cfg(test)]
mod derivation_tests {
    use super::support::ring;
    use crate::core::state::outline::{ElementId, Hint, HintKind, NodeId};
    use crate::editing::selection::{compose, BooleanOp, Derivation, Selection};

    fn select(layer: &mut crate::core::state::GlyphLayer, indices: &[usize]) {
        let elements: Vec<_> = indices.iter().map(|&i| ElementId::node(0, i)).collect();
        compose::apply(layer, &elements, BooleanOp::Add);
    }

    fn selected_indices(layer: &crate::core::state::GlyphLayer) -> Vec<usize> {
        let mut indices: Vec<_> = layer.selection().nodes().map(|id| id.index).collect();
        indices.sort();
        indices
    }

    #[test]
    fn fill_takes_the_short_way_around() {
        let mut layer = ring(10);
        select(&mut layer, &[8, 2]);
        Derivation::Between.apply(&mut layer).unwrap();
        assert_eq!(selected_indices(&layer), vec![0, 1, 2, 8, 9]);
    }

    #[test]
    fn continue_wraps_past_the_start() {
        let mut layer = ring(6);
        select(&mut layer, &[4, 5]);
        let delta = Derivation::Continue.apply(&mut layer).unwrap();
        assert_eq!(delta.added, 1);
        assert!(layer.is_selected(NodeId::new(0, 0)));
        assert_eq!(layer.selection().last(), Some(&ElementId::node(0, 0)));

        // and keeps the rhythm
        Derivation::Continue.apply(&mut layer).unwrap();
        assert!(layer.is_selected(NodeId::new(0, 1)));
    }

    #[test]
    fn shrink_then_grow_loses_isolated_nodes() {
        let mut layer = ring(12);
        select(&mut layer, &[1, 2, 3, 7]);
        let original = layer.selection().clone();

        Derivation::Shrink.apply(&mut layer).unwrap();
        assert_eq!(selected_indices(&layer), vec![2]);

        Derivation::Grow.apply(&mut layer).unwrap();
        assert_eq!(selected_indices(&layer), vec![1, 2, 3]);
        assert_ne!(layer.selection(), &original);
    }

    #[test]
    fn grow_then_shrink_restores_a_run() {
        let mut layer = ring(12);
        select(&mut layer, &[4, 5, 6]);
        let original: Selection = layer.selection().clone();
        Derivation::Grow.apply(&mut layer).unwrap();
        Derivation::Shrink.apply(&mut layer).unwrap();
        assert_eq!(layer.selection(), &original);
    }

    #[test]
    fn linked_hints_replace_their_nodes() {
        let mut layer = ring(6);
        layer.hints = vec![
            Hint::new(HintKind::Stem, Some(NodeId::new(0, 1)), Some(NodeId::new(0, 4))),
            Hint::new(HintKind::Corner, Some(NodeId::new(0, 5)), None),
        ];
        select(&mut layer, &[1, 2]);

        Derivation::LinkedHints.apply(&mut layer).unwrap();
        assert!(!layer.is_selected(NodeId::new(0, 1)));
        assert!(layer.is_selected(ElementId::hint(0)));
        assert!(!layer.is_selected(ElementId::hint(1)));
        // nothing refers to node 2
        assert!(layer.is_selected(NodeId::new(0, 2)));
    }

    #[test]
    fn every_derivation_publishes_at_most_once() {
        for derivation in Derivation::ALL {
            let mut layer = ring(8);
            select(&mut layer, &[2, 3]);
            let before = layer.revision();
            let _ = derivation.apply(&mut layer);
            assert!(layer.revision() - before <= 1, "{}", derivation.name());
            assert!(!layer.is_changing());
        }
    }
}

#[cfg(test)]
mod ufo_tests {
    use crate::data::ufo;
    use crate::editing::selection::{BooleanOp, Category, SelectionContext};
    use crate::core::state::{ElementId, FilterState, NodeKind};

    fn point(x: f64, y: f64, typ: norad::PointType, smooth: bool) -> norad::ContourPoint {
        norad::ContourPoint::new(x, y, typ, smooth, None, None)
    }

    fn write_test_font(dir: &std::path::Path) -> std::path::PathBuf {
        let mut font = norad::Font::new();
        font.font_info.style_name = Some("Bold".to_string());
        font.font_info.guidelines = Some(vec![norad::Guideline::new(
            norad::Line::Horizontal(500.0),
            None,
            None,
            None,
        )]);

        let mut glyph = norad::Glyph::new("d");
        glyph.contours.push(norad::Contour::new(
            vec![
                point(0.0, 0.0, norad::PointType::Line, false),
                point(0.0, 200.0, norad::PointType::Line, false),
                point(100.0, 200.0, norad::PointType::Line, false),
                point(155.0, 200.0, norad::PointType::OffCurve, false),
                point(200.0, 155.0, norad::PointType::OffCurve, false),
                point(200.0, 100.0, norad::PointType::Curve, true),
                point(200.0, 45.0, norad::PointType::OffCurve, false),
                point(155.0, 0.0, norad::PointType::OffCurve, false),
                point(100.0, 0.0, norad::PointType::Curve, false),
            ],
            None,
        ));
        glyph.guidelines.push(norad::Guideline::new(
            norad::Line::Vertical(100.0),
            None,
            None,
            None,
        ));
        font.default_layer_mut().insert_glyph(glyph);

        let path = dir.join("Test-Bold.ufo");
        font.save(&path).unwrap();
        path
    }

    #[test]
    fn load_editing_session_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_font(dir.path());

        let (master, mut layer) = ufo::load_editing_session(&path, "d", None).unwrap();
        assert_eq!(master.name, "Bold");
        assert_eq!(master.guides.len(), 1);
        assert_eq!(layer.guides.len(), 1);
        assert_eq!(layer.paths.len(), 1);
        assert!(layer.paths[0].closed);
        assert_eq!(layer.paths[0].nodes[3].kind, NodeKind::OffCurve);

        let mut context = SelectionContext::new(&mut layer, &master);
        context
            .select_category(Category::SmoothCurves, &FilterState::new(), BooleanOp::Add)
            .unwrap();
        assert!(layer.is_selected(ElementId::node(0, 5)));
        assert_eq!(layer.selection().len(), 1);
    }

    #[test]
    fn missing_glyphs_and_layers_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_font(dir.path());
        assert!(ufo::load_editing_session(&path, "zz", None).is_err());
        assert!(ufo::load_editing_session(&path, "d", Some("background")).is_err());
        assert!(ufo::load_ufo_from_path(dir.path().join("Nope.ufo")).is_err());
    }
}
