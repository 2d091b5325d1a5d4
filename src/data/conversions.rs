//! UFO format conversion utilities
//!
//! Pure data transformation from norad's UFO types into the outline
//! model the selection engine works on.

use kurbo::{Affine, Point};

use crate::core::state::outline::{
    Anchor, Component, FontMaster, GlyphLayer, Guide, Node, NodeKind, Path,
};

impl GlyphLayer {
    /// Build a layer from a norad glyph
    ///
    /// UFO has no structural hints and no lock state, so the layer comes
    /// back without hints and with everything unlocked.
    pub fn from_norad_glyph(norad_glyph: &norad::Glyph) -> Self {
        let mut layer = GlyphLayer::new(norad_glyph.name().to_string());
        layer.paths = norad_glyph.contours.iter().map(Path::from_norad_contour).collect();
        layer.anchors = norad_glyph.anchors.iter().map(Anchor::from_norad_anchor).collect();
        layer.components = norad_glyph
            .components
            .iter()
            .map(Component::from_norad_component)
            .collect();
        layer.guides = norad_glyph
            .guidelines
            .iter()
            .map(Guide::from_norad_guideline)
            .collect();
        layer
    }
}

impl Path {
    pub fn from_norad_contour(norad_contour: &norad::Contour) -> Self {
        let nodes = norad_contour
            .points
            .iter()
            .map(Node::from_norad_point)
            .collect();
        Self {
            nodes,
            closed: norad_contour.is_closed(),
        }
    }
}

impl Node {
    pub fn from_norad_point(norad_point: &norad::ContourPoint) -> Self {
        Node::new(
            norad_point.x,
            norad_point.y,
            NodeKind::from_norad_point_type(&norad_point.typ),
        )
        .with_smooth(norad_point.smooth)
    }
}

impl NodeKind {
    /// `move` starts an open contour with a straight edge; quadratic
    /// on-curve points classify like cubic ones
    pub fn from_norad_point_type(norad_type: &norad::PointType) -> Self {
        match norad_type {
            norad::PointType::Move | norad::PointType::Line => NodeKind::Line,
            norad::PointType::Curve | norad::PointType::QCurve => NodeKind::Curve,
            norad::PointType::OffCurve => NodeKind::OffCurve,
        }
    }
}

impl Anchor {
    pub fn from_norad_anchor(norad_anchor: &norad::Anchor) -> Self {
        Self {
            name: norad_anchor
                .name
                .as_ref()
                .map(|name| name.to_string())
                .unwrap_or_default(),
            position: Point::new(norad_anchor.x, norad_anchor.y),
        }
    }
}

impl Component {
    pub fn from_norad_component(norad_component: &norad::Component) -> Self {
        let t = &norad_component.transform;
        Self {
            base_glyph: norad_component.base.to_string(),
            transform: Affine::new([
                t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
            ]),
            locked: false,
        }
    }
}

impl Guide {
    pub fn from_norad_guideline(guideline: &norad::Guideline) -> Self {
        let (x, y, angle) = match guideline.line {
            norad::Line::Vertical(x) => (x, 0.0, 90.0),
            norad::Line::Horizontal(y) => (0.0, y, 0.0),
            norad::Line::Angle { x, y, degrees } => (x, y, degrees),
        };
        let mut guide = Guide::new(x, y, angle);
        guide.name = guideline.name.as_ref().map(|name| name.to_string());
        guide
    }
}

impl FontMaster {
    /// Master-level data of a UFO: its fontinfo guidelines
    pub fn from_norad_font(font: &norad::Font) -> Self {
        let name = font
            .font_info
            .style_name
            .clone()
            .unwrap_or_else(|| "Regular".to_string());
        let guides = font
            .font_info
            .guidelines
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Guide::from_norad_guideline)
            .collect();
        Self { name, guides }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, typ: norad::PointType, smooth: bool) -> norad::ContourPoint {
        norad::ContourPoint::new(x, y, typ, smooth, None, None)
    }

    #[test]
    fn open_contours_start_with_move() {
        let contour = norad::Contour::new(
            vec![
                point(0.0, 0.0, norad::PointType::Move, false),
                point(0.0, 50.0, norad::PointType::OffCurve, false),
                point(50.0, 100.0, norad::PointType::OffCurve, false),
                point(100.0, 100.0, norad::PointType::Curve, true),
            ],
            None,
        );
        let path = Path::from_norad_contour(&contour);
        assert!(!path.closed);
        let kinds: Vec<_> = path.nodes.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Line, NodeKind::OffCurve, NodeKind::OffCurve, NodeKind::Curve]
        );
        assert!(path.nodes[3].smooth);
    }

    #[test]
    fn quadratic_points_are_curves() {
        let contour = norad::Contour::new(
            vec![
                point(0.0, 0.0, norad::PointType::QCurve, true),
                point(50.0, 50.0, norad::PointType::OffCurve, false),
                point(100.0, 0.0, norad::PointType::Line, false),
            ],
            None,
        );
        let path = Path::from_norad_contour(&contour);
        assert!(path.closed);
        assert_eq!(path.nodes[0].kind, NodeKind::Curve);
        assert!(path.nodes[0].is_smooth());
        assert_eq!(path.nodes[2].kind, NodeKind::Line);
    }

    #[test]
    fn guidelines_become_guides() {
        let vertical = Guide::from_norad_guideline(&norad::Guideline::new(
            norad::Line::Vertical(120.0),
            None,
            None,
            None,
        ));
        assert_eq!(vertical.position, Point::new(120.0, 0.0));
        assert_eq!(vertical.angle, 90.0);

        let angled = Guide::from_norad_guideline(&norad::Guideline::new(
            norad::Line::Angle {
                x: 10.0,
                y: 20.0,
                degrees: 45.0,
            },
            None,
            None,
            None,
        ));
        assert_eq!(angled.position, Point::new(10.0, 20.0));
        assert_eq!(angled.angle, 45.0);
        assert!(!angled.locked);
    }
}
