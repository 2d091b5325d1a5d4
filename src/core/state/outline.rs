//! Outline data for a single glyph layer
//!
//! Paths own their nodes in insertion order. Everything that refers to a
//! node (selection entries, hint origins and targets) does so through a
//! [`NodeId`] handle, so nothing in here holds a back-reference.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::editing::selection::state::Selection;

/// How a node participates in its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// On-curve point reached by a straight segment
    Line,
    /// On-curve point reached by a curve segment
    Curve,
    /// Control point (handle)
    #[serde(rename = "offcurve")]
    OffCurve,
}

impl NodeKind {
    pub fn is_on_curve(&self) -> bool {
        !matches!(self, NodeKind::OffCurve)
    }
}

/// A point in a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Point,
    pub kind: NodeKind,
    /// Only meaningful for on-curve nodes
    #[serde(default)]
    pub smooth: bool,
}

impl Node {
    pub fn new(x: f64, y: f64, kind: NodeKind) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
            smooth: false,
        }
    }

    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::Line)
    }

    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::Curve)
    }

    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::OffCurve)
    }

    /// Set the smooth flag. Ignored for handles.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        if self.kind.is_on_curve() {
            self.smooth = smooth;
        }
        self
    }

    /// Smoothness as the classifier sees it: handles are never smooth
    pub fn is_smooth(&self) -> bool {
        self.smooth && self.kind.is_on_curve()
    }
}

/// A contour: an ordered run of nodes, open or closed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<Node>,
    pub closed: bool,
}

impl Path {
    pub fn closed(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            closed: true,
        }
    }

    pub fn open(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            closed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }
}

/// Handle to a node: its path within the layer and its index within the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub path: usize,
    pub index: usize,
}

impl NodeId {
    pub fn new(path: usize, index: usize) -> Self {
        Self { path, index }
    }
}

/// A named attachment point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub name: String,
    pub position: Point,
}

impl Anchor {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Point::new(x, y),
        }
    }

    /// Names starting with an underscore mark mark-attachment anchors
    pub fn is_underscored(&self) -> bool {
        self.name.starts_with('_')
    }

    pub fn is_entry(&self) -> bool {
        self.name.to_lowercase().contains("entry")
    }

    pub fn is_exit(&self) -> bool {
        self.name.to_lowercase().contains("exit")
    }
}

/// Where a guide lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideScope {
    /// Font master guide, shared by every glyph of the master
    Global,
    /// Guide that belongs to this layer only
    Local,
}

impl GuideScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideScope::Global => "global",
            GuideScope::Local => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub position: Point,
    /// Direction of the guide line in degrees
    pub angle: f64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub name: Option<String>,
}

impl Guide {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            position: Point::new(x, y),
            angle,
            locked: false,
            name: None,
        }
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

/// Reference to another glyph placed in this layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub base_glyph: String,
    pub transform: Affine,
    #[serde(default)]
    pub locked: bool,
}

impl Component {
    pub fn new(base_glyph: impl Into<String>) -> Self {
        Self {
            base_glyph: base_glyph.into(),
            transform: Affine::IDENTITY,
            locked: false,
        }
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

/// Type tag of a structural hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Stem,
    Ghost,
    Corner,
    Cap,
    Segment,
    Brush,
}

/// A structural annotation attached to one or two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub kind: HintKind,
    pub origin: Option<NodeId>,
    pub target: Option<NodeId>,
    /// Glyph used by corner, cap, segment and brush hints
    #[serde(default)]
    pub name: Option<String>,
}

impl Hint {
    pub fn new(kind: HintKind, origin: Option<NodeId>, target: Option<NodeId>) -> Self {
        Self {
            kind,
            origin,
            target,
            name: None,
        }
    }

    /// Whether `node` is this hint's origin or target
    pub fn references(&self, node: NodeId) -> bool {
        self.origin == Some(node) || self.target == Some(node)
    }
}

/// Handle to a global or local guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuideId {
    pub scope: GuideScope,
    pub index: usize,
}

/// Anything that can be selected on a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementId {
    Node(NodeId),
    Anchor { index: usize },
    Guide(GuideId),
    Component { index: usize },
    Hint { index: usize },
}

impl ElementId {
    pub fn node(path: usize, index: usize) -> Self {
        ElementId::Node(NodeId::new(path, index))
    }

    pub fn anchor(index: usize) -> Self {
        ElementId::Anchor { index }
    }

    pub fn component(index: usize) -> Self {
        ElementId::Component { index }
    }

    pub fn hint(index: usize) -> Self {
        ElementId::Hint { index }
    }

    pub fn local_guide(index: usize) -> Self {
        ElementId::Guide(GuideId {
            scope: GuideScope::Local,
            index,
        })
    }

    pub fn global_guide(index: usize) -> Self {
        ElementId::Guide(GuideId {
            scope: GuideScope::Global,
            index,
        })
    }

    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            ElementId::Node(id) => Some(*id),
            _ => None,
        }
    }

    /// Parse the textual key produced by `Display`, e.g. `node:0:3` or
    /// `guide:global:1`
    pub fn parse(key: &str) -> Option<Self> {
        let parts: Vec<&str> = key.trim().split(':').collect();
        let index = |s: &str| s.parse::<usize>().ok();
        match parts.as_slice() {
            ["node", path, node] => Some(ElementId::node(index(path)?, index(node)?)),
            ["anchor", i] => Some(ElementId::anchor(index(i)?)),
            ["component", i] => Some(ElementId::component(index(i)?)),
            ["hint", i] => Some(ElementId::hint(index(i)?)),
            ["guide", "local", i] => Some(ElementId::local_guide(index(i)?)),
            ["guide", "global", i] => Some(ElementId::global_guide(index(i)?)),
            _ => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Node(id) => write!(f, "node:{}:{}", id.path, id.index),
            ElementId::Anchor { index } => write!(f, "anchor:{index}"),
            ElementId::Component { index } => write!(f, "component:{index}"),
            ElementId::Hint { index } => write!(f, "hint:{index}"),
            ElementId::Guide(guide) => write!(f, "guide:{}:{}", guide.scope.as_str(), guide.index),
        }
    }
}

impl From<NodeId> for ElementId {
    fn from(id: NodeId) -> Self {
        ElementId::Node(id)
    }
}

/// Master-level data shared by every layer of a master
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMaster {
    pub name: String,
    pub guides: Vec<Guide>,
}

/// The active editing layer of a glyph
///
/// Owns the outline, the live selection and the change bracket that
/// every selection mutation goes through.
#[derive(Debug, Clone, Default)]
pub struct GlyphLayer {
    pub glyph_name: String,
    pub paths: Vec<Path>,
    pub anchors: Vec<Anchor>,
    pub components: Vec<Component>,
    pub guides: Vec<Guide>,
    pub hints: Vec<Hint>,
    pub(crate) selection: Selection,
    change_depth: u32,
    pending_change: bool,
    revision: u64,
}

impl GlyphLayer {
    pub fn new(glyph_name: impl Into<String>) -> Self {
        Self {
            glyph_name: glyph_name.into(),
            ..Default::default()
        }
    }

    pub fn with_paths(mut self, paths: Vec<Path>) -> Self {
        self.paths = paths;
        self
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.paths.get(id.path)?.node(id.index)
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Every node handle in path order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.paths.iter().enumerate().flat_map(|(path_index, path)| {
            (0..path.len()).map(move |index| NodeId::new(path_index, index))
        })
    }

    /// Whether `element` resolves to something on this layer (or its master)
    pub fn contains_element(&self, element: ElementId, master: &FontMaster) -> bool {
        match element {
            ElementId::Node(id) => self.node(id).is_some(),
            ElementId::Anchor { index } => index < self.anchors.len(),
            ElementId::Component { index } => index < self.components.len(),
            ElementId::Hint { index } => index < self.hints.len(),
            ElementId::Guide(GuideId { scope, index }) => match scope {
                GuideScope::Local => index < self.guides.len(),
                GuideScope::Global => index < master.guides.len(),
            },
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, element: impl Into<ElementId>) -> bool {
        self.selection.contains(&element.into())
    }

    /// Number of committed selection changes so far
    ///
    /// Bumps exactly once per outermost change bracket that altered the
    /// selection, which is what observers redraw on.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_changing(&self) -> bool {
        self.change_depth > 0
    }

    /// Open a change bracket. Brackets nest; only the outermost one
    /// publishes a change.
    pub fn begin_changes(&mut self) {
        self.change_depth += 1;
    }

    /// Close a change bracket opened with [`GlyphLayer::begin_changes`]
    pub fn end_changes(&mut self) {
        self.change_depth = self.change_depth.saturating_sub(1);
        if self.change_depth == 0 && self.pending_change {
            self.pending_change = false;
            self.revision += 1;
            tracing::debug!(
                "Selection of '{}' changed (revision {}, {} selected)",
                self.glyph_name,
                self.revision,
                self.selection.len()
            );
        }
    }

    /// Swap in a new selection. Must be called inside a change bracket.
    pub(crate) fn replace_selection(&mut self, selection: Selection) {
        debug_assert!(self.is_changing(), "selection replaced outside a change bracket");
        if selection != self.selection {
            self.selection = selection;
            self.pending_change = true;
        }
    }
}
