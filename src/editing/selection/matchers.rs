//! Category matchers
//!
//! Each palette row is a [`Category`]; the option it currently cycles to is
//! the row's filter. A [`Selector`] pairs the two and knows how to find
//! every matching element on a layer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::classify;
use super::topology::{self, Direction};
use crate::core::errors::{SelectionError, SelectionResult};
use crate::core::state::outline::{
    ElementId, FontMaster, GlyphLayer, GuideScope, HintKind, Node, NodeId, NodeKind,
};

/// A row of the selection palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SmoothCurves,
    SharpCurves,
    Lines,
    Handles,
    Components,
    Anchors,
    Guides,
    Hints,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::SmoothCurves,
        Category::SharpCurves,
        Category::Lines,
        Category::Handles,
        Category::Components,
        Category::Anchors,
        Category::Guides,
        Category::Hints,
    ];

    /// Display name for the palette row
    pub fn name(&self) -> &'static str {
        match self {
            Category::SmoothCurves => "Smooth",
            Category::SharpCurves => "Sharp",
            Category::Lines => "Lines",
            Category::Handles => "Handles",
            Category::Components => "Components",
            Category::Anchors => "Anchors",
            Category::Guides => "Guides",
            Category::Hints => "Corners",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "smooth-curves" | "smooth" => Some(Category::SmoothCurves),
            "sharp-curves" | "sharp" => Some(Category::SharpCurves),
            "lines" => Some(Category::Lines),
            "handles" => Some(Category::Handles),
            "components" => Some(Category::Components),
            "anchors" => Some(Category::Anchors),
            "guides" => Some(Category::Guides),
            "hints" | "corners" => Some(Category::Hints),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SmoothCurves => "smooth-curves",
            Category::SharpCurves => "sharp-curves",
            Category::Lines => "lines",
            Category::Handles => "handles",
            Category::Components => "components",
            Category::Anchors => "anchors",
            Category::Guides => "guides",
            Category::Hints => "hints",
        }
    }

    /// Filter options in cycling order; the first is always `all`
    pub fn filter_keys(&self) -> &'static [&'static str] {
        match self {
            Category::SmoothCurves | Category::SharpCurves | Category::Lines | Category::Handles => {
                &["all", "extremes", "non-extremes"]
            }
            Category::Components => &["all", "locked", "unlocked"],
            Category::Anchors => &["all", "anchors", "underscored-anchors", "entry", "exit"],
            Category::Guides => &["all", "locked", "unlocked", "global", "local"],
            Category::Hints => &["all", "corners", "caps", "segments"],
        }
    }
}

/// Filter for the point categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtremeFilter {
    #[default]
    All,
    Extremes,
    NonExtremes,
}

impl ExtremeFilter {
    fn accepts(&self, layer: &GlyphLayer, node: NodeId) -> bool {
        match self {
            ExtremeFilter::All => true,
            ExtremeFilter::Extremes => classify::is_extreme(layer, node),
            ExtremeFilter::NonExtremes => !classify::is_extreme(layer, node),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockFilter {
    #[default]
    All,
    Locked,
    Unlocked,
}

impl LockFilter {
    fn accepts(&self, locked: bool) -> bool {
        match self {
            LockFilter::All => true,
            LockFilter::Locked => locked,
            LockFilter::Unlocked => !locked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnchorFilter {
    #[default]
    All,
    /// Regular anchors (no leading underscore)
    Anchors,
    /// Mark attachment anchors (leading underscore)
    Underscored,
    /// Cursive entry anchors
    Entry,
    /// Cursive exit anchors
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuideFilter {
    #[default]
    All,
    Locked,
    Unlocked,
    Global,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HintFilter {
    #[default]
    All,
    Corners,
    Caps,
    Segments,
}

impl HintFilter {
    fn accepts(&self, kind: HintKind) -> bool {
        match self {
            HintFilter::All => true,
            HintFilter::Corners => kind == HintKind::Corner,
            HintFilter::Caps => kind == HintKind::Cap,
            HintFilter::Segments => kind == HintKind::Segment,
        }
    }
}

/// A category together with its filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    SmoothCurves(ExtremeFilter),
    SharpCurves(ExtremeFilter),
    Lines(ExtremeFilter),
    Handles(ExtremeFilter),
    Components(LockFilter),
    Anchors(AnchorFilter),
    Guides(GuideFilter),
    Hints(HintFilter),
}

impl Selector {
    /// Look up a filter by its key within `category`
    pub fn new(category: Category, filter_key: &str) -> SelectionResult<Self> {
        let index = category
            .filter_keys()
            .iter()
            .position(|key| *key == filter_key)
            .ok_or_else(|| {
                SelectionError::missing(format!(
                    "filter '{filter_key}' for category '{}'",
                    category.as_str()
                ))
            })?;
        Self::from_index(category, index)
    }

    /// Look up a filter by its position in [`Category::filter_keys`]
    pub fn from_index(category: Category, index: usize) -> SelectionResult<Self> {
        let missing = || {
            SelectionError::missing(format!(
                "filter option {index} for category '{}'",
                category.as_str()
            ))
        };
        let extreme = |index: usize| match index {
            0 => Some(ExtremeFilter::All),
            1 => Some(ExtremeFilter::Extremes),
            2 => Some(ExtremeFilter::NonExtremes),
            _ => None,
        };
        let selector = match category {
            Category::SmoothCurves => extreme(index).map(Selector::SmoothCurves),
            Category::SharpCurves => extreme(index).map(Selector::SharpCurves),
            Category::Lines => extreme(index).map(Selector::Lines),
            Category::Handles => extreme(index).map(Selector::Handles),
            Category::Components => match index {
                0 => Some(LockFilter::All),
                1 => Some(LockFilter::Locked),
                2 => Some(LockFilter::Unlocked),
                _ => None,
            }
            .map(Selector::Components),
            Category::Anchors => match index {
                0 => Some(AnchorFilter::All),
                1 => Some(AnchorFilter::Anchors),
                2 => Some(AnchorFilter::Underscored),
                3 => Some(AnchorFilter::Entry),
                4 => Some(AnchorFilter::Exit),
                _ => None,
            }
            .map(Selector::Anchors),
            Category::Guides => match index {
                0 => Some(GuideFilter::All),
                1 => Some(GuideFilter::Locked),
                2 => Some(GuideFilter::Unlocked),
                3 => Some(GuideFilter::Global),
                4 => Some(GuideFilter::Local),
                _ => None,
            }
            .map(Selector::Guides),
            Category::Hints => match index {
                0 => Some(HintFilter::All),
                1 => Some(HintFilter::Corners),
                2 => Some(HintFilter::Caps),
                3 => Some(HintFilter::Segments),
                _ => None,
            }
            .map(Selector::Hints),
        };
        selector.ok_or_else(missing)
    }

    pub fn category(&self) -> Category {
        match self {
            Selector::SmoothCurves(_) => Category::SmoothCurves,
            Selector::SharpCurves(_) => Category::SharpCurves,
            Selector::Lines(_) => Category::Lines,
            Selector::Handles(_) => Category::Handles,
            Selector::Components(_) => Category::Components,
            Selector::Anchors(_) => Category::Anchors,
            Selector::Guides(_) => Category::Guides,
            Selector::Hints(_) => Category::Hints,
        }
    }

    /// Every element on the layer (and its master) this selector matches
    pub fn candidates(&self, layer: &GlyphLayer, master: &FontMaster) -> Vec<ElementId> {
        match *self {
            Selector::SmoothCurves(filter) => {
                match_nodes(layer, filter, classify::is_smooth_curve)
            }
            Selector::SharpCurves(filter) => match_nodes(layer, filter, classify::is_sharp_curve),
            Selector::Lines(filter) => match_lines(layer, filter),
            Selector::Handles(filter) => match_nodes(layer, filter, |_, _, node| classify::is_handle(node)),
            Selector::Components(filter) => layer
                .components
                .iter()
                .enumerate()
                .filter(|(_, component)| filter.accepts(component.locked))
                .map(|(index, _)| ElementId::component(index))
                .collect(),
            Selector::Anchors(filter) => layer
                .anchors
                .iter()
                .enumerate()
                .filter(|(_, anchor)| match filter {
                    AnchorFilter::All => true,
                    AnchorFilter::Anchors => !anchor.is_underscored(),
                    AnchorFilter::Underscored => anchor.is_underscored(),
                    AnchorFilter::Entry => anchor.is_entry(),
                    AnchorFilter::Exit => anchor.is_exit(),
                })
                .map(|(index, _)| ElementId::anchor(index))
                .collect(),
            Selector::Guides(filter) => match_guides(layer, master, filter),
            Selector::Hints(filter) => layer
                .hints
                .iter()
                .enumerate()
                .filter(|(_, hint)| filter.accepts(hint.kind))
                .map(|(index, _)| ElementId::hint(index))
                .collect(),
        }
    }
}

fn match_nodes(
    layer: &GlyphLayer,
    filter: ExtremeFilter,
    class: impl Fn(&GlyphLayer, NodeId, &Node) -> bool,
) -> Vec<ElementId> {
    layer
        .node_ids()
        .filter(|&id| {
            layer
                .node(id)
                .is_some_and(|node| class(layer, id, node) && filter.accepts(layer, id))
        })
        .map(ElementId::Node)
        .collect()
}

/// Lines bring their straight-segment neighbors along
fn match_lines(layer: &GlyphLayer, filter: ExtremeFilter) -> Vec<ElementId> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    let mut push = |id: NodeId| {
        if seen.insert(id) {
            found.push(ElementId::Node(id));
        }
    };

    for id in layer.node_ids() {
        let Some(node) = layer.node(id) else { continue };
        if !classify::is_line(layer, id, node) || !filter.accepts(layer, id) {
            continue;
        }
        push(id);
        for direction in [Direction::Backward, Direction::Forward] {
            let other = topology::sibling(layer, id, direction);
            if layer.node(other).is_some_and(|n| n.kind != NodeKind::OffCurve) {
                push(other);
            }
        }
    }
    found
}

fn match_guides(layer: &GlyphLayer, master: &FontMaster, filter: GuideFilter) -> Vec<ElementId> {
    let global = master
        .guides
        .iter()
        .enumerate()
        .map(|(index, guide)| (ElementId::global_guide(index), GuideScope::Global, guide.locked));
    let local = layer
        .guides
        .iter()
        .enumerate()
        .map(|(index, guide)| (ElementId::local_guide(index), GuideScope::Local, guide.locked));

    global
        .chain(local)
        .filter(|(_, scope, locked)| match filter {
            GuideFilter::All => true,
            GuideFilter::Locked => *locked,
            GuideFilter::Unlocked => !*locked,
            GuideFilter::Global => *scope == GuideScope::Global,
            GuideFilter::Local => *scope == GuideScope::Local,
        })
        .map(|(element, _, _)| element)
        .collect()
}
