//! The live selection: a set of elements that remembers selection order

use serde::{Serialize, Serializer};
use std::collections::HashSet;

use crate::core::state::outline::{ElementId, NodeId};

/// Selected elements in the order they were selected
///
/// Membership is unique. Order only matters to operations that look at
/// the most recently selected elements.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    order: Vec<ElementId>,
    members: HashSet<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.members.contains(element)
    }

    /// Append `element`. Returns false if it was already selected.
    pub fn insert(&mut self, element: ElementId) -> bool {
        if self.members.insert(element) {
            self.order.push(element);
            true
        } else {
            false
        }
    }

    /// Returns false if `element` was not selected
    pub fn remove(&mut self, element: &ElementId) -> bool {
        if self.members.remove(element) {
            self.order.retain(|e| e != element);
            true
        } else {
            false
        }
    }

    /// Keep only the elements for which `keep` returns true, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&ElementId) -> bool) {
        let members = &mut self.members;
        self.order.retain(|element| {
            let kept = keep(element);
            if !kept {
                members.remove(element);
            }
            kept
        });
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ElementId> + '_ {
        self.order.iter()
    }

    pub fn last(&self) -> Option<&ElementId> {
        self.order.last()
    }

    /// Selected nodes, oldest first
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.order.iter().filter_map(ElementId::as_node)
    }

    /// The two most recently selected nodes as `(second_to_last, last)`
    pub fn last_two_nodes(&self) -> Option<(NodeId, NodeId)> {
        let mut recent = self.nodes().rev();
        let last = recent.next()?;
        let origin = recent.next()?;
        Some((origin, last))
    }
}

/// Equality is set equality; order is not compared
impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for Selection {}

impl FromIterator<ElementId> for Selection {
    fn from_iter<T: IntoIterator<Item = ElementId>>(iter: T) -> Self {
        let mut selection = Selection::new();
        for element in iter {
            selection.insert(element);
        }
        selection
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.order.iter().map(ToString::to_string))
    }
}
