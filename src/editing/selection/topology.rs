//! Stepping along a path
//!
//! Closed paths wrap around. Open paths stop at their ends: stepping off
//! either end returns the node you started from, so `sibling(n) == n`
//! means "no neighbor in that direction".

use crate::core::state::outline::{GlyphLayer, Node, NodeId, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Index of the neighbor of `index` in a path of `len` nodes
pub fn sibling_index(len: usize, closed: bool, index: usize, direction: Direction) -> usize {
    if len == 0 {
        return index;
    }
    match direction {
        Direction::Forward => {
            if index + 1 < len {
                index + 1
            } else if closed {
                0
            } else {
                index
            }
        }
        Direction::Backward => {
            if index > 0 {
                index - 1
            } else if closed {
                len - 1
            } else {
                index
            }
        }
    }
}

/// Index of the neighbor of the node at `index` within `path`
pub fn sibling_in(path: &Path, index: usize, direction: Direction) -> usize {
    sibling_index(path.len(), path.closed, index, direction)
}

/// Neighbor of `node` on the layer. Unknown handles come back unchanged.
pub fn sibling(layer: &GlyphLayer, node: NodeId, direction: Direction) -> NodeId {
    match layer.path(node.path) {
        Some(path) => NodeId::new(node.path, sibling_in(path, node.index, direction)),
        None => node,
    }
}

pub fn next(layer: &GlyphLayer, node: NodeId) -> NodeId {
    sibling(layer, node, Direction::Forward)
}

pub fn prev(layer: &GlyphLayer, node: NodeId) -> NodeId {
    sibling(layer, node, Direction::Backward)
}

/// The neighbor in `direction`, or `None` at an open end
pub fn neighbor(layer: &GlyphLayer, node: NodeId, direction: Direction) -> Option<NodeId> {
    let other = sibling(layer, node, direction);
    (other != node).then_some(other)
}

/// The node data of the neighbor in `direction`, or `None` at an open end
pub fn neighbor_node(layer: &GlyphLayer, node: NodeId, direction: Direction) -> Option<&Node> {
    neighbor(layer, node, direction).and_then(|id| layer.node(id))
}

/// First or last node of an open path
pub fn is_open_end(layer: &GlyphLayer, node: NodeId) -> bool {
    layer
        .path(node.path)
        .is_some_and(|path| !path.closed && (node.index == 0 || node.index + 1 == path.len()))
}

/// Step forward `steps` times, stopping at the end of an open path
pub fn advance(layer: &GlyphLayer, node: NodeId, steps: usize) -> NodeId {
    let Some(path) = layer.path(node.path) else {
        return node;
    };
    if path.closed {
        // Modular stepping is the same as walking one node at a time
        return NodeId::new(node.path, (node.index + steps) % path.len().max(1));
    }
    NodeId::new(node.path, (node.index + steps).min(path.len().saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with(closed: bool, len: usize) -> GlyphLayer {
        let nodes = (0..len).map(|i| Node::line(i as f64, 0.0)).collect();
        let path = if closed {
            Path::closed(nodes)
        } else {
            Path::open(nodes)
        };
        GlyphLayer::new("test").with_paths(vec![path])
    }

    #[test]
    fn closed_paths_wrap() {
        let layer = layer_with(true, 5);
        for i in 0..5 {
            assert_eq!(next(&layer, NodeId::new(0, i)), NodeId::new(0, (i + 1) % 5));
            assert_eq!(prev(&layer, NodeId::new(0, i)), NodeId::new(0, (i + 4) % 5));
        }
    }

    #[test]
    fn open_paths_stop_at_their_ends() {
        let layer = layer_with(false, 4);
        let first = NodeId::new(0, 0);
        let last = NodeId::new(0, 3);
        assert_eq!(prev(&layer, first), first);
        assert_eq!(next(&layer, last), last);
        assert_eq!(next(&layer, first), NodeId::new(0, 1));
        assert_eq!(neighbor(&layer, last, Direction::Forward), None);
        assert!(is_open_end(&layer, first));
        assert!(is_open_end(&layer, last));
        assert!(!is_open_end(&layer, NodeId::new(0, 2)));
    }

    #[test]
    fn single_node_closed_path_is_its_own_neighbor() {
        let layer = layer_with(true, 1);
        let only = NodeId::new(0, 0);
        assert_eq!(next(&layer, only), only);
        assert_eq!(neighbor(&layer, only, Direction::Backward), None);
    }

    #[test]
    fn advance_matches_repeated_stepping() {
        for closed in [true, false] {
            let layer = layer_with(closed, 6);
            for start in 0..6 {
                for steps in 0..14 {
                    let mut walked = NodeId::new(0, start);
                    for _ in 0..steps {
                        walked = next(&layer, walked);
                    }
                    assert_eq!(advance(&layer, NodeId::new(0, start), steps), walked);
                }
            }
        }
    }

    #[test]
    fn unknown_path_is_a_self_loop() {
        let layer = layer_with(true, 3);
        let stray = NodeId::new(7, 0);
        assert_eq!(next(&layer, stray), stray);
        assert!(!is_open_end(&layer, stray));
    }
}
