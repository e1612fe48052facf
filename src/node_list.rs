use crate::{Node, NodeID, Point, PointMap};

/// Which of the two sets of the search a Node currently belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Membership {
    Open,
    Closed,
}

#[derive(Clone, Debug)]
struct Slot {
    node: Node,
    membership: Membership,
}

/// Dense storage for all Nodes discovered during one search.
///
/// Nodes are addressed by a [`NodeID`] handed out on insertion and can also be looked up by
/// position. Parents are stored as ids, so the search tree never owns itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Slot>,
    pos_map: PointMap<NodeID>,
}

impl NodeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            pos_map: PointMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pos_map.len()
    }

    /// Adds a Node in the open set. Positions must be unique.
    #[track_caller]
    pub fn add_node(&mut self, node: Node) -> NodeID {
        let pos = node.pos;
        assert!(
            !self.pos_map.contains_key(&pos),
            "Node at {:?} was added twice",
            pos
        );
        let id = self.nodes.insert(Slot {
            node,
            membership: Membership::Open,
        });
        self.pos_map.insert(pos, id);
        id
    }

    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    #[track_caller]
    pub fn membership(&self, id: NodeID) -> Membership {
        self.nodes[id].membership
    }

    #[track_caller]
    pub fn close(&mut self, id: NodeID) {
        self.nodes[id].membership = Membership::Closed;
    }

    /// Removes all Nodes while keeping the allocated memory for the next search
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.pos_map.clear();
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node, Membership)> {
        self.nodes
            .iter()
            .map(|(id, slot)| (id, &slot.node, slot.membership))
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index].node
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index].node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_position() {
        let mut nodes = NodeList::default();
        let zero_id = nodes.add_node(Node::new((0, 0)));
        let one_id = nodes.add_node(Node::new((1, 1)));

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes.id_at((0, 0)), Some(zero_id));
        assert_eq!(nodes.id_at((1, 1)), Some(one_id));
        assert_eq!(nodes.id_at((2, 2)), None);
        assert_eq!(nodes[one_id].pos, (1, 1));
    }

    #[test]
    fn membership_moves_between_sets() {
        let mut nodes = NodeList::default();
        let id = nodes.add_node(Node::new((4, 2)));
        assert_eq!(nodes.membership(id), Membership::Open);

        nodes.close(id);
        assert_eq!(nodes.membership(id), Membership::Closed);
        assert_eq!(
            nodes.iter().filter(|(_, _, m)| *m == Membership::Open).count(),
            0
        );
    }

    #[test]
    #[should_panic(expected = "added twice")]
    fn duplicate_position() {
        let mut nodes = NodeList::default();
        nodes.add_node(Node::new((0, 0)));
        nodes.add_node(Node::new((0, 0)));
    }

    #[test]
    fn clear() {
        let mut nodes = NodeList::with_capacity(4);
        nodes.add_node(Node::new((0, 0)));
        nodes.add_node(Node::new((0, 1)));
        nodes.clear();

        assert_eq!(nodes.len(), 0);
        assert_eq!(nodes.id_at((0, 0)), None);
        let id = nodes.add_node(Node::new((0, 0)));
        assert_eq!(nodes.id_at((0, 0)), Some(id));
    }
}
