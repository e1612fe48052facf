use crate::{Cost, Point};
use std::hash::{Hash, Hasher};

/// The Type used to reference a [`Node`] during a single search
pub type NodeID = usize;

/// A Node of the search tree built by a [`PathFinder`](crate::PathFinder).
///
/// Every Node is identified by its `pos`. Two Nodes at the same position are the same Node,
/// regardless of their scores or parent, which is why equality and hashing only look at `pos`.
///
/// Nodes only exist for the duration of one call to
/// [`find_path`](crate::PathFinder::find_path). They are handed to the
/// [`Traversal`](crate::Traversal) hooks by reference, so that instrumentation can inspect
/// them while the search is running.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    /// the position of the Node on the Grid
    pub pos: Point,
    /// the Cost of the best known Path from the start to this Node
    pub g_score: Cost,
    /// the estimated Cost of the remaining Path to the goal
    pub h_score: Cost,
    /// the Cost multiplier for walking onto this Node
    pub speed: Cost,
    /// the predecessor on the best known Path, `None` for the start
    pub parent: Option<NodeID>,
}

impl Node {
    /// Creates a new Node at `pos` with all scores set to 0 and no parent.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use a_star_pathfinding::Node;
    /// let node = Node::new((3, 4));
    ///
    /// assert_eq!(node.pos, (3, 4));
    /// assert_eq!(node.f_score(), 0.0);
    /// assert_eq!(node.parent, None);
    /// ```
    pub fn new(pos: Point) -> Node {
        Node {
            pos,
            g_score: 0.0,
            h_score: 0.0,
            speed: 1.0,
            parent: None,
        }
    }

    /// The priority of this Node in the open set: `g_score + h_score`
    pub fn f_score(&self) -> Cost {
        self.g_score + self.h_score
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.pos == other.pos
    }
}
impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_score_is_sum() {
        let mut node = Node::new((1, 1));
        node.g_score = 2.5;
        node.h_score = 1.5;
        assert_eq!(node.f_score(), 4.0);

        node.g_score = 1.0;
        assert_eq!(node.f_score(), 2.5);
    }

    #[test]
    fn equality_by_position() {
        let mut a = Node::new((2, 3));
        let mut b = Node::new((2, 3));
        a.g_score = 10.0;
        b.h_score = 7.0;
        b.parent = Some(4);
        assert_eq!(a, b);

        let c = Node::new((3, 2));
        assert_ne!(a, c);
    }

    #[test]
    fn hash_by_position() {
        let mut set = hashbrown::HashSet::new();
        let mut a = Node::new((0, 0));
        a.g_score = 3.0;
        set.insert(a);
        assert!(!set.insert(Node::new((0, 0))));
        assert!(set.insert(Node::new((0, 1))));
    }
}
