use super::Path;
use crate::{node_list::NodeList, NodeID, Point, Traversal};

/// Walks the parents of `goal` back to the start and returns the Path from start to goal.
///
/// The start is the only Node without a parent. Every Node of the result is passed to
/// [`Traversal::node_added_to_path`] in order from start to goal.
pub(crate) fn reconstruct_path<T: Traversal>(
    nodes: &NodeList,
    goal: NodeID,
    traversal: &T,
) -> Path<Point> {
    let mut ids = vec![];
    let mut current = Some(goal);
    while let Some(id) = current {
        debug_assert!(ids.len() <= nodes.len(), "cycle in the parent chain");
        ids.push(id);
        current = nodes[id].parent;
    }
    ids.reverse();

    let steps = ids
        .into_iter()
        .map(|id| {
            let node = &nodes[id];
            traversal.node_added_to_path(node);
            node.pos
        })
        .collect();

    Path::new(steps, nodes[goal].g_score)
}
