use crate::{Cost, Node, Point};

/// The rules of the world a [`PathFinder`](crate::PathFinder) searches in.
///
/// This is the only way the search learns anything about the map. Implementations are expected
/// to behave like a read-only view for the duration of a search: calling any method with the same
/// Point has to give the same answer every time, and no method may have side effects the search
/// relies on.
///
/// Only [`is_passable`](Traversal::is_passable) and [`neighbors`](Traversal::neighbors) are
/// required. The remaining methods have defaults that treat every Node as equally expensive and
/// ignore the notifications.
///
/// ## Examples
/// A corridor of length 10 where every other Tile is twice as slow:
/// ```
/// use a_star_pathfinding::{prelude::*, Point};
///
/// struct Corridor;
///
/// impl Traversal for Corridor {
///     fn is_passable(&self, _: Point) -> bool {
///         true
///     }
///     fn neighbors(&self, (x, y): Point, neighbors: &mut Vec<Point>) {
///         if x > 0 {
///             neighbors.push((x - 1, y));
///         }
///         if x < 9 {
///             neighbors.push((x + 1, y));
///         }
///     }
///     fn speed(&self, (x, _): Point) -> f32 {
///         if x % 2 == 0 { 1.0 } else { 2.0 }
///     }
/// }
///
/// let path = PathFinder::new(&Corridor, SearchConfig::GRID_4)
///     .find_path((0, 0), (4, 0))
///     .unwrap();
///
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.cost(), 6.0);
/// ```
pub trait Traversal {
    /// Determines if a Point can be used as part of a Path.
    ///
    /// Only Points returned by [`neighbors`](Traversal::neighbors) are checked. The start and
    /// goal of a search are exempt: a search may start on a blocked Point, and may end on one,
    /// in which case the Path leads right onto the goal.
    fn is_passable(&self, point: Point) -> bool;

    /// Pushes all Points adjacent to `point` into `neighbors`.
    ///
    /// The buffer is cleared before every call. It is not necessary to filter out blocked Points,
    /// that check is done later. The order of the neighbors only decides between Paths of equal
    /// Cost.
    fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>);

    /// The Cost multiplier for walking onto `point`.
    ///
    /// A step from `a` to `b` costs `distance(a, b) * speed(b)`, where `distance` is the
    /// straight-line distance. Defaults to `1.0`.
    ///
    /// Values below `1.0` are allowed, but then no [`Heuristic`](crate::Heuristic) is admissible
    /// anymore and the search may return a Path that is more expensive than the cheapest one.
    /// Scale all speeds so that the smallest one is `1.0` to keep the guarantee. Must not be
    /// negative.
    fn speed(&self, point: Point) -> Cost {
        let _ = point;
        1.0
    }

    /// Called whenever a Node is inserted into the open set, or re-inserted because a cheaper Path
    /// to it was found.
    ///
    /// Meant for visualization and debugging. The search does not depend on it.
    fn node_added_to_open_list(&self, node: &Node) {
        let _ = node;
    }

    /// Called for every Node of the final Path, in order from start to goal.
    ///
    /// Meant for visualization and debugging. The search does not depend on it.
    fn node_added_to_path(&self, node: &Node) {
        let _ = node;
    }
}

impl<T: Traversal + ?Sized> Traversal for &T {
    fn is_passable(&self, point: Point) -> bool {
        (**self).is_passable(point)
    }
    fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>) {
        (**self).neighbors(point, neighbors)
    }
    fn speed(&self, point: Point) -> Cost {
        (**self).speed(point)
    }
    fn node_added_to_open_list(&self, node: &Node) {
        (**self).node_added_to_open_list(node)
    }
    fn node_added_to_path(&self, node: &Node) {
        (**self).node_added_to_path(node)
    }
}
