use crate::node_list::{Membership, NodeList};
use crate::path::reconstruct_path;
use crate::{Cost, Heuristic, Node, NodeID, Path, Point, SearchConfig, Traversal};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open set.
///
/// The heap pops the lowest `f_score` first and, among equal `f_score`s, the entry that was
/// inserted first. Entries are never removed when their Node gets cheaper; the stale entry is
/// skipped when it is popped.
#[derive(Clone, Copy, Debug)]
struct OpenElement {
    id: NodeID,
    g_score: Cost,
    f_score: Cost,
    seq: usize,
}

impl PartialEq for OpenElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for OpenElement {}
impl PartialOrd for OpenElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for OpenElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f_score
            .total_cmp(&self.f_score)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

/// The Cost of stepping from `from` onto the adjacent `to`
fn step_cost(from: Point, to: Point, speed: Cost) -> Cost {
    Heuristic::Euclidean.distance(from, to) * speed
}

/// Searches for Paths using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// A PathFinder owns the open and closed sets of the search and borrows the [`Traversal`] that
/// describes the map. The sets are emptied at the end of every search, but their memory is kept,
/// so reusing one PathFinder for many searches on the same map avoids repeated allocations.
///
/// A PathFinder can only run one search at a time. To search in parallel, create one PathFinder
/// per thread (see also `find_paths_parallel` with the `parallel` feature).
///
/// ## Examples
/// Basic usage:
/// ```
/// use a_star_pathfinding::{prelude::*, Point};
///
/// struct OpenField(ManhattanNeighborhood);
///
/// impl Traversal for OpenField {
///     fn is_passable(&self, _: Point) -> bool {
///         true
///     }
///     fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>) {
///         self.0.get_all_neighbors(point, neighbors);
///     }
/// }
///
/// let field = OpenField(ManhattanNeighborhood::new(8, 8));
/// let mut path_finder = PathFinder::new(&field, SearchConfig::GRID_4);
///
/// let path = path_finder.find_path((0, 0), (3, 2)).unwrap();
/// assert_eq!(path.len(), 6);
/// assert_eq!(path.cost(), 5.0);
///
/// let path = path_finder.find_path((5, 5), (5, 5)).unwrap();
/// assert_eq!(path, vec![(5, 5)]);
/// ```
#[derive(Debug)]
pub struct PathFinder<'a, T> {
    traversal: &'a T,
    config: SearchConfig,
    nodes: NodeList,
    open: BinaryHeap<OpenElement>,
    neighbors: Vec<Point>,
    next_seq: usize,
    expanded: usize,
    discovered: usize,
}

impl<'a, T: Traversal> PathFinder<'a, T> {
    /// Creates a new PathFinder searching in `traversal`.
    ///
    /// ## Arguments
    /// - `traversal` - the rules of the map to search in. (See [`Traversal`])
    /// - `config` - the Heuristic and other options. (See [`SearchConfig`])
    pub fn new(traversal: &'a T, config: SearchConfig) -> PathFinder<'a, T> {
        PathFinder {
            traversal,
            config,
            nodes: NodeList::with_capacity(config.size_hint),
            open: BinaryHeap::with_capacity(config.size_hint / 2),
            neighbors: Vec::with_capacity(8),
            next_seq: 0,
            expanded: 0,
            discovered: 0,
        }
    }

    /// The number of Nodes that were expanded by the last search
    pub fn nodes_expanded(&self) -> usize {
        self.expanded
    }

    /// The number of distinct Nodes that were discovered by the last search, including the ones
    /// that were never expanded
    pub fn nodes_discovered(&self) -> usize {
        self.discovered
    }

    /// Finds the cheapest Path from `start` to `goal`.
    ///
    /// The search expands Nodes in order of their `f_score` until either the goal is expanded or
    /// no Nodes are left. Neighbors that are not passable are ignored, with the exception of the
    /// goal. The start is never checked either.
    ///
    /// The result is only guaranteed to be the cheapest Path if the configured [`Heuristic`] does
    /// not overestimate the Cost of the movement that the [`Traversal`] allows.
    ///
    /// ## Returns
    /// the Path, if one was found, or None if the `goal` is unreachable or the
    /// [`expansion_limit`](SearchConfig::expansion_limit) was hit.
    /// The first Point of the Path is always `start` and the last is `goal`.
    pub fn find_path(&mut self, start: Point, goal: Point) -> Option<Path<Point>> {
        self.reset();

        #[cfg(feature = "log")]
        log::trace!(
            "searching {:?} -> {:?} using {:?}",
            start,
            goal,
            self.config.heuristic
        );

        let start_node = Node {
            h_score: self.config.heuristic.distance(start, goal),
            speed: self.traversal.speed(start),
            ..Node::new(start)
        };
        let start_id = self.nodes.add_node(start_node);
        self.push_open(start_id);

        let path = self
            .search(goal)
            .map(|goal_id| reconstruct_path(&self.nodes, goal_id, self.traversal));

        #[cfg(feature = "log")]
        match &path {
            Some(path) => log::debug!(
                "found {:?} -> {:?} with cost {} after expanding {} of {} Nodes",
                start,
                goal,
                path.cost(),
                self.expanded,
                self.nodes.len()
            ),
            None => log::debug!(
                "no path {:?} -> {:?} after expanding {} of {} Nodes",
                start,
                goal,
                self.expanded,
                self.nodes.len()
            ),
        }

        let (expanded, discovered) = (self.expanded, self.nodes.len());
        self.reset();
        self.expanded = expanded;
        self.discovered = discovered;

        path
    }

    fn search(&mut self, goal: Point) -> Option<NodeID> {
        let heuristic = self.config.heuristic;
        let traversal = self.traversal;
        let mut neighbors = std::mem::take(&mut self.neighbors);

        let found = loop {
            let Some(OpenElement { id, g_score, .. }) = self.open.pop() else {
                break None;
            };
            if self.nodes.membership(id) == Membership::Closed {
                continue;
            }
            match g_score.total_cmp(&self.nodes[id].g_score) {
                Ordering::Greater => continue,
                Ordering::Equal => {}
                Ordering::Less => unreachable!("open set entry is cheaper than its Node"),
            }

            self.nodes.close(id);
            let current = self.nodes[id];
            if current.pos == goal {
                break Some(id);
            }

            if let Some(limit) = self.config.expansion_limit {
                if self.expanded >= limit {
                    #[cfg(feature = "log")]
                    log::debug!("expansion limit of {} reached", limit);
                    break None;
                }
            }
            self.expanded += 1;

            neighbors.clear();
            traversal.neighbors(current.pos, &mut neighbors);

            for &pos in neighbors.iter() {
                if pos != goal && !traversal.is_passable(pos) {
                    continue;
                }
                let existing = self.nodes.id_at(pos);
                let speed = match existing {
                    Some(other_id) => {
                        if self.nodes.membership(other_id) == Membership::Closed {
                            continue;
                        }
                        self.nodes[other_id].speed
                    }
                    None => traversal.speed(pos),
                };

                let other_cost = current.g_score + step_cost(current.pos, pos, speed);

                let other_id = match existing {
                    Some(other_id) => {
                        if self.nodes[other_id].g_score <= other_cost {
                            continue;
                        }
                        other_id
                    }
                    None => self.nodes.add_node(Node {
                        speed,
                        ..Node::new(pos)
                    }),
                };

                let other = &mut self.nodes[other_id];
                other.g_score = other_cost;
                other.h_score = heuristic.distance(pos, goal);
                other.parent = Some(id);
                self.push_open(other_id);
            }
        };

        self.neighbors = neighbors;
        found
    }

    fn push_open(&mut self, id: NodeID) {
        let node = &self.nodes[id];
        self.open.push(OpenElement {
            id,
            g_score: node.g_score,
            f_score: node.f_score(),
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.traversal.node_added_to_open_list(node);
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.next_seq = 0;
        self.expanded = 0;
        self.discovered = 0;
    }
}

/// Finds the cheapest Path from `start` to `goal` with a temporary [`PathFinder`].
///
/// Prefer creating a [`PathFinder`] when searching the same map several times.
///
/// ## Examples
/// ```
/// use a_star_pathfinding::{a_star_search, prelude::*, Point};
///
/// // a 3x3 room with walls everywhere except the border
/// struct Ring;
///
/// impl Traversal for Ring {
///     fn is_passable(&self, point: Point) -> bool {
///         point != (1, 1)
///     }
///     fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>) {
///         ManhattanNeighborhood::new(3, 3).get_all_neighbors(point, neighbors);
///     }
/// }
///
/// let path = a_star_search(&Ring, SearchConfig::GRID_4, (0, 1), (2, 1)).unwrap();
/// assert_eq!(path.cost(), 4.0);
/// assert!(!path.contains(&(1, 1)));
/// ```
pub fn a_star_search<T: Traversal>(
    traversal: &T,
    config: SearchConfig,
    start: Point,
    goal: Point,
) -> Option<Path<Point>> {
    PathFinder::new(traversal, config).find_path(start, goal)
}

/// Runs one search for every `(start, goal)` pair in parallel.
///
/// Every thread uses its own [`PathFinder`], only the `traversal` is shared. The results are in
/// the same order as `queries`.
///
/// ## Examples
/// ```
/// use a_star_pathfinding::{find_paths_parallel, prelude::*, Point};
///
/// struct OpenField(MooreNeighborhood);
///
/// impl Traversal for OpenField {
///     fn is_passable(&self, _: Point) -> bool {
///         true
///     }
///     fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>) {
///         self.0.get_all_neighbors(point, neighbors);
///     }
/// }
///
/// let field = OpenField(MooreNeighborhood::new(16, 16));
/// let paths = find_paths_parallel(
///     &field,
///     SearchConfig::GRID_8,
///     &[((0, 0), (15, 15)), ((3, 3), (3, 3)), ((0, 0), (20, 20))],
/// );
///
/// assert_eq!(paths[0].as_ref().map(|p| p.len()), Some(16));
/// assert_eq!(paths[1].as_ref().map(|p| p.len()), Some(1));
/// assert!(paths[2].is_none());
/// ```
#[cfg(feature = "parallel")]
pub fn find_paths_parallel<T: Traversal + Sync>(
    traversal: &T,
    config: SearchConfig,
    queries: &[(Point, Point)],
) -> Vec<Option<Path<Point>>> {
    use rayon::prelude::*;

    queries
        .par_iter()
        .map_init(
            || PathFinder::new(traversal, config),
            |path_finder, &(start, goal)| path_finder.find_path(start, goal),
        )
        .collect()
}
