#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path between two Points using A*.
//!
//! ## Introduction
//! This crate contains the search itself and nothing else: scoring Nodes, keeping track of which
//! Nodes still have to be expanded, picking a Heuristic and walking the finished search tree back
//! into a Path. Everything that describes the actual world (the Grid, which Tiles are blocked, how
//! Agents may move) stays on the user's side and is only reached through the [`Traversal`] Trait.
//!
//! Note that a [`PathFinder`] never stores or copies the map. This allows the user to store
//! the map in any format they want (Array, Vec, HashMap, kd-tree, ...), as long as they can
//! answer "is this Point passable?" and "what are the neighbors of this Point?".
//!
//! ## Examples
//! Implementing a Traversal:
//! ```
//! use a_star_pathfinding::{prelude::*, Point};
//!
//! // 0 = empty, 1 = mud, 2 = wall
//! struct Map {
//!     grid: [[u8; 5]; 5],
//!     neighborhood: MooreNeighborhood,
//! }
//!
//! impl Traversal for Map {
//!     fn is_passable(&self, (x, y): Point) -> bool {
//!         self.grid[y][x] != 2
//!     }
//!     fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>) {
//!         self.neighborhood.get_all_neighbors(point, neighbors);
//!     }
//!     fn speed(&self, (x, y): Point) -> f32 {
//!         if self.grid[y][x] == 1 { 4.0 } else { 1.0 }
//!     }
//! }
//!
//! let map = Map {
//!     grid: [
//!         [0, 0, 2, 0, 0],
//!         [0, 0, 2, 0, 0],
//!         [0, 0, 0, 0, 0],
//!         [0, 0, 2, 0, 0],
//!         [0, 0, 2, 0, 0],
//!     ],
//!     neighborhood: MooreNeighborhood::new(5, 5),
//! };
//!
//! let mut path_finder = PathFinder::new(&map, SearchConfig::GRID_8);
//!
//! // find_path returns Some(Path) on success
//! let path = path_finder.find_path((0, 0), (4, 0)).unwrap();
//!
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (4, 0));
//! assert!(path.contains(&(2, 2)));
//! ```
//!
//! ### Heuristics
//! The Heuristic is selected once per search through the [`SearchConfig`]. It has to match the
//! way Agents move, otherwise the resulting Paths are no longer guaranteed to be the cheapest:
//! - [`Heuristic::Manhattan`] for 4-directional movement
//! - [`Heuristic::Diagonal`] for 8-directional movement
//! - [`Heuristic::Euclidean`] for any other movement, e.g. Graphs with long edges
//!
//! Picking Manhattan while [`Traversal::neighbors`] also returns diagonal steps is a
//! misconfiguration. It is not detected: the search still terminates and returns a Path, just not
//! necessarily the cheapest one.
//!
//! All three Heuristics assume that a step costs at least its length, i.e. that
//! [`Traversal::speed`] is never below `1.0`. Faster Tiles make every Heuristic overestimate, with
//! the same effect as above: a Path is found, but a cheaper one over the fast Tiles may be missed.
//!
//! ### Configuration
//! ```
//! use a_star_pathfinding::{Heuristic, SearchConfig};
//!
//! let config = SearchConfig {
//!     expansion_limit: Some(10_000),
//!     ..SearchConfig::GRID_4
//! };
//!
//! assert_eq!(config.heuristic, Heuristic::Manhattan);
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

mod node;
pub use self::node::{Node, NodeID};

mod node_list;

mod heuristic;
pub use self::heuristic::{Heuristic, UnknownHeuristic};

mod config;
pub use self::config::SearchConfig;

mod traversal;
pub use self::traversal::Traversal;

pub mod neighbors;

mod path;
pub use self::path::{Cost, Path};

mod search;
pub use self::search::{a_star_search, PathFinder};

#[cfg(feature = "parallel")]
pub use self::search::find_paths_parallel;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        Heuristic, Path, PathFinder, SearchConfig, Traversal,
    };
}
