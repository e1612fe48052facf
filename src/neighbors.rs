//! A crate with the most common Neighborhoods
//!
//! These are building blocks for implementing [`Traversal::neighbors`](crate::Traversal::neighbors)
//! on rectangular Grids. They only know the size of the Grid, not which Tiles are blocked.

use crate::{Heuristic, Point};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
    /// Pushes all Neighbors of a Point into `target`
    ///
    /// Note that this does not check weather the Tile at a Point is solid or not.
    /// That check is done by the search.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// The Heuristic that never overestimates the Cost of Paths formed in this Neighborhood.
    fn recommended_heuristic(&self) -> Heuristic;
}

fn push_offsets(
    point: Point,
    (width, height): (usize, usize),
    offsets: &[(isize, isize)],
    target: &mut Vec<Point>,
) {
    let iter = offsets
        .iter()
        .map(|(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
        .filter(|(x, y)| *x >= 0 && *y >= 0 && (*x as usize) < width && (*y as usize) < height)
        .map(|(x, y)| (x as usize, y as usize));
    target.extend(iter);
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        push_offsets(
            point,
            (self.width, self.height),
            &[(0, -1), (1, 0), (0, 1), (-1, 0)],
            target,
        );
    }
    fn recommended_heuristic(&self) -> Heuristic {
        Heuristic::Manhattan
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Diagonal steps are allowed even if both orthogonal Tiles next to them are blocked.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
    width: usize,
    height: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> MooreNeighborhood {
        MooreNeighborhood { width, height }
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        push_offsets(
            point,
            (self.width, self.height),
            &[
                (0, -1),
                (1, -1),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
            ],
            target,
        );
    }
    fn recommended_heuristic(&self) -> Heuristic {
        Heuristic::Diagonal
    }
}
