use crate::{Cost, Point};
use std::fmt;

/// The Heuristic used to estimate the remaining Cost from a Node to the goal.
///
/// A* only returns the cheapest Path if the Heuristic never overestimates the actual remaining
/// Cost. Which variant fulfills that depends on how Agents move along the Grid:
///
/// | Variant     | Movement                    | Formula                                   |
/// |-------------|-----------------------------|-------------------------------------------|
/// | `Manhattan` | 4 directions                | `dx + dy`                                 |
/// | `Diagonal`  | 8 directions                | `max(dx, dy) + (√2 - 1) * min(dx, dy)`    |
/// | `Euclidean` | any                         | `√(dx² + dy²)`                            |
///
/// Using `Manhattan` while diagonal steps are allowed overestimates the Cost of diagonal Paths.
/// The search still terminates, but the resulting Path might not be the cheapest one.
///
/// Every variant assumes that a step costs at least its length. If
/// [`Traversal::speed`](crate::Traversal::speed) returns values below `1.0`, even `Euclidean`
/// overestimates and the same applies.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use a_star_pathfinding::Heuristic;
/// let (a, b) = ((0, 0), (3, 4));
///
/// assert_eq!(Heuristic::Manhattan.distance(a, b), 7.0);
/// assert_eq!(Heuristic::Euclidean.distance(a, b), 5.0);
/// assert!((Heuristic::Diagonal.distance(a, b) - 5.243).abs() < 0.001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Distance in the [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry)
    Manhattan,
    /// [Octile](https://en.wikipedia.org/wiki/Chebyshev_distance) distance, where a diagonal step
    /// costs `√2`
    #[default]
    Diagonal,
    /// Straight-line distance
    Euclidean,
}

impl Heuristic {
    /// Estimates the Cost of walking from `point` to `goal`.
    ///
    /// The result is never negative and 0 only if `point == goal`.
    pub fn distance(self, point: Point, goal: Point) -> Cost {
        let dx = point.0.abs_diff(goal.0) as Cost;
        let dy = point.1.abs_diff(goal.1) as Cost;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Diagonal => {
                let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
                max + (std::f32::consts::SQRT_2 - 1.0) * min
            }
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }
}

/// The error returned when converting an unknown selector value into a [`Heuristic`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownHeuristic(pub u8);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "unknown heuristic selector {} (expected 1 = Manhattan, 2 = Diagonal, 3 = Euclidean)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeuristic {}

/// Decodes the numeric selectors `1 = Manhattan`, `2 = Diagonal` and `3 = Euclidean`.
///
/// ```
/// # use a_star_pathfinding::{Heuristic, UnknownHeuristic};
/// assert_eq!(Heuristic::try_from(3u8), Ok(Heuristic::Euclidean));
/// assert_eq!(Heuristic::try_from(0u8), Err(UnknownHeuristic(0)));
/// ```
impl TryFrom<u8> for Heuristic {
    type Error = UnknownHeuristic;
    fn try_from(val: u8) -> Result<Heuristic, UnknownHeuristic> {
        match val {
            1 => Ok(Heuristic::Manhattan),
            2 => Ok(Heuristic::Diagonal),
            3 => Ok(Heuristic::Euclidean),
            _ => Err(UnknownHeuristic(val)),
        }
    }
}

impl From<Heuristic> for u8 {
    fn from(heuristic: Heuristic) -> u8 {
        match heuristic {
            Heuristic::Manhattan => 1,
            Heuristic::Diagonal => 2,
            Heuristic::Euclidean => 3,
        }
    }
}
