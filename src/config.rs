use crate::Heuristic;

/// Options for configuring a [`PathFinder`](crate::PathFinder)
///
/// Default options:
/// ```
/// # use a_star_pathfinding::{Heuristic, SearchConfig};
/// assert_eq!(
///     SearchConfig {
///         heuristic: Heuristic::Diagonal,
///         expansion_limit: None,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The Heuristic used to estimate the remaining Cost (defaults to [`Heuristic::Diagonal`])
    ///
    /// This has to match the movement of your [`Traversal`](crate::Traversal). See
    /// [`Heuristic`] for which variant is admissible for which kind of movement.
    pub heuristic: Heuristic,
    /// `None` (default): the search runs until the goal is found or every reachable Node was
    /// expanded.
    ///
    /// `Some(n)`: the search gives up after expanding `n` Nodes and reports that no Path exists.
    ///
    /// Useful to bound the time spent on a single search when the map is large or the goal is
    /// likely to be unreachable.
    pub expansion_limit: Option<usize>,
    /// The number of Nodes to allocate memory for up front (defaults to `64`)
    ///
    /// The memory is kept between searches of the same [`PathFinder`](crate::PathFinder).
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig for Agents moving along the 4 cardinal directions
    ///
    /// Values:
    /// ```
    /// # use a_star_pathfinding::{Heuristic, SearchConfig};
    /// assert_eq!(
    ///     SearchConfig {
    ///         heuristic: Heuristic::Manhattan,
    ///         expansion_limit: None,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::GRID_4
    /// );
    /// ```
    pub const GRID_4: SearchConfig = SearchConfig {
        heuristic: Heuristic::Manhattan,
        expansion_limit: None,
        size_hint: 64,
    };
    /// a SearchConfig for Agents moving along the 4 cardinal directions and the 4 diagonals
    ///
    /// Values:
    /// ```
    /// # use a_star_pathfinding::{Heuristic, SearchConfig};
    /// assert_eq!(
    ///     SearchConfig {
    ///         heuristic: Heuristic::Diagonal,
    ///         expansion_limit: None,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::GRID_8
    /// );
    /// ```
    pub const GRID_8: SearchConfig = SearchConfig {
        heuristic: Heuristic::Diagonal,
        expansion_limit: None,
        size_hint: 64,
    };
    /// a SearchConfig for any other kind of movement, like Graphs with long edges
    ///
    /// Values:
    /// ```
    /// # use a_star_pathfinding::{Heuristic, SearchConfig};
    /// assert_eq!(
    ///     SearchConfig {
    ///         heuristic: Heuristic::Euclidean,
    ///         expansion_limit: None,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::ANY_ANGLE
    /// );
    /// ```
    pub const ANY_ANGLE: SearchConfig = SearchConfig {
        heuristic: Heuristic::Euclidean,
        expansion_limit: None,
        size_hint: 64,
    };

    /// Creates a default SearchConfig with the given Heuristic
    pub fn with_heuristic(heuristic: Heuristic) -> SearchConfig {
        SearchConfig {
            heuristic,
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::GRID_8
    }
}
