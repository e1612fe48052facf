use a_star_pathfinding::{prelude::*, Node, Point};
use std::cell::Cell;

/// 0 = empty, 1 = swamp, 2 = wall
struct Map<'a> {
    grid: &'a [[usize; 5]; 5],
    neighborhood: MooreNeighborhood,
    opened: Cell<usize>,
}

impl<'a> Map<'a> {
    fn new(grid: &'a [[usize; 5]; 5]) -> Self {
        Map {
            grid,
            neighborhood: MooreNeighborhood::new(5, 5),
            opened: Cell::new(0),
        }
    }
}

impl Traversal for Map<'_> {
    fn is_passable(&self, (x, y): Point) -> bool {
        self.grid[y][x] != 2
    }
    fn neighbors(&self, point: Point, neighbors: &mut Vec<Point>) {
        self.neighborhood.get_all_neighbors(point, neighbors);
    }
    fn speed(&self, (x, y): Point) -> f32 {
        [1.0, 10.0, 1.0][self.grid[y][x]]
    }
    fn node_added_to_open_list(&self, _: &Node) {
        self.opened.set(self.opened.get() + 1);
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn open_grid() {
    init();
    let grid = [[0; 5]; 5];
    let map = Map::new(&grid);

    let path = PathFinder::new(&map, SearchConfig::GRID_8)
        .find_path((0, 0), (4, 4))
        .unwrap();

    #[rustfmt::skip]
    assert_eq!(
        path,
        vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
    );
    assert!(map.opened.get() > 0);
}

#[test]
fn wall_with_gap() {
    init();
    let grid = [
        [0, 0, 2, 0, 0],
        [0, 0, 2, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 2, 0, 0],
        [0, 0, 2, 0, 0],
    ];
    let map = Map::new(&grid);

    for heuristic in [Heuristic::Diagonal, Heuristic::Euclidean] {
        let config = SearchConfig::with_heuristic(heuristic);
        let path = PathFinder::new(&map, config)
            .find_path((0, 0), (4, 4))
            .unwrap();

        #[rustfmt::skip]
        assert_eq!(
            path,
            vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
        );
    }

    let path = PathFinder::new(&map, SearchConfig::GRID_8)
        .find_path((0, 4), (4, 0))
        .unwrap();
    assert!(path.contains(&(2, 2)));
    assert_eq!(path.len(), 5);
}

#[test]
fn swamp_detour() {
    init();
    let grid = [
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ];
    let map = Map::new(&grid);

    let path = PathFinder::new(&map, SearchConfig::ANY_ANGLE)
        .find_path((0, 0), (4, 4))
        .unwrap();

    // along the border, cutting the corner at (0, 4)
    assert!((path.cost() - (6.0 + std::f32::consts::SQRT_2)).abs() < 1e-4);
    assert!(path.iter().all(|&(x, y)| grid[y][x] == 0));
}

#[test]
fn unreachable_goal() {
    init();
    let grid = [
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 2, 2],
        [0, 0, 0, 2, 0],
        [0, 0, 0, 2, 0],
    ];
    let map = Map::new(&grid);
    let mut path_finder = PathFinder::new(&map, SearchConfig::GRID_8);

    assert!(path_finder.find_path((0, 0), (4, 4)).is_none());
    assert_eq!(path_finder.nodes_expanded(), 19);

    // the goal itself may be solid
    assert!(path_finder.find_path((0, 0), (3, 3)).is_some());
}

#[test]
fn heuristic_selectors() {
    let heuristics: Vec<Heuristic> = (1..=3u8).map(|i| Heuristic::try_from(i).unwrap()).collect();

    assert_eq!(
        heuristics,
        vec![Heuristic::Manhattan, Heuristic::Diagonal, Heuristic::Euclidean]
    );
    let distances: Vec<f32> = heuristics
        .iter()
        .map(|h| h.distance((0, 0), (3, 4)))
        .collect();
    assert_eq!(distances[0], 7.0);
    assert!((distances[1] - 5.243).abs() < 1e-3);
    assert_eq!(distances[2], 5.0);

    assert!(Heuristic::try_from(0u8).is_err());
}
