//! Shared code for the delve demos: a small layered map built from ASCII
//! floor plans, which doubles as the [`Mover`] handed to the pathfinder.

use delve_core::{Point, Range};
use delve_paths::Mover;
use rand::{Rng, RngExt};

/// Default iteration cap for demo searches.
pub const DEFAULT_MAX_ITERATIONS: i32 = 400;

/// Walls added per floor when a seed is given.
pub const RUBBLE: usize = 12;

pub const USAGE: &str = "usage: pathdemo [seed] [max_iterations] [floor]";

/// Built-in floor plans. `#` wall, `.` floor, `@` start, `>` goal.
pub const FLOORS: [&str; 2] = [
    "\
####################
#@.....#...........#
#......#....####...#
#......#.......#...#
#..........#...#...#
#......#...#...#.>.#
#......#...#.......#
####################",
    "\
####################
#..................#
#.######...######..#
#.#....#...#....#..#
#.#.@..#...#..>.#..#
#.#.............#..#
#.######...######..#
####################",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Wall,
    Floor,
}

/// A stack of equally sized floors.
#[derive(Debug, Clone)]
pub struct LayeredMap {
    bounds: Range,
    cells: Vec<Terrain>,
    starts: Vec<Point>,
    goals: Vec<Point>,
}

impl LayeredMap {
    /// Parse one plan per floor. All plans must share the same size.
    pub fn parse(floors: &[&str]) -> Result<Self, String> {
        let first = floors.first().ok_or("no floors given")?;
        let height = first.lines().count() as i32;
        let width = first.lines().next().map_or(0, |l| l.chars().count()) as i32;
        let bounds = Range::new(Point::ZERO, Point::new(width, height, floors.len() as i32));

        let mut map = Self {
            bounds,
            cells: vec![Terrain::Wall; bounds.len()],
            starts: Vec::new(),
            goals: Vec::new(),
        };

        for (z, plan) in floors.iter().enumerate() {
            let lines: Vec<&str> = plan.lines().collect();
            if lines.len() as i32 != height {
                return Err(format!("floor {z}: expected {height} rows, got {}", lines.len()));
            }
            for (y, line) in lines.iter().enumerate() {
                if line.chars().count() as i32 != width {
                    return Err(format!("floor {z} row {y}: expected {width} columns"));
                }
                for (x, c) in line.chars().enumerate() {
                    let p = Point::new(x as i32, y as i32, z as i32);
                    let terrain = match c {
                        '#' => Terrain::Wall,
                        '.' => Terrain::Floor,
                        '@' => {
                            map.starts.push(p);
                            Terrain::Floor
                        }
                        '>' => {
                            map.goals.push(p);
                            Terrain::Floor
                        }
                        other => return Err(format!("floor {z}: unknown tile {other:?} at {p}")),
                    };
                    map.set(p, terrain);
                }
            }
        }
        Ok(map)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let w = self.bounds.width() as usize;
        let h = self.bounds.height() as usize;
        let (x, y, z) = (p.x as usize, p.y as usize, p.z as usize);
        Some((z * h + y) * w + x)
    }

    /// Terrain at `p`, or `None` outside the map.
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.idx(p).map(|i| self.cells[i])
    }

    pub fn set(&mut self, p: Point, t: Terrain) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = t;
        }
    }

    /// First start and goal markers on floor `z`.
    pub fn markers(&self, z: i32) -> Option<(Point, Point)> {
        let start = self.starts.iter().find(|p| p.z == z)?;
        let goal = self.goals.iter().find(|p| p.z == z)?;
        Some((*start, *goal))
    }

    fn is_marker(&self, p: Point) -> bool {
        self.starts.contains(&p) || self.goals.contains(&p)
    }

    /// Turn up to `count` random floor cells on every floor into walls.
    /// Markers are never covered.
    pub fn scatter_rubble(&mut self, rng: &mut impl Rng, count: usize) {
        for z in self.bounds.min.z..self.bounds.max.z {
            for _ in 0..count {
                let p = Point::new(
                    rng.random_range(0..self.bounds.width()),
                    rng.random_range(0..self.bounds.height()),
                    z,
                );
                if self.at(p) == Some(Terrain::Floor) && !self.is_marker(p) {
                    self.set(p, Terrain::Wall);
                }
            }
        }
    }

    /// Draw floor `z` with `path` marked as `*`.
    pub fn render_floor(&self, z: i32, path: &[Point]) -> String {
        let mut out = String::new();
        for y in 0..self.bounds.height() {
            for x in 0..self.bounds.width() {
                let p = Point::new(x, y, z);
                let c = if self.starts.contains(&p) {
                    '@'
                } else if self.goals.contains(&p) {
                    '>'
                } else if path.contains(&p) {
                    '*'
                } else {
                    match self.at(p) {
                        Some(Terrain::Floor) => '.',
                        _ => '#',
                    }
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl Mover for LayeredMap {
    fn can_enter(&self, p: Point) -> bool {
        self.at(p) == Some(Terrain::Floor)
    }
}

/// Command-line options of `pathdemo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoArgs {
    pub seed: Option<u64>,
    pub max_iterations: i32,
    pub floor: i32,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            seed: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            floor: 0,
        }
    }
}

impl DemoArgs {
    /// Parse positional `[seed] [max_iterations] [floor]`.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut out = Self::default();
        let mut args = args.into_iter();
        if let Some(s) = args.next() {
            out.seed = Some(s.parse().map_err(|_| format!("bad seed {s:?}"))?);
        }
        if let Some(s) = args.next() {
            out.max_iterations = s.parse().map_err(|_| format!("bad max_iterations {s:?}"))?;
        }
        if let Some(s) = args.next() {
            out.floor = s.parse().map_err(|_| format!("bad floor {s:?}"))?;
        }
        if let Some(extra) = args.next() {
            return Err(format!("unexpected argument {extra:?}"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_paths::{PathFinder, SearchEnd};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_builtin_floors() {
        let map = LayeredMap::parse(&FLOORS).unwrap();
        assert_eq!(map.bounds().width(), 20);
        assert_eq!(map.bounds().height(), 8);
        assert_eq!(map.bounds().layers(), 2);
        assert_eq!(map.markers(0), Some((Point::new(1, 1, 0), Point::new(17, 5, 0))));
        assert_eq!(map.markers(1), Some((Point::new(4, 4, 1), Point::new(14, 4, 1))));
        assert_eq!(map.markers(2), None);
        assert_eq!(map.at(Point::new(0, 0, 0)), Some(Terrain::Wall));
        assert_eq!(map.at(Point::new(1, 1, 1)), Some(Terrain::Floor));
        assert_eq!(map.at(Point::new(20, 0, 0)), None);
    }

    #[test]
    fn rejects_bad_plans() {
        assert!(LayeredMap::parse(&[]).is_err());
        assert!(LayeredMap::parse(&["##\n#"]).is_err());
        assert!(LayeredMap::parse(&["##\n##", "##"]).is_err());
        assert!(LayeredMap::parse(&["#x"]).is_err());
    }

    #[test]
    fn builtin_floors_are_solvable() {
        let map = LayeredMap::parse(&FLOORS).unwrap();
        let mut pf = PathFinder::new();
        for z in 0..2 {
            let (start, goal) = map.markers(z).unwrap();
            let path = pf.find_path(&map, start, goal, DEFAULT_MAX_ITERATIONS).unwrap();
            assert_eq!(path.last(), Some(&goal));
            assert!(path.iter().all(|&p| map.can_enter(p)));
            assert_eq!(pf.last_stats().end, SearchEnd::Found);
        }
    }

    #[test]
    fn rubble_spares_markers() {
        let mut map = LayeredMap::parse(&FLOORS).unwrap();
        let walls_before = map.cells.iter().filter(|&&t| t == Terrain::Wall).count();
        map.scatter_rubble(&mut rand::rng(), RUBBLE);
        let walls_after = map.cells.iter().filter(|&&t| t == Terrain::Wall).count();
        assert!(walls_after >= walls_before);
        assert!(walls_after <= walls_before + RUBBLE * 2);
        for z in 0..2 {
            let (start, goal) = map.markers(z).unwrap();
            assert!(map.can_enter(start));
            assert!(map.can_enter(goal));
        }
    }

    #[test]
    fn render_marks_route() {
        let map = LayeredMap::parse(&["#####\n#@.>#\n#####"]).unwrap();
        let mut pf = PathFinder::new();
        let (start, goal) = map.markers(0).unwrap();
        let path = pf.find_path(&map, start, goal, 10).unwrap();
        assert_eq!(map.render_floor(0, &path), "#####\n#@*>#\n#####\n");
    }

    #[test]
    fn demo_args() {
        assert_eq!(DemoArgs::parse(args(&[])), Ok(DemoArgs::default()));
        let parsed = DemoArgs::parse(args(&["7", "50", "1"])).unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.max_iterations, 50);
        assert_eq!(parsed.floor, 1);
        assert!(DemoArgs::parse(args(&["x"])).is_err());
        assert!(DemoArgs::parse(args(&["1", "2", "3", "4"])).is_err());
    }
}
