//! Bounded best-first pathfinding for layered grids.
//!
//! [`PathFinder::find_path`] routes a [`Mover`] across one floor of a
//! layered grid, moving in 8 directions with a uniform step cost. The search
//! gives up after a caller-chosen number of iterations, so it is cheap
//! enough to run every turn for every actor.
//!
//! ```
//! use delve_core::{Point, Range};
//! use delve_paths::PathFinder;
//!
//! let map = Range::floor(10, 10);
//! let mover = |p: Point| map.contains(p);
//! let mut pf = PathFinder::new();
//! let path = pf.find_path(&mover, Point::flat(0, 0), Point::flat(3, 1), 100).unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last(), Some(&Point::flat(3, 1)));
//! ```

mod distance;
mod pathfinder;
mod stats;
mod traits;

pub use distance::chebyshev;
pub use pathfinder::PathFinder;
pub use stats::{SearchEnd, SearchStats};
pub use traits::Mover;
