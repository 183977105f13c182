//! Bounded best-first search on a layered grid.
//!
//! The search stays on the start floor and moves in 8 directions with a
//! uniform step cost. Frontier points are ranked by their depth in the
//! search tree plus the Chebyshev distance to the goal.

use std::collections::{HashMap, HashSet};

use delve_core::Point;

use crate::distance::chebyshev;
use crate::stats::{SearchEnd, SearchStats};
use crate::traits::Mover;

/// Best-first pathfinder with a hard iteration cap.
///
/// `PathFinder` owns its working sets and clears them at the start of every
/// [`find_path`](Self::find_path) call, so one instance can serve any number
/// of searches without allocating after warm-up. Nothing from one search is
/// visible to the next.
#[derive(Debug, Default)]
pub struct PathFinder {
    // frontier in insertion order; ties go to the earliest entry
    open: Vec<Point>,
    open_set: HashSet<Point>,
    closed: HashSet<Point>,
    parent: HashMap<Point, Point>,
    // memoized depth + heuristic, dropped whenever the parent changes
    cost_memo: HashMap<Point, i32>,
    stats: SearchStats,
}

impl PathFinder {
    /// Create a new `PathFinder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `PathFinder` with room for searches touching about `cells`
    /// points.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            open: Vec::with_capacity(cells),
            open_set: HashSet::with_capacity(cells),
            closed: HashSet::with_capacity(cells),
            parent: HashMap::with_capacity(cells),
            cost_memo: HashMap::with_capacity(cells),
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a route for `mover` from `start` to `goal`.
    ///
    /// Returns the points to step through, excluding `start` and ending with
    /// `goal`, or `None` if the frontier runs dry or `max_iterations`
    /// expansions pass without reaching the goal. `start == goal` yields an
    /// empty route.
    ///
    /// Neighbors are only generated on `start.z`. The goal cell is evaluated
    /// even when `mover` refuses it, so a route can end on an occupied or
    /// otherwise blocked goal.
    ///
    /// Even an adjacent goal needs two iterations: one to expand `start` and
    /// one to expand the goal.
    pub fn find_path<M: Mover + ?Sized>(
        &mut self,
        mover: &M,
        start: Point,
        goal: Point,
        max_iterations: i32,
    ) -> Option<Vec<Point>> {
        self.reset();

        if start == goal {
            self.stats.end = SearchEnd::Trivial;
            return Some(Vec::new());
        }

        self.push_open(start);

        while self.stats.iterations < max_iterations && !self.open.is_empty() {
            self.stats.iterations += 1;

            let current = self.pop_closest(goal);
            self.closed.insert(current);
            self.stats.expanded += 1;
            log::trace!("expanding {current} toward {goal}");

            if current == goal {
                self.stats.end = SearchEnd::Found;
                self.stats.frontier_left = self.open.len();
                return Some(self.build_path(start, goal));
            }

            self.check_neighbors(mover, current, goal);
        }

        self.stats.frontier_left = self.open.len();
        self.stats.end = if self.open.is_empty() {
            SearchEnd::Exhausted
        } else {
            SearchEnd::CapReached
        };
        log::debug!(
            "no path {start} -> {goal}: {:?} after {} iterations",
            self.stats.end,
            self.stats.iterations
        );
        None
    }

    fn reset(&mut self) {
        self.open.clear();
        self.open_set.clear();
        self.closed.clear();
        self.parent.clear();
        self.cost_memo.clear();
        self.stats = SearchStats::default();
    }

    fn push_open(&mut self, p: Point) {
        self.open.push(p);
        self.open_set.insert(p);
    }

    /// Remove and return the frontier point with the lowest total cost.
    /// The frontier must not be empty.
    fn pop_closest(&mut self, goal: Point) -> Point {
        let mut best = 0;
        let first = self.open[0];
        let mut best_cost = self.total_cost(first, goal);
        for i in 1..self.open.len() {
            let p = self.open[i];
            let cost = self.total_cost(p, goal);
            if cost < best_cost {
                best = i;
                best_cost = cost;
            }
        }
        let p = self.open.remove(best);
        self.open_set.remove(&p);
        p
    }

    fn check_neighbors<M: Mover + ?Sized>(&mut self, mover: &M, current: Point, goal: Point) {
        for n in current.neighbors_8() {
            // wrapped around an i32 edge
            if chebyshev(current, n) != 1 {
                continue;
            }
            if self.closed.contains(&n) || (!mover.can_enter(n) && n != goal) {
                continue;
            }
            if self.open_set.contains(&n) {
                self.reparent_if_shorter(n, current);
            } else {
                self.reparent(n, current);
                self.push_open(n);
            }
        }
    }

    /// Move `child` under `parent` if that makes it strictly shallower.
    ///
    /// Only depth is compared; the heuristic plays no part here.
    fn reparent_if_shorter(&mut self, child: Point, parent: Point) {
        let Some(&original) = self.parent.get(&child) else {
            return;
        };
        let before = self.depth(child);
        self.reparent(child, parent);
        if self.depth(child) >= before {
            self.reparent(child, original);
        }
    }

    fn reparent(&mut self, child: Point, parent: Point) {
        self.parent.insert(child, parent);
        self.cost_memo.remove(&child);
    }

    /// Number of parent hops from `p` back to the start.
    fn depth(&self, p: Point) -> i32 {
        let mut depth = 0;
        let mut cur = p;
        while let Some(&up) = self.parent.get(&cur) {
            depth += 1;
            cur = up;
        }
        depth
    }

    fn total_cost(&mut self, p: Point, goal: Point) -> i32 {
        if let Some(&cost) = self.cost_memo.get(&p) {
            return cost;
        }
        let cost = self.depth(p).saturating_add(chebyshev(p, goal));
        self.cost_memo.insert(p, cost);
        cost
    }

    fn build_path(&self, start: Point, goal: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = goal;
        while cur != start {
            path.push(cur);
            match self.parent.get(&cur) {
                Some(&up) => cur = up,
                None => break,
            }
        }
        path.reverse();
        path
    }
}
