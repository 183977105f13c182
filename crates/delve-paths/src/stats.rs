/// How the most recent search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEnd {
    /// Start and goal were the same point; nothing was searched.
    Trivial,
    /// The goal was expanded and a path was built.
    Found,
    /// The frontier ran dry before the goal was reached.
    #[default]
    Exhausted,
    /// The iteration cap was hit with points still on the frontier.
    CapReached,
}

/// Summary of the most recent [`PathFinder::find_path`] call.
///
/// A caller that got `None` back can look at [`end`](Self::end) to decide
/// between retrying with a larger cap and giving up.
///
/// [`PathFinder::find_path`]: crate::PathFinder::find_path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Loop iterations consumed.
    pub iterations: i32,
    /// Points moved to the closed set.
    pub expanded: usize,
    /// Points still on the frontier when the search stopped.
    pub frontier_left: usize,
    /// Why the search stopped.
    pub end: SearchEnd,
}

impl SearchStats {
    /// Whether the search produced a path.
    #[inline]
    pub fn found(&self) -> bool {
        matches!(self.end, SearchEnd::Found | SearchEnd::Trivial)
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            iterations: 12,
            expanded: 12,
            frontier_left: 30,
            end: SearchEnd::CapReached,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
