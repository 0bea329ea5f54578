use crate::edge::Format;
use crate::greedy::GreedySearch;
use crate::index::EdgeIndex;
use crate::shortest::ShortestSearch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm used to look for a conversion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Depth-first, first-found search that prefers a direct conversion at
    /// every level. Fast, but a longer chain can win over a shorter one that
    /// sits behind a later candidate.
    #[default]
    Greedy,
    /// Breadth-first search from the available formats. Always returns a
    /// path with the minimum number of conversions.
    Shortest,
}

impl SearchStrategy {
    /// Returns the ID string for this strategy.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Shortest => "shortest",
        }
    }

    /// Returns all available strategies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Greedy, Self::Shortest]
    }

    /// Runs the search this strategy stands for.
    pub(crate) fn run<'r, F: Format>(
        self,
        index: &EdgeIndex<'r, F>,
        available: &'r [F],
        target: &'r F,
        max_hops: Option<usize>,
    ) -> SearchRun {
        match self {
            Self::Greedy => GreedySearch.search(index, available, target, max_hops),
            Self::Shortest => ShortestSearch.search(index, available, target, max_hops),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A path search over an indexed edge list.
///
/// Implementations must be deterministic: the same index, sources and
/// target always produce the same run.
pub(crate) trait PathSearch {
    /// Looks for a chain of edges from any of `available` to `target`.
    ///
    /// `target` is never one of `available`; the solver checks that first.
    /// When `max_hops` is set, no path longer than it may be returned.
    fn search<'r, F: Format>(
        &self,
        index: &EdgeIndex<'r, F>,
        available: &'r [F],
        target: &'r F,
        max_hops: Option<usize>,
    ) -> SearchRun;
}

/// Raw outcome of a search: edge positions plus work counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchRun {
    /// Edge positions in application order, if a path was found
    pub(crate) positions: Option<Vec<usize>>,

    /// Search states opened (greedy frames or BFS formats)
    pub(crate) expanded: usize,

    /// Edges examined while expanding
    pub(crate) inspected: usize,
}
