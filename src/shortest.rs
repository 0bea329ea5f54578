//! Breadth-first conversion search.
//!
//! All available formats form the initial frontier, seeded in the order the
//! caller listed them. Each format is reached at most once, through the first
//! edge (in input order) that gets there, so the returned path has the
//! minimum number of conversions and ties break deterministically.

use crate::edge::Format;
use crate::index::EdgeIndex;
use crate::strategy::{PathSearch, SearchRun};
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// Minimum-hop search.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShortestSearch;

impl PathSearch for ShortestSearch {
    fn search<'r, F: Format>(
        &self,
        index: &EdgeIndex<'r, F>,
        available: &'r [F],
        target: &'r F,
        max_hops: Option<usize>,
    ) -> SearchRun {
        let mut run = SearchRun::default();

        // Format -> edge that first reached it; `None` marks a source.
        let mut reached: HashMap<&F, Option<usize>> = HashMap::with_capacity(index.len() + 1);
        let mut frontier: VecDeque<(&F, usize)> = VecDeque::new();

        for format in available {
            if !reached.contains_key(format) {
                reached.insert(format, None);
                frontier.push_back((format, 0));
            }
        }

        while let Some((format, hops)) = frontier.pop_front() {
            run.expanded += 1;

            if max_hops.is_some_and(|max| hops >= max) {
                continue;
            }

            for &position in index.consuming(format) {
                run.inspected += 1;
                let edge = index.edge(position);

                if reached.contains_key(&edge.to) {
                    continue;
                }
                reached.insert(&edge.to, Some(position));

                if edge.to == *target {
                    trace!(hops = hops + 1, "Reached target");
                    run.positions = Some(backtrack(index, &reached, target));
                    return run;
                }

                frontier.push_back((&edge.to, hops + 1));
            }
        }

        run
    }
}

/// Follows the reaching edges back from `target` to a source.
fn backtrack<F: Format>(
    index: &EdgeIndex<'_, F>,
    reached: &HashMap<&F, Option<usize>>,
    target: &F,
) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut current = target;

    while let Some(position) = reached.get(current).copied().flatten() {
        positions.push(position);
        current = &index.edge(position).from;
    }

    positions.reverse();
    positions
}
