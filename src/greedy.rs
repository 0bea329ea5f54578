//! Depth-first, first-found conversion search.
//!
//! At every level the search collects the edges producing the current
//! target, returns immediately if one of them reads an available format,
//! and otherwise descends into each candidate's source format in input
//! order. Before descending it excludes every edge that reads a format
//! already tried at this level (or the level's own target), so the edge
//! set shrinks strictly on the way down and the search always terminates.
//!
//! The levels live on an explicit stack instead of the call stack, so deep
//! chains cannot overflow it. The exclusions of every open level share one
//! set: each level remembers which formats it added and removes them again
//! when it is popped, so memory stays linear in the depth.

use crate::edge::Format;
use crate::index::EdgeIndex;
use crate::strategy::{PathSearch, SearchRun};
use std::collections::HashSet;
use tracing::trace;

/// Greedy, first-found search.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GreedySearch;

/// One level of the search: a target format and the edges producing it.
#[derive(Debug)]
struct Frame<'r, F> {
    target: &'r F,
    /// Edges producing `target` that survived earlier exclusions
    candidates: Vec<usize>,
    /// Next candidate to descend into
    next: usize,
    /// Formats this level added to the shared exclusion set
    inserted: Vec<&'r F>,
}

/// Result of opening a level.
enum Level<'r, F> {
    /// A candidate reads an available format
    Hit(usize),
    /// Nothing produces the target any more
    DeadEnd,
    /// Candidates exist but none is direct
    Descend(Frame<'r, F>),
}

impl PathSearch for GreedySearch {
    fn search<'r, F: Format>(
        &self,
        index: &EdgeIndex<'r, F>,
        available: &'r [F],
        target: &'r F,
        max_hops: Option<usize>,
    ) -> SearchRun {
        let available: HashSet<&F> = available.iter().collect();
        let mut run = SearchRun::default();
        let mut excluded: HashSet<&F> = HashSet::new();

        let root = match open(index, &available, target, &mut excluded, &mut run) {
            Level::Hit(position) => {
                run.positions = Some(vec![position]);
                return run;
            }
            Level::DeadEnd => return run,
            Level::Descend(frame) => frame,
        };

        let mut stack = vec![root];

        loop {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(&position) = frame.candidates.get(frame.next) else {
                trace!(target_format = %frame.target, "Level exhausted");
                for format in &frame.inserted {
                    excluded.remove(format);
                }
                stack.pop();
                continue;
            };
            frame.next += 1;

            // A hit one level down would yield a path of `depth + 1` edges.
            if max_hops.is_some_and(|max| depth >= max) {
                continue;
            }

            let child_target = &index.edge(position).from;
            match open(index, &available, child_target, &mut excluded, &mut run) {
                Level::Hit(hit) => {
                    let mut positions = Vec::with_capacity(depth + 1);
                    positions.push(hit);
                    // Each frame's current candidate is `next - 1`; walk from the
                    // deepest level up to the root to get application order.
                    positions.extend(stack.iter().rev().map(|f| f.candidates[f.next - 1]));
                    run.positions = Some(positions);
                    return run;
                }
                Level::DeadEnd => {}
                Level::Descend(child) => stack.push(child),
            }
        }

        run
    }
}

fn open<'r, F: Format>(
    index: &EdgeIndex<'r, F>,
    available: &HashSet<&F>,
    target: &'r F,
    excluded: &mut HashSet<&'r F>,
    run: &mut SearchRun,
) -> Level<'r, F> {
    run.expanded += 1;

    let candidates: Vec<usize> = index
        .producing(target)
        .iter()
        .copied()
        .filter(|&position| !excluded.contains(&index.edge(position).from))
        .collect();
    run.inspected += candidates.len();

    trace!(
        target_format = %target,
        candidates = candidates.len(),
        "Opened level"
    );

    if candidates.is_empty() {
        return Level::DeadEnd;
    }

    if let Some(&hit) = candidates
        .iter()
        .find(|&&position| available.contains(&index.edge(position).from))
    {
        return Level::Hit(hit);
    }

    let inserted: Vec<&F> = candidates
        .iter()
        .map(|&position| &index.edge(position).from)
        .chain(std::iter::once(target))
        .filter(|&format| excluded.insert(format))
        .collect();

    Level::Descend(Frame {
        target,
        candidates,
        next: 0,
        inserted,
    })
}
