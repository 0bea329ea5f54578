use crate::edge::{ConversionEdge, Format};
use crate::error::{Error, Result};
use crate::index::EdgeIndex;
use crate::path::ConversionPath;
use crate::strategy::SearchStrategy;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Strategy that ran
    pub strategy: SearchStrategy,

    /// Search states opened (greedy levels or breadth-first formats)
    pub expanded: usize,

    /// Edges examined while expanding
    pub inspected: usize,

    /// Number of edges in the input
    pub total_edges: usize,

    /// Wall-clock time spent searching
    pub duration: Duration,
}

/// A solved (or unsolvable) request together with its statistics.
#[derive(Debug, Clone)]
pub struct SolveOutcome<F> {
    /// The conversion path, or `None` if the target is unreachable
    pub path: Option<ConversionPath<F>>,

    /// Search statistics
    pub stats: SearchStats,
}

/// Finds conversion paths over a list of converters.
///
/// Use [`Solver::builder()`] to pick a strategy or bound the path length,
/// or [`Solver::default()`] for the greedy search without limits.
///
/// A solver holds no per-call state and can be shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Solver {
    /// Search algorithm
    pub strategy: SearchStrategy,

    /// Longest path, in conversions, the solver may return
    pub max_hops: Option<usize>,
}

impl Solver {
    /// Creates a new solver builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use convpath::{SearchStrategy, Solver};
    ///
    /// let solver = Solver::builder()
    ///     .strategy(SearchStrategy::Shortest)
    ///     .max_hops(4)
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    #[must_use]
    pub fn builder() -> SolverBuilder {
        SolverBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_hops` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_hops == Some(0) {
            return Err(Error::config("max_hops must be greater than 0"));
        }

        Ok(())
    }

    /// Finds a chain of `edges` converting one of `available` into `target`.
    ///
    /// Returns `Ok(None)` when no such chain exists. The returned path is
    /// never empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyAvailable`] if `target` is one of `available`.
    ///
    /// # Examples
    ///
    /// ```
    /// use convpath::{ConversionEdge, Solver};
    ///
    /// let edges = vec![
    ///     ConversionEdge::new("png", "webp"),
    ///     ConversionEdge::new("webp", "jpg"),
    /// ];
    ///
    /// let path = Solver::default().solve(&edges, &["png"], &"jpg")?.unwrap();
    /// assert_eq!(path.to_string(), "png -> webp -> jpg");
    /// # Ok::<(), convpath::Error>(())
    /// ```
    pub fn solve<F: Format>(
        &self,
        edges: &[ConversionEdge<F>],
        available: &[F],
        target: &F,
    ) -> Result<Option<ConversionPath<F>>> {
        self.solve_with_stats(edges, available, target)
            .map(|outcome| outcome.path)
    }

    /// Like [`Solver::solve`], but also reports how much work the search did.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyAvailable`] if `target` is one of `available`.
    #[instrument(
        skip_all,
        fields(target_format = %target, strategy = %self.strategy, edges = edges.len())
    )]
    pub fn solve_with_stats<F: Format>(
        &self,
        edges: &[ConversionEdge<F>],
        available: &[F],
        target: &F,
    ) -> Result<SolveOutcome<F>> {
        if available.contains(target) {
            return Err(Error::already_available(target));
        }

        let start = Instant::now();
        let index = EdgeIndex::new(edges);
        let run = self.strategy.run(&index, available, target, self.max_hops);
        let duration = start.elapsed();

        let path = run.positions.as_ref().map(|positions| {
            ConversionPath::from_edges(
                positions
                    .iter()
                    .map(|&position| index.edge(position).clone())
                    .collect(),
            )
        });

        match &path {
            Some(path) => debug!(
                hops = path.len(),
                expanded = run.expanded,
                "Found conversion path: {}",
                path
            ),
            None => debug!(expanded = run.expanded, "No conversion path"),
        }

        Ok(SolveOutcome {
            path,
            stats: SearchStats {
                strategy: self.strategy,
                expanded: run.expanded,
                inspected: run.inspected,
                total_edges: edges.len(),
                duration,
            },
        })
    }
}

/// Builder for creating a [`Solver`].
#[derive(Debug, Default)]
pub struct SolverBuilder {
    strategy: Option<SearchStrategy>,
    max_hops: Option<usize>,
}

impl SolverBuilder {
    /// Sets the search strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Bounds the number of conversions in a returned path.
    ///
    /// Must be greater than zero.
    #[must_use]
    pub fn max_hops(mut self, hops: usize) -> Self {
        self.max_hops = Some(hops);
        self
    }

    /// Builds the solver.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Solver> {
        let solver = Solver {
            strategy: self.strategy.unwrap_or_default(),
            max_hops: self.max_hops,
        };

        solver.validate()?;
        Ok(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&'static str, &'static str)]) -> Vec<ConversionEdge<&'static str>> {
        pairs.iter().map(|&(from, to)| ConversionEdge::new(from, to)).collect()
    }

    fn shortest() -> Solver {
        Solver::builder()
            .strategy(SearchStrategy::Shortest)
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_solver() {
        let solver = Solver::builder().build().unwrap();
        assert_eq!(solver, Solver::default());
        assert_eq!(solver.strategy, SearchStrategy::Greedy);
        assert_eq!(solver.max_hops, None);
    }

    #[test]
    fn test_zero_max_hops_rejected() {
        let result = Solver::builder().max_hops(0).build();
        assert!(result.unwrap_err().is_config());
    }

    #[test]
    fn test_single_direct_edge() {
        let edges = edges(&[("png", "jpg")]);
        let path = Solver::default().solve(&edges, &["png"], &"jpg").unwrap().unwrap();
        assert_eq!(path.edges(), &[ConversionEdge::new("png", "jpg")]);
    }

    #[test]
    fn test_two_step_chain() {
        let edges = edges(&[("png", "webp"), ("webp", "jpg")]);
        let path = Solver::default().solve(&edges, &["png"], &"jpg").unwrap().unwrap();
        assert_eq!(
            path.edges(),
            &[ConversionEdge::new("png", "webp"), ConversionEdge::new("webp", "jpg")]
        );
    }

    #[test]
    fn test_unconnected_source_is_none() {
        let edges = edges(&[("gif", "jpg")]);
        let result = Solver::default().solve(&edges, &["png"], &"jpg").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_target_already_available() {
        let edges = edges(&[("png", "jpg")]);
        for solver in [Solver::default(), shortest()] {
            let err = solver.solve(&edges, &["jpg"], &"jpg").unwrap_err();
            assert!(err.is_already_available());
        }
    }

    #[test]
    fn test_empty_edges_still_checks_precondition() {
        let edges: Vec<ConversionEdge<&str>> = Vec::new();
        assert!(Solver::default().solve(&edges, &["jpg"], &"jpg").is_err());
        assert!(Solver::default().solve(&edges, &["png"], &"jpg").unwrap().is_none());
    }

    #[test]
    fn test_direct_route_beats_other_branch() {
        let edges = edges(&[("a", "z"), ("b", "z")]);
        let path = Solver::default().solve(&edges, &["b"], &"z").unwrap().unwrap();
        assert_eq!(path.edges(), &[ConversionEdge::new("b", "z")]);
    }

    #[test]
    fn test_direct_edge_preferred_over_chain() {
        let edges = edges(&[("png", "webp"), ("webp", "jpg"), ("png", "jpg")]);
        for solver in [Solver::default(), shortest()] {
            let path = solver.solve(&edges, &["png"], &"jpg").unwrap().unwrap();
            assert_eq!(path.len(), 1);
        }
    }

    #[test]
    fn test_paths_are_well_formed() {
        let edges = edges(&[
            ("raw", "tiff"),
            ("tiff", "png"),
            ("png", "webp"),
            ("bmp", "png"),
            ("webp", "avif"),
            ("tiff", "avif"),
        ]);
        let available = ["raw", "bmp"];

        for solver in [Solver::default(), shortest()] {
            let path = solver.solve(&edges, &available, &"avif").unwrap().unwrap();
            assert!(path.is_valid_for(&available, &"avif"));
        }
    }

    #[test]
    fn test_solve_is_repeatable() {
        let edges = edges(&[("a", "b"), ("b", "c"), ("a", "c"), ("c", "d")]);
        let first = Solver::default().solve(&edges, &["a"], &"d").unwrap();
        let second = Solver::default().solve(&edges, &["a"], &"d").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_greedy_and_shortest_diverge() {
        let edges = edges(&[
            ("x", "z"),
            ("y", "z"),
            ("w", "x"),
            ("src", "w"),
            ("src", "y"),
        ]);

        let greedy = Solver::default().solve(&edges, &["src"], &"z").unwrap().unwrap();
        let best = shortest().solve(&edges, &["src"], &"z").unwrap().unwrap();

        assert_eq!(greedy.len(), 3);
        assert_eq!(best.len(), 2);
        assert_eq!(best.to_string(), "src -> y -> z");
    }

    #[test]
    fn test_max_hops_bounds_both_strategies() {
        let edges = edges(&[("a", "b"), ("b", "c"), ("c", "d")]);
        for strategy in SearchStrategy::all() {
            let solver = Solver::builder()
                .strategy(*strategy)
                .max_hops(2)
                .build()
                .unwrap();
            assert!(solver.solve(&edges, &["a"], &"d").unwrap().is_none());
        }
    }

    #[test]
    fn test_stats_are_reported() {
        let edges = edges(&[("png", "webp"), ("webp", "jpg")]);
        let outcome = Solver::default()
            .solve_with_stats(&edges, &["png"], &"jpg")
            .unwrap();

        assert!(outcome.path.is_some());
        assert_eq!(outcome.stats.strategy, SearchStrategy::Greedy);
        assert_eq!(outcome.stats.total_edges, 2);
        assert_eq!(outcome.stats.expanded, 2);
        assert_eq!(outcome.stats.inspected, 2);
    }

    #[test]
    fn test_owned_string_formats() {
        let edges: Vec<ConversionEdge<String>> = vec![("md", "html").into(), ("html", "pdf").into()];
        let available = vec!["md".to_string()];

        let path = Solver::default()
            .solve(&edges, &available, &"pdf".to_string())
            .unwrap()
            .unwrap();
        assert_eq!(path.source(), "md");
        assert_eq!(path.target(), "pdf");
    }

    #[test]
    fn test_duplicate_edges_are_allowed() {
        let edges = edges(&[("png", "jpg"), ("png", "jpg"), ("gif", "png"), ("gif", "png")]);

        let direct = Solver::default().solve(&edges, &["png"], &"jpg").unwrap().unwrap();
        assert_eq!(direct.edges(), &[ConversionEdge::new("png", "jpg")]);

        for solver in [Solver::default(), shortest()] {
            let chain = solver.solve(&edges, &["gif"], &"jpg").unwrap().unwrap();
            assert_eq!(chain.to_string(), "gif -> png -> jpg");
        }
    }

    /// Straightforward recursive form of the greedy search, edge lists copied
    /// per level.
    fn recursive_reference(
        edges: &[ConversionEdge<u8>],
        available: &[u8],
        target: u8,
    ) -> Option<Vec<ConversionEdge<u8>>> {
        let to_target: Vec<_> = edges.iter().filter(|e| e.to == target).cloned().collect();
        if to_target.is_empty() {
            return None;
        }

        if let Some(direct) = to_target.iter().find(|e| available.contains(&e.from)) {
            return Some(vec![direct.clone()]);
        }

        let used: Vec<u8> = to_target
            .iter()
            .map(|e| e.from)
            .chain(std::iter::once(target))
            .collect();
        let remaining: Vec<_> = edges
            .iter()
            .filter(|e| !used.contains(&e.from))
            .cloned()
            .collect();

        to_target.iter().find_map(|edge| {
            recursive_reference(&remaining, available, edge.from).map(|mut path| {
                path.push(edge.clone());
                path
            })
        })
    }

    #[test]
    fn test_random_graphs_match_recursive_reference() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        const FORMATS: u8 = 7;
        let mut rng = StdRng::seed_from_u64(42);
        let mut solved = 0;

        for _ in 0..3_000 {
            let edge_count = rng.gen_range(0..14);
            let edges: Vec<ConversionEdge<u8>> = (0..edge_count)
                .map(|_| ConversionEdge::new(rng.gen_range(0..FORMATS), rng.gen_range(0..FORMATS)))
                .collect();

            let target = rng.gen_range(0..FORMATS);
            let mut available: Vec<u8> = (0..rng.gen_range(1..4))
                .map(|_| rng.gen_range(0..FORMATS))
                .filter(|&format| format != target)
                .collect();
            if available.is_empty() {
                available.push((target + 1) % FORMATS);
            }

            let greedy = Solver::default().solve(&edges, &available, &target).unwrap();
            let best = shortest().solve(&edges, &available, &target).unwrap();

            assert_eq!(
                greedy.as_ref().map(|path| path.edges().to_vec()),
                recursive_reference(&edges, &available, target),
                "edges={edges:?} available={available:?} target={target}"
            );

            if let Some(path) = &greedy {
                solved += 1;
                assert!(path.is_valid_for(&available, &target));

                let best = best.expect("breadth-first finds whatever greedy finds");
                assert!(best.is_valid_for(&available, &target));
                assert!(best.len() <= path.len());
            }
        }

        assert!(solved > 0);
    }
}
