//! # convpath
//!
//! Finds a chain of format converters that turns one of the formats you
//! already have into the format you need.
//!
//! ## Features
//!
//! - Works over a plain list of `from -> to` converters, duplicates allowed
//! - Prefers a direct conversion whenever one exists
//! - Greedy first-found search or a true minimum-hop search
//! - Optional bound on the number of chained conversions
//! - JSON graph loading and JSON/text reports for the command line tool
//!
//! ## Quick Start
//!
//! ```
//! use convpath::{solve_conversion_path, ConversionEdge};
//!
//! let converters = vec![
//!     ConversionEdge::new("png", "webp"),
//!     ConversionEdge::new("webp", "jpg"),
//! ];
//!
//! let path = solve_conversion_path(&converters, &["png"], &"jpg")?
//!     .expect("png reaches jpg");
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.to_string(), "png -> webp -> jpg");
//! # Ok::<(), convpath::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **Index**: converters are bucketed by the format they read and produce
//! 2. **Strategy**: a greedy or breadth-first search walks the index
//! 3. **Solver**: checks the request, runs the strategy, builds the path
//! 4. **Report**: renders the outcome for humans or as JSON

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod edge;
mod error;
mod graph;
mod greedy;
mod index;
mod path;
mod report;
mod shortest;
mod solver;
mod strategy;

pub use edge::{ConversionEdge, Format};
pub use error::{Error, Result};
pub use graph::ConversionGraph;
pub use path::ConversionPath;
pub use report::SolveReport;
pub use solver::{SearchStats, SolveOutcome, Solver, SolverBuilder};
pub use strategy::SearchStrategy;

/// Finds a chain of `converters` turning one of `available` into `target`.
///
/// This is the main entry point for the library. It runs the default greedy
/// search: a direct conversion is returned whenever one exists, otherwise
/// the first chain found depth-first in input order. Use
/// [`Solver::builder()`] for the minimum-hop search or a length bound.
///
/// Returns `Ok(None)` when `target` cannot be reached; a returned path is
/// never empty.
///
/// # Errors
///
/// Returns [`Error::AlreadyAvailable`] if `target` is one of `available`.
///
/// # Examples
///
/// ```
/// use convpath::{solve_conversion_path, ConversionEdge};
///
/// let converters = vec![ConversionEdge::new("gif", "jpg")];
/// assert!(solve_conversion_path(&converters, &["png"], &"jpg")?.is_none());
///
/// let err = solve_conversion_path(&converters, &["jpg"], &"jpg").unwrap_err();
/// assert!(err.is_already_available());
/// # Ok::<(), convpath::Error>(())
/// ```
pub fn solve_conversion_path<F: Format>(
    converters: &[ConversionEdge<F>],
    available: &[F],
    target: &F,
) -> Result<Option<ConversionPath<F>>> {
    Solver::default().solve(converters, available, target)
}
