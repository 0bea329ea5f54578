//! Comparing the greedy and shortest search strategies
//!
//! The greedy search returns the first chain it finds, which is not always
//! the one with the fewest conversions.

use convpath::{ConversionGraph, SearchStrategy, SolveReport, Solver};

const GRAPH: &str = r#"{
    "edges": [
        { "from": "tiff", "to": "jpg" },
        { "from": "webp", "to": "jpg" },
        { "from": "bmp",  "to": "tiff" },
        { "from": "raw",  "to": "bmp" },
        { "from": "raw",  "to": "webp" }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    let graph = ConversionGraph::from_json_str(GRAPH)?;
    let available = vec!["raw".to_string()];
    let target = "jpg".to_string();

    for strategy in SearchStrategy::all() {
        let solver = Solver::builder().strategy(*strategy).build()?;
        let outcome = solver.solve_with_stats(graph.edges(), &available, &target)?;
        let report = SolveReport::new(target.clone(), available.clone(), outcome);

        println!("{:<10} {}", strategy.id(), report.render_text());
        report.print_summary();
    }

    Ok(())
}
