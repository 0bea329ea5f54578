//! Basic example of using convpath as a library
//!
//! This example shows the simplest way to find a conversion path.

use convpath::{solve_conversion_path, ConversionEdge};

fn main() -> anyhow::Result<()> {
    // Converters we have installed
    let converters = vec![
        ConversionEdge::new("png", "webp"),
        ConversionEdge::new("webp", "jpg"),
        ConversionEdge::new("gif", "png"),
        ConversionEdge::new("jpg", "pdf"),
    ];

    match solve_conversion_path(&converters, &["gif"], &"pdf")? {
        Some(path) => {
            println!("✓ {} conversions: {}", path.len(), path);
            for (step, edge) in path.iter().enumerate() {
                println!("  {}. {}", step + 1, edge);
            }
        }
        None => println!("✗ gif cannot be turned into pdf"),
    }

    Ok(())
}
