//! Gallery runner: loads the preset catalog, replays every preset through
//! one shared builder, and prints the finished figures.
//!
//! Presets that reject a step are reported and skipped; the run always
//! finishes cleanly.
//!
//! Run with: `cargo run --package figura-demo --example gallery`

use std::path::Path;

use figura_core::builder::FigureBuilder;
use figura_demo::{apply_preset, load_catalog};

fn main() {
    let presets_dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/presets"));

    let catalog = load_catalog(presets_dir).expect("failed to load catalog");

    println!(
        "=== {} ===\n{}\n",
        catalog.gallery_title, catalog.gallery_description
    );
    println!("Presets: {}\n", catalog.presets.len());

    let mut builder = FigureBuilder::new();
    let mut built = 0;

    for preset in &catalog.presets {
        println!("--- {} ---", preset.title);
        println!("    {}", preset.summary);

        match apply_preset(&mut builder, preset) {
            Ok(()) => {
                let figure = builder.finish();
                println!("{figure}");
                let exported = ron::to_string(&figure).expect("figure should serialize");
                println!("  export: {exported}\n");
                built += 1;
            }
            Err(err) => {
                println!("  rejected: {err}\n");
                builder.reset();
            }
        }
    }

    println!("{built} of {} presets built.", catalog.presets.len());
}
