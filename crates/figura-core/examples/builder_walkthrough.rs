//! Builder walkthrough: the two stock director recipes, a hand-chained
//! figure, and recovery from a rejected size.
//!
//! Run with: `cargo run -p figura-core --example builder_walkthrough`

use figura_core::builder::FigureBuilder;
use figura_core::director::FigureDirector;

fn main() {
    let mut director = FigureDirector::new();
    director.set_builder(FigureBuilder::new());

    // --- Recipe: simple circle ---

    println!("=== Director recipe: simple circle ===");
    director.build_simple_circle().unwrap();
    let circle = director.builder_mut().unwrap().finish();
    println!("{circle}\n");

    // --- Recipe: textured square, extended by the client ---

    println!("=== Director recipe: textured square, plus a client step ===");
    director.build_textured_square().unwrap();
    director.builder_mut().unwrap().component("Frame");
    let square = director.builder_mut().unwrap().finish();
    println!("{square}\n");

    // --- Hand-chained build, no director ---

    println!("=== Client-chained triangle ===");
    let mut builder = director.take_builder().unwrap();
    let triangle = builder
        .kind("triangle")
        .color("red")
        .size(7.5)
        .unwrap()
        .texture("metal")
        .component("Outline")
        .finish();
    println!("{triangle}\n");

    // --- A rejected size leaves the builder usable ---

    println!("=== Rejected size ===");
    builder.kind("hexagon").color("black");
    match builder.size(-1.0) {
        Ok(_) => unreachable!("negative size must be rejected"),
        Err(err) => println!("build step failed: {err}"),
    }

    // The failed step changed nothing; discard the draft and build clean.
    builder.reset();
    let recovered = builder
        .kind("circle")
        .color("yellow")
        .size(1.0)
        .unwrap()
        .finish();
    println!("recovered with a fresh build:");
    println!("{recovered}");
}
