use std::path::Path;

use figura_core::builder::FigureBuilder;
use figura_core::director::FigureDirector;
use figura_core::error::BuildError;
use figura_core::figure::Figure;
use figura_demo::{GalleryError, apply_preset, load_catalog};

fn presets_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/presets"))
}

// -----------------------------------------------------------------------
// load_catalog tests
// -----------------------------------------------------------------------

#[test]
fn load_catalog_reads_gallery() {
    let catalog = load_catalog(presets_dir()).unwrap();
    assert_eq!(catalog.gallery_title, "Figura Preset Gallery");
    assert_eq!(catalog.presets.len(), 4);

    for id in [
        "simple_circle",
        "textured_square",
        "outlined_triangle",
        "bottomless_pit",
    ] {
        assert!(catalog.preset(id).is_some(), "preset '{id}' should exist");
    }
}

#[test]
fn load_catalog_missing_file() {
    let dir = presets_dir().join("nonexistent");
    let result = load_catalog(&dir);
    assert!(matches!(result, Err(GalleryError::Io(_))));
}

#[test]
fn load_catalog_rejects_malformed_ron() {
    // Unique per process so concurrent checkouts cannot collide.
    let dir =
        std::env::temp_dir().join(format!("figura_demo_bad_catalog_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("gallery.ron"), "(gallery_title: 42)").unwrap();

    let result = load_catalog(&dir);
    let _ = std::fs::remove_dir_all(&dir);
    assert!(matches!(result, Err(GalleryError::Parse { .. })));
}

// -----------------------------------------------------------------------
// Preset replay tests
// -----------------------------------------------------------------------

#[test]
fn simple_circle_preset_builds() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("simple_circle").unwrap();

    let mut builder = FigureBuilder::new();
    apply_preset(&mut builder, preset).unwrap();
    let figure = builder.finish();

    assert_eq!(figure.kind(), "circle");
    assert_eq!(figure.color(), "blue");
    assert_eq!(figure.size(), 5.0);
    assert!(figure.components().is_empty());
}

#[test]
fn textured_square_preset_builds() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("textured_square").unwrap();

    let mut builder = FigureBuilder::new();
    apply_preset(&mut builder, preset).unwrap();
    let figure = builder.finish();

    assert_eq!(figure.kind(), "square");
    assert_eq!(figure.color(), "green");
    assert_eq!(figure.size(), 10.0);
    assert_eq!(figure.components(), ["Texture (wood)"]);
}

#[test]
fn outlined_triangle_preset_builds() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("outlined_triangle").unwrap();

    let mut builder = FigureBuilder::new();
    apply_preset(&mut builder, preset).unwrap();
    let figure = builder.finish();

    assert_eq!(figure.kind(), "triangle");
    assert_eq!(figure.color(), "red");
    assert_eq!(figure.size(), 7.5);
    assert_eq!(figure.components(), ["Texture (metal)", "Outline"]);
}

#[test]
fn one_builder_replays_every_valid_preset() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let mut builder = FigureBuilder::new();
    let mut figures = Vec::new();

    for id in ["simple_circle", "textured_square", "outlined_triangle"] {
        let preset = catalog.require_preset(id).unwrap();
        apply_preset(&mut builder, preset).unwrap();
        figures.push(builder.finish());
    }

    assert_eq!(figures.len(), 3);
    assert_eq!(figures[0].kind(), "circle");
    assert_eq!(figures[1].kind(), "square");
    assert_eq!(figures[2].kind(), "triangle");
    // Components never leak from one replay into the next.
    assert!(figures[0].components().is_empty());
    assert_eq!(figures[1].components().len(), 1);
    assert_eq!(figures[2].components().len(), 2);
}

// -----------------------------------------------------------------------
// Director equivalence tests
// -----------------------------------------------------------------------

#[test]
fn circle_preset_matches_director_recipe() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("simple_circle").unwrap();

    let mut builder = FigureBuilder::new();
    apply_preset(&mut builder, preset).unwrap();
    let from_preset = builder.finish();

    let mut director = FigureDirector::new();
    director.set_builder(FigureBuilder::new());
    director.build_simple_circle().unwrap();
    let from_director = director.builder_mut().unwrap().finish();

    assert_eq!(from_preset, from_director);
}

#[test]
fn square_preset_matches_director_recipe() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("textured_square").unwrap();

    let mut builder = FigureBuilder::new();
    apply_preset(&mut builder, preset).unwrap();
    let from_preset = builder.finish();

    let mut director = FigureDirector::new();
    director.set_builder(FigureBuilder::new());
    director.build_textured_square().unwrap();
    let from_director = director.builder_mut().unwrap().finish();

    assert_eq!(from_preset, from_director);
}

// -----------------------------------------------------------------------
// Error path tests
// -----------------------------------------------------------------------

#[test]
fn bottomless_pit_preset_is_rejected() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("bottomless_pit").unwrap();

    let mut builder = FigureBuilder::new();
    let result = apply_preset(&mut builder, preset);
    assert!(matches!(
        result,
        Err(GalleryError::Build {
            source: BuildError::InvalidSize { size }
        }) if size == -1.0
    ));

    // The builder stays usable after the rejection.
    builder.reset();
    builder.kind("circle").size(1.0).unwrap();
    assert_eq!(builder.finish().kind(), "circle");
}

#[test]
fn unknown_preset_id_is_reported() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let result = catalog.require_preset("dodecahedron");
    assert!(matches!(
        result,
        Err(GalleryError::PresetNotFound { id }) if id == "dodecahedron"
    ));
}

// -----------------------------------------------------------------------
// Figure export tests
// -----------------------------------------------------------------------

#[test]
fn built_figure_round_trips_through_ron() {
    let catalog = load_catalog(presets_dir()).unwrap();
    let preset = catalog.require_preset("outlined_triangle").unwrap();

    let mut builder = FigureBuilder::new();
    apply_preset(&mut builder, preset).unwrap();
    let figure = builder.finish();

    let exported = ron::to_string(&figure).unwrap();
    let restored: Figure = ron::from_str(&exported).unwrap();
    assert_eq!(restored, figure);
}
