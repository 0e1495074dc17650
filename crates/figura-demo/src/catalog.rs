use serde::Deserialize;
use std::path::Path;

use figura_core::builder::FigureBuilder;

use crate::error::GalleryError;

/// Top-level catalog listing all figure presets.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetCatalog {
    pub gallery_title: String,
    pub gallery_description: String,
    pub presets: Vec<PresetDef>,
}

/// An entry in the catalog: one named figure recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetDef {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub steps: Vec<StepData>,
}

/// A single builder step (mirrors the `FigureBuilder` surface).
#[derive(Debug, Clone, Deserialize)]
pub enum StepData {
    Kind(String),
    Color(String),
    Size(f64),
    Texture(String),
    Component(String),
}

impl PresetCatalog {
    /// Look up a preset by ID.
    pub fn preset(&self, id: &str) -> Option<&PresetDef> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Look up a preset by ID, failing with [`GalleryError::PresetNotFound`].
    pub fn require_preset(&self, id: &str) -> Result<&PresetDef, GalleryError> {
        self.preset(id).ok_or_else(|| GalleryError::PresetNotFound {
            id: id.to_string(),
        })
    }
}

/// Load the preset catalog from a `gallery.ron` file.
pub fn load_catalog(presets_dir: &Path) -> Result<PresetCatalog, GalleryError> {
    let path = presets_dir.join("gallery.ron");
    let content = std::fs::read_to_string(&path)?;
    ron::from_str(&content).map_err(|e| GalleryError::Parse {
        file: path,
        detail: e.to_string(),
    })
}

/// Replay a preset's steps onto a builder, in order.
///
/// The first rejected step aborts the replay. Earlier steps stay applied,
/// so callers that want a clean slate after a failure should reset the
/// builder themselves.
pub fn apply_preset(builder: &mut FigureBuilder, preset: &PresetDef) -> Result<(), GalleryError> {
    for step in &preset.steps {
        match step {
            StepData::Kind(kind) => {
                builder.kind(kind);
            }
            StepData::Color(color) => {
                builder.color(color);
            }
            StepData::Size(size) => {
                builder.size(*size)?;
            }
            StepData::Texture(texture) => {
                builder.texture(texture);
            }
            StepData::Component(label) => {
                builder.component(label);
            }
        }
    }
    Ok(())
}
