//! Preset gallery for the Figura builder.
//!
//! Loads curated figure presets from a data file, replays them through a
//! [`FigureBuilder`](figura_core::builder::FigureBuilder), and exposes
//! lookup helpers for demo front ends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use figura_core::builder::FigureBuilder;
//! use figura_demo::{apply_preset, load_catalog};
//!
//! let catalog = load_catalog(Path::new("presets/"))?;
//! let preset = catalog.preset("simple_circle").unwrap();
//! let mut builder = FigureBuilder::new();
//! apply_preset(&mut builder, preset)?;
//! let figure = builder.finish();
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{PresetCatalog, PresetDef, StepData, apply_preset, load_catalog};
pub use error::GalleryError;
