//! Figura Core -- stepwise construction of composite geometric figures.
//!
//! A [`figure::Figure`] is a value record (kind, color, size, components)
//! that cannot be populated directly: clients assemble one through a
//! [`builder::FigureBuilder`], whose steps chain in call order, and take
//! ownership of the result with `finish()`. A [`director::FigureDirector`]
//! optionally replays named step sequences over an assigned builder.
//!
//! # Build Flow
//!
//! ```rust,ignore
//! let mut builder = FigureBuilder::new();
//! let triangle = builder
//!     .kind("triangle")
//!     .color("red")
//!     .size(7.5)?
//!     .texture("metal")
//!     .finish();
//! ```
//!
//! After `finish()` the builder holds a fresh default figure; the returned
//! one belongs entirely to the caller. The only fallible step is `size`,
//! which rejects non-positive values and leaves the in-progress figure
//! untouched on failure.
//!
//! # Key Types
//!
//! - [`figure::Figure`] -- the product; read-only outside this crate.
//! - [`builder::FigureBuilder`] -- fluent assembler with validation at the
//!   size step.
//! - [`director::FigureDirector`] -- canned construction sequences over an
//!   assigned builder.
//! - [`error::BuildError`] -- recoverable construction errors.

pub mod builder;
pub mod director;
pub mod error;
pub mod figure;
