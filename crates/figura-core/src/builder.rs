use crate::error::BuildError;
use crate::figure::Figure;

/// Assembles a [`Figure`] step by step through a fluent interface.
///
/// Every step returns the builder again so calls chain in order; the only
/// fallible step is [`size`](FigureBuilder::size). The builder owns exactly
/// one in-progress figure at a time and detaches from it on
/// [`finish`](FigureBuilder::finish), so a finished figure is never aliased
/// by later builder calls.
#[derive(Debug)]
pub struct FigureBuilder {
    figure: Figure,
}

impl Default for FigureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureBuilder {
    /// Create a builder holding an all-default in-progress figure.
    pub fn new() -> Self {
        Self {
            figure: Figure::default(),
        }
    }

    /// Discard the in-progress figure and start a default one.
    ///
    /// Never fails. Repeated calls are equivalent to one, though each call
    /// discards whatever was in progress at that point.
    pub fn reset(&mut self) -> &mut Self {
        self.figure = Figure::default();
        self
    }

    /// Set the kind label. Always succeeds.
    pub fn kind(&mut self, kind: &str) -> &mut Self {
        self.figure.set_kind(kind);
        self
    }

    /// Set the color label. Always succeeds.
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.figure.set_color(color);
        self
    }

    /// Set the size.
    ///
    /// Fails with [`BuildError::InvalidSize`] unless `size > 0.0` (NaN fails
    /// that comparison too), in which case the in-progress figure is left
    /// exactly as it was.
    pub fn size(&mut self, size: f64) -> Result<&mut Self, BuildError> {
        if !(size > 0.0) {
            return Err(BuildError::InvalidSize { size });
        }
        self.figure.set_size(size);
        Ok(self)
    }

    /// Append the derived component label `"Texture (<texture>)"`.
    pub fn texture(&mut self, texture: &str) -> &mut Self {
        self.figure.add_component(format!("Texture ({texture})"));
        self
    }

    /// Append an arbitrary component label verbatim.
    pub fn component(&mut self, label: &str) -> &mut Self {
        self.figure.add_component(label.to_string());
        self
    }

    /// Detach and return the in-progress figure, leaving the builder reset.
    ///
    /// Ownership of the result transfers fully to the caller; the builder
    /// retains no reference to it and is immediately ready for a new,
    /// independent build.
    pub fn finish(&mut self) -> Figure {
        std::mem::take(&mut self.figure)
    }
}
