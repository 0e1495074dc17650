use crate::builder::FigureBuilder;
use crate::error::BuildError;

/// Drives a [`FigureBuilder`] through fixed construction recipes.
///
/// The director holds at most one builder at a time. Every recipe requires a
/// builder to have been assigned first and fails with
/// [`BuildError::NoBuilder`] otherwise. Recipes only sequence builder steps;
/// retrieving the finished figure stays with the caller, via
/// [`builder_mut`](FigureDirector::builder_mut) or
/// [`take_builder`](FigureDirector::take_builder).
#[derive(Debug)]
pub struct FigureDirector {
    builder: Option<FigureBuilder>,
}

impl Default for FigureDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureDirector {
    /// Create a director with no builder assigned.
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Assign the builder the recipes will drive, replacing any previous one.
    pub fn set_builder(&mut self, builder: FigureBuilder) {
        self.builder = Some(builder);
    }

    /// Whether a builder is currently assigned.
    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Access the assigned builder, for retrieving results or layering extra
    /// steps on top of a recipe.
    pub fn builder_mut(&mut self) -> Result<&mut FigureBuilder, BuildError> {
        self.builder.as_mut().ok_or(BuildError::NoBuilder)
    }

    /// Detach and return the assigned builder, if any.
    pub fn take_builder(&mut self) -> Option<FigureBuilder> {
        self.builder.take()
    }

    /// Recipe: a plain blue circle of size 5.
    pub fn build_simple_circle(&mut self) -> Result<(), BuildError> {
        let builder = self.builder.as_mut().ok_or(BuildError::NoBuilder)?;
        builder.kind("circle").color("blue").size(5.0)?;
        Ok(())
    }

    /// Recipe: a green square of size 10 with a wood texture.
    pub fn build_textured_square(&mut self) -> Result<(), BuildError> {
        let builder = self.builder.as_mut().ok_or(BuildError::NoBuilder)?;
        builder.kind("square").color("green").size(10.0)?.texture("wood");
        Ok(())
    }
}
