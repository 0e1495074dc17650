use std::fmt;

use serde::{Deserialize, Serialize};

/// A composite geometric figure assembled piece by piece.
///
/// Fields are private and there is no public constructor besides
/// [`Figure::default`]: populated figures come out of a
/// [`FigureBuilder`](crate::builder::FigureBuilder), and once handed over
/// they are never mutated again. Mutation is scoped to this crate so only
/// the builder can reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    kind: String,
    size: f64,
    color: String,
    #[serde(default)]
    components: Vec<String>,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            kind: "undefined".to_string(),
            size: 0.0,
            color: "white".to_string(),
            components: Vec::new(),
        }
    }
}

impl Figure {
    /// The kind label, e.g. `"circle"`. Defaults to `"undefined"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The size (side length or radius). Defaults to `0.0`.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The color label. Defaults to `"white"`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Component labels in the order they were added.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub(crate) fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }

    pub(crate) fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    pub(crate) fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    pub(crate) fn add_component(&mut self, label: String) {
        self.components.push(label);
    }
}

/// Multi-line human-readable summary. Size prints with two decimal places;
/// an empty component list prints as `(none)`.
impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Figure:")?;
        writeln!(f, "  - kind: {}", self.kind)?;
        writeln!(f, "  - color: {}", self.color)?;
        writeln!(f, "  - size: {:.2}", self.size)?;
        if self.components.is_empty() {
            write!(f, "  - components: (none)")
        } else {
            write!(f, "  - components: {}", self.components.join(", "))
        }
    }
}
