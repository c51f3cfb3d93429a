//! Metadata carried alongside a channel stack.

use fathom_core::Cell;
use indexmap::IndexMap;

/// Optional start/goal overrides plus free-form string attributes.
///
/// Attributes keep insertion order so they print the way they were
/// recorded (e.g. `generated_by`, then `seed`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterMeta {
    /// Suggested start cell.
    pub start: Option<Cell>,
    /// Suggested goal cell.
    pub goal: Option<Cell>,
    /// Provenance and other descriptive key/value pairs.
    pub attributes: IndexMap<String, String>,
}

impl RasterMeta {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start override.
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the goal override.
    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Insert or replace an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(key.into(), value.to_string());
        self
    }

    /// Attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let m = RasterMeta::new()
            .with_attribute("generated_by", "generate_random_grid")
            .with_attribute("seed", 42)
            .with_attribute("alpha", "x");
        let keys: Vec<&str> = m.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["generated_by", "seed", "alpha"]);
        assert_eq!(m.attribute("seed"), Some("42"));
        assert_eq!(m.attribute("missing"), None);
    }
}
