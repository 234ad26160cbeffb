//! Presentation attributes for the root `<svg>` element

use indexmap::IndexMap;

use crate::dimensions::Dimensions;
use crate::request::IconRequest;

/// Ordered attribute name -> value mapping written onto the root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: IndexMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, keeping its original position when replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn insert_non_empty(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.insert(name, value);
        }
    }
}

/// Render a style mapping as `key:value;key:value` in declaration order
pub fn serialize_style(css: &IndexMap<String, String>) -> String {
    css.iter()
        .map(|(property, value)| format!("{}:{}", property, value))
        .collect::<Vec<_>>()
        .join(";")
}

/// Build the attributes for an icon's root element
///
/// Request values win over the process-wide defaults; empty results are
/// left out. `dims` is only given when the request asked for a size.
pub fn build_attributes(
    request: &IconRequest,
    dims: Option<Dimensions>,
    default_fill: &str,
    default_class: &str,
) -> AttributeSet {
    let mut attributes = AttributeSet::new();

    attributes.insert_non_empty("class", request.class.as_deref().unwrap_or(default_class));
    attributes.insert_non_empty("style", &serialize_style(&request.css));
    attributes.insert_non_empty("fill", request.fill.as_deref().unwrap_or(default_fill));
    attributes.insert("aria-hidden", "true");
    attributes.insert("role", "img");

    if let Some(dims) = dims {
        attributes.insert("width", dims.width.to_string());
        attributes.insert("height", dims.height.to_string());
    }

    attributes
}
