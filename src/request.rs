//! Per-render icon options

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::units::to_pixels;

/// Errors raised while building a request from loose properties
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("unknown icon property: {name}")]
    UnknownProperty { name: String },

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Options for rendering a single icon
///
/// ```rust
/// use svg_inliner::IconRequest;
///
/// let request = IconRequest::new()
///     .with_width(32)
///     .with_class("icon")
///     .with_css("vertical-align", "middle");
/// assert!(request.has_size());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub class: Option<String>,
    pub fill: Option<String>,
    pub title: Option<String>,
    /// Inline style declarations, in output order
    pub css: IndexMap<String, String>,
}

impl IconRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from name/value pairs, rejecting unknown names
    ///
    /// `width` and `height` accept CSS lengths, `css` accepts
    /// `property:value` declarations separated by `;`.
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::new();
        for (name, value) in properties {
            let name = name.as_ref();
            let value: String = value.into();
            match name {
                "width" => request.width = Some(parse_length(name, &value)?),
                "height" => request.height = Some(parse_length(name, &value)?),
                "class" => request.class = Some(value),
                "fill" => request.fill = Some(value),
                "title" => request.title = Some(value),
                "css" => {
                    for (property, css_value) in parse_declarations(name, &value)? {
                        request.css.insert(property, css_value);
                    }
                }
                _ => {
                    return Err(RequestError::UnknownProperty {
                        name: name.to_string(),
                    })
                }
            }
        }
        Ok(request)
    }

    /// Set the requested width in pixels
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the requested height in pixels
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set width and height to the same value
    pub fn with_size(self, size: u32) -> Self {
        self.with_width(size).with_height(size)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the fill color; an empty string disables fill
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an inline style declaration
    pub fn with_css(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.css.insert(property.into(), value.into());
        self
    }

    /// Whether a width or height override was requested
    pub fn has_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

fn parse_length(name: &str, value: &str) -> Result<u32, RequestError> {
    u32::try_from(to_pixels(value))
        .ok()
        .filter(|&pixels| pixels > 0)
        .ok_or_else(|| RequestError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn parse_declarations(name: &str, value: &str) -> Result<Vec<(String, String)>, RequestError> {
    value
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| match decl.split_once(':') {
            Some((property, css_value)) if !property.trim().is_empty() => {
                Ok((property.trim().to_string(), css_value.trim().to_string()))
            }
            _ => Err(RequestError::InvalidValue {
                name: name.to_string(),
                value: decl.to_string(),
            }),
        })
        .collect()
}
