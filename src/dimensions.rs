//! Icon size resolution
//!
//! Derives the natural size of an icon from its root element and applies the
//! caller's width/height overrides while keeping the aspect ratio.

use quick_xml::events::BytesStart;

use crate::document::attribute_value;
use crate::units::to_pixels;

/// Width and height of an icon in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both sides can be used as a ratio denominator
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Read the natural size of an icon from its root element
///
/// A valid `viewBox` wins over the `width`/`height` attributes. When neither
/// gives a positive pair the size falls back to 1x1.
pub fn natural_size(root: &BytesStart<'_>) -> Dimensions {
    let width = attribute_value(root, "width");
    let height = attribute_value(root, "height");
    let view_box = attribute_value(root, "viewBox");

    natural_size_from(width.as_deref(), height.as_deref(), view_box.as_deref())
}

/// Same as [`natural_size`], from raw attribute values
pub fn natural_size_from(
    width: Option<&str>,
    height: Option<&str>,
    view_box: Option<&str>,
) -> Dimensions {
    if let Some(size) = view_box.and_then(view_box_size) {
        return size;
    }

    let width = width.map(to_pixels).unwrap_or(0);
    let height = height.map(to_pixels).unwrap_or(0);
    match (to_dimension(width), to_dimension(height)) {
        (Some(width), Some(height)) => Dimensions::new(width, height),
        _ => Dimensions::default(),
    }
}

/// Size spanned by a `viewBox` of the form `xStart yStart xEnd yEnd`
///
/// Tokens may be separated by whitespace, commas or both.
fn view_box_size(view_box: &str) -> Option<Dimensions> {
    let parts: Vec<f64> = view_box
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    if parts.len() != 4 {
        return None;
    }

    let width = (parts[2] - parts[0]).round();
    let height = (parts[3] - parts[1]).round();
    if !width.is_finite() || !height.is_finite() {
        return None;
    }
    match (to_dimension(width as i64), to_dimension(height as i64)) {
        (Some(width), Some(height)) => Some(Dimensions::new(width, height)),
        _ => None,
    }
}

fn to_dimension(pixels: i64) -> Option<u32> {
    u32::try_from(pixels).ok().filter(|&p| p > 0)
}

/// Apply width/height overrides to a natural size
///
/// With one override the other side follows the natural aspect ratio. With
/// both, they are used as given.
pub fn resolve(natural: Dimensions, width: Option<u32>, height: Option<u32>) -> Dimensions {
    let natural = if natural.is_usable() {
        natural
    } else {
        Dimensions::default()
    };

    match (width, height) {
        (None, None) => natural,
        (Some(width), None) => {
            let height = scale(width, natural.height, natural.width);
            Dimensions::new(width.max(1), height)
        }
        (None, Some(height)) => {
            let width = scale(height, natural.width, natural.height);
            Dimensions::new(width, height.max(1))
        }
        (Some(width), Some(height)) => Dimensions::new(width.max(1), height.max(1)),
    }
}

/// `round(value * numerator / denominator)`, never below 1
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = (f64::from(value) * f64::from(numerator) / f64::from(denominator)).round();
    if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        (scaled as u32).max(1)
    }
}
