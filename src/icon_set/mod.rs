//! Named icon sources
//!
//! An icon set maps an icon name (and optionally a style such as `regular`)
//! to an SVG file under the set's root directory.
//!
//! # Example
//!
//! ```rust
//! use svg_inliner::icon_set::{FontAwesome, IconSet};
//!
//! let fa = FontAwesome::new("vendor/fontawesome/svgs");
//! let path = fa.locate("house", Some("regular")).unwrap();
//! assert!(path.ends_with("regular/house.svg"));
//! ```

mod bootstrap;
mod font_awesome;
mod registry;

use std::fmt::Debug;
use std::path::PathBuf;

use thiserror::Error;

pub use bootstrap::Bootstrap;
pub use font_awesome::FontAwesome;
pub use registry::IconSetRegistry;

/// Errors that can occur while locating an icon in a set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IconSetError {
    /// No icon set registered under this name
    #[error("unknown icon set: {name}")]
    UnknownSet { name: String },

    /// The icon set has no such style
    #[error("icon set {set} has no style {style:?}")]
    UnknownStyle { set: String, style: String },

    /// Icon names are single path components
    #[error("invalid icon name: {name:?}")]
    InvalidName { name: String },
}

/// A source of icons addressed by name and optional style
pub trait IconSet: Debug + Send + Sync {
    /// Name the set is registered under
    fn name(&self) -> &str;

    /// Styles the set offers; empty when it has a single style
    fn styles(&self) -> &[&'static str] {
        &[]
    }

    /// Style used when none is requested
    fn default_style(&self) -> Option<&str> {
        None
    }

    /// Path of the SVG file for an icon
    fn locate(&self, name: &str, style: Option<&str>) -> Result<PathBuf, IconSetError>;
}

/// Reject names that would escape the set's directory
pub(crate) fn check_name(name: &str) -> Result<&str, IconSetError> {
    let name = name.trim();
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        return Err(IconSetError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(name.strip_suffix(".svg").unwrap_or(name))
}
