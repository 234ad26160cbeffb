//! Font Awesome free SVGs

use std::path::PathBuf;

use super::{check_name, IconSet, IconSetError};

const STYLES: &[&str] = &["solid", "regular", "brands"];

/// Font Awesome: `<style>/<name>.svg` under the root directory
#[derive(Debug, Clone)]
pub struct FontAwesome {
    root: PathBuf,
}

impl FontAwesome {
    pub const NAME: &'static str = "font-awesome";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IconSet for FontAwesome {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn styles(&self) -> &[&'static str] {
        STYLES
    }

    fn default_style(&self) -> Option<&str> {
        Some("solid")
    }

    fn locate(&self, name: &str, style: Option<&str>) -> Result<PathBuf, IconSetError> {
        let name = check_name(name)?;
        let style = match style.filter(|s| !s.is_empty()) {
            Some(style) => self
                .styles()
                .iter()
                .copied()
                .find(|s| s.eq_ignore_ascii_case(style))
                .ok_or_else(|| IconSetError::UnknownStyle {
                    set: Self::NAME.to_string(),
                    style: style.to_string(),
                })?,
            None => self.default_style().unwrap_or(STYLES[0]),
        };
        Ok(self.root.join(style).join(format!("{}.svg", name)))
    }
}
