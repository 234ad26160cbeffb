//! Bootstrap Icons

use std::path::PathBuf;

use super::{check_name, IconSet, IconSetError};

/// Bootstrap Icons: one flat directory of `<name>.svg` files
#[derive(Debug, Clone)]
pub struct Bootstrap {
    root: PathBuf,
}

impl Bootstrap {
    pub const NAME: &'static str = "bootstrap";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IconSet for Bootstrap {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn locate(&self, name: &str, style: Option<&str>) -> Result<PathBuf, IconSetError> {
        let name = check_name(name)?;
        // Variants like `heart-fill` are separate icons, not styles
        let known = |s: &str| s.is_empty() || self.styles().iter().any(|k| *k == s);
        if let Some(style) = style.filter(|s| !known(*s)) {
            return Err(IconSetError::UnknownStyle {
                set: Self::NAME.to_string(),
                style: style.to_string(),
            });
        }
        Ok(self.root.join(format!("{}.svg", name)))
    }
}
