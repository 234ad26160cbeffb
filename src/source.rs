//! Where an icon's markup comes from

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::icon_set::{IconSetError, IconSetRegistry};

/// An icon to render: a file, or an icon looked up in a named set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// A path to an SVG file; may start with an `@alias`
    File(String),
    /// An icon from a registered icon set
    Set {
        set: String,
        name: String,
        style: Option<String>,
    },
}

impl IconSource {
    pub fn file(path: impl Into<String>) -> Self {
        IconSource::File(path.into())
    }

    pub fn set(set: impl Into<String>, name: impl Into<String>) -> Self {
        IconSource::Set {
            set: set.into(),
            name: name.into(),
            style: None,
        }
    }

    /// Pick a style; ignored for plain files
    pub fn with_style(self, style: impl Into<String>) -> Self {
        match self {
            IconSource::Set { set, name, .. } => IconSource::Set {
                set,
                name,
                style: Some(style.into()),
            },
            file => file,
        }
    }

    /// Resolve to a concrete file path
    pub fn resolve(
        &self,
        paths: &PathResolver,
        sets: &IconSetRegistry,
    ) -> Result<PathBuf, IconSetError> {
        match self {
            IconSource::File(path) => Ok(paths.resolve(path)),
            IconSource::Set { set, name, style } => {
                let located = sets.locate(set, name, style.as_deref())?;
                Ok(paths.resolve(&located.to_string_lossy()))
            }
        }
    }
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSource::File(path) => write!(f, "{}", path),
            IconSource::Set {
                set,
                name,
                style: Some(style),
            } => write!(f, "{}:{}:{}", set, style, name),
            IconSource::Set { set, name, .. } => write!(f, "{}:{}", set, name),
        }
    }
}

/// Expands `@alias/...` prefixes and anchors relative paths
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    aliases: BTreeMap<String, PathBuf>,
    base_dir: Option<PathBuf>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory that relative paths are resolved against
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Register an alias; a leading `@` on the name is optional
    pub fn with_alias(mut self, alias: &str, target: impl Into<PathBuf>) -> Self {
        self.add_alias(alias, target);
        self
    }

    pub fn add_alias(&mut self, alias: &str, target: impl Into<PathBuf>) {
        let alias = alias.trim_start_matches('@').to_string();
        self.aliases.insert(alias, target.into());
    }

    /// Turn a symbolic path into a concrete one
    pub fn resolve(&self, symbolic: &str) -> PathBuf {
        if let Some(rest) = symbolic.strip_prefix('@') {
            let (alias, tail) = rest.split_once('/').unwrap_or((rest, ""));
            if let Some(target) = self.aliases.get(alias) {
                let target = if tail.is_empty() {
                    target.clone()
                } else {
                    target.join(tail)
                };
                return self.resolve_path(&target);
            }
        }
        self.resolve_path(Path::new(symbolic))
    }

    /// Anchor a relative path at the base directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
