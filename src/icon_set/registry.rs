//! Registry of icon sets by name

use std::collections::HashMap;
use std::path::PathBuf;

use super::{Bootstrap, FontAwesome, IconSet, IconSetError};

/// Icon sets available to a renderer
#[derive(Debug, Default)]
pub struct IconSetRegistry {
    sets: HashMap<String, Box<dyn IconSet>>,
}

impl IconSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from `set name -> root directory` pairs
    ///
    /// Only the built-in sets are recognized; other names are skipped and
    /// reported back.
    pub fn from_roots<'a>(
        roots: impl IntoIterator<Item = (&'a str, &'a PathBuf)>,
    ) -> (Self, Vec<String>) {
        let mut registry = Self::new();
        let mut unknown = Vec::new();
        for (name, root) in roots {
            match name {
                Bootstrap::NAME => registry.register(Bootstrap::new(root)),
                FontAwesome::NAME => registry.register(FontAwesome::new(root)),
                _ => unknown.push(name.to_string()),
            }
        }
        (registry, unknown)
    }

    /// Register an icon set, replacing any set with the same name
    pub fn register(&mut self, set: impl IconSet + 'static) {
        self.sets.insert(set.name().to_string(), Box::new(set));
    }

    pub fn get(&self, name: &str) -> Option<&dyn IconSet> {
        self.sets.get(name).map(|set| set.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Names of all registered sets
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(|s| s.as_str())
    }

    /// Locate an icon in a named set
    pub fn locate(&self, set: &str, name: &str, style: Option<&str>) -> Result<PathBuf, IconSetError> {
        self.get(set)
            .ok_or_else(|| IconSetError::UnknownSet {
                name: set.to_string(),
            })?
            .locate(name, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_register_and_locate() {
        let mut registry = IconSetRegistry::new();
        registry.register(Bootstrap::new("bi"));

        assert!(registry.contains("bootstrap"));
        assert_eq!(
            registry.locate("bootstrap", "alarm", None).unwrap(),
            Path::new("bi/alarm.svg")
        );
    }

    #[test]
    fn test_unknown_set() {
        let registry = IconSetRegistry::new();
        assert_eq!(
            registry.locate("material", "home", None),
            Err(IconSetError::UnknownSet {
                name: "material".to_string()
            })
        );
    }

    #[test]
    fn test_from_roots() {
        let bi = PathBuf::from("bi");
        let fa = PathBuf::from("fa");
        let other = PathBuf::from("x");
        let (registry, unknown) = IconSetRegistry::from_roots([
            ("bootstrap", &bi),
            ("font-awesome", &fa),
            ("material", &other),
        ]);

        let mut names: Vec<_> = registry.names().collect();
        names.sort();
        assert_eq!(names, vec!["bootstrap", "font-awesome"]);
        assert_eq!(unknown, vec!["material".to_string()]);
    }
}
