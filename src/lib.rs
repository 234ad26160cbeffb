//! svg-inliner - Inline SVG icons with normalized size and presentation attributes
//!
//! This library loads an SVG icon (from a file or an icon set), works out its
//! size, and rewrites the root `<svg>` element's attributes so the markup can
//! be embedded directly in HTML.
//!
//! # Example
//!
//! ```rust,no_run
//! use svg_inliner::{IconRequest, IconSource, RenderConfig, Renderer};
//!
//! let config = RenderConfig::new()
//!     .with_icon_set("bootstrap", "node_modules/bootstrap-icons/icons")
//!     .with_fallback("assets/missing.svg");
//! let renderer = Renderer::new(config);
//!
//! let svg = renderer
//!     .render(
//!         &IconSource::set("bootstrap", "alarm"),
//!         &IconRequest::new().with_width(32).with_class("icon"),
//!     )
//!     .unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod attributes;
pub mod config;
pub mod dimensions;
pub mod document;
pub mod error;
pub mod icon_set;
pub mod request;
pub mod source;
pub mod units;

use std::path::Path;

use tracing::{debug, warn};

pub use attributes::{build_attributes, serialize_style, AttributeSet};
pub use config::{ConfigError, RenderConfig};
pub use dimensions::Dimensions;
pub use document::SvgDocument;
pub use error::{LoadError, RenderError};
pub use icon_set::{IconSet, IconSetError, IconSetRegistry};
pub use request::{IconRequest, RequestError};
pub use source::{IconSource, PathResolver};

/// Renders icons with a fixed configuration
///
/// The renderer only holds read-only configuration, so one instance can be
/// shared between threads. Every render works on its own document.
#[derive(Debug)]
pub struct Renderer {
    config: RenderConfig,
    paths: PathResolver,
    sets: IconSetRegistry,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer {
    /// Create a renderer, registering the configured icon sets
    pub fn new(config: RenderConfig) -> Self {
        let paths = config.path_resolver();
        let (sets, unknown) = IconSetRegistry::from_roots(
            config
                .icon_sets
                .iter()
                .map(|(name, root)| (name.as_str(), root)),
        );
        for name in unknown {
            warn!(set = %name, "ignoring unknown icon set in configuration");
        }

        Self {
            config,
            paths,
            sets,
        }
    }

    /// Register an additional icon set
    pub fn with_icon_set(mut self, set: impl IconSet + 'static) -> Self {
        self.sets.register(set);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn icon_sets(&self) -> &IconSetRegistry {
        &self.sets
    }

    /// Render an icon to inline markup
    pub fn render(&self, source: &IconSource, request: &IconRequest) -> Result<String, RenderError> {
        let path = source.resolve(&self.paths, &self.sets)?;
        let fallback = self
            .config
            .fallback
            .as_deref()
            .map(|fallback| self.paths.resolve(fallback));

        debug!(icon = %source, path = %path.display(), "rendering icon");
        let doc = SvgDocument::load(&path, fallback.as_deref())?;
        self.render_document(doc, request)
    }

    /// Apply a request to an already loaded document
    pub fn render_document(
        &self,
        mut doc: SvgDocument,
        request: &IconRequest,
    ) -> Result<String, RenderError> {
        let dims = request.has_size().then(|| {
            dimensions::resolve(
                dimensions::natural_size(doc.root()),
                request.width,
                request.height,
            )
        });

        let attributes = build_attributes(
            request,
            dims,
            &self.config.default_fill,
            &self.config.default_class,
        );

        if let Some(title) = request.title.as_deref().filter(|t| !t.is_empty()) {
            doc.set_title(title);
        }
        doc.apply(&attributes);
        doc.to_markup()
    }
}

/// Render an SVG file with the default configuration
///
/// # Example
///
/// ```rust,no_run
/// use svg_inliner::{render, IconRequest};
///
/// let svg = render("icons/home.svg", &IconRequest::new().with_class("icon")).unwrap();
/// assert!(svg.contains(r#"class="icon""#));
/// ```
pub fn render(path: impl AsRef<Path>, request: &IconRequest) -> Result<String, RenderError> {
    let path = path.as_ref().to_string_lossy();
    Renderer::default().render(&IconSource::file(path), request)
}
