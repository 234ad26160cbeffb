//! Loaded SVG documents
//!
//! Only the subtree of the first `<svg>` element is kept. Its root start tag
//! is rewritten in place and the subtree is written back out as markup.

use std::path::{Path, PathBuf};

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, trace};

use crate::attributes::AttributeSet;
use crate::error::{LoadError, RenderError};

/// Look up an attribute on an element, unescaped
pub fn attribute_value(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

fn is_svg(element: &BytesStart<'_>) -> bool {
    element.local_name().as_ref() == b"svg"
}

/// Reject malformed attributes and a second top-level element
fn check_element(
    element: &BytesStart<'_>,
    depth: usize,
    seen_top_level: &mut bool,
    position: u64,
) -> Result<(), LoadError> {
    if depth == 0 {
        if *seen_top_level {
            return Err(LoadError::Xml {
                position,
                message: "more than one top-level element".to_string(),
            });
        }
        *seen_top_level = true;
    }
    for attr in element.attributes() {
        attr.map_err(|err| LoadError::Xml {
            position,
            message: err.to_string(),
        })?;
    }
    Ok(())
}

/// The root `<svg>` element of an icon and everything inside it
#[derive(Debug, Clone)]
pub struct SvgDocument {
    root: BytesStart<'static>,
    children: Vec<Event<'static>>,
    self_closing: bool,
    /// Path the markup was read from, if any
    source: Option<PathBuf>,
}

impl SvgDocument {
    /// Parse markup and keep the first `<svg>` element
    ///
    /// The whole input must be well-formed even though only the root subtree
    /// is kept.
    pub fn parse(markup: &str) -> Result<Self, LoadError> {
        let mut reader = Reader::from_str(markup);

        let mut root: Option<(BytesStart<'static>, bool)> = None;
        let mut children = Vec::new();
        let mut depth = 0usize;
        // Depth at which the captured root was opened, while still open
        let mut capture_depth: Option<usize> = None;
        let mut seen_top_level = false;

        loop {
            let event = reader.read_event().map_err(|err| LoadError::Xml {
                position: reader.buffer_position() as u64,
                message: err.to_string(),
            })?;

            match event {
                Event::Eof => break,
                Event::Start(start) => {
                    let position = reader.buffer_position() as u64;
                    check_element(&start, depth, &mut seen_top_level, position)?;
                    if capture_depth.is_some() {
                        children.push(Event::Start(start.into_owned()));
                    } else if root.is_none() && is_svg(&start) {
                        root = Some((start.into_owned(), false));
                        capture_depth = Some(depth);
                    }
                    depth += 1;
                }
                Event::End(end) => {
                    depth = depth.checked_sub(1).ok_or_else(|| LoadError::Xml {
                        position: reader.buffer_position() as u64,
                        message: "closing tag without an opening tag".to_string(),
                    })?;
                    if capture_depth == Some(depth) {
                        capture_depth = None;
                    } else if capture_depth.is_some() {
                        children.push(Event::End(end.into_owned()));
                    }
                }
                Event::Empty(empty) => {
                    let position = reader.buffer_position() as u64;
                    check_element(&empty, depth, &mut seen_top_level, position)?;
                    if capture_depth.is_some() {
                        children.push(Event::Empty(empty.into_owned()));
                    } else if root.is_none() && is_svg(&empty) {
                        root = Some((empty.into_owned(), true));
                    }
                }
                other => {
                    if capture_depth.is_some() {
                        children.push(other.into_owned());
                    }
                }
            }
        }

        if depth != 0 {
            return Err(LoadError::Xml {
                position: reader.buffer_position() as u64,
                message: format!("{} unclosed element(s) at end of input", depth),
            });
        }

        let (root, self_closing) = root.ok_or(LoadError::MissingRoot)?;
        Ok(Self {
            root,
            children,
            self_closing,
            source: None,
        })
    }

    /// Read and parse an SVG file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let markup = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut doc = Self::parse(&markup)?;
        doc.source = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Load an icon, substituting the fallback icon when it cannot be parsed
    ///
    /// Failures of the primary icon are only logged. A broken fallback is an
    /// error, as is a broken primary when no fallback is configured.
    pub fn load(path: &Path, fallback: Option<&Path>) -> Result<Self, RenderError> {
        let err = match Self::from_file(path) {
            Ok(doc) => return Ok(doc),
            Err(err) => err,
        };

        let Some(fallback) = fallback else {
            return Err(RenderError::from_load(path.to_path_buf(), err));
        };

        debug!(
            path = %path.display(),
            fallback = %fallback.display(),
            error = %err,
            "icon failed to load, using fallback"
        );
        Self::from_file(fallback).map_err(|err| RenderError::from_fallback(fallback.to_path_buf(), err))
    }

    /// The root `<svg>` start tag
    pub fn root(&self) -> &BytesStart<'static> {
        &self.root
    }

    /// File the document was loaded from
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Current value of an attribute on the root element
    pub fn attribute(&self, name: &str) -> Option<String> {
        attribute_value(&self.root, name)
    }

    /// Insert a `<title>` as the first child of the root element
    pub fn set_title(&mut self, title: &str) {
        let title = [
            Event::Start(BytesStart::new("title")),
            Event::Text(BytesText::new(title).into_owned()),
            Event::End(BytesEnd::new("title")),
        ];
        self.children = title
            .into_iter()
            .chain(std::mem::take(&mut self.children))
            .collect();
        self.self_closing = false;
    }

    /// Write an attribute set onto the root element
    ///
    /// Every named attribute is replaced. Empty values remove the attribute.
    /// Attributes not named in the set are kept as they were.
    pub fn apply(&mut self, attributes: &AttributeSet) {
        let name = String::from_utf8_lossy(self.root.name().as_ref()).into_owned();
        let existing: Vec<(Vec<u8>, Vec<u8>)> = self
            .root
            .attributes()
            .flatten()
            .map(|attr| (attr.key.as_ref().to_vec(), attr.value.into_owned()))
            .collect();

        let mut root = BytesStart::new(name);
        for (key, value) in &existing {
            let replaced = std::str::from_utf8(key)
                .map(|key| attributes.contains(key))
                .unwrap_or(false);
            if !replaced {
                root.push_attribute((key.as_slice(), value.as_slice()));
            }
        }
        for (key, value) in attributes.iter() {
            if !value.is_empty() {
                root.push_attribute((key, value));
            }
        }

        trace!(attributes = ?attributes, "applied attributes to root element");
        self.root = root;
    }

    /// Serialize the root element subtree, without an XML declaration
    pub fn to_markup(&self) -> Result<String, RenderError> {
        let mut writer = Writer::new(Vec::new());
        let events = if self.self_closing && self.children.is_empty() {
            vec![Event::Empty(self.root.borrow())]
        } else {
            let mut events = Vec::with_capacity(self.children.len() + 2);
            events.push(Event::Start(self.root.borrow()));
            events.extend(self.children.iter().map(|event| event.borrow()));
            events.push(Event::End(self.root.to_end()));
            events
        };

        for event in events {
            writer
                .write_event(event)
                .map_err(|err| RenderError::Serialize(err.to_string()))?;
        }

        String::from_utf8(writer.into_inner()).map_err(|err| RenderError::Serialize(err.to_string()))
    }
}
