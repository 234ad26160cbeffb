//! End-to-end rendering tests against icon files on disk

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use svg_inliner::{
    IconRequest, IconSetError, IconSource, LoadError, RenderConfig, RenderError, Renderer,
};

const SQUARE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><rect width="24" height="24"/></svg>
"#;

const WIDE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50"><path d="M0 0h100v50H0z"/></svg>"#;

const FALLBACK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" id="fallback"><circle r="8"/></svg>"#;

/// Lay out an icon directory with a fallback, a plain icon and both icon sets
fn fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let write = |rel: &str, content: &str| {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };

    write("icons/square.svg", SQUARE);
    write("icons/wide.svg", WIDE);
    write("icons/broken.svg", "<svg><g></svg>");
    write("icons/not-svg.svg", "<html><body/></html>");
    write("icons/unquoted.svg", r#"<svg width=24 height=24 viewBox="0 0 10 10"><g/></svg>"#);
    write("icons/duplicate.svg", r#"<svg id="a" id="b" viewBox="0 0 10 10"/>"#);
    write("icons/two-roots.svg", r#"<svg id="1"></svg><svg id="2"></svg>"#);
    write("icons/missing.svg", FALLBACK);
    write("bootstrap/alarm.svg", SQUARE);
    write("fontawesome/solid/house.svg", WIDE);
    write("fontawesome/brands/github.svg", SQUARE);
    dir
}

fn config(dir: &Path) -> RenderConfig {
    RenderConfig::new()
        .with_base_dir(dir)
        .with_alias("@icons", "icons")
        .with_fallback("@icons/missing.svg")
        .with_default_fill("")
        .with_icon_set("bootstrap", "bootstrap")
        .with_icon_set("font-awesome", "fontawesome")
}

#[test]
fn test_class_only_keeps_original_size() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    let svg = renderer
        .render(
            &IconSource::file("@icons/square.svg"),
            &IconRequest::new().with_class("icon-lg"),
        )
        .expect("Should render");

    assert!(svg.contains(r#"class="icon-lg""#));
    assert!(svg.contains(r#"width="24" height="24""#));
    assert!(!svg.contains("fill="));
    assert!(!svg.starts_with("<?xml"));
    insta::assert_snapshot!(svg, @r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" class="icon-lg" aria-hidden="true" role="img"><rect width="24" height="24"/></svg>"#);
}

#[test]
fn test_width_override_keeps_aspect() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    let svg = renderer
        .render(
            &IconSource::file("icons/wide.svg"),
            &IconRequest::new().with_width(200).with_fill("red"),
        )
        .expect("Should render");

    assert_eq!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50" fill="red" aria-hidden="true" role="img" width="200" height="100"><path d="M0 0h100v50H0z"/></svg>"#
    );
}

#[test]
fn test_unreadable_path_uses_fallback() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    let svg = renderer
        .render(&IconSource::file("icons/nope.svg"), &IconRequest::new())
        .expect("Fallback should render");
    assert!(svg.contains(r#"id="fallback""#));
}

#[test]
fn test_malformed_and_rootless_icons_use_fallback() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    for icon in [
        "@icons/broken.svg",
        "@icons/not-svg.svg",
        "@icons/unquoted.svg",
        "@icons/duplicate.svg",
        "@icons/two-roots.svg",
    ] {
        let svg = renderer
            .render(&IconSource::file(icon), &IconRequest::new().with_size(10))
            .expect("Fallback should render");
        assert!(svg.contains(r#"id="fallback""#), "{} did not fall back", icon);
        assert!(svg.contains(r#"width="10" height="10""#));
    }
}

#[test]
fn test_broken_fallback_is_an_error() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()).with_fallback("@icons/broken.svg"));

    let result = renderer.render(&IconSource::file("icons/nope.svg"), &IconRequest::new());
    assert!(matches!(
        result,
        Err(RenderError::FallbackLoad {
            source: LoadError::Xml { .. },
            ..
        })
    ));
}

#[test]
fn test_missing_fallback_is_an_error() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()).with_fallback("icons/gone.svg"));

    let result = renderer.render(&IconSource::file("icons/nope.svg"), &IconRequest::new());
    assert!(matches!(
        result,
        Err(RenderError::FallbackLoad {
            source: LoadError::Io { .. },
            ..
        })
    ));
}

#[test]
fn test_fallback_without_svg_is_missing_root() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()).with_fallback("icons/not-svg.svg"));

    let result = renderer.render(&IconSource::file("icons/nope.svg"), &IconRequest::new());
    assert!(matches!(result, Err(RenderError::MissingRootElement { .. })));
}

#[test]
fn test_no_fallback_reports_load_error() {
    let dir = fixture();
    let mut config = config(dir.path());
    config.fallback = None;
    let renderer = Renderer::new(config);

    let result = renderer.render(&IconSource::file("icons/nope.svg"), &IconRequest::new());
    assert!(matches!(result, Err(RenderError::Load { .. })));
}

#[test]
fn test_icon_sets() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    let alarm = renderer
        .render(&IconSource::set("bootstrap", "alarm"), &IconRequest::new())
        .expect("Should render");
    assert!(alarm.contains("<rect"));

    let house = renderer
        .render(
            &IconSource::set("font-awesome", "house"),
            &IconRequest::new().with_height(25),
        )
        .expect("Should render");
    assert!(house.contains(r#"width="50" height="25""#));

    let github = renderer
        .render(
            &IconSource::set("font-awesome", "github").with_style("brands"),
            &IconRequest::new(),
        )
        .expect("Should render");
    assert!(github.contains("<rect"));
}

#[test]
fn test_unknown_style_is_an_error() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    let result = renderer.render(
        &IconSource::set("font-awesome", "house").with_style("sharp"),
        &IconRequest::new(),
    );
    assert!(matches!(
        result,
        Err(RenderError::Source(IconSetError::UnknownStyle { .. }))
    ));
}

#[test]
fn test_title_and_css() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()).with_default_class("icon"));

    let request = IconRequest::from_properties([
        ("title", "Wide <thing>"),
        ("css", "vertical-align:middle;color:red"),
    ])
    .expect("Should build");
    let svg = renderer
        .render(&IconSource::file("@icons/wide.svg"), &request)
        .expect("Should render");

    assert_eq!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50" class="icon" style="vertical-align:middle;color:red" aria-hidden="true" role="img"><title>Wide &lt;thing&gt;</title><path d="M0 0h100v50H0z"/></svg>"#
    );
}

#[test]
fn test_config_file_round_trip() {
    let dir = fixture();
    let config_path = dir.path().join("svg-inliner.toml");
    fs::write(
        &config_path,
        r#"
fallback = "@icons/missing.svg"
default_fill = "currentColor"

[aliases]
icons = "icons"

[icon_sets]
bootstrap = "bootstrap"
"#,
    )
    .unwrap();

    let renderer = Renderer::new(RenderConfig::from_file(&config_path).expect("Should load"));
    let svg = renderer
        .render(&IconSource::set("bootstrap", "alarm"), &IconRequest::new())
        .expect("Should render");
    assert!(svg.contains(r#"fill="currentColor""#));

    let svg = renderer
        .render(&IconSource::file("@icons/nope.svg"), &IconRequest::new())
        .expect("Should fall back");
    assert!(svg.contains(r#"id="fallback""#));
}

#[test]
fn test_repeated_renders_are_identical() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));
    let request = IconRequest::new().with_width(48).with_title("Square");

    let first = renderer
        .render(&IconSource::file("@icons/square.svg"), &request)
        .unwrap();
    let second = renderer
        .render(&IconSource::file("@icons/square.svg"), &request)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_renders() {
    let dir = fixture();
    let renderer = Renderer::new(config(dir.path()));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8u32)
            .map(|size| {
                let renderer = &renderer;
                scope.spawn(move || {
                    renderer
                        .render(
                            &IconSource::file("@icons/wide.svg"),
                            &IconRequest::new().with_width(size * 10),
                        )
                        .unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let size = (i as u32 + 1) * 10;
            let svg = handle.join().unwrap();
            assert!(svg.contains(&format!(r#"width="{}" height="{}""#, size, size / 2)));
        }
    });
}
