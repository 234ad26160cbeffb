//! svg-inliner CLI
//!
//! Usage:
//!   svg-inliner [OPTIONS] <ICON>
//!
//! Options:
//!   -c, --config <FILE>     Configuration file (TOML format)
//!       --set <SET>         Look ICON up in an icon set instead of reading a file
//!       --style <STYLE>     Icon set style (e.g. regular, brands)
//!   -W, --width <LENGTH>    Requested width (CSS length)
//!   -H, --height <LENGTH>   Requested height (CSS length)
//!       --class <CLASS>     Class attribute
//!       --fill <COLOR>      Fill color; empty disables fill
//!       --title <TEXT>      Accessible title
//!       --css <DECL>        Inline style declaration `property:value` (repeatable)
//!       --fallback <FILE>   Icon to use when ICON cannot be loaded
//!   -v, --verbose           Log diagnostics to stderr
//!   -h, --help              Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use svg_inliner::{IconRequest, IconSource, RenderConfig, Renderer};

#[derive(Parser)]
#[command(name = "svg-inliner")]
#[command(about = "Render SVG icons as inline markup")]
struct Cli {
    /// Icon file path (may start with an @alias), or icon name with --set
    icon: String,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Icon set to look the icon up in (bootstrap, font-awesome)
    #[arg(long)]
    set: Option<String>,

    /// Icon set style
    #[arg(long, requires = "set")]
    style: Option<String>,

    /// Requested width (CSS length, e.g. 24, 2em)
    #[arg(short = 'W', long)]
    width: Option<String>,

    /// Requested height (CSS length)
    #[arg(short = 'H', long)]
    height: Option<String>,

    /// Class attribute
    #[arg(long)]
    class: Option<String>,

    /// Fill color; pass an empty string to disable fill
    #[arg(long)]
    fill: Option<String>,

    /// Accessible title
    #[arg(long)]
    title: Option<String>,

    /// Inline style declaration `property:value`
    #[arg(long = "css", value_name = "DECL")]
    css: Vec<String>,

    /// Icon to use when the requested one cannot be loaded
    #[arg(long)]
    fallback: Option<String>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Collect the request options as name/value pairs
    fn properties(&self) -> Vec<(&'static str, String)> {
        let mut properties = Vec::new();
        let named = [
            ("width", &self.width),
            ("height", &self.height),
            ("class", &self.class),
            ("fill", &self.fill),
            ("title", &self.title),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                properties.push((name, value.clone()));
            }
        }
        for decl in &self.css {
            properties.push(("css", decl.clone()));
        }
        properties
    }

    fn source(&self) -> IconSource {
        match &self.set {
            Some(set) => {
                let source = IconSource::set(set.as_str(), self.icon.as_str());
                match &self.style {
                    Some(style) => source.with_style(style.as_str()),
                    None => source,
                }
            }
            None => IconSource::file(self.icon.as_str()),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };
    if let Some(fallback) = &cli.fallback {
        config.fallback = Some(fallback.clone());
    }

    let request = match IconRequest::from_properties(cli.properties()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let renderer = Renderer::new(config);
    match renderer.render(&cli.source(), &request) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
