//! Command-line and environment configuration.
//!
//! Every flag can also be set from the environment; a `.env` file in the
//! working directory is loaded first when present.

use std::net::SocketAddr;
use std::path::PathBuf;

use banner_common::{BannerResult, BannerSpec, Rgb};
use clap::{Parser, ValueEnum};
use renderer::BannerFont;

/// Banner API Server
#[derive(Parser, Debug, Clone)]
#[command(name = "banner-api")]
#[command(about = "Serves a freshly rendered banner PNG on every GET")]
pub struct ServiceArgs {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "LISTEN_ADDR")]
    pub listen: SocketAddr,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Json, env = "LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Outer rectangle color ("r,g,b" or "#rrggbb")
    #[arg(long, default_value = "128,128,128", env = "BANNER_FRAME_COLOR")]
    pub frame_color: Rgb,

    /// Inner rectangle color ("r,g,b" or "#rrggbb")
    #[arg(long, default_value = "60,80,57", env = "BANNER_PANEL_COLOR")]
    pub panel_color: Rgb,

    /// First line of text, followed by the current time
    #[arg(long, default_value = "DEVOPS", env = "BANNER_HEADLINE")]
    pub headline: String,

    /// Second line of text
    #[arg(long, default_value = "Une superbe image", env = "BANNER_CAPTION")]
    pub caption: String,

    /// TrueType font to draw with (default: embedded DejaVu Sans Mono)
    #[arg(long, env = "FONT_PATH")]
    pub font_path: Option<PathBuf>,

    /// Secret appended to the second line when set
    #[arg(long, env = "APP_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Render a single image to this file and exit instead of serving
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Where the banner font comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Embedded,
    File(PathBuf),
}

impl FontSource {
    pub fn load(&self) -> BannerResult<BannerFont> {
        match self {
            FontSource::Embedded => BannerFont::embedded(),
            FontSource::File(path) => BannerFont::from_file(path),
        }
    }
}

/// Validated service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen: SocketAddr,
    pub spec: BannerSpec,
    pub font: FontSource,
    pub output: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn from_args(args: ServiceArgs) -> Self {
        let font = match args.font_path {
            Some(path) => FontSource::File(path),
            None => FontSource::Embedded,
        };

        Self {
            listen: args.listen,
            spec: BannerSpec {
                frame_color: args.frame_color,
                panel_color: args.panel_color,
                headline: args.headline,
                caption: args.caption,
                secret: args.secret.filter(|s| !s.is_empty()),
            },
            font,
            output: args.output,
        }
    }
}
