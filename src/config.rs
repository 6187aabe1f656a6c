//! Command line flags and startup configuration

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::state::catalog::Catalog;

/// Prism Gallery - browse a catalog of AI-generated artwork
#[derive(Parser, Debug)]
#[command(name = "prism-gallery")]
#[command(version)]
#[command(about = "Browse a catalog of AI-generated artwork", long_about = None)]
pub struct Cli {
    /// JSON catalog file to browse instead of the built-in sample
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Do not load any images (cards show placeholders)
    #[arg(long)]
    pub offline: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long)]
    pub trace: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log level picked by the flags; `RUST_LOG` takes precedence
    pub fn log_level(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Everything the gallery needs at startup, built once in `main`
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub catalog: Catalog,
    /// Fetch and decode artwork images
    pub load_images: bool,
}

impl GalleryConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let catalog = match &cli.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::sample(),
        };

        Ok(GalleryConfig {
            catalog,
            load_images: !cli.offline,
        })
    }
}
