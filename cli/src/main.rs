//! # readywrite
//!
//! Static export and catalog tooling for the ReadyWrite landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Render the shipped catalog to dist/index.html
//! readywrite render
//!
//! # Render a rebranded catalog with a pinned copyright year
//! readywrite render --catalog brand.toml --out public/index.html --year 2026
//!
//! # Validate a catalog before publishing
//! readywrite check --catalog brand.toml
//!
//! # Dump the shipped catalog as a starting point for rebranding
//! readywrite catalog --format toml > brand.toml
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use readywrite_site::{Catalog, FixedClock, SystemClock, render_page};

#[derive(Parser, Debug)]
#[command(name = "readywrite")]
#[command(about = "Render, check and export the ReadyWrite landing page catalog")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page to a static HTML file
    Render {
        /// Catalog file (.json or .toml); the shipped catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output path, or `-` for stdout
        #[arg(long, short, default_value = "dist/index.html")]
        out: PathBuf,

        /// Pin the copyright year instead of reading the system clock
        #[arg(long)]
        year: Option<i32>,
    },

    /// Validate a catalog and report what it contains
    Check {
        /// Catalog file (.json or .toml); the shipped catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print a catalog to stdout
    Catalog {
        /// Catalog file to convert; the shipped catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("could not load catalog {}", path.display())),
        None => {
            debug!("using shipped catalog");
            Ok(Catalog::readywrite())
        }
    }
}

fn load_valid_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = load_catalog(path)?;
    catalog.validate().context("catalog is invalid")?;
    Ok(catalog)
}

fn render(catalog: Option<&Path>, out: &Path, year: Option<i32>) -> Result<()> {
    let catalog = load_valid_catalog(catalog)?;

    let html = match year {
        Some(year) => {
            let clock = FixedClock::new_year(year)
                .with_context(|| format!("year {year} is out of range"))?;
            render_page(&catalog, &clock)
        }
        None => render_page(&catalog, &SystemClock),
    };

    if out == Path::new("-") {
        io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(out, &html).with_context(|| format!("failed to write {}", out.display()))?;
    info!(path = %out.display(), bytes = html.len(), "wrote landing page");
    println!("Wrote {}", out.display());
    Ok(())
}

fn check(catalog: Option<&Path>) -> Result<()> {
    let catalog = load_valid_catalog(catalog)?;
    let featured = catalog
        .highlighted_tier()
        .map(|tier| tier.name.as_str())
        .unwrap_or("none");

    println!("Catalog OK: {}", catalog.brand.name);
    println!("  nav links     {}", catalog.nav.len());
    println!("  steps         {}", catalog.steps.len());
    println!("  features      {}", catalog.features.len());
    println!("  testimonials  {}", catalog.testimonials.len());
    println!("  pricing tiers {} (featured: {featured})", catalog.pricing.len());
    println!("  examples      {}", catalog.examples.len());
    println!("  faq entries   {}", catalog.faq.len());
    Ok(())
}

fn export(catalog: Option<&Path>, format: Format) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let text = match format {
        Format::Json => {
            serde_json::to_string_pretty(&catalog).context("failed to serialize catalog")?
        }
        Format::Toml => toml::to_string_pretty(&catalog).context("failed to serialize catalog")?,
    };
    println!("{text}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Render { catalog, out, year } => render(catalog.as_deref(), &out, year),
        Command::Check { catalog } => check(catalog.as_deref()),
        Command::Catalog { catalog, format } => export(catalog.as_deref(), format),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the page or catalog; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("readywrite v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[readywrite] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
