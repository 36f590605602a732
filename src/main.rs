//! Auction House Sort - Entry Point
//!
//! Renders an auction house for-sale list from a JSONL dump, sorted and
//! filtered the way the in-game list would show it.
//!
//! Wiring sequence:
//! 1. Parse CLI flags
//! 2. Load config.toml + validate (defaults when absent)
//! 3. Init tracing (JSON structured logging to stderr)
//! 4. Create JsonlListingSource (implements ListingSource port)
//! 5. Build ListingView (material toggle + selected sort)
//! 6. Print the filtered list to stdout

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use auction_house_sort::adapters::jsonl::JsonlListingSource;
use auction_house_sort::config::{self, AppConfig};
use auction_house_sort::domain::rank::rank;
use auction_house_sort::domain::sort_mode::SortMode;
use auction_house_sort::usecases::listing_view::ListingView;

const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Debug, Parser)]
#[command(name = "auction-house-sort", version, about = "Sort and filter auction house listings")]
struct Cli {
    /// Config file. Defaults to ./config.toml when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listings file (JSONL), overrides input.listings_path.
    #[arg(short, long)]
    listings: Option<PathBuf>,

    /// Sort option label, e.g. "Type" or "Item Name".
    #[arg(short, long)]
    sort: Option<SortMode>,

    /// Show only crafting materials. `--material-only=false` turns the
    /// config setting off.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    material_only: Option<bool>,

    /// Print the list as a JSON array.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Load configuration ───────────────────────────────
    let config_path = cli
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG)).filter(|p| p.exists()));
    let mut config = match &config_path {
        Some(path) => config::loader::load_config(path)
            .context("Failed to load configuration")?,
        None => AppConfig::default(),
    };

    // ── 2. Apply CLI overrides ──────────────────────────────
    apply_overrides(&mut config, &cli);
    let listings_path = cli
        .listings
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input.listings_path));

    // ── 3. Initialize structured logging (stderr) ───────────
    init_tracing(&config);

    info!(
        config = %config_path
            .as_deref()
            .map_or_else(|| "<defaults>".to_string(), |p| p.display().to_string()),
        sort = %config.view.sort,
        material_only = config.view.material_only,
        listings = %listings_path.display(),
        "Configuration loaded"
    );
    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting auction house sort"
    );

    // ── 4. Load listings and build the view ─────────────────
    let source = JsonlListingSource::new(&listings_path);
    let view = ListingView::load(&source, &config.view)
        .with_context(|| format!("Failed to load listings from {}", listings_path.display()))?;

    // ── 5. Render ───────────────────────────────────────────
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, view.filtered())
            .context("Failed to write JSON output")?;
        writeln!(out)?;
    } else {
        render_table(&mut out, &view)?;
    }

    info!(
        shown = view.filtered().len(),
        total = view.total(),
        "Done"
    );
    Ok(())
}

/// Apply CLI flags on top of the loaded config.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(sort) = cli.sort {
        config.view.sort = sort;
    }
    if let Some(material_only) = cli.material_only {
        config.view.material_only = material_only;
    }
}

/// Initialize tracing. `RUST_LOG` wins over `app.log_level`.
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Write one line per shown listing: rank, expiration, name, quantity, price.
fn render_table(out: &mut impl Write, view: &ListingView) -> Result<()> {
    writeln!(
        out,
        "{:>4}  {:<20}  {:<32}  {:>4}  {:>10}",
        "RANK", "EXPIRES", "NAME", "QTY", "PRICE"
    )?;
    for listing in view.filtered() {
        writeln!(
            out,
            "{:>4}  {:<20}  {:<32}  {:>4}  {:>10}",
            rank(Some(listing)).value(),
            listing.expiration.format("%Y-%m-%d %H:%M:%S").to_string(),
            listing.name,
            listing.quantity,
            listing.price
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_only_after(config_value: bool, args: &[&str]) -> bool {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut config = AppConfig::default();
        config.view.material_only = config_value;
        apply_overrides(&mut config, &cli);
        config.view.material_only
    }

    #[test]
    fn test_material_flag_absent_keeps_config() {
        assert!(material_only_after(true, &["ahs"]));
        assert!(!material_only_after(false, &["ahs"]));
    }

    #[test]
    fn test_material_flag_turns_filter_on() {
        assert!(material_only_after(false, &["ahs", "--material-only"]));
        assert!(material_only_after(false, &["ahs", "-m"]));
    }

    #[test]
    fn test_material_flag_false_overrides_config() {
        assert!(!material_only_after(true, &["ahs", "--material-only=false"]));
    }

    #[test]
    fn test_sort_flag_overrides_config() {
        let cli = Cli::try_parse_from(["ahs", "--sort", "Price"]).unwrap();
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.view.sort, SortMode::Price);
    }
}
