//! Command line surface.
//!
//! `browse` runs the terminal UI; `list` and `show` drive the same screen
//! controllers without a terminal and print what the screen would show.

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::catalog::{CatalogApi, HttpCatalog, Product};
use crate::config::Config;
use crate::store::Quantity;
use crate::ui::app::App;
use crate::ui::view::ListingView;
use crate::worker::{drain, fetch_channel};

/// Browse a remote product catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "shopfront", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `catalog.base_url`
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the interactive browser (default)
    Browse {
        /// Start on the detail screen of this product
        #[arg(long, value_name = "ID")]
        product: Option<u64>,
    },
    /// Print categories and products
    List {
        /// Select this category after the catalog loads
        #[arg(long, value_name = "ID")]
        category: Option<String>,
    },
    /// Print one product
    Show {
        /// Product id
        id: u64,
    },
}

impl Cli {
    /// Resolve the effective configuration from the file and flags.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("failed to load config")?;
        match &self.base_url {
            Some(url) => config.with_base_url(url.as_str()).context("invalid --base-url"),
            None => Ok(config),
        }
    }
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let catalog = HttpCatalog::new(&config.catalog).context("failed to build catalog client")?;
    tracing::debug!(base_url = %catalog.base_url(), "catalog client ready");
    let api: Arc<dyn CatalogApi> = Arc::new(catalog);

    match cli.command.unwrap_or(Command::Browse { product: None }) {
        Command::Browse { product } => crate::ui::runtime::run(&config, product, api),
        Command::List { category } => {
            let runtime = headless_runtime()?;
            let mut stdout = std::io::stdout().lock();
            runtime.block_on(list(&config, api.as_ref(), category.as_deref(), &mut stdout))
        }
        Command::Show { id } => {
            let runtime = headless_runtime()?;
            let mut stdout = std::io::stdout().lock();
            runtime.block_on(show(&config, api.as_ref(), id, &mut stdout))
        }
    }
}

fn headless_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

/// Activate the listing, optionally pick a category, and print the result.
pub async fn list(
    config: &Config,
    api: &dyn CatalogApi,
    category: Option<&str>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let (sender, mut commands) = fetch_channel();
    let mut app = App::new(sender, config.ui.toast_duration());
    app.open_listing();
    drain(&mut app, api, &mut commands).await;

    if let Some(category) = category {
        if app.listing().error().is_none()
            && !app.listing().categories.iter().any(|c| c.id == category)
        {
            bail!("unknown category: {category}");
        }
        app.select_category(category);
        drain(&mut app, api, &mut commands).await;
    }

    out.write_all(format_listing(&app.listing_view()).as_bytes())?;
    Ok(())
}

/// Activate the detail screen for `id` and print the product.
///
/// Returns an error carrying the screen's message when loading fails.
pub async fn show(
    config: &Config,
    api: &dyn CatalogApi,
    id: u64,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let (sender, mut commands) = fetch_channel();
    let mut app = App::new(sender, config.ui.toast_duration());
    app.open_product(id);
    drain(&mut app, api, &mut commands).await;

    let view = app.detail_view(Instant::now());
    if let Some(error) = view.error {
        bail!("{error}");
    }
    let Some(product) = view.product else {
        bail!("product {id} did not load");
    };
    out.write_all(format_product(product, view.quantity).as_bytes())?;
    Ok(())
}

pub fn format_listing(view: &ListingView<'_>) -> String {
    let mut text = String::new();
    let tabs: Vec<String> = view
        .categories
        .iter()
        .map(|category| {
            if view.active_category == Some(category.id.as_str()) {
                format!("[{}]", category.name)
            } else {
                category.name.clone()
            }
        })
        .collect();
    if !tabs.is_empty() {
        let _ = writeln!(text, "{}", tabs.join("  "));
    }

    if let Some(error) = view.error {
        let _ = writeln!(text, "{error}");
        return text;
    }
    if view.products.is_empty() {
        let _ = writeln!(text, "No products");
        return text;
    }
    for product in view.products {
        let _ = writeln!(
            text,
            "{:>5}  ★ {:<4} {}  {}",
            product.id,
            product.rating,
            product.title,
            product.display_price()
        );
    }
    text
}

pub fn format_product(product: &Product, quantity: Quantity) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", product.title);
    let _ = writeln!(text, "{}", product.display_price());
    let _ = writeln!(text, "★ {}", product.rating);
    if !product.description.is_empty() {
        let _ = writeln!(text, "{}", product.description);
    }
    if let Some(image) = product.primary_image() {
        let _ = writeln!(text, "{image}");
    }
    let _ = writeln!(text, "Quantity: {}", quantity.get());
    text
}
