use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use serde::Serialize;
use snack_catalog::{Catalog, HeroCarousel, Sitemap, DEFAULT_BASE_URL};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "snack-catalog", version, about = "Browse the Crunchwise snack catalog")]
struct Cli {
    /// JSON catalog to load instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Origin used for sitemap URLs
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a single product
    Product { id: String },
    /// List the products of a category (case-insensitive)
    Category { name: String },
    /// List the featured products
    Featured,
    /// List the categories
    Categories,
    /// Print the sitemap XML
    Sitemap,
    /// Run the hero carousel and print each slide as it comes up
    Carousel {
        /// Number of rotations to print before exiting
        #[arg(long, default_value_t = 3)]
        ticks: usize,
        /// Time between rotations in milliseconds
        #[arg(long, default_value_t = 5000)]
        interval_ms: u64,
    },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            Catalog::from_json(&json)
                .wrap_err_with(|| format!("Invalid catalog {}", path.display()))
        }
        None => Catalog::snacks(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Command::Product { id } => {
            let product = catalog
                .get_product_by_id(&id)
                .ok_or_else(|| eyre!("No product with id `{id}`"))?;
            print_json(product)?;
        }
        Command::Category { name } => {
            let products = catalog.get_products_by_category(&name);
            info!(category = %name, matches = products.len(), "category lookup");
            print_json(&products)?;
        }
        Command::Featured => print_json(&catalog.get_featured_products())?,
        Command::Categories => print_json(catalog.categories())?,
        Command::Sitemap => {
            let sitemap = Sitemap::build(&catalog, &cli.base_url)?;
            info!(entries = sitemap.entries.len(), "sitemap built");
            print!("{}", sitemap.to_xml());
        }
        Command::Carousel { ticks, interval_ms } => {
            let interval = Duration::from_millis(interval_ms);
            let carousel = HeroCarousel::from_featured(&catalog, interval);
            let slides = carousel.slides().to_vec();
            let Some(first) = slides.first() else {
                info!("no featured products, nothing to rotate");
                return Ok(());
            };
            println!("{}", first.title);

            let mut handle = carousel.spawn();
            for _ in 0..ticks {
                let index = handle.changed().await?;
                println!("{}", slides[index].title);
            }
        }
    }
    Ok(())
}
