use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagefeed::{
    AllProducts, Catalog, CategoryProducts, Config, ListLoader, PageSource, Product, RemoteCatalog,
};

/// Page through a product catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pagefeed", version, about)]
struct Cli {
    /// Only list products in this category slug
    #[arg(short, long)]
    category: Option<String>,

    /// Items per page (overrides the config file)
    #[arg(short, long)]
    page_size: Option<u64>,

    /// Catalog base URL (overrides the config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Stop after this many pages
    #[arg(long)]
    max_pages: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let base_url = cli.base_url.unwrap_or(config.base_url);
    let page_size = cli.page_size.unwrap_or(config.page_size);

    let catalog: Arc<dyn Catalog> = Arc::new(RemoteCatalog::new(
        base_url,
        Duration::from_secs(config.timeout_secs),
    )?);

    let source: Arc<dyn PageSource<Product>> = match &cli.category {
        Some(slug) => {
            let category = catalog
                .list_categories()
                .await?
                .into_iter()
                .find(|c| c.slug == *slug);
            if category.is_none() {
                eprintln!("unknown category: {slug}");
            }
            Arc::new(CategoryProducts::new(Arc::clone(&catalog), category))
        }
        None => Arc::new(AllProducts::new(Arc::clone(&catalog))),
    };

    let loader = ListLoader::new(source, page_size);
    loader.load_initial().await;
    print_new_items(&loader.state().items, 0);

    let mut pages = 1;
    while loader.state().has_more {
        if cli.max_pages.is_some_and(|max| pages >= max) {
            break;
        }
        let before = loader.state().items.len();
        loader.load_more().await;
        let state = loader.state();
        if state.items.len() == before {
            // No progress: exhausted, failed, or the total was never known.
            if let Some(err) = state.last_error {
                eprintln!("load failed: {err}");
            }
            break;
        }
        print_new_items(&state.items, before);
        pages += 1;
    }

    let state = loader.state();
    println!("-- {} of {} items --", state.items.len(), state.total);
    Ok(())
}

fn print_new_items(items: &[Product], from: usize) {
    for product in &items[from..] {
        println!("#{:<6} {:<50} ${:.2}", product.id, product.title, product.price);
    }
}
