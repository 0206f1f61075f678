mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use showcase::config::{self, Settings};
use showcase::filter::{FilterCriteria, PriceRange};
use showcase::repository::StaticContentSource;
use showcase::{view, Showcase};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
        settings.validate()?;
    }

    // Logs go to stderr; stdout is reserved for the grid / JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Browse { keyword, pricing, min_price, max_price, catalog, columns, json } => {
            let price_range = match (min_price, max_price) {
                (Some(lo), Some(hi)) => Some(PriceRange::new(lo, hi)?),
                _ => None,
            };
            let criteria = FilterCriteria::new()
                .with_keyword(keyword.unwrap_or_default())
                .with_pricing(pricing)
                .with_price_range(price_range);

            let (mut app, origin) = match catalog {
                Some(path) => {
                    let source = StaticContentSource::from_file(&path)?;
                    (Showcase::new(source), path.display().to_string())
                }
                None => (Showcase::from_settings(&settings)?, settings.endpoint.clone()),
            };
            app.store_mut().update_filters(criteria);
            app.load().await.with_context(|| format!("loading catalog from {}", origin))?;

            if json {
                let items: Vec<_> = app.store().filtered_items().iter().map(|i| i.as_ref()).collect();
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                let cards = app.cards();
                print!("{}", view::render_grid(&cards, columns.unwrap_or(settings.grid_columns)));
                println!("{}", view::summary(app.store()));
            }
        }
        Commands::Config => {
            match config::default_config_path() {
                Ok(p) => println!("# default config path: {}", p.display()),
                Err(e) => println!("# {}", e),
            }
            print!("{}", toml::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}
