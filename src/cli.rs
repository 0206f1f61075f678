use std::path::PathBuf;

use clap::{Parser, Subcommand};
use showcase::types::PricingOption;

/// Browse a remote content catalog from the terminal
#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Fetch a content catalog and filter it by keyword and pricing", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the per-user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the catalog and print the filtered cards
    Browse {
        /// Case-insensitive match against title or creator
        #[arg(short, long)]
        keyword: Option<String>,

        /// Pricing categories to show (paid, free, view-only); repeatable
        #[arg(short, long = "pricing", value_name = "OPTION")]
        pricing: Vec<PricingOption>,

        /// Lower price bound for Paid items
        #[arg(long, requires = "max_price")]
        min_price: Option<f64>,

        /// Upper price bound for Paid items
        #[arg(long, requires = "min_price")]
        max_price: Option<f64>,

        /// Read the catalog from a local JSON file instead of the endpoint
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,

        /// Cards per row
        #[arg(long)]
        columns: Option<usize>,

        /// Print the filtered items as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
    /// Show effective settings
    Config,
}
