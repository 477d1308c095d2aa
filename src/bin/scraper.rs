// src/bin/scraper.rs
// Offline extractor: saved listing page → products.csv (+ optional catalog JSON).
//
// Usage:
//   product_scraper
//   product_scraper -i data/dummy_ecommerce.html -o out/products.csv
//   product_scraper --catalog-out products.json --category Kitchen

use std::path::PathBuf;

use clap::Parser;
use product_explorer::{
    config::consts::{SCRAPE_DEFAULT_CATEGORY, SCRAPE_INPUT, SCRAPE_OUTPUT},
    config::options::ExportFormat,
    error::ExtractError,
    extract::{convert, products},
    log,
    progress::Progress,
};

#[derive(Parser, Debug)]
#[command(name = "product_scraper", version, about = "Extract products from a saved HTML page")]
struct Args {
    /// Saved listing page
    #[arg(short, long, default_value = SCRAPE_INPUT)]
    input: PathBuf,
    /// Delimited output (Product Name, Price, Rating)
    #[arg(short, long, default_value = SCRAPE_OUTPUT)]
    output: PathBuf,
    /// Use tabs instead of commas
    #[arg(long)]
    tsv: bool,
    /// Also write a catalog JSON the explorer can load
    #[arg(long)]
    catalog_out: Option<PathBuf>,
    /// Category given to every product in --catalog-out
    #[arg(long, default_value = SCRAPE_DEFAULT_CATEGORY, requires = "catalog_out")]
    category: String,
}

struct CliProgress { total: usize }

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, index: usize) {
        eprint!("\rExtracted {}/{}", index + 1, self.total);
    }
    fn finish(&mut self) {
        if self.total > 0 { eprintln!(); }
    }
}

fn run(args: &Args) -> Result<(), ExtractError> {
    let mut progress = CliProgress { total: 0 };
    let rows = products::parse_file(&args.input, Some(&mut progress))?;

    let fmt = if args.tsv { ExportFormat::Tsv } else { ExportFormat::Csv };
    products::write_delimited(&args.output, &rows, fmt.delim())?;
    println!("Product information has been saved to '{}'", args.output.display());

    if let Some(path) = &args.catalog_out {
        let catalog = convert::to_catalog(&rows, &args.category)?;
        convert::write_catalog_json(path, &catalog)?;
        println!("Catalog ({} products) has been saved to '{}'", catalog.len(), path.display());
    }
    Ok(())
}

fn main() {
    log::init(log::LogTarget::Stderr);
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
