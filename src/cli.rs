// src/cli.rs
//
// Headless front-end. Drives the same `Explorer` handlers as the window,
// in the same order: category, search, then sort.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};

use crate::{
    catalog,
    config::{
        consts::{ALL_CATEGORIES, CATALOG_ENV, CATALOG_FILE, DEAL_TITLE},
        options::ExportFormat,
        settings,
        state::AppState,
    },
    query::SortKey,
    shell::Explorer,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Browse, filter, sort and export the product catalog")]
pub struct Cli {
    /// Catalog JSON (falls back to the settings file, then products.json)
    #[arg(long, global = true, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the (filtered, sorted) view as a table
    List(QueryArgs),
    /// Print the category choices, "All" first
    Categories,
    /// Write the (filtered, sorted) view to a file
    Export {
        #[command(flatten)]
        query: QueryArgs,
        /// Destination file
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Skip the name,price,rating,category header row
        #[arg(long)]
        no_headers: bool,
    },
    /// Show a random deal from the full catalog
    Deal,
    /// Ask the Robo-Assistant for a tip
    Tip,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Case-insensitive substring of the product name
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Exact category, or "All"
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg { Price, Rating }

impl From<SortArg> for SortKey {
    fn from(s: SortArg) -> Self {
        match s { SortArg::Price => SortKey::Price, SortArg::Rating => SortKey::Rating }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg { Csv, Tsv }

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f { FormatArg::Csv => ExportFormat::Csv, FormatArg::Tsv => ExportFormat::Tsv }
    }
}

/// Build the explorer from flag/settings, failing like the GUI does on a
/// bad catalog.
pub fn open(flag: Option<&Path>) -> color_eyre::Result<Explorer> {
    let settings = settings::load(&settings::settings_path());
    let state = AppState::from_settings(&settings);
    let path = settings::resolve_catalog_path(flag, &settings, Path::new(CATALOG_FILE));

    let catalog = catalog::load(&path)?;
    Ok(Explorer::new(catalog, state.options.export))
}

/// Apply filter then sort, like the window's controls would.
pub fn apply_query(explorer: &mut Explorer, q: &QueryArgs) {
    explorer.on_category_select(&q.category);
    explorer.on_search_submit(&q.search);
    if let Some(key) = q.sort {
        explorer.on_sort_request(key.into(), !q.desc);
    }
}

pub fn render_table(explorer: &Explorer) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Name", "Price", "Rating", "Category"]);
    for p in explorer.current_view().iter() {
        table.add_row(vec![p.name.clone(), p.price_label(), p.rating.to_string(), p.category.clone()]);
    }
    table
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let mut explorer = open(cli.catalog.as_deref())?;

    match cli.command {
        Command::List(q) => {
            apply_query(&mut explorer, &q);
            println!("{}", render_table(&explorer));
            println!("{} of {} products", explorer.view_len(), explorer.catalog().len());
        }
        Command::Categories => {
            for c in explorer.categories() {
                println!("{c}");
            }
        }
        Command::Export { query, out, format, no_headers } => {
            apply_query(&mut explorer, &query);
            if let Some(f) = format {
                explorer.export.format = f.into();
            }
            if no_headers {
                explorer.export.include_headers = false;
            }
            if let Some(path) = explorer.on_export_request(Some(out))? {
                println!("Data saved to {}", path.display());
            }
        }
        Command::Deal => {
            let deal = explorer.deal_of_the_day()?;
            println!("{DEAL_TITLE}\n{deal}");
        }
        Command::Tip => {
            println!("{}", explorer.on_assistant_request());
        }
    }
    Ok(())
}
