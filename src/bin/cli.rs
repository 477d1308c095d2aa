// src/bin/cli.rs
use clap::Parser;
use product_explorer::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::Stderr);
    cli::run(cli::Cli::parse())
}
