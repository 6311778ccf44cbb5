// src/bin/cli.rs
use color_eyre::eyre::Report;
use pl_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(std::env::args().skip(1)).map_err(Report::msg)
}
