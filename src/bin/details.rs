// src/bin/details.rs
use cagematch_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::details()
}
