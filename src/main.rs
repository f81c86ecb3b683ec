//! Headlight - SEO head fragments and structured data for static sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod page;
mod schema;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Validate => cli::validate::validate_site(&config),
    }
}
