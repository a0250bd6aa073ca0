use std::time::Instant;

use anyhow::Context;
use gbd_reader::assets::{AnimationSource, HttpAnimationSource};
use gbd_reader::{CountrySelection, GbdReaderConfig, MAX_YEAR, load, view};
use itertools::Itertools;
use log::{info, warn};

/// Lottie descriptors decorating the dashboard home page
const HOME_ANIMATIONS: [&str; 2] = [
    "https://assets8.lottiefiles.com/packages/lf20_tcsrkUkhKh.json",
    "https://assets7.lottiefiles.com/packages/lf20_UepHvaXIU4.json",
];

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GbdReaderConfig::default();
    if !config.data_dir.exists() {
        warn!("Data directory not found: {}", config.data_dir.display());
        return Ok(());
    }

    info!(
        "Loading dashboard datasets from: {}",
        config.data_dir.display()
    );
    let start = Instant::now();
    let tables = load(&config).context("loading dashboard datasets")?;
    info!("Datasets ready in {:?}", start.elapsed());

    let selection = CountrySelection::AllCountries;
    let ranking = view::disorder_ranking(&tables.merged, MAX_YEAR, &selection);
    if ranking.is_empty() {
        info!("No prevalence rows for {MAX_YEAR}");
    } else {
        info!("Mean prevalence across all countries, {MAX_YEAR}:");
        for (disorder, value) in &ranking {
            info!("  {disorder}: {value:.2}%");
        }
    }

    let frames = view::dalys_years(&tables.dalys);
    info!("Burden map has {} animation frames", frames.len());

    let burden = view::dalys_choropleth(&tables.dalys, MAX_YEAR);
    match burden.iter().map(|point| point.value).minmax().into_option() {
        Some((low, high)) => info!(
            "DALY share across {} countries in {MAX_YEAR}: {low:.2}%..{high:.2}%",
            burden.len()
        ),
        None => info!("No burden rows for {MAX_YEAR}"),
    }

    let source = HttpAnimationSource::new()?;
    for url in HOME_ANIMATIONS {
        match source.fetch_animation(url) {
            Some(_) => info!("Fetched animation descriptor from {url}"),
            None => info!("No animation available from {url}"),
        }
    }

    Ok(())
}
