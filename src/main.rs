#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod menu;
mod parse;
mod render;

use std::time::Instant;

use chrono::{Datelike, Local};

use crate::{
    config::Config,
    fetch::{fetch_api_menu, fetch_scraped_menu, make_client},
    render::{render_week_tabs, Source},
};

pub use error::Result;

const API_SOURCE_NAME: &str = "JKU Mensa";
const SCRAPED_SOURCE_NAME: &str = "KHG Mensa";

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::debug!("{config:?}");
    let client = make_client()?;

    let start = Instant::now();
    // either source failing aborts the run
    let (api_plan, scraped_plan) = futures::try_join!(
        fetch_api_menu(&client, &config.api_url, &config.location_uri),
        fetch_scraped_menu(&client, &config.scrape_url),
    )
    .map_err(|e| {
        log::error!("fetching menus failed: {e}");
        e
    })?;
    log::info!(
        "fetched week {} ({}) and week {} ({}) in {:?}",
        api_plan.week,
        API_SOURCE_NAME,
        scraped_plan.week,
        SCRAPED_SOURCE_NAME,
        start.elapsed()
    );

    let html = render_week_tabs(
        &[
            Source {
                name: API_SOURCE_NAME,
                plan: &api_plan,
            },
            Source {
                name: SCRAPED_SOURCE_NAME,
                plan: &scraped_plan,
            },
        ],
        Local::now().weekday(),
    );
    tokio::fs::write(&config.output, html)
        .await
        .map_err(error::Error::from)?;
    log::info!("wrote {}", config.output.display());
    Ok(())
}
