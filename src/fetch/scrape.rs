use reqwest::Client;
use scraper::Html;
use tracing::{instrument, Level};
use url::Url;

use super::get_page;
use crate::{
    error::Error,
    menu::MenuPlan,
    parse::{ScanWarning, ScrapedMenu},
};

/// Downloads the weekly menu page and scrapes it into a [`MenuPlan`].
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn fetch_scraped_menu(client: &Client, url: &Url) -> crate::Result<MenuPlan> {
    let response = get_page(client, url).await?;
    let body = response
        .text()
        .await
        .map_err(|e| Error::Parse(format!("body of {url} is not a readable document: {e}")))?;
    Ok(parse_page(&body))
}

// `Html` is not `Send`, so it never lives across an await.
fn parse_page(body: &str) -> MenuPlan {
    let document = Html::parse_document(body);
    let ScrapedMenu { plan, warnings } = ScrapedMenu::from_html(&document);
    for warning in &warnings {
        match warning {
            ScanWarning::ExcessDish { day_key, dish } => log::warn!(
                "dropped dish {:?} on day {day_key}: more dish rows than menus",
                dish.title
            ),
        }
    }
    log::debug!(
        "scraped week {} / {} with {} dishes",
        plan.week,
        plan.year,
        plan.menus
            .iter()
            .flat_map(|c| c.menus.values())
            .map(Vec::len)
            .sum::<usize>()
    );
    plan
}
