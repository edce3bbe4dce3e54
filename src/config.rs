use std::{env, path::PathBuf};

use url::Url;

const API_URL: &str = "https://backend.mensen.at/api";
const LOCATION_URI: &str = "standort/mensa-jku/";
const SCRAPE_URL: &str = "https://www.dioezese-linz.at/khg/mensa/menueplan";
const OUTPUT: &str = "menu_for_week_tabs.html";

/// Where to read menus from and where to put the page. Every field can be
/// overridden through the environment; unset variables keep the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: Url,
    pub location_uri: String,
    pub scrape_url: Url,
    pub output: PathBuf,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let parse_url = |key: &str, default: &str| {
            let raw = get(key, default);
            Url::parse(&raw)
                .map_err(|e| crate::error::Error::Config(format!("{key}={raw:?} is not a url: {e}")))
        };

        Ok(Self {
            api_url: parse_url("MENU_API_URL", API_URL)?,
            location_uri: get("MENU_LOCATION_URI", LOCATION_URI),
            scrape_url: parse_url("MENU_SCRAPE_URL", SCRAPE_URL)?,
            output: PathBuf::from(get("MENU_OUTPUT", OUTPUT)),
        })
    }
}
