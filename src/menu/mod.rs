mod day_key;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub use day_key::day_key;

/// One cafeteria's offerings for one week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuPlan {
    #[serde(deserialize_with = "null_as_default")]
    pub week: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub menus: Vec<MenuCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// day key ("1".."7") -> dishes served that day
    #[serde(deserialize_with = "null_as_default")]
    pub menus: BTreeMap<String, Vec<Dish>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dish {
    #[serde(rename = "title_de", deserialize_with = "null_as_default")]
    pub title: String,
    // kept verbatim, ex. "€ 5,90"
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl MenuPlan {
    /// A plan with one empty category per name, in the given order.
    pub fn with_categories<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            menus: names.into_iter().map(MenuCategory::new).collect(),
            ..Self::default()
        }
    }
}

impl MenuCategory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            menus: BTreeMap::new(),
        }
    }

    /// Appends `dish` under `day_key`. The empty key is dropped silently.
    pub fn push(&mut self, day_key: &str, dish: Dish) {
        if day_key.is_empty() {
            return;
        }
        self.menus.entry(day_key.to_string()).or_default().push(dish);
    }

    pub fn dishes_on(&self, day_key: &str) -> &[Dish] {
        self.menus.get(day_key).map_or(&[], Vec::as_slice)
    }
}

impl Dish {
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
