mod page;

use chrono::Weekday;

use crate::{menu::MenuPlan, parse::single_line};

pub use page::WeekPage;

/// Days that get a tab, with their day keys.
const WEEKDAYS: [(&str, &str); 5] = [
    ("Monday", "1"),
    ("Tuesday", "2"),
    ("Wednesday", "3"),
    ("Thursday", "4"),
    ("Friday", "5"),
];

/// A cafeteria and its plan for the week.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub name: &'a str,
    pub plan: &'a MenuPlan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub name: &'static str,
    pub key: &'static str,
    pub sources: Vec<SourceView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    pub name: String,
    /// only categories serving something that day
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub dishes: Vec<DishView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishView {
    pub title: String,
    pub price: String,
}

fn source_view(source: Source<'_>, day_key: &str) -> SourceView {
    let categories = source
        .plan
        .menus
        .iter()
        .filter(|category| !category.dishes_on(day_key).is_empty())
        .map(|category| CategoryView {
            name: category.name.clone(),
            dishes: category
                .dishes_on(day_key)
                .iter()
                .map(|dish| DishView {
                    title: single_line(&dish.title).into_owned(),
                    price: dish.price.clone(),
                })
                .collect(),
        })
        .collect();
    SourceView {
        name: source.name.to_string(),
        categories,
    }
}

/// Lines the sources up by day, Monday through Friday.
pub fn build_days(sources: &[Source<'_>]) -> Vec<DayView> {
    WEEKDAYS
        .iter()
        .map(|&(name, key)| DayView {
            name,
            key,
            sources: sources.iter().map(|&s| source_view(s, key)).collect(),
        })
        .collect()
}

/// Index of the tab to open first: today, or Monday on the weekend.
pub fn active_tab(today: Weekday) -> usize {
    let index = today.num_days_from_monday() as usize;
    if index < WEEKDAYS.len() {
        index
    } else {
        0
    }
}

pub fn render_week_tabs(sources: &[Source<'_>], today: Weekday) -> String {
    WeekPage {
        days: build_days(sources),
        active: active_tab(today),
    }
    .to_string()
}
