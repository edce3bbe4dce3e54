use scraper::Html;

use super::header::WeekHeader;
use super::menu_table::{assign_rows, Row, ScanWarning};
use super::text::first_text;
use crate::menu::MenuPlan;
use crate::parse::static_selector::static_selector;

/// The page always lists two menus per day, in this order.
pub const CATEGORY_NAMES: [&str; 2] = ["Menü 1", "Menü 2"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedMenu {
    pub plan: MenuPlan,
    pub warnings: Vec<ScanWarning>,
}

impl ScrapedMenu {
    pub fn from_html(document: &Html) -> Self {
        static_selector!(HEADER_SELECTOR <- ".swslang h4");
        static_selector!(ROW_SELECTOR <- "table.sweTable1 tbody tr");

        let root = document.root_element();
        let header = first_text(&HEADER_SELECTOR, root)
            .map(|text| WeekHeader::from_text(&text))
            .unwrap_or_default();

        let categories = MenuPlan::with_categories(CATEGORY_NAMES).menus;
        let rows = root.select(&ROW_SELECTOR).map(Row::from_html_element);
        let (menus, warnings) = assign_rows(categories, rows);

        Self {
            plan: MenuPlan {
                week: header.week,
                year: header.year,
                menus,
            },
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Dish;
    use std::fs;

    fn example() -> ScrapedMenu {
        let html = fs::read_to_string("./src/parse/html_examples/menueplan.html").unwrap();
        let document = Html::parse_document(&html);
        ScrapedMenu::from_html(&document)
    }

    #[test]
    fn test_header() {
        let scraped = example();
        assert_eq!(scraped.plan.week, "42");
        assert_eq!(scraped.plan.year, 2024);
    }

    #[test]
    fn test_categories_are_fixed() {
        let scraped = example();
        let names: Vec<&str> = scraped
            .plan
            .menus
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, CATEGORY_NAMES);
    }

    #[test]
    fn test_from_html_element() {
        let menus = example().plan.menus;
        // Montag: two dishes, one per category
        assert_eq!(
            menus[0].dishes_on("1"),
            &[Dish::new("Frittatensuppe, Wiener Schnitzel mit Erdäpfelsalat", "€ 6,20")]
        );
        assert_eq!(
            menus[1].dishes_on("1"),
            &[Dish::new("Gemüselaibchen mit Kräuterdip", "€ 5,40")]
        );
        // Dienstag: only the first menu is served
        assert_eq!(
            menus[0].dishes_on("2"),
            &[Dish::new("Linsencurry mit Basmatireis", "€ 5,40")]
        );
        assert!(!menus[1].menus.contains_key("2"));
    }

    #[test]
    fn test_excess_rows_are_reported() {
        let scraped = example();
        // Mittwoch lists a dessert row after both menus
        assert_eq!(scraped.plan.menus[0].dishes_on("3").len(), 1);
        assert_eq!(scraped.plan.menus[1].dishes_on("3").len(), 1);
        assert_eq!(
            scraped.warnings,
            vec![ScanWarning::ExcessDish {
                day_key: "3",
                dish: Dish::new("Apfelstrudel", "€ 2,50"),
            }]
        );
    }

    #[test]
    fn test_closed_days_are_absent() {
        let menus = example().plan.menus;
        for day in ["4", "5", "6", "7"] {
            assert!(menus.iter().all(|c| !c.menus.contains_key(day)));
        }
    }

    #[test]
    fn test_page_without_table() {
        let document = Html::parse_document("<html><body><p>Betriebsurlaub</p></body></html>");
        let scraped = ScrapedMenu::from_html(&document);
        assert_eq!(scraped.plan.week, "");
        assert_eq!(scraped.plan.year, 0);
        assert_eq!(scraped.plan.menus.len(), 2);
        assert!(scraped.plan.menus.iter().all(|c| c.menus.is_empty()));
    }
}
