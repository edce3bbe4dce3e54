use scraper::ElementRef;

use super::text::text_of;
use crate::menu::{day_key, Dish, MenuCategory};
use crate::parse::static_selector::static_selector;

const DAY_HEADER_CLASS: &str = "sweTableRow1";

/// What a single `<tr>` of the menu table means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// starts a new day, holds the (untranslated) weekday name
    DayHeader(String),
    Dish(Dish),
    Other,
}

impl Row {
    pub fn from_html_element(row: ElementRef<'_>) -> Self {
        static_selector!(DAY_NAME_SELECTOR <- "strong");
        static_selector!(CELL_SELECTOR <- "td");

        if row.value().classes().any(|c| c == DAY_HEADER_CLASS) {
            let name: String = row.select(&DAY_NAME_SELECTOR).map(text_of).collect();
            return Self::DayHeader(name);
        }

        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
        match cells.as_slice() {
            // third cell holds allergen markers
            [title, price, _] => Self::Dish(Dish::new(
                text_of(*title).trim(),
                text_of(*price).trim(),
            )),
            _ => Self::Other,
        }
    }
}

/// Something the table walk threw away that the page probably meant to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// a day listed more dishes than there are categories
    ExcessDish { day_key: &'static str, dish: Dish },
}

/// Walk state between rows. `cursor` is the category the next dish of the
/// current day goes to.
#[derive(Debug)]
struct Scan {
    categories: Vec<MenuCategory>,
    day_key: &'static str,
    cursor: usize,
    warnings: Vec<ScanWarning>,
}

impl Scan {
    fn step(mut self, row: Row) -> Self {
        match row {
            Row::DayHeader(name) => {
                self.day_key = day_key(&name);
                self.cursor = 0;
            }
            Row::Dish(_) if self.day_key.is_empty() => {}
            Row::Dish(dish) => {
                if let Some(category) = self.categories.get_mut(self.cursor) {
                    category.push(self.day_key, dish);
                    self.cursor += 1;
                } else {
                    self.warnings.push(ScanWarning::ExcessDish {
                        day_key: self.day_key,
                        dish,
                    });
                }
            }
            Row::Other => {}
        }
        self
    }
}

/// Assigns dish rows to `categories` by position: the n-th dish after a day
/// header lands in the n-th category under that day's key.
pub fn assign_rows(
    categories: Vec<MenuCategory>,
    rows: impl IntoIterator<Item = Row>,
) -> (Vec<MenuCategory>, Vec<ScanWarning>) {
    let start = Scan {
        categories,
        day_key: "",
        cursor: 0,
        warnings: Vec::new(),
    };
    let done = rows.into_iter().fold(start, Scan::step);
    (done.categories, done.warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn two_categories() -> Vec<MenuCategory> {
        vec![MenuCategory::new("Menü 1"), MenuCategory::new("Menü 2")]
    }

    fn day(name: &str) -> Row {
        Row::DayHeader(name.to_string())
    }

    fn dish(title: &str) -> Row {
        Row::Dish(Dish::new(title, "€ 5,50"))
    }

    #[test]
    fn test_positional_assignment() {
        let (categories, warnings) =
            assign_rows(two_categories(), [day("Montag"), dish("Suppe"), dish("Strudel")]);
        assert_eq!(categories[0].dishes_on("1"), &[Dish::new("Suppe", "€ 5,50")]);
        assert_eq!(categories[1].dishes_on("1"), &[Dish::new("Strudel", "€ 5,50")]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_excess_dish_is_dropped_and_reported() {
        let (categories, warnings) = assign_rows(
            two_categories(),
            [day("Montag"), dish("A"), dish("B"), dish("C")],
        );
        assert_eq!(categories[0].dishes_on("1").len(), 1);
        assert_eq!(categories[1].dishes_on("1").len(), 1);
        assert_eq!(
            warnings,
            vec![ScanWarning::ExcessDish {
                day_key: "1",
                dish: Dish::new("C", "€ 5,50"),
            }]
        );
    }

    #[test]
    fn test_cursor_resets_per_day() {
        let (categories, _) = assign_rows(
            two_categories(),
            [day("Montag"), dish("A"), dish("B"), day("Dienstag"), dish("C")],
        );
        assert_eq!(categories[0].dishes_on("2"), &[Dish::new("C", "€ 5,50")]);
        assert!(!categories[1].menus.contains_key("2"));
    }

    #[test]
    fn test_dishes_without_known_day_are_ignored() {
        let (categories, warnings) = assign_rows(
            two_categories(),
            [dish("vor dem Tag"), day("Feiertag"), dish("am Feiertag"), Row::Other],
        );
        assert!(categories.iter().all(|c| c.menus.is_empty()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_other_rows_do_not_move_cursor() {
        let (categories, _) = assign_rows(
            two_categories(),
            [day("Mittwoch"), Row::Other, dish("A"), Row::Other, dish("B")],
        );
        assert_eq!(categories[0].dishes_on("3").len(), 1);
        assert_eq!(categories[1].dishes_on("3").len(), 1);
    }

    fn rows_of(html: &str) -> Vec<Row> {
        let doc = Html::parse_document(html);
        let selector = Selector::parse("tr").unwrap();
        doc.select(&selector).map(Row::from_html_element).collect()
    }

    #[test]
    fn test_row_classification() {
        let rows = rows_of(
            r#"<table><tbody>
                <tr class="sweTableRow1"><td colspan="3"><strong>Montag</strong> 14.10.</td></tr>
                <tr><td> Rindsuppe mit Frittaten </td><td> € 5,90 </td><td>A, C</td></tr>
                <tr><td>nur zwei</td><td>Zellen</td></tr>
                <tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>
            </tbody></table>"#,
        );
        assert_eq!(
            rows,
            vec![
                Row::DayHeader("Montag".into()),
                Row::Dish(Dish::new("Rindsuppe mit Frittaten", "€ 5,90")),
                Row::Other,
                Row::Other,
            ]
        );
    }
}
