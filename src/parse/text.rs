use scraper::{ElementRef, Selector};

/// All text below `element`, concatenated in document order.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of the first element under `element` matching `selector`, if any.
pub fn first_text(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element.select(selector).next().map(text_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_first_text_joins_nested_nodes() {
        let doc = Html::parse_fragment("<div><h4>Menüplan <b>KW 42</b></h4><h4>zweite</h4></div>");
        let selector = Selector::parse("h4").unwrap();
        assert_eq!(
            first_text(&selector, doc.root_element()).as_deref(),
            Some("Menüplan KW 42")
        );
    }

    #[test]
    fn test_first_text_without_match() {
        let doc = Html::parse_fragment("<p>nichts</p>");
        let selector = Selector::parse("h4").unwrap();
        assert_eq!(first_text(&selector, doc.root_element()), None);
    }
}
