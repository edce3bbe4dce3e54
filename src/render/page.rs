use std::fmt::{self, Display, Formatter};

use html_escape::encode_text;

use super::{CategoryView, DayView, SourceView};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Mensa menus of the week</title>
<style>
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 64rem; padding: 1rem; }
.tabs > input { display: none; }
.tabs > label { display: inline-block; padding: .5rem 1rem; cursor: pointer; border-bottom: 2px solid transparent; }
.tabs > input:checked + label { border-bottom-color: #2b6cb0; font-weight: 600; }
.day { display: none; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.source h2 { margin-bottom: .25rem; }
.dish { display: flex; justify-content: space-between; gap: 1rem; }
.price { white-space: nowrap; }
.empty { color: #718096; }
"#;

/// The finished page: one tab per day, the sources side by side inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPage {
    pub days: Vec<DayView>,
    /// index into `days` of the tab shown on load
    pub active: usize,
}

impl Display for WeekPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(HEAD)?;
        // each radio shows the panel with the same position
        for (i, _) in self.days.iter().enumerate() {
            writeln!(
                f,
                "#tab-{i}:checked ~ #day-{i} {{ display: grid; }}"
            )?;
        }
        f.write_str("</style>\n</head>\n<body>\n<div class=\"tabs\">\n")?;

        for (i, day) in self.days.iter().enumerate() {
            let checked = if i == self.active { " checked" } else { "" };
            writeln!(
                f,
                "<input type=\"radio\" name=\"day\" id=\"tab-{i}\"{checked}><label for=\"tab-{i}\">{}</label>",
                day.name
            )?;
        }
        for (i, day) in self.days.iter().enumerate() {
            writeln!(f, "<section class=\"day\" id=\"day-{i}\" data-day=\"{}\">", day.key)?;
            for source in &day.sources {
                write_source(f, source)?;
            }
            f.write_str("</section>\n")?;
        }

        f.write_str("</div>\n</body>\n</html>\n")
    }
}

fn write_source(f: &mut Formatter<'_>, source: &SourceView) -> fmt::Result {
    writeln!(f, "<div class=\"source\">\n<h2>{}</h2>", encode_text(&source.name))?;
    if source.categories.is_empty() {
        f.write_str("<p class=\"empty\">No menu available</p>\n")?;
    }
    for category in &source.categories {
        write_category(f, category)?;
    }
    f.write_str("</div>\n")
}

fn write_category(f: &mut Formatter<'_>, category: &CategoryView) -> fmt::Result {
    writeln!(f, "<h3>{}</h3>", encode_text(&category.name))?;
    for dish in &category.dishes {
        writeln!(
            f,
            "<div class=\"dish\"><span class=\"title\">{}</span><span class=\"price\">{}</span></div>",
            encode_text(&dish.title),
            encode_text(&dish.price)
        )?;
    }
    Ok(())
}
