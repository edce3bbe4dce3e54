use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector compiled on first use and shared for the rest of the run.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    compiled: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            compiled: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.compiled.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("static selector {:?} is invalid: {e:?}", self.source))
        })
    }
}

/// `static_selector!(ROWS <- "table tr");`
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
pub(crate) use static_selector;
