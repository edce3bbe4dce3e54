mod header;
mod menu_page;
mod menu_table;
mod single_line;
pub(crate) mod static_selector;
mod text;

pub use menu_page::ScrapedMenu;
pub use menu_table::ScanWarning;
pub use single_line::single_line;
