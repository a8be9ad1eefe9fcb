pub mod export_bar;
pub mod pages;

pub use export_bar::show_export_bar;
pub use pages::show_pages;
