//! Custom widget components

mod catalog_list;
mod grid_view;
mod header;
mod status_bar;

pub use catalog_list::CatalogList;
pub use grid_view::{cell_extent, GridView};
pub use header::MainHeader;
pub use status_bar::StatusBar;
