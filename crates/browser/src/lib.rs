//! The catalog browser: fetches movies and genres from the catalog query service, keeps them
//! in memory for sorting and genre filtering, and renders them as an HTML page.

mod browser;
pub mod client;
pub mod render;
pub mod state;

pub use browser::CatalogBrowser;
pub use client::{CatalogClient, ClientError, HttpCatalogClient};
pub use state::BrowserState;
