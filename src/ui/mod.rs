//! Web UI - server-rendered dashboard pages.
//!
//! - components/ - Layout leaves (header, accounts sidebar, production portal)
//! - pages/ - Pages composing a section layout inside the document shell
//!
//! Page routes are registered from the same static link lists the navigation
//! components render, so every link resolves to a handler.

pub mod components;
pub mod pages;

#[cfg(feature = "server")]
mod routes;

#[cfg(feature = "server")]
pub use routes::{
    accounts_page, not_found_page, page_paths, production_manager_page, router, ACCOUNTS_HOME,
    PRODUCTION_MANAGER_HOME,
};
