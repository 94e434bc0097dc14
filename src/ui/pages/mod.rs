//! Page components for the server-rendered web UI.
//!
//! Each page wraps its section layout in the document shell and fills the
//! section's outlet with the page body.

pub mod accounts;
pub mod not_found;
pub mod production_manager;

pub use accounts::AccountsPage;
pub use not_found::NotFoundPage;
pub use production_manager::ProductionManagerPage;

use dioxus::prelude::*;

/// Body shown inside an outlet until the page has real content.
#[component]
pub fn PagePlaceholder(heading: String) -> Element {
    rsx! {
        article { class: "max-w-3xl",
            h2 { class: "text-2xl font-semibold mb-2", "{heading}" }
            p { class: "text-gray-500", "Nothing to show here yet." }
        }
    }
}
