//! Production manager portal pages.

use dioxus::prelude::*;

use super::PagePlaceholder;
use crate::nav::{find_link, Breakpoints};
use crate::ui::components::{Layout, ProductionManagerPortal, PRODUCTION_MANAGER_LINKS};

#[component]
pub fn ProductionManagerPage(
    app_title: String,
    current: String,
    breakpoints: Breakpoints,
) -> Element {
    let heading = find_link(PRODUCTION_MANAGER_LINKS, &current)
        .map(|link| link.label)
        .unwrap_or("Production Manager");

    let section_current = current.clone();

    rsx! {
        Layout {
            title: heading.to_string(),
            app_title,
            current,
            breakpoint: breakpoints.header_toggle,
            ProductionManagerPortal { current: section_current,
                PagePlaceholder { heading: heading.to_string() }
            }
        }
    }
}
