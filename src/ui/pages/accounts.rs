//! Accounts module pages.

use dioxus::prelude::*;

use super::PagePlaceholder;
use crate::nav::{find_link, Breakpoints};
use crate::ui::components::{AccountsLayout, Layout, ACCOUNTS_LINKS};

/// Any accounts page, resolved from the sidebar entry matching `current`.
#[component]
pub fn AccountsPage(app_title: String, current: String, breakpoints: Breakpoints) -> Element {
    let heading = find_link(ACCOUNTS_LINKS, &current)
        .map(|link| link.label)
        .unwrap_or("Accounts");

    let section_current = current.clone();

    rsx! {
        Layout {
            title: heading.to_string(),
            app_title,
            current,
            breakpoint: breakpoints.header_toggle,
            AccountsLayout { current: section_current, breakpoint: breakpoints.accounts_sidebar,
                PagePlaceholder { heading: heading.to_string() }
            }
        }
    }
}
