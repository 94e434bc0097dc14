//! Sidebar layout for the accounts module.

use dioxus::prelude::*;

use super::icons::ChevronRightIcon;
use crate::nav::{Breakpoint, NavigationLink};

pub const ACCOUNTS_BASE: &str = "/accounts";

/// Sidebar entries. Siblings, so each one only highlights on its own path.
pub const ACCOUNTS_LINKS: &[NavigationLink] = &[
    NavigationLink::exact("Dashboard", "/accounts/dashboard"),
    NavigationLink::exact("All Sales Orders", "/accounts/sales/orders"),
    NavigationLink::exact("Sales Invoices", "/accounts/sales/invoices"),
    NavigationLink::exact("All Purchase Orders", "/accounts/purchase/orders"),
    NavigationLink::exact("Purchase Bills", "/accounts/purchase/bills"),
    NavigationLink::exact("Payments", "/accounts/payments"),
    NavigationLink::exact("General Ledger", "/accounts/ledger"),
];

const LINK_ACTIVE: &str =
    "flex items-center gap-2 px-3 py-2 rounded bg-blue-50 text-blue-700 font-medium";
const LINK_INACTIVE: &str =
    "flex items-center gap-2 px-3 py-2 rounded text-gray-700 hover:bg-gray-100";

/// Two-region layout: fixed-width navigation panel and a scrollable outlet.
#[component]
pub fn AccountsLayout(
    /// Current request path
    current: String,
    /// Sidebar is hidden below this width
    #[props(default)]
    breakpoint: Breakpoint,
    /// Content of the active nested route
    children: Element,
) -> Element {
    let sidebar_class = format!(
        "{} w-64 shrink-0 flex-col border-r border-gray-200 bg-white overflow-y-auto",
        breakpoint.desktop_flex()
    );

    rsx! {
        div { class: "portal-body flex",
            aside { class: "{sidebar_class}",
                div { class: "px-4 py-3 text-xs font-semibold uppercase tracking-wide text-gray-500",
                    "Accounts"
                }
                nav { aria_label: "Accounts",
                    ul { class: "flex flex-col gap-1 px-2 pb-4",
                        for link in ACCOUNTS_LINKS.iter() {
                            li { key: "{link.path}",
                                a {
                                    href: link.path,
                                    class: link.state(&current).class(LINK_ACTIVE, LINK_INACTIVE),
                                    "aria-current": link.state(&current).aria_current(),
                                    ChevronRightIcon {}
                                    span { "{link.label}" }
                                }
                            }
                        }
                    }
                }
            }
            section {
                class: "flex-1 min-w-0 overflow-y-auto p-6",
                "data-outlet": "accounts",
                {children}
            }
        }
    }
}
