//! Role-scoped portal for production managers.

use dioxus::prelude::*;

use crate::nav::NavigationLink;

pub const PRODUCTION_MANAGER_BASE: &str = "/production-manager";

/// Sub-navigation entries. Append new role pages here.
pub const PRODUCTION_MANAGER_LINKS: &[NavigationLink] = &[NavigationLink::new(
    "Production Planning",
    "/production-manager/dashboard",
)];

pub const LINK_ACTIVE_CLASS: &str = "px-3 py-1.5 rounded-md text-sm font-medium bg-blue-600 text-white";
pub const LINK_INACTIVE_CLASS: &str =
    "px-3 py-1.5 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100";

/// Secondary navigation bar plus the nested route outlet.
#[component]
pub fn ProductionManagerPortal(
    /// Current request path
    current: String,
    /// Links shown in the bar
    #[props(default = PRODUCTION_MANAGER_LINKS)]
    links: &'static [NavigationLink],
    /// Content of the active nested route
    children: Element,
) -> Element {
    rsx! {
        div { class: "portal-body flex flex-col",
            nav {
                class: "flex items-center gap-2 px-4 py-2 border-b border-gray-200 bg-white",
                aria_label: "Production manager",
                for link in links.iter() {
                    a {
                        key: "{link.path}",
                        href: link.path,
                        class: link.state(&current).class(LINK_ACTIVE_CLASS, LINK_INACTIVE_CLASS),
                        "aria-current": link.state(&current).aria_current(),
                        "{link.label}"
                    }
                }
            }
            section {
                class: "flex-1 min-h-0 overflow-y-auto p-6",
                "data-outlet": "production-manager",
                {children}
            }
        }
    }
}
