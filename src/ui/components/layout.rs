//! Document shell wrapping every page: head, header, mobile menu, main region.

use dioxus::prelude::*;

use super::header::{Header, MOBILE_MENU_ID};
use crate::nav::{Breakpoint, NavigationLink};

/// Top-level sections listed in the mobile menu. Highlighted for any page
/// beneath them.
pub const SECTION_LINKS: &[NavigationLink] = &[
    NavigationLink::new("Accounts", "/accounts"),
    NavigationLink::new("Production Manager", "/production-manager"),
];

/// Layout-critical rules that the utility classes don't cover.
const CUSTOM_STYLES: &str = r#"
html, body { height: 100%; }
.portal-header { height: 3.5rem; }
.portal-main { padding-top: 3.5rem; height: 100vh; box-sizing: border-box; display: flex; flex-direction: column; }
.portal-body { flex: 1 1 auto; min-height: 0; }
"#;

/// Wires every `[data-menu-toggle]` button to the element named by its
/// `aria-controls` attribute.
const MENU_TOGGLE_SCRIPT: &str = r#"
document.querySelectorAll('[data-menu-toggle]').forEach(function (btn) {
    btn.addEventListener('click', function () {
        var menu = document.getElementById(btn.getAttribute('aria-controls'));
        if (!menu) return;
        var open = !menu.classList.toggle('hidden');
        btn.setAttribute('aria-expanded', open ? 'true' : 'false');
    });
});
"#;

const SECTION_ACTIVE: &str = "block px-4 py-2 font-medium text-blue-700 bg-blue-50";
const SECTION_INACTIVE: &str = "block px-4 py-2 text-gray-700 hover:bg-gray-100";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Dashboard title shown in the header bar
    pub app_title: String,
    /// Current request path
    pub current: String,
    /// Mobile toggle and menu are shown below this width
    #[props(default)]
    pub breakpoint: Breakpoint,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTAL_VERSION");
    let menu_class = format!(
        "hidden {} fixed top-14 inset-x-0 z-20 bg-white border-b border-gray-200 shadow",
        props.breakpoint.mobile_only()
    );

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - {props.app_title}" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/tailwindcss@2/dist/tailwind.min.css"
            }
            style { {CUSTOM_STYLES} }
        }
        body { class: "bg-gray-50 text-gray-900",
            Header { title: props.app_title.clone(), breakpoint: props.breakpoint }
            nav { id: MOBILE_MENU_ID, class: "{menu_class}", aria_label: "Sections",
                for link in SECTION_LINKS.iter() {
                    a {
                        key: "{link.path}",
                        href: link.path,
                        class: link.state(&props.current).class(SECTION_ACTIVE, SECTION_INACTIVE),
                        "aria-current": link.state(&props.current).aria_current(),
                        "{link.label}"
                    }
                }
            }
            main { class: "portal-main",
                {props.children}
            }
            footer { class: "fixed bottom-0 right-0 px-3 py-1",
                small { class: "text-xs text-gray-400", "v{version}" }
            }
            script { dangerous_inner_html: MENU_TOGGLE_SCRIPT }
        }
    }
}
