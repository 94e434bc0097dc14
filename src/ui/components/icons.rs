//! Inline SVG icons.

use dioxus::prelude::*;

const MENU_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" width="20" height="20"><path d="M4 6h16M4 12h16M4 18h16"/></svg>"#;

const CHEVRON_RIGHT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width="14" height="14"><path d="M9 6l6 6-6 6"/></svg>"#;

/// Hamburger glyph for the mobile menu toggle.
#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        span {
            class: "inline-flex",
            "aria-hidden": "true",
            dangerous_inner_html: MENU_SVG
        }
    }
}

#[component]
pub fn ChevronRightIcon() -> Element {
    rsx! {
        span {
            class: "inline-flex text-gray-400",
            "aria-hidden": "true",
            dangerous_inner_html: CHEVRON_RIGHT_SVG
        }
    }
}
