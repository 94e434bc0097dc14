//! Fallback page for unknown paths.

use dioxus::prelude::*;

use crate::nav::Breakpoints;
use crate::ui::components::Layout;

#[component]
pub fn NotFoundPage(app_title: String, current: String, breakpoints: Breakpoints) -> Element {
    rsx! {
        Layout {
            title: "Page not found".to_string(),
            app_title,
            current: current.clone(),
            breakpoint: breakpoints.header_toggle,
            div { class: "portal-body p-6",
                h2 { class: "text-2xl font-semibold mb-2", "Page not found" }
                p { class: "text-gray-500",
                    "Nothing is routed at "
                    code { "{current}" }
                    "."
                }
                a { class: "text-blue-700 underline", href: "/accounts/dashboard", "Back to accounts" }
            }
        }
    }
}
