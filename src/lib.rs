//! Admin Portal
//!
//! Server-rendered layout shell for an admin dashboard.
//!
//! This library provides:
//! - Navigation links with pure active-route matching
//! - Header with a mobile menu toggle
//! - Accounts module sidebar layout
//! - Production manager role portal
//! - axum router serving the pages through Dioxus SSR

pub mod nav;
pub mod ui;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
