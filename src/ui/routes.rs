//! Page routes and handlers.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use dioxus::prelude::*;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::api::{self, AppState};
use super::components::{ACCOUNTS_LINKS, PRODUCTION_MANAGER_LINKS};
use super::pages::{AccountsPage, NotFoundPage, ProductionManagerPage};

/// Landing page for `/` and `/accounts`.
pub const ACCOUNTS_HOME: &str = "/accounts/dashboard";
/// Landing page for `/production-manager`.
pub const PRODUCTION_MANAGER_HOME: &str = "/production-manager/dashboard";

/// Every path that renders a page (excludes redirects and JSON endpoints).
pub fn page_paths() -> Vec<&'static str> {
    ACCOUNTS_LINKS
        .iter()
        .chain(PRODUCTION_MANAGER_LINKS.iter())
        .map(|link| link.path)
        .collect()
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let accounts = ACCOUNTS_LINKS
        .iter()
        .fold(Router::new(), |router, link| {
            router.route(link.path, get(accounts_page))
        });
    let production = PRODUCTION_MANAGER_LINKS
        .iter()
        .fold(Router::new(), |router, link| {
            router.route(link.path, get(production_manager_page))
        });

    Router::new()
        // Health check
        .route("/status", get(api::status_handler))
        // Section landing redirects
        .route("/", get(|| async { Redirect::to(ACCOUNTS_HOME) }))
        .route("/accounts", get(|| async { Redirect::to(ACCOUNTS_HOME) }))
        .route(
            "/production-manager",
            get(|| async { Redirect::to(PRODUCTION_MANAGER_HOME) }),
        )
        .merge(accounts)
        .merge(production)
        .fallback(not_found_page)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn html_page(html: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>",
        html
    ))
}

/// GET /accounts/* - Accounts module pages
pub async fn accounts_page(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let current = uri.path().to_string();
    tracing::debug!("Rendering accounts page {}", current);

    let settings = state.settings.clone();
    let html = dioxus::ssr::render_element(rsx! {
        AccountsPage {
            app_title: settings.title.clone(),
            current,
            breakpoints: settings.breakpoints,
        }
    });
    html_page(html)
}

/// GET /production-manager/* - Production manager portal pages
pub async fn production_manager_page(
    State(state): State<AppState>,
    uri: Uri,
) -> impl IntoResponse {
    let current = uri.path().to_string();
    tracing::debug!("Rendering production manager page {}", current);

    let settings = state.settings.clone();
    let html = dioxus::ssr::render_element(rsx! {
        ProductionManagerPage {
            app_title: settings.title.clone(),
            current,
            breakpoints: settings.breakpoints,
        }
    });
    html_page(html)
}

/// Fallback - unknown paths render a 404 page inside the shell
pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let current = uri.path().to_string();
    tracing::warn!("No page routed at {}", current);

    let settings = state.settings.clone();
    let html = dioxus::ssr::render_element(rsx! {
        NotFoundPage {
            app_title: settings.title.clone(),
            current,
            breakpoints: settings.breakpoints,
        }
    });
    (StatusCode::NOT_FOUND, html_page(html))
}
