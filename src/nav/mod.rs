//! Navigation links and active-route matching.
//!
//! Every navigation component receives the current location explicitly and
//! asks [`match_location`] whether each of its links is active. The function
//! is pure, so highlighting can be tested without a router or a DOM.

pub mod breakpoint;

pub use breakpoint::{Breakpoint, Breakpoints};

/// How a link's target path is compared against the current location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Active only when the location equals the target path.
    Exact,
    /// Active when the location equals the target path or lies beneath it
    /// (segment-aware: `/a/b` matches `/a/b/c` but not `/a/bc`).
    #[default]
    Prefix,
}

/// Visual state of a single navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveState {
    Active,
    Inactive,
}

impl ActiveState {
    pub fn is_active(self) -> bool {
        self == ActiveState::Active
    }

    /// Value for the `aria-current` attribute (omitted when inactive).
    pub fn aria_current(self) -> Option<&'static str> {
        match self {
            ActiveState::Active => Some("page"),
            ActiveState::Inactive => None,
        }
    }

    /// Pick the CSS class for this state.
    pub fn class<'a>(self, active: &'a str, inactive: &'a str) -> &'a str {
        match self {
            ActiveState::Active => active,
            ActiveState::Inactive => inactive,
        }
    }
}

/// A labeled reference to a route path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationLink {
    pub label: &'static str,
    pub path: &'static str,
    pub match_mode: MatchMode,
}

impl NavigationLink {
    /// Link that stays active for every location beneath its path.
    pub const fn new(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            match_mode: MatchMode::Prefix,
        }
    }

    /// Link that is only active on its own path.
    pub const fn exact(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            match_mode: MatchMode::Exact,
        }
    }

    /// Active state of this link for the given location.
    pub fn state(&self, current: &str) -> ActiveState {
        match_location(current, self.path, self.match_mode)
    }
}

/// Strip query string, fragment and trailing slashes from a location.
///
/// The root path stays `/`; an empty input is treated as root.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Decide whether a link targeting `target` is active at `current`.
///
/// Each link is judged on its own; there is no tie-breaking between links,
/// so adding a link to a list never changes the state of the others.
pub fn match_location(current: &str, target: &str, mode: MatchMode) -> ActiveState {
    let current = normalize_path(current);
    let target = normalize_path(target);

    let matched = match mode {
        MatchMode::Exact => current == target,
        // Root would otherwise prefix-match every location
        MatchMode::Prefix if target == "/" => current == "/",
        MatchMode::Prefix => {
            current == target
                || current
                    .strip_prefix(target)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    };

    if matched {
        ActiveState::Active
    } else {
        ActiveState::Inactive
    }
}

/// Find the link whose path equals the (normalized) location.
pub fn find_link<'a>(links: &'a [NavigationLink], current: &str) -> Option<&'a NavigationLink> {
    let current = normalize_path(current);
    links.iter().find(|link| normalize_path(link.path) == current)
}
