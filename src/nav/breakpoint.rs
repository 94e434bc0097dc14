//! Responsive breakpoints (Tailwind CSS scale).

use serde::Deserialize;

/// Viewport-width threshold controlling visibility of responsive elements.
///
/// Class names are returned as full literals so the Tailwind scanner can see
/// them in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Classes for an element shown only below the breakpoint (mobile toggles).
    pub fn mobile_only(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm:hidden",
            Breakpoint::Md => "md:hidden",
            Breakpoint::Lg => "lg:hidden",
            Breakpoint::Xl => "xl:hidden",
        }
    }

    /// Classes for a flex container hidden below the breakpoint (sidebars).
    pub fn desktop_flex(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "hidden sm:flex",
            Breakpoint::Md => "hidden md:flex",
            Breakpoint::Lg => "hidden lg:flex",
            Breakpoint::Xl => "hidden xl:flex",
        }
    }
}

/// Per-element breakpoint settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Breakpoints {
    /// Header menu toggle is visible below this width
    #[serde(default)]
    pub header_toggle: Breakpoint,
    /// Accounts sidebar is hidden below this width
    #[serde(default)]
    pub accounts_sidebar: Breakpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Breakpoint; 4] = [Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg, Breakpoint::Xl];

    #[test]
    fn classes_carry_breakpoint_prefix() {
        for bp in ALL {
            let prefix = format!("{}:", bp.as_str());
            assert!(bp.mobile_only().starts_with(&prefix));
            assert!(bp.desktop_flex().starts_with("hidden "));
            assert!(bp.desktop_flex().contains(&prefix));
        }
    }

    #[test]
    fn deserializes_lowercase_names() {
        let bp: Breakpoint = serde_json::from_str("\"lg\"").unwrap();
        assert_eq!(bp, Breakpoint::Lg);
        assert!(serde_json::from_str::<Breakpoint>("\"huge\"").is_err());
    }
}
