//! Shared layout components for the server-rendered web UI.

pub mod accounts_layout;
pub mod header;
pub mod icons;
pub mod layout;
pub mod production_manager_portal;

pub use accounts_layout::{AccountsLayout, ACCOUNTS_LINKS};
pub use header::Header;
pub use layout::Layout;
pub use production_manager_portal::{ProductionManagerPortal, PRODUCTION_MANAGER_LINKS};
