//! notion-launcher: search and open pages across Notion workspaces.
//!
//! This crate is the host-side glue around [`notion_search`]:
//! - **Preferences**: tokens, open target, and search settings from TOML
//! - **Display items**: ranked pages mapped to title/description/icon rows,
//!   with errors rendered as a single non-actionable diagnostic row
//! - **Open action**: optional `notion://` rewrite, then the platform URL
//!   handler
//!
//! The search itself (workspace resolution, concurrent fan-out, result
//! normalization, fuzzy ranking) lives in the `notion-search` crate.

pub mod config;
pub mod error;
pub mod items;
pub mod launcher;
pub mod open;

pub use config::LauncherConfig;
pub use error::{LauncherError, Result};
pub use items::DisplayItem;
pub use launcher::Launcher;
pub use open::{OpenTarget, open_target_url};
