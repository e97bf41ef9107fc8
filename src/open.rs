//! Opening a selected result.
//!
//! The URL stored on a result is never modified. [`open_target_url`] derives
//! the URL to hand over, and [`launch`] passes it to the platform handler.

use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, Result};

/// Scheme registered by the desktop app.
const APP_SCHEME: &str = "notion://";

/// Where a selected result is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpenTarget {
    /// The default web browser.
    #[default]
    Browser,
    /// The desktop app, via its custom URL scheme.
    App,
}

/// URL to hand to the platform handler for `target`.
///
/// For [`OpenTarget::App`] a leading `https://` or `http://` becomes
/// `notion://`; anything else is returned unchanged.
pub fn open_target_url(url: &str, target: OpenTarget) -> String {
    if target == OpenTarget::Browser {
        return url.to_owned();
    }
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .map(|rest| format!("{APP_SCHEME}{rest}"))
        .unwrap_or_else(|| url.to_owned())
}

fn handler_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(url);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Open `url` with the platform URL handler without waiting for it.
///
/// # Errors
///
/// Returns [`LauncherError::Open`] if the handler cannot be spawned.
pub fn launch(url: &str, target: OpenTarget) -> Result<()> {
    let resolved = open_target_url(url, target);
    tracing::info!(url = %resolved, ?target, "opening result");
    handler_command(&resolved)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|e| LauncherError::Open(format!("failed to start URL handler: {e}")))
}
