// Browser launcher
// Best effort: any failure to find or start a browser is swallowed

use std::process::Stdio;
use tokio::process::Command;

/// Try to open `url` in the default browser
///
/// Returns `true` when a launcher process was started. The launcher is not
/// waited on.
pub fn open_browser(url: &str) -> bool {
    let Some(mut command) = launcher_command(url) else {
        return false;
    };
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .is_ok()
}

#[cfg(target_os = "macos")]
fn launcher_command(url: &str) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(url);
    Some(command)
}

#[cfg(windows)]
fn launcher_command(url: &str) -> Option<Command> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    Some(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher_command(url: &str) -> Option<Command> {
    // No display, no browser
    let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()));
    if !has_display {
        return None;
    }
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Some(command)
}

#[cfg(not(any(unix, windows)))]
fn launcher_command(_url: &str) -> Option<Command> {
    None
}
