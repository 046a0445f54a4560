/// Cross-platform desktop alert support
/// Currently only implements macOS alerts

#[cfg(target_os = "macos")]
use std::process::Command;

/// Whether the platform will show alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPermission {
    Granted,
    Denied,
    Default,
}

/// Ask once at startup whether alerts can be shown. There is no prompt
/// to drive from a terminal process, so this reports platform support.
pub fn request_permission() -> AlertPermission {
    #[cfg(target_os = "macos")]
    {
        AlertPermission::Granted
    }

    #[cfg(not(target_os = "macos"))]
    {
        AlertPermission::Default
    }
}

/// Show a desktop alert
pub fn emit_alert(title: &str, body: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            body.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (title, body);
    }
}
