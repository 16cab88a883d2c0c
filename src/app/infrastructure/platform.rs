//! Desktop theme detection for `ThemeMode::SystemDefault`.

use tracing::debug;

/// Ask the desktop whether it prefers a dark theme. Falls back to light.
pub fn detect_system_dark_mode() -> bool {
    let detected = probe();
    debug!(?detected, "system theme probe");
    detected.unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn probe() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let light: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(light == 0)
}

#[cfg(target_os = "linux")]
fn probe() -> Option<bool> {
    // GNOME 42+ exposes color-scheme; older desktops only have a theme name.
    if let Some(scheme) = gsettings("color-scheme") {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
    }
    gsettings("gtk-theme").map(|theme| looks_dark(&theme))
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn probe() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent in light mode, which makes `defaults` fail.
    Some(output.status.success() && looks_dark(&String::from_utf8_lossy(&output.stdout)))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn probe() -> Option<bool> {
    None
}

#[cfg(any(target_os = "linux", target_os = "macos", test))]
fn looks_dark(name: &str) -> bool {
    name.to_lowercase().contains("dark")
}
