/// Whether the desktop prefers a dark appearance. Used when the theme mode is
/// `SystemDefault`; any failed lookup reads as light.
pub fn detect_system_dark_mode() -> bool {
    let dark = query_dark_mode().unwrap_or(false);
    log::debug!("System dark mode detected: {}", dark);
    dark
}

#[cfg(target_os = "windows")]
fn query_dark_mode() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let value: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn query_dark_mode() -> Option<bool> {
    // GNOME exposes either a dark gtk-theme name or the newer color-scheme key.
    let theme = gsettings("gtk-theme").unwrap_or_default().to_lowercase();
    if theme.contains("dark") {
        return Some(true);
    }
    let scheme = gsettings("color-scheme")?;
    Some(scheme.contains("prefer-dark"))
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn query_dark_mode() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        // Key is absent in light mode.
        return Some(false);
    }
    Some(String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn query_dark_mode() -> Option<bool> {
    None
}
