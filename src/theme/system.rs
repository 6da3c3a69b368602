//! Terminal background detection — the OS-level color-scheme signal.
//!
//! Terminals don't expose `prefers-color-scheme`, but many set the
//! `COLORFGBG` variable to "<fg>;<bg>" using the 16-color indices. A bright
//! background index (7 or 15) means a light terminal; anything else is
//! treated as dark. Detection runs once at startup and feeds the watch
//! channel the [`ThemeManager`](super::ThemeManager) subscribes to.

use tokio::sync::watch;

use super::palette::ThemeVariant;

/// Background color indices conventionally used by light terminals.
const LIGHT_BG_INDICES: [&str; 2] = ["7", "15"];

/// Detect the terminal's color scheme from the `COLORFGBG` convention.
///
/// Unknown or absent values default to dark, matching the app's default
/// theme.
pub fn detect_system_theme() -> ThemeVariant {
    match std::env::var("COLORFGBG") {
        Ok(value) => parse_colorfgbg(&value).unwrap_or(ThemeVariant::Dark),
        Err(_) => ThemeVariant::Dark,
    }
}

fn parse_colorfgbg(value: &str) -> Option<ThemeVariant> {
    // Format is "fg;bg" or "fg;default;bg"; the background is the last field.
    let bg = value.split(';').next_back()?.trim();
    if bg.is_empty() {
        return None;
    }
    if LIGHT_BG_INDICES.contains(&bg) {
        Some(ThemeVariant::Light)
    } else {
        bg.parse::<u8>().ok().map(|_| ThemeVariant::Dark)
    }
}

/// Create the system-theme channel, seeded with the detected variant.
///
/// The receiver is handed to [`ThemeManager::init`](super::ThemeManager::init);
/// the sender side is the subscription surface — tests (or a future terminal
/// that does report scheme changes) push updates through it, and dropping all
/// receivers tears the subscription down.
pub fn system_theme_channel() -> (watch::Sender<ThemeVariant>, watch::Receiver<ThemeVariant>) {
    watch::channel(detect_system_theme())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_backgrounds_detected() {
        assert_eq!(parse_colorfgbg("0;15"), Some(ThemeVariant::Light));
        assert_eq!(parse_colorfgbg("0;7"), Some(ThemeVariant::Light));
        assert_eq!(parse_colorfgbg("0;default;15"), Some(ThemeVariant::Light));
    }

    #[test]
    fn dark_backgrounds_detected() {
        assert_eq!(parse_colorfgbg("15;0"), Some(ThemeVariant::Dark));
        assert_eq!(parse_colorfgbg("7;8"), Some(ThemeVariant::Dark));
    }

    #[test]
    fn garbage_yields_none() {
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("15;bananas"), None);
        assert_eq!(parse_colorfgbg(";"), None);
    }

    #[test]
    fn channel_seeds_with_detected_value() {
        let (_tx, rx) = system_theme_channel();
        // Whatever the environment reports, the channel must carry a value.
        let _ = *rx.borrow();
    }
}
