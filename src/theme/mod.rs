//! Theme system: tri-state preference, OS-signal reconciliation, palettes.

mod palette;
mod system;
mod sync;

pub use palette::{ColorPalette, ThemeVariant};
pub use system::{detect_system_theme, system_theme_channel};
pub use sync::{
    ThemeManager, ThemePreference, TransitionToken, THEME_PREF_KEY, TRANSITION_CLEAR_DELAY,
};
