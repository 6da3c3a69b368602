//! Theme reconciliation: persisted preference, OS signal, applied palette.
//!
//! `ThemeManager` is an explicit context object owned by the app — there is
//! no process-wide theme singleton. It reconciles three inputs into one
//! authoritative "is the UI dark" answer:
//!
//! 1. the persisted preference (`user_preferences` key `theme`),
//! 2. the OS/terminal signal (a watch channel, see [`super::system`]),
//! 3. the in-memory default (`system`).
//!
//! Commits are ordered so the UI never flashes: the applied variant is forced
//! synchronously first, then the preference store is updated (a storage
//! failure is logged and the session continues in-memory), then listeners are
//! notified. Every toggle carries a generation number; the transient
//! transition marker only clears when the matching generation asks it to, so
//! a stale clear from an earlier toggle can never cancel a later one.

use std::time::Duration;

use tokio::sync::watch;

use crate::storage::Database;

use super::palette::{ColorPalette, ThemeVariant};

/// Preference-store key holding the theme choice.
pub const THEME_PREF_KEY: &str = "theme";

/// How long the transition marker stays up after a commit.
pub const TRANSITION_CLEAR_DELAY: Duration = Duration::from_millis(100);

// ============================================================================
// Theme Preference
// ============================================================================

/// The tri-state user choice. `System` defers to the OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Parse a preference name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Canonical lowercase name, as persisted.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

// ============================================================================
// Transition Token
// ============================================================================

/// Handle identifying one theme commit's transition marker.
///
/// Returned by [`ThemeManager::set`] and [`ThemeManager::toggle`]; passed
/// back to [`ThemeManager::clear_transition`] after
/// [`TRANSITION_CLEAR_DELAY`]. Clearing with a stale token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken(u64);

// ============================================================================
// Theme Manager
// ============================================================================

pub struct ThemeManager {
    preference: ThemePreference,
    system: watch::Receiver<ThemeVariant>,
    /// The variant currently forced onto the UI (document-root analog).
    applied: ThemeVariant,
    /// Generation of the commit whose transition marker is still up.
    transition: Option<u64>,
    generation: u64,
    changes: watch::Sender<ThemeVariant>,
}

impl ThemeManager {
    /// Build a manager from the persisted preference value and the OS signal.
    ///
    /// An absent or unparseable persisted value falls back to `System`, so a
    /// fresh profile follows the terminal. Resolution is synchronous: the
    /// applied variant is known as soon as `init` returns. Teardown is
    /// dropping the manager, which releases the OS-signal subscription.
    pub fn init(persisted: Option<&str>, system: watch::Receiver<ThemeVariant>) -> Self {
        let preference = persisted
            .and_then(ThemePreference::from_str_name)
            .unwrap_or_default();
        let applied = Self::resolve(preference, &system);
        let (changes, _) = watch::channel(applied);
        tracing::debug!(
            preference = preference.name(),
            applied = applied.name(),
            "Theme manager initialized"
        );
        Self {
            preference,
            system,
            applied,
            transition: None,
            generation: 0,
            changes,
        }
    }

    fn resolve(preference: ThemePreference, system: &watch::Receiver<ThemeVariant>) -> ThemeVariant {
        match preference {
            ThemePreference::Light => ThemeVariant::Light,
            ThemePreference::Dark => ThemeVariant::Dark,
            ThemePreference::System => *system.borrow(),
        }
    }

    // ========================================================================
    // Derived State
    // ========================================================================

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The concrete variant after resolving `System` against the OS signal.
    pub fn resolved(&self) -> ThemeVariant {
        Self::resolve(self.preference, &self.system)
    }

    /// The single derived boolean the UI keys off.
    pub fn is_dark(&self) -> bool {
        self.resolved().is_dark()
    }

    /// The variant currently applied to the UI.
    pub fn applied(&self) -> ThemeVariant {
        self.applied
    }

    /// Palette for the applied variant.
    pub fn palette(&self) -> ColorPalette {
        self.applied.palette()
    }

    pub fn transition_in_progress(&self) -> bool {
        self.transition.is_some()
    }

    /// Subscribe to change notifications (the "theme-change event").
    pub fn subscribe(&self) -> watch::Receiver<ThemeVariant> {
        self.changes.subscribe()
    }

    // ========================================================================
    // Commits
    // ========================================================================

    /// Set the preference directly.
    ///
    /// Returns the transition token for the commit, or `None` when the call
    /// was a no-op (same preference, same resolved variant) — repeated
    /// `set(Dark)` leaves applied state and listeners untouched.
    pub async fn set(&mut self, preference: ThemePreference, db: &Database) -> Option<TransitionToken> {
        if preference == self.preference && Self::resolve(preference, &self.system) == self.applied
        {
            return None;
        }
        Some(self.commit(preference, db).await)
    }

    /// Flip to the opposite of the currently *resolved* variant.
    ///
    /// The result is always an explicit light/dark choice; toggling away from
    /// `System` pins the preference.
    pub async fn toggle(&mut self, db: &Database) -> TransitionToken {
        let target = match self.resolved().opposite() {
            ThemeVariant::Light => ThemePreference::Light,
            ThemeVariant::Dark => ThemePreference::Dark,
        };
        self.commit(target, db).await
    }

    async fn commit(&mut self, preference: ThemePreference, db: &Database) -> TransitionToken {
        // 1. Raise the transition marker for this specific commit.
        self.generation = self.generation.wrapping_add(1);
        self.transition = Some(self.generation);

        // 2. Force the applied variant synchronously, ahead of persistence.
        self.preference = preference;
        self.applied = self.resolved();

        // 3. Confirm through the preference store. Storage failure degrades
        //    to an in-memory theme for this session.
        if let Err(e) = db.set_preference(THEME_PREF_KEY, preference.name()).await {
            tracing::warn!(error = %e, "Failed to persist theme preference, keeping in-memory value");
        }

        // 4. Notify external listeners.
        self.changes.send_replace(self.applied);

        tracing::debug!(
            preference = preference.name(),
            applied = self.applied.name(),
            generation = self.generation,
            "Theme committed"
        );

        TransitionToken(self.generation)
    }

    /// Clear the transition marker raised by the commit that produced
    /// `token`. A stale token (a newer commit has happened since) is ignored,
    /// so rapid toggles resolve last-write-wins.
    pub fn clear_transition(&mut self, token: TransitionToken) -> bool {
        if self.transition == Some(token.0) {
            self.transition = None;
            true
        } else {
            false
        }
    }

    /// Re-resolve after the OS signal changed. Only matters while the
    /// preference is `System`; explicit choices ignore the signal.
    ///
    /// Returns true when the applied variant changed.
    pub fn on_system_change(&mut self) -> bool {
        let resolved = self.resolved();
        if resolved != self.applied {
            self.applied = resolved;
            self.changes.send_replace(self.applied);
            tracing::debug!(applied = self.applied.name(), "System theme change applied");
            true
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
