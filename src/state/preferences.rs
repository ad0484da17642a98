//! Dark mode and font-scale preferences.
//!
//! Reads the persisted values, clamps the scale, and pushes both onto the
//! document root through [`Presentation`]. Every mutation persists first and
//! then re-applies, so storage and presentation never disagree after a call.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::config::StorageKeys;
use crate::util::storage::KeyValueStore;

pub const FONT_SCALE_MIN: f64 = 0.9;
pub const FONT_SCALE_MAX: f64 = 1.4;
pub const FONT_SCALE_DEFAULT: f64 = 1.0;
/// Change applied by one press of the increase/decrease control.
pub const FONT_SCALE_STEP: f64 = 0.05;

/// Effective preference state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub font_scale: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: false, font_scale: FONT_SCALE_DEFAULT }
    }
}

impl Preferences {
    /// Label for the dark-mode button: names the mode it switches to.
    #[must_use]
    pub fn dark_toggle_label(self) -> &'static str {
        if self.dark_mode { "Light mode" } else { "Dark mode" }
    }
}

/// Clamp a scale into the supported range. Non-finite input maps to the default.
#[must_use]
pub fn clamp_font_scale(scale: f64) -> f64 {
    if scale.is_finite() { scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX) } else { FONT_SCALE_DEFAULT }
}

// Two decimals keeps repeated ±0.05 steps from drifting.
fn round_scale(scale: f64) -> f64 {
    (scale * 100.0).round() / 100.0
}

/// Where preferences are rendered (the `<html>` element in the browser).
pub trait Presentation {
    fn set_dark_mode(&self, enabled: bool);
    fn set_font_scale(&self, scale: f64);
}

/// Persisted preference store bound to a key/value backend.
pub struct PreferenceStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    fn stored_dark_mode(&self) -> bool {
        self.store.get(&self.keys.dark_mode).as_deref() == Some("true")
    }

    /// Raw stored scale, unclamped. Missing or unparseable reads as the default.
    fn stored_font_scale(&self) -> f64 {
        self.store
            .get(&self.keys.font_scale)
            .and_then(|raw| match raw.trim().parse::<f64>() {
                Ok(scale) => Some(scale),
                Err(err) => {
                    log::warn!("ignoring stored font scale {raw:?}: {err}");
                    None
                }
            })
            .filter(|scale| scale.is_finite())
            .unwrap_or(FONT_SCALE_DEFAULT)
    }

    /// Current effective preferences.
    pub fn read(&self) -> Preferences {
        Preferences {
            dark_mode: self.stored_dark_mode(),
            font_scale: clamp_font_scale(self.stored_font_scale()),
        }
    }

    /// Push the stored preferences onto `target`.
    pub fn apply(&self, target: &impl Presentation) -> Preferences {
        let prefs = self.read();
        target.set_dark_mode(prefs.dark_mode);
        target.set_font_scale(prefs.font_scale);
        prefs
    }

    /// Flip and persist the dark-mode flag, then re-apply.
    pub fn toggle_dark_mode(&self, target: &impl Presentation) -> Preferences {
        let next = !self.stored_dark_mode();
        self.store.set(&self.keys.dark_mode, if next { "true" } else { "false" });
        log::debug!("dark mode {}", if next { "on" } else { "off" });
        self.apply(target)
    }

    /// Add `delta` to the stored scale, clamp, persist, and re-apply.
    pub fn adjust_font_scale(&self, delta: f64, target: &impl Presentation) -> Preferences {
        let next = clamp_font_scale(round_scale(self.stored_font_scale() + delta));
        self.store.set(&self.keys.font_scale, &next.to_string());
        log::debug!("font scale {next}");
        self.apply(target)
    }
}
