use std::cell::RefCell;

use super::*;
use crate::util::storage::MemoryStore;

#[derive(Default)]
struct RecordedRoot {
    dark: RefCell<Option<bool>>,
    scale: RefCell<Option<f64>>,
}

impl Presentation for RecordedRoot {
    fn set_dark_mode(&self, enabled: bool) {
        *self.dark.borrow_mut() = Some(enabled);
    }

    fn set_font_scale(&self, scale: f64) {
        *self.scale.borrow_mut() = Some(scale);
    }
}

fn store() -> (MemoryStore, PreferenceStore<MemoryStore>) {
    let backing = MemoryStore::new();
    (backing.clone(), PreferenceStore::new(backing, StorageKeys::default()))
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_defaults_when_nothing_stored() {
    let (_, prefs) = store();
    let root = RecordedRoot::default();
    let applied = prefs.apply(&root);
    assert_eq!(applied, Preferences::default());
    assert_eq!(*root.dark.borrow(), Some(false));
    assert_eq!(*root.scale.borrow(), Some(1.0));
}

#[test]
fn apply_clamps_out_of_range_stored_scale() {
    let (backing, prefs) = store();
    let root = RecordedRoot::default();
    backing.set("font-scale", "3");
    assert_eq!(prefs.apply(&root).font_scale, FONT_SCALE_MAX);
    backing.set("font-scale", "0.2");
    assert_eq!(prefs.apply(&root).font_scale, FONT_SCALE_MIN);
}

#[test]
fn apply_treats_garbage_scale_as_default() {
    let (backing, prefs) = store();
    backing.set("font-scale", "huge");
    assert_eq!(prefs.read().font_scale, FONT_SCALE_DEFAULT);
    backing.set("font-scale", "NaN");
    assert_eq!(prefs.read().font_scale, FONT_SCALE_DEFAULT);
}

#[test]
fn only_literal_true_enables_dark_mode() {
    let (backing, prefs) = store();
    backing.set("prefers-dark", "TRUE");
    assert!(!prefs.read().dark_mode);
    backing.set("prefers-dark", "true");
    assert!(prefs.read().dark_mode);
}

// =============================================================
// toggle_dark_mode
// =============================================================

#[test]
fn toggle_dark_mode_persists_and_applies() {
    let (backing, prefs) = store();
    let root = RecordedRoot::default();
    let after = prefs.toggle_dark_mode(&root);
    assert!(after.dark_mode);
    assert_eq!(backing.get("prefers-dark").as_deref(), Some("true"));
    assert_eq!(*root.dark.borrow(), Some(true));
}

#[test]
fn toggle_dark_mode_twice_restores_original() {
    let (backing, prefs) = store();
    backing.set("prefers-dark", "false");
    let root = RecordedRoot::default();
    let before = prefs.apply(&root);
    prefs.toggle_dark_mode(&root);
    let after = prefs.toggle_dark_mode(&root);
    assert_eq!(before, after);
    assert_eq!(backing.get("prefers-dark").as_deref(), Some("false"));
    assert_eq!(*root.dark.borrow(), Some(false));
}

#[test]
fn dark_toggle_label_names_target_mode() {
    let light = Preferences::default();
    let dark = Preferences { dark_mode: true, ..light };
    assert_eq!(light.dark_toggle_label(), "Dark mode");
    assert_eq!(dark.dark_toggle_label(), "Light mode");
}

// =============================================================
// adjust_font_scale
// =============================================================

#[test]
fn single_increment_steps_by_five_hundredths() {
    let (backing, prefs) = store();
    let root = RecordedRoot::default();
    let after = prefs.adjust_font_scale(FONT_SCALE_STEP, &root);
    assert_eq!(after.font_scale, 1.05);
    assert_eq!(backing.get("font-scale").as_deref(), Some("1.05"));
    assert_eq!(*root.scale.borrow(), Some(1.05));
}

#[test]
fn repeated_increments_saturate_at_max() {
    let (backing, prefs) = store();
    let root = RecordedRoot::default();
    for _ in 0..20 {
        prefs.adjust_font_scale(FONT_SCALE_STEP, &root);
    }
    assert_eq!(prefs.read().font_scale, FONT_SCALE_MAX);
    assert_eq!(backing.get("font-scale").as_deref(), Some("1.4"));
}

#[test]
fn repeated_decrements_saturate_at_min() {
    let (_, prefs) = store();
    let root = RecordedRoot::default();
    for _ in 0..20 {
        prefs.adjust_font_scale(-FONT_SCALE_STEP, &root);
    }
    assert_eq!(prefs.read().font_scale, FONT_SCALE_MIN);
}

#[test]
fn mixed_adjustments_stay_in_range() {
    let (_, prefs) = store();
    let root = RecordedRoot::default();
    let pattern = [1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0];
    for (i, sign) in pattern.iter().cycle().take(200).enumerate() {
        let delta = if i % 7 == 0 { -FONT_SCALE_STEP } else { sign * FONT_SCALE_STEP };
        let scale = prefs.adjust_font_scale(delta, &root).font_scale;
        assert!((FONT_SCALE_MIN..=FONT_SCALE_MAX).contains(&scale), "scale {scale} out of range");
    }
}

#[test]
fn adjust_from_unparseable_scale_starts_at_default() {
    let (backing, prefs) = store();
    let root = RecordedRoot::default();
    backing.set("font-scale", "1,2");
    assert_eq!(prefs.adjust_font_scale(FONT_SCALE_STEP, &root).font_scale, 1.05);
    assert_eq!(backing.get("font-scale").as_deref(), Some("1.05"));
}

#[test]
fn adjust_starts_from_raw_stored_value() {
    let (backing, prefs) = store();
    let root = RecordedRoot::default();
    backing.set("font-scale", "3");
    assert_eq!(prefs.adjust_font_scale(-FONT_SCALE_STEP, &root).font_scale, FONT_SCALE_MAX);
}

#[test]
fn clamp_font_scale_handles_non_finite() {
    assert_eq!(clamp_font_scale(f64::INFINITY), FONT_SCALE_DEFAULT);
    assert_eq!(clamp_font_scale(f64::NAN), FONT_SCALE_DEFAULT);
    assert_eq!(clamp_font_scale(1.2), 1.2);
}
