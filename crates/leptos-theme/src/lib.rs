//! Leptos Theme Utilities
//!
//! Dark/light switching for Leptos apps.
//! The flag lives in a signal pair; the only side effect is a marker
//! class on the document root that stylesheets key off.

use leptos::prelude::*;

/// Marker class applied to the root element while dark mode is on
pub const DARK_CLASS: &str = "dark";

/// Element that carries the theme marker class
pub trait ThemeTarget {
    /// Add the class when `present`, remove it otherwise
    fn apply(&self, class: &str, present: bool);
}

/// `document.documentElement` (the `<html>` node)
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply(&self, class: &str, present: bool) {
        let Some(root) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        else {
            log::warn!("[THEME] No document root, cannot set class '{}'", class);
            return;
        };

        if let Err(err) = root.class_list().toggle_with_force(class, present) {
            log::error!("[THEME] Failed to toggle class '{}': {:?}", class, err);
        }
    }
}

/// Mirror `is_dark` onto the target without flipping it
pub fn apply_theme(is_dark: bool, target: &impl ThemeTarget) {
    target.apply(DARK_CLASS, is_dark);
}

/// Flip the flag, mirror the new value onto the target and return it
pub fn toggle_theme(current: bool, target: &impl ThemeTarget) -> bool {
    let next = !current;
    apply_theme(next, target);
    next
}

/// Theme state signals
#[derive(Clone, Copy)]
pub struct ThemeSignals {
    pub is_dark_read: ReadSignal<bool>,
    pub is_dark_write: WriteSignal<bool>,
}

impl ThemeSignals {
    /// Toggle dark mode and update the marker. Returns the new flag.
    pub fn toggle(&self, target: &impl ThemeTarget) -> bool {
        let next = toggle_theme(self.is_dark_read.get_untracked(), target);
        self.is_dark_write.set(next);
        log::debug!("[THEME] dark_mode -> {}", next);
        next
    }
}

/// Create theme signals and sync the marker with the initial value
pub fn create_theme_signals(initial_dark: bool, target: &impl ThemeTarget) -> ThemeSignals {
    let (is_dark_read, is_dark_write) = signal(initial_dark);
    apply_theme(initial_dark, target);
    ThemeSignals {
        is_dark_read,
        is_dark_write,
    }
}
