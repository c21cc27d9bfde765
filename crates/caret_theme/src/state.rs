//! Global theme state
//!
//! Widgets read colors and blink cadence from here during render. Every
//! change is visual only, so it raises the repaint flag and fires the redraw
//! callback; nothing here ever requests layout.

use crate::theme::{ColorScheme, ThemeBundle};
use crate::themes::CaretTheme;
use crate::tokens::*;
use caret_animation::BlinkTiming;
use caret_core::Color;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Theme state shared by every caret
pub struct ThemeState {
    /// The current theme bundle (light/dark pair)
    bundle: ThemeBundle,

    scheme: RwLock<ColorScheme>,

    /// Colors of the current scheme
    colors: RwLock<ColorTokens>,

    animations: RwLock<AnimationTokens>,

    /// Dynamic color overrides
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,

    needs_repaint: AtomicBool,

    /// Called after every visual change, set by the host
    redraw_callback: RwLock<Option<fn()>>,
}

impl ThemeState {
    /// Standalone state, not registered globally
    pub fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        let theme = bundle.for_scheme(scheme);
        let colors = theme.colors().clone();
        let animations = *theme.animations();

        Self {
            bundle,
            scheme: RwLock::new(scheme),
            colors: RwLock::new(colors),
            animations: RwLock::new(animations),
            color_overrides: RwLock::new(FxHashMap::default()),
            needs_repaint: AtomicBool::new(false),
            redraw_callback: RwLock::new(None),
        }
    }

    /// Initialize the global theme state (call once at app startup).
    /// Later calls are ignored.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        if THEME_STATE.set(Self::new(bundle, scheme)).is_err() {
            tracing::debug!("ThemeState::init - already initialized, ignoring");
        }
    }

    /// Initialize with the built-in caret theme in light mode
    pub fn init_default() {
        Self::init(CaretTheme::bundle(), ColorScheme::Light);
    }

    /// Get the global theme state instance
    ///
    /// # Panics
    ///
    /// Panics if [`init`](Self::init) has not been called.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    // ========== Color Scheme ==========

    pub fn scheme(&self) -> ColorScheme {
        *read(&self.scheme)
    }

    /// Switch scheme, swapping colors and cadence for the new variant
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = write(&self.scheme);
        if *current == scheme {
            return;
        }
        tracing::debug!(
            "ThemeState::set_scheme - switching from {:?} to {:?}",
            *current,
            scheme
        );
        *current = scheme;
        drop(current);

        let theme = self.bundle.for_scheme(scheme);
        *write(&self.colors) = theme.colors().clone();
        *write(&self.animations) = *theme.animations();
        self.repaint();
    }

    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    // ========== Color Access ==========

    /// Get a color token value (checks override first)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = read(&self.color_overrides).get(&token) {
            return *color;
        }
        read(&self.colors).get(token)
    }

    /// Colors of the current scheme, without overrides
    pub fn colors(&self) -> ColorTokens {
        read(&self.colors).clone()
    }

    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        write(&self.color_overrides).insert(token, color);
        self.repaint();
    }

    pub fn remove_color_override(&self, token: ColorToken) {
        if write(&self.color_overrides).remove(&token).is_some() {
            self.repaint();
        }
    }

    pub fn clear_overrides(&self) {
        write(&self.color_overrides).clear();
        self.repaint();
    }

    // ========== Animation Access ==========

    pub fn animations(&self) -> AnimationTokens {
        *read(&self.animations)
    }

    /// Cadence carets should blink with
    pub fn blink_timing(&self) -> BlinkTiming {
        read(&self.animations).caret_blink
    }

    /// Replace the blink cadence until the next scheme switch
    pub fn set_blink_timing(&self, timing: BlinkTiming) {
        write(&self.animations).caret_blink = timing;
        self.repaint();
    }

    // ========== Repaint ==========

    /// Register the function that schedules a redraw
    pub fn set_redraw_callback(&self, callback: fn()) {
        *write(&self.redraw_callback) = Some(callback);
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Read and clear the repaint flag
    pub fn take_needs_repaint(&self) -> bool {
        self.needs_repaint.swap(false, Ordering::SeqCst)
    }

    fn repaint(&self) {
        self.needs_repaint.store(true, Ordering::SeqCst);
        let callback = *read(&self.redraw_callback);
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("bundle", &self.bundle)
            .field("scheme", &self.scheme())
            .field("needs_repaint", &self.needs_repaint())
            .finish()
    }
}
