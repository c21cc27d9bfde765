//! Caret widget
//!
//! A 2-unit-wide rounded bar sized from the font size. While mounted it
//! blinks through the [`BlinkController`] cycle, or stays solid while the
//! host reports typing.
//!
//! Lifecycle:
//! - mount: forget any earlier mode, then observe `is_typing` once
//! - typing change: observed only when the value actually differs
//! - unmount: cancel the running cycle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use caret_animation::{BlinkController, BlinkTimer, BlinkTiming, FrameTimer};
use caret_core::events::{event_types, Event, EventData};
use caret_core::{Brush, Color, CornerRadius, DrawContext, Rect, Size};
use caret_theme::{ColorToken, ThemeState};

use crate::context::WidgetContext;
use crate::widget::{Widget, WidgetId};

/// Bar width in device-independent units
pub const CARET_WIDTH: f32 = 2.0;

/// Fill used when neither an override nor a theme is available
pub const DEFAULT_CARET_COLOR: Color = Color::rgb(0.4, 0.6, 1.0);

/// Below this opacity the bar is not drawn at all
const MIN_PAINT_OPACITY: f32 = 0.01;

/// Bar height for a nominal font size
pub fn caret_height(size: f32) -> f32 {
    (2.29925 * size + 3.28947) / 2.0
}

/// Caret configuration
///
/// A plain value: every builder call returns a new configuration and leaves
/// the original untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretConfig {
    /// Nominal font size the bar is sized for
    pub size: f32,
    /// Whether the host is currently typing
    pub is_typing: bool,
    /// Replaces the theme's caret color when set
    pub color: Option<Color>,
}

impl Default for CaretConfig {
    fn default() -> Self {
        Self {
            size: 14.0,
            is_typing: false,
            color: None,
        }
    }
}

impl CaretConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the typing input
    pub fn typing(mut self, is_typing: bool) -> Self {
        self.is_typing = is_typing;
        self
    }

    /// Override the fill color
    #[deprecated(note = "caret color comes from the theme's `Caret` token")]
    pub fn foreground_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Same as [`size`](Self::size)
    #[deprecated(note = "use `size` instead")]
    pub fn font_size(self, size: f32) -> Self {
        self.size(size)
    }

    /// Bar height for this configuration
    pub fn height(&self) -> f32 {
        caret_height(self.size)
    }
}

/// Blinking caret widget
pub struct Caret<T: BlinkTimer = FrameTimer> {
    id: WidgetId,
    config: CaretConfig,
    controller: BlinkController<T>,
    mounted: bool,
    /// Pick up cadence changes from the global theme
    follows_theme: bool,
    /// Set by the controller observer, drained in `update`
    changed: Arc<AtomicBool>,
}

impl Caret<FrameTimer> {
    /// Frame-driven caret blinking at the theme's cadence
    pub fn new(ctx: &mut WidgetContext, config: CaretConfig) -> Self {
        let timing = ThemeState::try_get()
            .map(ThemeState::blink_timing)
            .unwrap_or_default();
        Self::with_timer(ctx, config, FrameTimer, timing).follow_theme(true)
    }
}

impl<T: BlinkTimer> Caret<T> {
    pub fn with_timer(
        ctx: &mut WidgetContext,
        config: CaretConfig,
        timer: T,
        timing: BlinkTiming,
    ) -> Self {
        let id = ctx.register_widget();
        let changed = Arc::new(AtomicBool::new(false));

        let mut controller = BlinkController::with_timer(timer, timing);
        let flag = Arc::clone(&changed);
        controller.subscribe(move |_| flag.store(true, Ordering::Release));

        Self {
            id,
            config,
            controller,
            mounted: false,
            follows_theme: false,
            changed,
        }
    }

    /// Track the global theme's blink cadence on mount and every update
    pub fn follow_theme(mut self, follow: bool) -> Self {
        self.follows_theme = follow;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn config(&self) -> &CaretConfig {
        &self.config
    }

    pub fn controller(&self) -> &BlinkController<T> {
        &self.controller
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn visible(&self) -> bool {
        self.controller.visible()
    }

    pub fn opacity(&self) -> f32 {
        self.controller.opacity()
    }

    /// Adopt `theme`'s blink cadence. A running cycle restarts if it changed.
    pub fn apply_theme_timing(&mut self, theme: &ThemeState) -> bool {
        let timing = theme.blink_timing();
        if *self.controller.timing() == timing {
            return false;
        }
        tracing::debug!("caret {:?}: blink cadence {:?}", self.id, timing);
        self.controller.set_timing(timing);
        true
    }

    fn sync_timing(&mut self) {
        if !self.follows_theme {
            return;
        }
        if let Some(theme) = ThemeState::try_get() {
            self.apply_theme_timing(theme);
        }
    }

    // ========== Lifecycle ==========

    pub fn mount(&mut self, ctx: &mut WidgetContext) {
        if self.mounted {
            return;
        }
        tracing::debug!("caret {:?}: mount (typing: {})", self.id, self.config.is_typing);

        self.mounted = true;
        ctx.set_mounted(self.id, true);
        self.controller.reset();
        self.sync_timing();
        self.controller.observe_typing(self.config.is_typing);
        self.sync_dirty(ctx, true);
    }

    pub fn unmount(&mut self, ctx: &mut WidgetContext) {
        if !self.mounted {
            return;
        }
        tracing::debug!("caret {:?}: unmount", self.id);

        self.mounted = false;
        ctx.set_mounted(self.id, false);
        self.controller.stop();
        self.sync_dirty(ctx, true);
    }

    /// Unmount if needed and release the widget's registration
    pub fn destroy(mut self, ctx: &mut WidgetContext) {
        self.unmount(ctx);
        ctx.unregister_widget(self.id);
        tracing::debug!("caret {:?}: destroyed", self.id);
    }

    /// Feed the typing input. Returns true if the value changed.
    pub fn set_typing(&mut self, ctx: &mut WidgetContext, is_typing: bool) -> bool {
        if self.config.is_typing == is_typing {
            return false;
        }
        self.config.is_typing = is_typing;

        if self.mounted {
            self.controller.observe_typing(is_typing);
            self.sync_dirty(ctx, false);
        }
        true
    }

    /// Advance the blink by one frame (call each frame while mounted)
    pub fn update(&mut self, ctx: &mut WidgetContext, dt_ms: f32) {
        if !self.mounted {
            return;
        }

        self.sync_timing();
        let animating = self.controller.tick(dt_ms);
        self.sync_dirty(ctx, animating);
    }

    /// Mark dirty if the controller reported a change, or if `force`
    fn sync_dirty(&self, ctx: &mut WidgetContext, force: bool) {
        if self.changed.swap(false, Ordering::AcqRel) || force {
            ctx.mark_dirty(self.id);
        }
    }

    // ========== Rendering ==========

    /// Preferred size
    pub fn measure(&self) -> Size {
        Size::new(CARET_WIDTH, self.config.height())
    }

    /// Fill color: the override, else the global theme's caret token
    pub fn resolved_color(&self) -> Color {
        self.resolved_color_in(ThemeState::try_get())
    }

    /// Fill color against a specific theme
    pub fn resolved_color_in(&self, theme: Option<&ThemeState>) -> Color {
        self.config
            .color
            .or_else(|| theme.map(|theme| theme.color(ColorToken::Caret)))
            .unwrap_or(DEFAULT_CARET_COLOR)
    }

    /// Draw at the top-left of `bounds` using a specific theme
    pub fn paint_in(&self, ctx: &mut dyn DrawContext, bounds: Rect, theme: Option<&ThemeState>) {
        if !self.mounted {
            return;
        }

        let opacity = self.opacity();
        if opacity < MIN_PAINT_OPACITY {
            return;
        }

        let bar = Rect::from_origin_size(bounds.origin, self.measure());

        ctx.push_opacity(opacity);
        ctx.fill_rect(
            bar,
            CornerRadius::uniform(CARET_WIDTH / 2.0),
            Brush::Solid(self.resolved_color_in(theme)),
        );
        ctx.pop_opacity();
    }

    /// Draw at the top-left of `bounds`
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect) {
        self.paint_in(ctx, bounds, ThemeState::try_get());
    }

    /// Dispatch a host event. Events target this caret or broadcast with target 0.
    pub fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        if event.target != 0 && event.target != ctx.target_of(self.id) {
            return;
        }

        match (event.event_type, &event.data) {
            (event_types::MOUNT, _) => self.mount(ctx),
            (event_types::UNMOUNT, _) => self.unmount(ctx),
            (event_types::TYPING_CHANGED, EventData::Typing { active }) => {
                self.set_typing(ctx, *active);
            }
            (event_types::FRAME, EventData::Frame { dt_ms }) => self.update(ctx, *dt_ms),
            _ => {}
        }
    }
}

impl<T: BlinkTimer> Widget for Caret<T> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        Caret::handle_event(self, ctx, event);
    }

    fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect) {
        Caret::paint(self, ctx, bounds);
    }
}

impl<T: BlinkTimer> std::fmt::Debug for Caret<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Caret")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("mounted", &self.mounted)
            .field("controller", &self.controller)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caret_animation::BlinkMode;
    use caret_core::{DrawCommand, RecordingContext};

    fn mounted(ctx: &mut WidgetContext, config: CaretConfig) -> Caret {
        let mut caret = Caret::new(ctx, config);
        caret.mount(ctx);
        ctx.take_dirty();
        caret
    }

    fn run(caret: &mut Caret, ctx: &mut WidgetContext, ms: u32) {
        for _ in 0..ms {
            caret.update(ctx, 1.0);
        }
    }

    #[test]
    fn test_caret_height() {
        assert!((caret_height(14.0) - 17.644_22).abs() < 1e-3);
        assert!((caret_height(24.0) - 29.135_735).abs() < 1e-3);
        assert_eq!(CaretConfig::default().height(), caret_height(14.0));
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_builders_copy() {
        let base = CaretConfig::new().typing(true);
        let sized = base.font_size(20.0);
        let colored = sized.foreground_color(Color::WHITE);

        assert_eq!(base.size, 14.0);
        assert_eq!(base.color, None);

        assert_eq!(sized.size, 20.0);
        assert!(sized.is_typing);

        assert_eq!(colored.size, 20.0);
        assert!(colored.is_typing);
        assert_eq!(colored.color, Some(Color::WHITE));
        assert_eq!(sized.color, None);
    }

    #[test]
    fn test_creation_registers_without_blinking() {
        let mut ctx = WidgetContext::new();
        let caret = Caret::new(&mut ctx, CaretConfig::default());

        assert!(ctx.is_registered(caret.id()));
        assert!(!caret.is_mounted());
        assert_eq!(caret.controller().mode(), None);
        assert!(!caret.controller().is_timer_active());
    }

    #[test]
    fn test_mount_starts_blinking() {
        let mut ctx = WidgetContext::new();
        let mut caret = Caret::new(&mut ctx, CaretConfig::default());

        caret.mount(&mut ctx);
        assert!(ctx.is_mounted(caret.id()));
        assert!(ctx.is_dirty(caret.id()));
        assert_eq!(caret.controller().mode(), Some(BlinkMode::Blinking));
        assert!(caret.controller().is_timer_active());

        ctx.take_dirty();
        run(&mut caret, &mut ctx, 540);
        assert!(!caret.visible());
        assert!(ctx.is_dirty(caret.id()));
    }

    #[test]
    fn test_mount_while_typing_is_solid() {
        let mut ctx = WidgetContext::new();
        let mut caret = mounted(&mut ctx, CaretConfig::new().typing(true));

        assert_eq!(caret.controller().mode(), Some(BlinkMode::Solid));
        run(&mut caret, &mut ctx, 2000);
        assert!(caret.visible());
        assert_eq!(caret.opacity(), 1.0);
        assert!(!ctx.has_dirty());
    }

    #[test]
    fn test_typing_changes_are_edge_triggered() {
        let mut ctx = WidgetContext::new();
        let mut caret = mounted(&mut ctx, CaretConfig::default());

        run(&mut caret, &mut ctx, 300);
        assert!(!caret.set_typing(&mut ctx, false));

        // Still the original cycle: hides at 533ms
        run(&mut caret, &mut ctx, 240);
        assert!(!caret.visible());

        assert!(caret.set_typing(&mut ctx, true));
        assert!(caret.visible());
        assert!(caret.set_typing(&mut ctx, false));
        run(&mut caret, &mut ctx, 500);
        assert!(caret.visible());
    }

    #[test]
    fn test_typing_before_mount_is_deferred() {
        let mut ctx = WidgetContext::new();
        let mut caret = Caret::new(&mut ctx, CaretConfig::default());

        assert!(caret.set_typing(&mut ctx, true));
        assert_eq!(caret.controller().mode(), None);

        caret.mount(&mut ctx);
        assert_eq!(caret.controller().mode(), Some(BlinkMode::Solid));
    }

    #[test]
    fn test_unmount_cancels() {
        let mut ctx = WidgetContext::new();
        let mut caret = mounted(&mut ctx, CaretConfig::default());
        run(&mut caret, &mut ctx, 100);

        caret.unmount(&mut ctx);
        assert!(!caret.controller().is_timer_active());
        assert!(!ctx.is_mounted(caret.id()));
        ctx.take_dirty();

        let before = (caret.visible(), caret.opacity());
        for _ in 0..10 {
            caret.update(&mut ctx, 533.0);
        }
        assert_eq!((caret.visible(), caret.opacity()), before);
        assert!(!ctx.has_dirty());
    }

    #[test]
    fn test_destroy_releases_registration() {
        let mut ctx = WidgetContext::new();
        let caret = mounted(&mut ctx, CaretConfig::default());
        let id = caret.id();

        caret.destroy(&mut ctx);
        assert!(!ctx.is_registered(id));
        assert!(!ctx.is_mounted(id));
        assert!(!ctx.has_dirty());

        assert!(ctx.is_empty());

        for _ in 0..100 {
            Caret::new(&mut ctx, CaretConfig::default()).destroy(&mut ctx);
        }
        assert_eq!(ctx.len(), 0);
    }

    #[test]
    fn test_remount_restarts_from_top() {
        let mut ctx = WidgetContext::new();
        let mut caret = mounted(&mut ctx, CaretConfig::default());
        run(&mut caret, &mut ctx, 600);
        assert!(!caret.visible());

        caret.unmount(&mut ctx);
        caret.mount(&mut ctx);
        assert!(caret.visible());
        assert!(caret.controller().is_timer_active());
        run(&mut caret, &mut ctx, 500);
        assert!(caret.visible());
    }

    #[test]
    fn test_theme_cadence_restarts_cycle() {
        use caret_theme::{CaretTheme, ColorScheme};

        let mut ctx = WidgetContext::new();
        let theme = ThemeState::new(CaretTheme::bundle(), ColorScheme::Light);
        let mut caret = mounted(&mut ctx, CaretConfig::default());
        run(&mut caret, &mut ctx, 300);
        assert!(!caret.apply_theme_timing(&theme));

        theme.set_blink_timing(BlinkTiming::classic());
        assert!(caret.apply_theme_timing(&theme));
        assert_eq!(caret.controller().timing(), &BlinkTiming::classic());

        // Fresh cycle: hides 500ms after the change
        run(&mut caret, &mut ctx, 400);
        assert!(caret.visible());
        run(&mut caret, &mut ctx, 101);
        assert!(!caret.visible());
    }

    #[test]
    fn test_paint_records_rounded_bar() {
        let mut ctx = WidgetContext::new();
        let caret = mounted(&mut ctx, CaretConfig::new().size(24.0));

        let mut canvas = RecordingContext::new(Size::new(100.0, 40.0));
        caret.paint_in(&mut canvas, Rect::new(5.0, 3.0, 50.0, 40.0), None);

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::PushOpacity(1.0),
                DrawCommand::FillRect {
                    rect: Rect::new(5.0, 3.0, 2.0, caret_height(24.0)),
                    corner_radius: CornerRadius::uniform(1.0),
                    brush: Brush::Solid(DEFAULT_CARET_COLOR),
                },
                DrawCommand::PopOpacity,
            ]
        );
    }

    #[test]
    fn test_paint_skips_when_faded_out() {
        let mut ctx = WidgetContext::new();
        let mut caret = mounted(&mut ctx, CaretConfig::default());
        run(&mut caret, &mut ctx, 700);
        assert_eq!(caret.opacity(), 0.0);

        let mut canvas = RecordingContext::new(Size::new(100.0, 40.0));
        caret.paint_in(&mut canvas, Rect::new(0.0, 0.0, 2.0, 20.0), None);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_paint_skips_when_unmounted() {
        let mut ctx = WidgetContext::new();
        let caret = Caret::new(&mut ctx, CaretConfig::default());

        let mut canvas = RecordingContext::new(Size::new(100.0, 40.0));
        caret.paint_in(&mut canvas, Rect::new(0.0, 0.0, 2.0, 20.0), None);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    #[allow(deprecated)]
    fn test_color_resolution_order() {
        use caret_theme::{CaretTheme, ColorScheme};

        let mut ctx = WidgetContext::new();
        let theme = ThemeState::new(CaretTheme::bundle(), ColorScheme::Dark);

        let plain = Caret::new(&mut ctx, CaretConfig::default());
        assert_eq!(plain.resolved_color_in(None), DEFAULT_CARET_COLOR);
        assert_eq!(
            plain.resolved_color_in(Some(&theme)),
            theme.color(ColorToken::Caret)
        );

        let red = Color::rgb(1.0, 0.0, 0.0);
        let overridden = Caret::new(&mut ctx, CaretConfig::new().foreground_color(red));
        assert_eq!(overridden.resolved_color_in(Some(&theme)), red);
    }

    #[test]
    fn test_events_route_by_target() {
        let mut ctx = WidgetContext::new();
        let mut a = Caret::new(&mut ctx, CaretConfig::default());
        let mut b = Caret::new(&mut ctx, CaretConfig::default());

        let mount_a = Event::mount(ctx.target_of(a.id()));
        a.handle_event(&mut ctx, &mount_a);
        b.handle_event(&mut ctx, &mount_a);
        assert!(a.is_mounted());
        assert!(!b.is_mounted());

        let typing = Event::typing(ctx.target_of(a.id()), true);
        a.handle_event(&mut ctx, &typing);
        assert_eq!(a.controller().mode(), Some(BlinkMode::Solid));

        // Broadcast frames reach everyone
        let frame = Event::frame(0, 16.0);
        a.handle_event(&mut ctx, &frame);
        b.handle_event(&mut ctx, &frame);

        let unmount_a = Event::unmount(ctx.target_of(a.id()));
        a.handle_event(&mut ctx, &unmount_a);
        assert!(!a.is_mounted());
    }
}
