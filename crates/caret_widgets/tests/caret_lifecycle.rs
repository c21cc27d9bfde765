//! Carets driven the way a host drives them: lifecycle and frame events,
//! a shared theme, and painting into a recorded frame.

use caret_core::{Brush, Color, DrawCommand, Event, RecordingContext, Rect, Size};
use caret_theme::{ColorToken, ThemeConfig, ThemeState};
use caret_widgets::{caret_height, Caret, CaretConfig, Widget, WidgetContext};

const THEME: &str = r##"
[colors]
caret = "#FF5500"

[blink]
preset = "classic"
"##;

fn theme() -> &'static ThemeState {
    if ThemeState::try_get().is_none() {
        let config = ThemeConfig::from_toml_str(THEME).unwrap();
        ThemeState::init(config.to_bundle().unwrap(), Default::default());
    }
    ThemeState::get()
}

fn frames(caret: &mut dyn Widget, ctx: &mut WidgetContext, count: usize, dt_ms: f32) {
    for _ in 0..count {
        caret.handle_event(ctx, &Event::frame(0, dt_ms));
    }
}

#[test]
fn caret_picks_up_global_theme() {
    let theme = theme();
    let mut ctx = WidgetContext::new();
    let caret = Caret::new(&mut ctx, CaretConfig::default());

    assert_eq!(caret.resolved_color(), Color::from_hex(0xFF5500));
    assert_eq!(caret.resolved_color(), theme.color(ColorToken::Caret));
    assert_eq!(caret.controller().timing(), &theme.blink_timing());
}

#[test]
fn host_event_loop() {
    theme();
    let mut ctx = WidgetContext::new();
    let mut caret = Caret::new(&mut ctx, CaretConfig::new().size(14.0));
    let target = ctx.target_of(caret.id());

    // Nothing happens before mount
    frames(&mut caret, &mut ctx, 60, 10.0);
    assert!(!caret.controller().is_timer_active());

    caret.handle_event(&mut ctx, &Event::mount(target));
    assert!(caret.visible());

    // Classic cadence hides at 500ms
    frames(&mut caret, &mut ctx, 49, 10.0);
    assert!(caret.visible());
    frames(&mut caret, &mut ctx, 2, 10.0);
    assert!(!caret.visible());

    caret.handle_event(&mut ctx, &Event::typing(target, true));
    assert!(caret.visible());
    assert_eq!(caret.opacity(), 1.0);

    caret.handle_event(&mut ctx, &Event::unmount(target));
    assert!(!caret.controller().is_timer_active());
    ctx.take_dirty();

    frames(&mut caret, &mut ctx, 300, 10.0);
    assert!(!ctx.has_dirty());
}

#[test]
fn painted_frame_uses_theme_color() {
    theme();
    let mut ctx = WidgetContext::new();
    let mut caret = Caret::new(&mut ctx, CaretConfig::new().size(24.0));
    caret.mount(&mut ctx);

    let mut frame = RecordingContext::new(Size::new(200.0, 40.0));
    Widget::paint(&caret, &mut frame, Rect::new(12.0, 6.0, 100.0, 30.0));

    let fills: Vec<_> = frame
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, brush, .. } => Some((*rect, *brush)),
            _ => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![(
            Rect::new(12.0, 6.0, 2.0, caret_height(24.0)),
            Brush::Solid(Color::from_hex(0xFF5500))
        )]
    );

    // Dirty after mount, clean once drained and idle within the hold
    assert_eq!(ctx.take_dirty(), vec![caret.id()]);
    caret.update(&mut ctx, 100.0);
    assert!(!ctx.has_dirty());
}
