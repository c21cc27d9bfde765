//! Cadence changes on the global theme reach carets that are already alive.

use caret_animation::{BlinkTiming, FrameTimer};
use caret_theme::{ThemeConfig, ThemeState};
use caret_widgets::{Caret, CaretConfig, WidgetContext};

#[test]
fn live_carets_follow_theme_cadence() {
    ThemeState::init_default();
    let theme = ThemeState::get();
    let mut ctx = WidgetContext::new();

    let mut caret = Caret::new(&mut ctx, CaretConfig::default());
    let mut pinned = Caret::with_timer(
        &mut ctx,
        CaretConfig::default(),
        FrameTimer,
        BlinkTiming::modern(),
    );
    caret.mount(&mut ctx);
    pinned.mount(&mut ctx);
    assert_eq!(caret.controller().timing(), &BlinkTiming::modern());

    ThemeConfig::from_toml_str("[blink]\npreset = \"classic\"\n")
        .unwrap()
        .apply(theme)
        .unwrap();

    // Mounted: picked up on the next frame
    caret.update(&mut ctx, 16.0);
    pinned.update(&mut ctx, 16.0);
    assert_eq!(caret.controller().timing(), &BlinkTiming::classic());
    assert_eq!(pinned.controller().timing(), &BlinkTiming::modern());

    // Unmounted: picked up on the next mount
    caret.unmount(&mut ctx);
    theme.set_blink_timing(BlinkTiming {
        hold_ms: 700.0,
        ..BlinkTiming::classic()
    });
    caret.mount(&mut ctx);
    assert_eq!(caret.controller().timing().hold_ms, 700.0);

    for _ in 0..69 {
        caret.update(&mut ctx, 10.0);
    }
    assert!(caret.visible());
    caret.update(&mut ctx, 20.0);
    assert!(!caret.visible());
}
