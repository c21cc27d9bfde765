//! Caret Timeline Demo
//!
//! Drives a caret with a simulated 60fps frame clock and logs its opacity:
//! - Blinks while idle
//! - Holds solid during a burst of typing
//! - Restarts the cycle from the top once typing stops
//!
//! An optional theme file changes the cadence and color.
//!
//! Run with: RUST_LOG=debug cargo run -p caret_widgets --example caret_timeline [theme.toml]

use anyhow::{Context, Result};
use caret_core::{RecordingContext, Rect, Size};
use caret_theme::{CaretTheme, ColorScheme, ThemeConfig, ThemeState};
use caret_widgets::{Caret, CaretConfig, WidgetContext};
use tracing_subscriber::EnvFilter;

const FRAME_MS: f32 = 1000.0 / 60.0;
const TYPING_FROM_MS: f32 = 1200.0;
const TYPING_UNTIL_MS: f32 = 1800.0;
const DURATION_MS: f32 = 3500.0;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match std::env::args().nth(1) {
        Some(path) => {
            let config = ThemeConfig::from_file(&path)
                .with_context(|| format!("loading theme from {path}"))?;
            let scheme = config.scheme.unwrap_or_default();
            ThemeState::init(config.to_bundle()?, scheme);
        }
        None => ThemeState::init(CaretTheme::bundle(), ColorScheme::Light),
    }

    let mut ctx = WidgetContext::new();
    let mut caret = Caret::new(&mut ctx, CaretConfig::new().size(16.0));
    let size = caret.measure();
    tracing::info!(
        "caret {}x{:.2}, color {:?}",
        size.width,
        size.height,
        caret.resolved_color()
    );

    caret.mount(&mut ctx);

    let mut now = 0.0_f32;
    let mut next_log = 0.0_f32;
    while now < DURATION_MS {
        let typing = (TYPING_FROM_MS..TYPING_UNTIL_MS).contains(&now);
        caret.set_typing(&mut ctx, typing);
        caret.update(&mut ctx, FRAME_MS);
        now += FRAME_MS;

        if ctx.has_dirty() {
            let mut frame = RecordingContext::new(Size::new(40.0, 24.0));
            caret.paint(&mut frame, Rect::new(0.0, 0.0, size.width, size.height));
            ctx.take_dirty();

            if now >= next_log {
                let bar = "#".repeat((caret.opacity() * 20.0).round() as usize);
                tracing::info!(
                    "{:>6.0}ms {:<5} {:<20} ({} draw commands)",
                    now,
                    if typing { "solid" } else { "blink" },
                    bar,
                    frame.commands().len()
                );
                next_log = now + 50.0;
            }
        }
    }

    caret.destroy(&mut ctx);
    Ok(())
}
