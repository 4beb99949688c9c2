//! Floating bubble background layer.
//!
//! Owns the spawn timer for the bubble field; per-bubble motion is the
//! CSS `float` keyframe loop, parameterized through inline style.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use portfolio_core::bubbles::SPAWN_INTERVAL_MS;
use portfolio_core::{AppState, Bubble};

/// Background gradient plus the bubble collection. Blurred whenever a
/// section is open.
#[component]
pub fn Background(state: Signal<AppState>) -> Element {
    // Populate the field on mount, then keep spawning for the lifetime
    // of this view. Dropping the future on unmount cancels the timer.
    use_future(move || {
        let mut state = state;
        async move {
            state.write().bubbles.initialize(&mut rand::rng());
            loop {
                sleep(Duration::from_millis(SPAWN_INTERVAL_MS)).await;
                state.write().bubbles.tick(&mut rand::rng());
            }
        }
    });

    let blurred = state.read().nav.is_blurred();
    let state_read = state.read();

    rsx! {
        div {
            class: if blurred { "background blurred" } else { "background" },

            for bubble in state_read.bubbles.bubbles() {
                div {
                    key: "{bubble.id}",
                    class: "bubble",
                    style: "{bubble_style(bubble)}",
                }
            }
        }
    }
}

/// Inline style carrying the per-bubble attributes drawn at creation.
fn bubble_style(bubble: &Bubble) -> String {
    format!(
        "width: {size:.1}px; height: {size:.1}px; bottom: -{size:.1}px; \
         left: {left:.2}%; opacity: {opacity:.2}; background: {fill}; \
         box-shadow: 0 0 8px {glow}; \
         animation-duration: {duration:.1}s; animation-delay: {delay:.1}s;",
        size = bubble.size,
        left = bubble.left_pct,
        opacity = bubble.opacity,
        fill = bubble.tint.fill(),
        glow = bubble.tint.glow(),
        duration = bubble.duration_secs,
        delay = bubble.delay_secs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::BubbleTint;

    #[test]
    fn test_bubble_style_formatting() {
        let bubble = Bubble {
            id: 3,
            size: 12.5,
            left_pct: 40.25,
            opacity: 0.2,
            duration_secs: 15.0,
            delay_secs: 4.5,
            tint: BubbleTint::Blue,
        };
        let style = bubble_style(&bubble);
        assert!(style.contains("width: 12.5px"));
        assert!(style.contains("bottom: -12.5px"));
        assert!(style.contains("left: 40.25%"));
        assert!(style.contains("animation-duration: 15.0s"));
        assert!(style.contains("rgba(0, 128, 255, 0.2)"));
    }
}
