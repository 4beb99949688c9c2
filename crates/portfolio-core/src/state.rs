//! Root application state.
//!
//! Bundles the navigation machine and the bubble field into the single
//! value the UI layer holds in its signal. The two sub-states are
//! independent; the only cross-cut is the derived blur flag the
//! background reads from [`NavState::is_blurred`].

use crate::bubbles::BubbleField;
use crate::nav::NavState;

/// State owned by the root component for its entire lifetime.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub nav: NavState,
    pub bubbles: BubbleField,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::SectionId;

    #[test]
    fn test_blur_tracks_active_section() {
        let mut state = AppState::new();
        assert!(!state.nav.is_blurred());

        state.nav.activate();
        assert!(!state.nav.is_blurred());

        state.nav.reveal_default();
        assert!(state.nav.is_blurred());

        for &section in SectionId::all() {
            state.nav.select_section(section);
            assert!(state.nav.is_blurred());
        }

        state.nav.clear_section();
        assert!(!state.nav.is_blurred());
    }
}
