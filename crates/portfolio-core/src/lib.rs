//! Core state for the portfolio desktop app.
//!
//! This crate carries everything the UI layer reads but does not own:
//! the navigation state machine (start gate, active section, project
//! drill-in), the ambient bubble field that decorates the background,
//! and the static content catalog the panels render. It has no UI
//! dependency so the whole surface is unit-testable headlessly.

pub mod bubbles;
pub mod content;
pub mod nav;
pub mod state;

pub use bubbles::{Bubble, BubbleField, BubbleTint};
pub use content::Project;
pub use nav::{NavState, ResumeTab, SectionId, SectionParseError};
pub use state::AppState;
