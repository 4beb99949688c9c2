//! Animated personal portfolio desktop app.
//!
//! A Dioxus desktop shell around the state machine in `portfolio-core`:
//! a full-screen start gate, a section menu, five content panels, and a
//! floating bubble background.

pub mod components;
pub mod theme;
