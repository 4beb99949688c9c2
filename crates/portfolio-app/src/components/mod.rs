//! UI components for the portfolio shell.

mod about;
mod app;
mod background;
mod contact;
mod home;
mod menu;
mod projects;
mod resume;
mod section;

pub use about::*;
pub use app::*;
pub use background::*;
pub use contact::*;
pub use home::*;
pub use menu::*;
pub use projects::*;
pub use resume::*;
pub use section::*;
