//! Entry point for the portfolio desktop app.
//!
//! Launches a Dioxus desktop window around the navigation state machine
//! and bubble field from `portfolio-core`.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use portfolio_core::{content, AppState, SectionId};

use portfolio_app::components::App;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the autostart flag.
static AUTOSTART: OnceLock<bool> = OnceLock::new();

/// Global storage for the initial section argument.
static INITIAL_SECTION: OnceLock<Option<SectionId>> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "portfolio-app")]
#[command(about = "Animated personal portfolio desktop app")]
struct Args {
    /// Skip the start gate and open on the home section
    #[arg(long)]
    autostart: bool,

    /// Open directly on this section (home, about, projects, resume, contact);
    /// implies --autostart
    #[arg(short, long)]
    section: Option<SectionId>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting portfolio app");

    // Parse command line arguments
    let args = Args::parse();

    // Store args in global state
    AUTOSTART.set(args.autostart || args.section.is_some()).ok();
    INITIAL_SECTION.set(args.section).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{} - Portfolio", content::OWNER_NAME))
                        .with_inner_size(LogicalSize::new(1400, 900)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Montserrat:wght@400;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component that owns the application state.
#[component]
fn RootApp() -> Element {
    let state = use_signal(|| {
        let mut state = AppState::new();
        if AUTOSTART.get().copied().unwrap_or(false) {
            state.nav.activate();
            let section = INITIAL_SECTION
                .get()
                .copied()
                .flatten()
                .unwrap_or(SectionId::Home);
            state.nav.select_section(section);
        }
        state
    });

    use_drop(|| {
        tracing::info!("Shutting down portfolio app");
    });

    rsx! {
        App { state }
    }
}
