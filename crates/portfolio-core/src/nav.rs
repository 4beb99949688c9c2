//! Navigation state machine for the portfolio shell.
//!
//! Tracks whether the start gate has been dismissed, which content
//! section is active, and which project (if any) is drilled into.
//! All transitions are total functions; the only fallible surface is
//! parsing a textual section id.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::content::Project;

/// Delay between activation and the automatic reveal of the home section.
pub const REVEAL_DELAY_MS: u64 = 1000;

/// One of the five top-level content sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Resume,
    Contact,
}

impl SectionId {
    /// All sections in menu order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Home,
            SectionId::About,
            SectionId::Projects,
            SectionId::Resume,
            SectionId::Contact,
        ]
    }

    /// Stable lowercase identifier.
    pub fn id(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    /// Uppercase menu label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "HOME",
            SectionId::About => "ABOUT",
            SectionId::Projects => "PROJECTS",
            SectionId::Resume => "RESUME",
            SectionId::Contact => "CONTACT",
        }
    }

    /// Display title used for the section watermark.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Resume => "Resume",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a textual section id does not name a section.
#[derive(Debug, Error)]
#[error("unknown section id: {0:?}")]
pub struct SectionParseError(String);

impl FromStr for SectionId {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::all()
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}

/// Tabs inside the resume panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumeTab {
    #[default]
    Experience,
    Education,
    Skills,
    Awards,
}

impl ResumeTab {
    /// All tabs in strip order.
    pub fn all() -> &'static [ResumeTab] {
        &[
            ResumeTab::Experience,
            ResumeTab::Education,
            ResumeTab::Skills,
            ResumeTab::Awards,
        ]
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            ResumeTab::Experience => "Experience",
            ResumeTab::Education => "Education",
            ResumeTab::Skills => "Skills",
            ResumeTab::Awards => "Awards",
        }
    }
}

/// Navigation state for the whole shell.
///
/// Lifecycle: `NOT_STARTED` until the first activation, then a ~1s
/// deferred reveal lands on [`SectionId::Home`] unless the user picked a
/// section first. Section-to-section transitions are direct and never
/// pass back through `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavState {
    started: bool,
    active_section: Option<SectionId>,
    selected_project: Option<&'static Project>,
    resume_tab: ResumeTab,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the start gate has been dismissed.
    pub fn started(&self) -> bool {
        self.started
    }

    /// The currently active section, if any.
    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    /// The drilled-in project, if any.
    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected_project
    }

    /// The active resume tab.
    pub fn resume_tab(&self) -> ResumeTab {
        self.resume_tab
    }

    /// Whether the background should be blurred. Derived from the active
    /// section on every read, never stored.
    pub fn is_blurred(&self) -> bool {
        self.active_section.is_some()
    }

    /// Dismisses the start gate.
    ///
    /// Returns `true` on the first call, telling the caller to schedule
    /// the one-shot reveal ([`REVEAL_DELAY_MS`] later). Repeat calls are
    /// no-ops returning `false`, so at most one reveal is ever scheduled.
    pub fn activate(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        tracing::debug!("experience started");
        true
    }

    /// Deferred reveal body: lands on the home section unless a section
    /// was explicitly chosen while the timer was pending.
    pub fn reveal_default(&mut self) {
        if self.started && self.active_section.is_none() {
            self.active_section = Some(SectionId::Home);
        }
    }

    /// Switches to `section`. Re-selecting the active section is
    /// idempotent; there is no toggle-off.
    ///
    /// Leaving the projects section drops the drill-in selection so that
    /// a selected project always belongs to the visible section.
    pub fn select_section(&mut self, section: SectionId) {
        if section != SectionId::Projects && self.selected_project.is_some() {
            self.selected_project = None;
        }
        self.active_section = Some(section);
    }

    /// Closes the active section. The current UI has no affordance that
    /// calls this, but the model supports it.
    pub fn clear_section(&mut self) {
        self.active_section = None;
        self.selected_project = None;
    }

    /// Drills into `project`, or backs out with `None`.
    ///
    /// Only honored while the projects section is active; anything else
    /// is logged and ignored rather than corrupting state.
    pub fn select_project(&mut self, project: Option<&'static Project>) {
        if self.active_section != Some(SectionId::Projects) {
            tracing::warn!(
                section = ?self.active_section,
                "ignoring project selection outside the projects section"
            );
            return;
        }
        self.selected_project = project;
    }

    /// Switches the resume tab.
    pub fn select_resume_tab(&mut self, tab: ResumeTab) {
        self.resume_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn first_project() -> &'static Project {
        &content::projects()[0]
    }

    #[test]
    fn test_initial_state() {
        let nav = NavState::new();
        assert!(!nav.started());
        assert_eq!(nav.active_section(), None);
        assert!(nav.selected_project().is_none());
        assert!(!nav.is_blurred());
        assert_eq!(nav.resume_tab(), ResumeTab::Experience);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut nav = NavState::new();
        assert!(nav.activate());
        assert!(!nav.activate());
        assert!(nav.started());
        // No section until the deferred reveal fires.
        assert_eq!(nav.active_section(), None);
    }

    #[test]
    fn test_reveal_lands_on_home() {
        let mut nav = NavState::new();
        nav.activate();
        nav.reveal_default();
        assert_eq!(nav.active_section(), Some(SectionId::Home));
    }

    #[test]
    fn test_reveal_is_noop_before_activation() {
        let mut nav = NavState::new();
        nav.reveal_default();
        assert_eq!(nav.active_section(), None);
    }

    #[test]
    fn test_reveal_does_not_override_explicit_choice() {
        let mut nav = NavState::new();
        nav.activate();
        nav.select_section(SectionId::Contact);
        nav.reveal_default();
        assert_eq!(nav.active_section(), Some(SectionId::Contact));
    }

    #[test]
    fn test_select_section_last_writer_wins() {
        let mut nav = NavState::new();
        nav.activate();
        for &section in SectionId::all() {
            nav.select_section(section);
            assert_eq!(nav.active_section(), Some(section));
            assert!(nav.is_blurred());
        }
        nav.select_section(SectionId::About);
        nav.select_section(SectionId::About);
        assert_eq!(nav.active_section(), Some(SectionId::About));
    }

    #[test]
    fn test_project_drill_in_and_back() {
        let mut nav = NavState::new();
        nav.activate();
        nav.select_section(SectionId::Projects);

        nav.select_project(Some(first_project()));
        assert_eq!(nav.selected_project().unwrap().id, first_project().id);
        assert_eq!(nav.active_section(), Some(SectionId::Projects));

        nav.select_project(None);
        assert!(nav.selected_project().is_none());
        assert_eq!(nav.active_section(), Some(SectionId::Projects));
    }

    #[test]
    fn test_project_selection_rejected_outside_projects() {
        let mut nav = NavState::new();
        nav.activate();
        nav.select_section(SectionId::Home);
        nav.select_project(Some(first_project()));
        assert!(nav.selected_project().is_none());
    }

    #[test]
    fn test_leaving_projects_clears_selection() {
        let mut nav = NavState::new();
        nav.activate();
        nav.select_section(SectionId::Projects);
        nav.select_project(Some(first_project()));

        nav.select_section(SectionId::About);
        assert_eq!(nav.active_section(), Some(SectionId::About));
        assert!(nav.selected_project().is_none());
    }

    #[test]
    fn test_reselecting_projects_keeps_selection() {
        let mut nav = NavState::new();
        nav.activate();
        nav.select_section(SectionId::Projects);
        nav.select_project(Some(first_project()));

        nav.select_section(SectionId::Projects);
        assert!(nav.selected_project().is_some());
    }

    #[test]
    fn test_clear_section() {
        let mut nav = NavState::new();
        nav.activate();
        nav.select_section(SectionId::Projects);
        nav.select_project(Some(first_project()));

        nav.clear_section();
        assert_eq!(nav.active_section(), None);
        assert!(nav.selected_project().is_none());
        assert!(!nav.is_blurred());
        // Started is irreversible.
        assert!(nav.started());
    }

    #[test]
    fn test_section_id_round_trip() {
        for &section in SectionId::all() {
            assert_eq!(section.id().parse::<SectionId>().unwrap(), section);
        }
        assert!("garbage".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_resume_tab_selection() {
        let mut nav = NavState::new();
        nav.select_resume_tab(ResumeTab::Awards);
        assert_eq!(nav.resume_tab(), ResumeTab::Awards);
    }
}
