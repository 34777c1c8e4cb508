//! View state - the single record behind every tab
//!
//! All transitions go through methods here so the invariants hold in one
//! place: one active tab, reveal progress bounded by source length, at most
//! one open project, one editable contact field.

use crate::model::content::Profile;
use crate::model::contact::ContactForm;
use crate::model::reveal::{RevealSequence, RevealTiming};
use crate::model::ui::Tab;
use std::time::Duration;

/// Phase indices of the about-tab intro sequence
pub const INTRO_WELCOME: usize = 0;
pub const INTRO_TITLE: usize = 1;
pub const INTRO_DESCRIPTION: usize = 2;

#[derive(Debug, Clone)]
pub struct ViewState {
    active_tab: Tab,
    /// Welcome, title, description. Runs once, never reset.
    intro: RevealSequence,
    skills: RevealSequence,
    projects: RevealSequence,
    /// Index into the profile's projects
    selected_project: Option<usize>,
    project_cursor: usize,
    contact: ContactForm,
}

impl ViewState {
    pub fn new(profile: &Profile, timing: RevealTiming) -> Self {
        Self {
            active_tab: Tab::About,
            intro: RevealSequence::texts(
                timing,
                &[
                    profile.welcome.as_str(),
                    profile.title.as_str(),
                    profile.description.as_str(),
                ],
            ),
            skills: RevealSequence::items(timing, profile.skills.len()),
            projects: RevealSequence::items(timing, profile.projects.len()),
            selected_project: None,
            project_cursor: 0,
            contact: ContactForm::new(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Activate a tab.
    ///
    /// Clears the open project and cancels pending list ticks. Skills and
    /// projects restart from nothing each time they are selected, even when
    /// already active.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected_project = None;
        self.project_cursor = 0;
        self.skills.cancel_pending();
        self.projects.cancel_pending();

        match tab {
            Tab::Skills => self.skills.reset(),
            Tab::Projects => self.projects.reset(),
            Tab::About | Tab::Contact => {}
        }
    }

    /// Advance time-driven reveals. Returns true if anything new is visible.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let mut changed = self.intro.advance(elapsed);
        changed |= match self.active_tab {
            Tab::Skills => self.skills.advance(elapsed),
            Tab::Projects => self.projects.advance(elapsed),
            Tab::About | Tab::Contact => false,
        };
        changed
    }

    pub fn intro(&self) -> &RevealSequence {
        &self.intro
    }

    pub fn skills_shown(&self) -> usize {
        self.skills.shown(0)
    }

    pub fn projects_shown(&self) -> usize {
        self.projects.shown(0)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Project selector
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_project(&self) -> Option<usize> {
        self.selected_project
    }

    pub fn project_cursor(&self) -> usize {
        self.project_cursor
    }

    /// Open the project at `index`, or close it if it is already open.
    /// Projects that have not been revealed yet are ignored.
    pub fn toggle_project(&mut self, index: usize) {
        if index >= self.projects_shown() {
            return;
        }
        self.project_cursor = index;
        self.selected_project = if self.selected_project == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_project_named(&mut self, name: &str, profile: &Profile) {
        if let Some(index) = profile.project_index(name) {
            self.toggle_project(index);
        }
    }

    pub fn toggle_project_at_cursor(&mut self) {
        self.toggle_project(self.project_cursor);
    }

    /// Move the cursor down the revealed projects, wrapping to the first
    pub fn next_project(&mut self) {
        let shown = self.projects_shown();
        if shown == 0 {
            return;
        }
        self.project_cursor = (self.project_cursor + 1) % shown;
    }

    /// Move the cursor up the revealed projects, wrapping to the last
    pub fn previous_project(&mut self) {
        let shown = self.projects_shown();
        if shown == 0 {
            return;
        }
        self.project_cursor = (self.project_cursor + shown - 1) % shown;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contact form
    // ─────────────────────────────────────────────────────────────────────────

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::Stage;
    use crate::model::reveal::ITEM_INTERVAL;

    fn state() -> (ViewState, Profile) {
        let profile = Profile::default();
        (ViewState::new(&profile, RevealTiming::default()), profile)
    }

    fn reveal_all_projects(view: &mut ViewState) {
        view.select_tab(Tab::Projects);
        view.tick(Duration::from_secs(5));
    }

    #[test]
    fn test_starts_on_about() {
        let (view, _) = state();
        assert_eq!(view.active_tab(), Tab::About);
        assert_eq!(view.selected_project(), None);
        assert_eq!(view.contact().stage(), Stage::Name);
    }

    #[test]
    fn test_selecting_tab_resets_its_reveal() {
        let (mut view, profile) = state();
        view.select_tab(Tab::Skills);
        view.tick(ITEM_INTERVAL * 4);
        assert_eq!(view.skills_shown(), 4);

        view.select_tab(Tab::Skills);
        assert_eq!(view.skills_shown(), 0);

        view.tick(Duration::from_secs(10));
        assert_eq!(view.skills_shown(), profile.skills.len());

        view.select_tab(Tab::About);
        view.select_tab(Tab::Skills);
        assert_eq!(view.skills_shown(), 0);
    }

    #[test]
    fn test_lists_do_not_advance_while_inactive() {
        let (mut view, _) = state();
        view.select_tab(Tab::Skills);
        view.tick(ITEM_INTERVAL);
        assert_eq!(view.skills_shown(), 1);

        view.select_tab(Tab::Contact);
        view.tick(Duration::from_secs(5));
        assert_eq!(view.skills_shown(), 1);
        assert_eq!(view.projects_shown(), 0);
    }

    #[test]
    fn test_pending_tick_cancelled_on_tab_change() {
        let (mut view, _) = state();
        view.select_tab(Tab::Projects);
        view.tick(Duration::from_millis(150));
        assert_eq!(view.projects_shown(), 0);

        view.select_tab(Tab::About);
        view.select_tab(Tab::Projects);
        view.tick(Duration::from_millis(100));
        assert_eq!(view.projects_shown(), 0);
    }

    #[test]
    fn test_intro_runs_globally_and_is_not_reset() {
        let (mut view, profile) = state();
        view.select_tab(Tab::Contact);
        view.tick(Duration::from_millis(50 * 10));
        assert_eq!(view.intro().shown(INTRO_WELCOME), 10);

        view.select_tab(Tab::About);
        assert_eq!(view.intro().shown(INTRO_WELCOME), 10);

        view.tick(Duration::from_secs(60));
        assert!(view.intro().is_complete());
        assert_eq!(
            view.intro().shown(INTRO_DESCRIPTION),
            profile.description.chars().count()
        );
        assert_eq!(
            view.intro().shown(INTRO_TITLE),
            profile.title.chars().count()
        );
    }

    #[test]
    fn test_toggle_same_project_twice_clears() {
        let (mut view, _) = state();
        reveal_all_projects(&mut view);

        view.toggle_project(1);
        assert_eq!(view.selected_project(), Some(1));
        view.toggle_project(1);
        assert_eq!(view.selected_project(), None);
    }

    #[test]
    fn test_toggle_other_project_replaces_selection() {
        let (mut view, profile) = state();
        reveal_all_projects(&mut view);

        view.toggle_project_named("E-commerce Platform", &profile);
        view.toggle_project_named("Portfolio Website", &profile);
        assert_eq!(view.selected_project(), Some(2));
    }

    #[test]
    fn test_unrevealed_project_cannot_be_selected() {
        let (mut view, _) = state();
        view.select_tab(Tab::Projects);
        view.tick(ITEM_INTERVAL);
        view.toggle_project(2);
        assert_eq!(view.selected_project(), None);
        view.toggle_project(0);
        assert_eq!(view.selected_project(), Some(0));
    }

    #[test]
    fn test_switching_tabs_clears_selected_project() {
        let (mut view, _) = state();
        reveal_all_projects(&mut view);
        view.toggle_project(0);

        view.select_tab(Tab::Skills);
        assert_eq!(view.selected_project(), None);

        reveal_all_projects(&mut view);
        view.toggle_project(0);
        view.select_tab(Tab::Projects);
        assert_eq!(view.selected_project(), None);
    }

    #[test]
    fn test_project_cursor_wraps_within_revealed() {
        let (mut view, _) = state();
        view.select_tab(Tab::Projects);
        view.previous_project();
        assert_eq!(view.project_cursor(), 0);

        view.tick(ITEM_INTERVAL * 2);
        view.next_project();
        assert_eq!(view.project_cursor(), 1);
        view.next_project();
        assert_eq!(view.project_cursor(), 0);
        view.previous_project();
        assert_eq!(view.project_cursor(), 1);

        view.toggle_project_at_cursor();
        assert_eq!(view.selected_project(), Some(1));
    }

    #[test]
    fn test_contact_form_survives_tab_switch() {
        let (mut view, _) = state();
        view.select_tab(Tab::Contact);
        view.contact_mut().insert_char('J');
        view.select_tab(Tab::About);
        view.select_tab(Tab::Contact);
        assert_eq!(view.contact().field(Stage::Name), "J");
    }
}
