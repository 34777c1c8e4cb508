//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! View transitions live in ViewState; App routes actions to it and keeps
//! the presentation state (theme, modals, decorations) around it.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, CursorFollower, HelpDialog, HomeComponent, HomeRenderContext, MenuDialog,
    ParticleField, QuitDialog, SplashComponent, Theme,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{AppMode, Profile, Submission, Tab, ViewState};
use crate::services;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, widgets::Block, Frame};
use std::time::{Duration, Instant};

/// Caret blink half-period
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    pub profile: Profile,
    pub config: Config,
    pub theme: Theme,

    /// Contact form submissions of this session, oldest first
    pub submissions: Vec<Submission>,

    last_tick: Option<Instant>,
    blink_elapsed: Duration,
    caret_on: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub menu_dialog: MenuDialog,
    pub particles: ParticleField,
    pub cursor: CursorFollower,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App from the user's config file, if any
    pub fn new() -> App {
        let config = Config::load_or_default();
        let (profile, error) = services::resolve_profile(&config);
        let mut app = Self::with_config(config, profile);
        app.error = error;
        app
    }

    pub fn with_config(config: Config, profile: Profile) -> App {
        let view = ViewState::new(&profile, config.reveal_timing());
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        let mut cursor = CursorFollower::new();
        cursor.set_visible(config.show_cursor);

        let mut app = App {
            mode,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            theme: Theme::new(config.theme),
            submissions: Vec::new(),
            last_tick: None,
            blink_elapsed: Duration::ZERO,
            caret_on: true,
            splash: SplashComponent::new(&profile.owner),
            home: HomeComponent::new(view),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            menu_dialog: MenuDialog::default(),
            particles: ParticleField::new(config.particle_count),
            cursor,
            profile,
            config,
        };
        app.apply_palette();
        app
    }

    pub fn view(&self) -> &ViewState {
        &self.home.view
    }

    pub fn caret_on(&self) -> bool {
        self.caret_on
    }

    /// Advance every time-driven part of the UI by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        if self.mode == AppMode::Running {
            self.home.view.tick(elapsed);
        }
        if self.config.show_particles {
            self.particles.advance(elapsed);
        }
        self.cursor.advance(elapsed);

        self.blink_elapsed += elapsed;
        while self.blink_elapsed >= BLINK_INTERVAL {
            self.blink_elapsed -= BLINK_INTERVAL;
            self.caret_on = !self.caret_on;
        }
    }

    /// Push the current theme's palette into every component that draws
    fn apply_palette(&mut self) {
        let palette = self.theme.palette();
        self.splash.palette = palette;
        self.quit_dialog.palette = palette;
        self.help_dialog.palette = palette;
        self.menu_dialog.palette = palette;
        self.particles.color = palette.muted;
        self.cursor.color = palette.accent;
    }

    fn record_submission(&mut self, submission: Submission) {
        services::record_submission(&submission);
        self.status_message = Some(format!(
            "Thanks, {}! Your message was received.",
            submission.name
        ));
        self.submissions.push(submission);
    }

    fn select_tab(&mut self, tab: Tab) {
        if matches!(self.modals.top(), Some(Modal::Menu { .. })) {
            self.modals.pop();
        }
        self.status_message = None;
        self.home.view.select_tab(tab);
        tracing::debug!(tab = tab.name(), "tab selected");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        self.last_tick = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => match mouse.kind {
                MouseEventKind::Down(_) => Ok(Some(Action::SplashComplete)),
                _ => Ok(None),
            },
            AppMode::Running if !self.modals.is_empty() => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Ok(Some(Action::PointerMoved(mouse.column, mouse.row)))
                }
                _ => Ok(None),
            },
            AppMode::Running => self.home.handle_mouse_event(mouse),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                let now = Instant::now();
                let elapsed = self
                    .last_tick
                    .map(|last| now.duration_since(last))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.advance(elapsed);

                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::NextTab => self.select_tab(self.home.view.active_tab().next()),
            Action::PrevTab => self.select_tab(self.home.view.active_tab().previous()),
            Action::NextItem => {
                if self.home.view.active_tab() == Tab::Projects {
                    self.home.view.next_project();
                }
            }
            Action::PrevItem => {
                if self.home.view.active_tab() == Tab::Projects {
                    self.home.view.previous_project();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Projects
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleProject => {
                if self.home.view.active_tab() == Tab::Projects {
                    self.home.view.toggle_project_at_cursor();
                }
            }
            Action::ToggleProjectNamed(name) => {
                if self.home.view.active_tab() == Tab::Projects {
                    self.home.view.toggle_project_named(&name, &self.profile);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Contact form
            // ─────────────────────────────────────────────────────────────────
            Action::ContactInput(c) => self.home.view.contact_mut().insert_char(c),
            Action::ContactBackspace => self.home.view.contact_mut().backspace(),
            Action::ContactCommit => {
                if let Some(submission) = self.home.view.contact_mut().commit() {
                    self.record_submission(submission);
                }
            }
            Action::ContactSubmit => {
                if let Some(submission) = self.home.view.contact_mut().submit() {
                    self.record_submission(submission);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenMenu => self.modals.push(Modal::Menu {
                selected_index: self.home.view.active_tab().index(),
            }),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(Modal::Menu { selected_index }) = self.modals.top().cloned() {
                    self.modals.pop();
                    return Ok(Tab::all().get(selected_index).copied().map(Action::SelectTab));
                }
            }
            Action::ModalUp | Action::ModalDown => {
                let count = Tab::all().len();
                if let Some(Modal::Menu { selected_index }) = self.modals.top_mut() {
                    *selected_index = if action == Action::ModalDown {
                        (*selected_index + 1) % count
                    } else {
                        (*selected_index + count - 1) % count
                    };
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Presentation
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleTheme => {
                self.theme.toggle();
                self.apply_palette();
                tracing::debug!(theme = ?self.theme.mode(), "theme toggled");
            }
            Action::ShowResume => {
                let resume = &self.profile.resume;
                tracing::info!(path = %resume.path, "resume requested");
                self.status_message = Some(format!("{} → {}", resume.label, resume.path));
            }
            Action::PointerMoved(column, row) => {
                self.cursor.move_to(column, row);
                let hovering =
                    self.modals.is_empty() && self.home.hit_map.hit(column, row).is_some();
                self.cursor.set_hovering(hovering);
            }
            Action::FocusChanged(focused) => {
                self.cursor.set_visible(focused && self.config.show_cursor);
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.theme.palette();
        frame.render_widget(Block::default().style(palette.base()), area);

        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                if self.config.show_particles {
                    self.particles.draw(frame, area)?;
                }

                let ctx = HomeRenderContext {
                    profile: &self.profile,
                    palette,
                    theme_mode: self.theme.mode(),
                    caret_on: self.caret_on,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                    last_submission: self.submissions.last(),
                };
                draw_home_screen(frame, area, &mut self.home, &ctx)?;

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }

        if self.config.show_cursor {
            self.cursor.draw(frame, area)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Menu { .. } => self.menu_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Menu { selected_index } => {
                let active_tab = self.home.view.active_tab();
                self.menu_dialog
                    .draw_with_selection(frame, area, *selected_index, active_tab)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}
