//! portfolio-tui - a developer portfolio in the terminal
//!
//! This is the main entry point for portfolio-tui.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    // Logging goes to a file; the terminal belongs to the UI
    let logging = Config::log_path()
        .map(|path| services::logging::init_global(&path))
        .unwrap_or(false);

    // Create app state
    let mut app = App::new();
    app.init()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        logging,
        theme = ?app.theme.mode(),
        content = app.config.content_path.as_deref().unwrap_or("built-in"),
        "portfolio-tui starting"
    );
    if let Some(error) = &app.error {
        tracing::warn!(%error, "running with the built-in profile");
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(app.config.tick_rate());
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!(submissions = app.submissions.len(), "portfolio-tui exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events until the next tick is due
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(Event::FocusGained) => Some(Action::FocusChanged(true)),
            Some(Event::FocusLost) => Some(Action::FocusChanged(false)),
            Some(_) | None => None,
        };
        dispatch(app, action)?;

        // Ticks keep their own deadline; a busy input stream does not delay them
        if tui.tick_due() {
            dispatch(app, Some(Action::Tick))?;
        }
    }

    Ok(())
}

/// Process an action and every follow-up action it produces
fn dispatch(app: &mut App, action: Option<Action>) -> Result<()> {
    let mut current_action = action;
    while let Some(a) = current_action {
        tracing::trace!(action = %a, "dispatch");
        current_action = app.update(a)?;
    }
    Ok(())
}
