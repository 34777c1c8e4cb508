//! Terminal session and tick clock
//!
//! `Tui` owns the crossterm terminal for the lifetime of the app: raw mode,
//! alternate screen, mouse and focus reporting. Input is polled against a
//! fixed tick deadline, so ticks arrive at the tick rate however busy the
//! input stream is.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Fixed-rate tick deadline
///
/// Events never postpone a tick: `due` reports true once the deadline has
/// passed, whether or not input arrived in the meantime. Missed ticks are
/// not replayed; the next deadline is one tick rate after the tick that
/// fired.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    tick_rate: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(tick_rate: Duration, now: Instant) -> Self {
        let tick_rate = tick_rate.max(Duration::from_millis(1));
        Self {
            tick_rate,
            next_tick: now + tick_rate,
        }
    }

    /// How long input may be waited for before the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// True if a tick is due at `now`; the deadline then moves on
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick = now + self.tick_rate;
        true
    }
}

/// Terminal wrapper for managing the TUI lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    clock: TickClock,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            clock: TickClock::new(Duration::from_millis(50), Instant::now()),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.clock = TickClock::new(tick_rate, Instant::now());
        self
    }

    /// Raw mode, alternate screen, mouse capture and focus events on
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide
        )?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal. Also called on Drop.
    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange,
            cursor::Show
        )?;
        Ok(())
    }

    /// Wait for input, at most until the next tick is due.
    ///
    /// Key releases are dropped (Windows reports them too). Check
    /// `tick_due` after every call, whatever it returned.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.clock.timeout(Instant::now()))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            event => Ok(Some(event)),
        }
    }

    pub fn tick_due(&mut self) -> bool {
        self.clock.due(Instant::now())
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timeout_counts_down_to_deadline() {
        let start = Instant::now();
        let mut clock = TickClock::new(ms(50), start);
        assert_eq!(clock.timeout(start), ms(50));
        assert_eq!(clock.timeout(start + ms(30)), ms(20));
        assert!(!clock.due(start + ms(30)));

        assert_eq!(clock.timeout(start + ms(80)), Duration::ZERO);
        assert!(clock.due(start + ms(80)));
        assert!(!clock.due(start + ms(80)));
        assert_eq!(clock.timeout(start + ms(80)), ms(50));
    }

    #[test]
    fn test_busy_input_does_not_starve_ticks() {
        // An event every 10 ms, each followed by a clock check as in the main loop
        let start = Instant::now();
        let mut clock = TickClock::new(ms(50), start);
        let ticks = (1..=20u64)
            .filter(|i| clock.due(start + ms(10 * i)))
            .count();
        assert_eq!(ticks, 4);
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::ZERO, start);
        assert_eq!(clock.timeout(start), ms(1));
        assert!(!clock.due(start));
        assert!(clock.due(start + ms(1)));
    }
}
