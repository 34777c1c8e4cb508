//! Staged reveal - typewriter-style progress over strings and lists
//!
//! A `Reveal` counts how many units (characters or list items) of a source
//! are visible. A `RevealSequence` chains several reveals into phases and is
//! driven by an external tick that reports elapsed time.

use std::time::Duration;

/// Default interval between two revealed characters
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// Default interval between two revealed list items
pub const ITEM_INTERVAL: Duration = Duration::from_millis(200);

/// What a phase reveals, one unit at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Chars,
    Items,
}

/// Tick intervals per phase kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub char_interval: Duration,
    pub item_interval: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            char_interval: CHAR_INTERVAL,
            item_interval: ITEM_INTERVAL,
        }
    }
}

impl RevealTiming {
    pub fn interval(&self, kind: PhaseKind) -> Duration {
        match kind {
            PhaseKind::Chars => self.char_interval,
            PhaseKind::Items => self.item_interval,
        }
    }
}

/// Progress over a source of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    len: usize,
    shown: usize,
}

impl Reveal {
    pub fn new(len: usize) -> Self {
        Self { len, shown: 0 }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.len
    }

    /// Show one more unit. Returns false once everything is shown.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn reset(&mut self) {
        self.shown = 0;
    }

    /// The visible prefix of `text`, cut on a character boundary
    pub fn prefix<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.shown) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        }
    }
}

/// One phase of a sequence, stepping once per `interval`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub reveal: Reveal,
    interval: Duration,
}

/// Ordered phases advanced by elapsed time
///
/// Only the first incomplete phase advances. Time that does not add up to a
/// whole interval is carried as a pending tick; it is dropped on reset, on
/// `cancel_pending`, and once every phase is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequence {
    phases: Vec<Phase>,
    pending: Duration,
}

impl RevealSequence {
    pub fn new(timing: RevealTiming, phases: impl IntoIterator<Item = (PhaseKind, usize)>) -> Self {
        let phases = phases
            .into_iter()
            .map(|(kind, len)| Phase {
                reveal: Reveal::new(len),
                interval: timing.interval(kind),
            })
            .collect();
        Self {
            phases,
            pending: Duration::ZERO,
        }
    }

    /// Sequence with a single character phase per string
    pub fn texts(timing: RevealTiming, texts: &[&str]) -> Self {
        Self::new(
            timing,
            texts.iter().map(|t| (PhaseKind::Chars, t.chars().count())),
        )
    }

    /// Sequence with one list phase
    pub fn items(timing: RevealTiming, len: usize) -> Self {
        Self::new(timing, [(PhaseKind::Items, len)])
    }

    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Units shown in the given phase, 0 if there is no such phase
    pub fn shown(&self, index: usize) -> usize {
        self.phase(index).map(|p| p.reveal.shown()).unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.phases.iter().all(|p| p.reveal.is_complete())
    }

    fn current_mut(&mut self) -> Option<&mut Phase> {
        self.phases.iter_mut().find(|p| !p.reveal.is_complete())
    }

    /// Feed elapsed time, stepping once per whole interval.
    /// Returns true if anything new became visible.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_complete() {
            self.pending = Duration::ZERO;
            return false;
        }

        self.pending += elapsed;
        let mut changed = false;

        loop {
            let pending = self.pending;
            let Some(phase) = self.current_mut() else {
                break;
            };
            let interval = phase.interval;
            if interval.is_zero() {
                // Degenerate timing: reveal the rest of the phase at once
                while phase.reveal.step() {}
                changed = true;
                continue;
            }
            if pending < interval {
                break;
            }
            phase.reveal.step();
            self.pending = pending - interval;
            changed = true;
        }

        if self.is_complete() {
            self.pending = Duration::ZERO;
        }
        changed
    }

    /// Drop the partially elapsed interval without touching progress
    pub fn cancel_pending(&mut self) {
        self.pending = Duration::ZERO;
    }

    /// Back to nothing shown, pending tick cancelled
    pub fn reset(&mut self) {
        for phase in &mut self.phases {
            phase.reveal.reset();
        }
        self.pending = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_reveal_reaches_length_and_stops() {
        let mut reveal = Reveal::new("Jane".len());
        for _ in 0..4 {
            assert!(reveal.step());
        }
        assert_eq!(reveal.shown(), 4);
        assert!(reveal.is_complete());

        assert!(!reveal.step());
        assert_eq!(reveal.shown(), 4);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        let text = "héllo";
        let mut reveal = Reveal::new(text.chars().count());
        assert_eq!(reveal.prefix(text), "");
        reveal.step();
        reveal.step();
        assert_eq!(reveal.prefix(text), "hé");
        while reveal.step() {}
        assert_eq!(reveal.prefix(text), "héllo");
    }

    #[test]
    fn test_text_phase_reaches_n_after_n_ticks() {
        let text = "Full-Stack";
        let mut seq = RevealSequence::texts(RevealTiming::default(), &[text]);
        for tick in 1..=text.len() {
            seq.advance(CHAR_INTERVAL);
            assert_eq!(seq.shown(0), tick);
        }
        assert!(seq.is_complete());

        for _ in 0..5 {
            assert!(!seq.advance(CHAR_INTERVAL));
        }
        assert_eq!(seq.shown(0), text.len());
    }

    #[test]
    fn test_partial_interval_is_carried() {
        let mut seq = RevealSequence::items(RevealTiming::default(), 3);
        assert!(!seq.advance(ms(150)));
        assert_eq!(seq.shown(0), 0);
        assert_eq!(seq.pending, ms(150));

        assert!(seq.advance(ms(60)));
        assert_eq!(seq.shown(0), 1);
        assert_eq!(seq.pending, ms(10));
    }

    #[test]
    fn test_long_elapsed_steps_once_per_interval() {
        let mut seq = RevealSequence::items(RevealTiming::default(), 9);
        seq.advance(ms(650));
        assert_eq!(seq.shown(0), 3);
        assert_eq!(seq.pending, ms(50));
    }

    #[test]
    fn test_phases_run_in_order() {
        let mut seq = RevealSequence::texts(RevealTiming::default(), &["ab", "cde"]);
        seq.advance(ms(100));
        assert_eq!(seq.shown(0), 2);
        assert_eq!(seq.shown(1), 0);

        seq.advance(ms(50));
        assert_eq!(seq.shown(1), 1);

        seq.advance(ms(1000));
        assert!(seq.is_complete());
        assert_eq!(seq.shown(1), 3);
        assert_eq!(seq.pending, Duration::ZERO);
    }

    #[test]
    fn test_mixed_kinds_use_their_own_interval() {
        let mut seq = RevealSequence::new(
            RevealTiming::default(),
            [(PhaseKind::Chars, 1), (PhaseKind::Items, 2)],
        );
        seq.advance(ms(50));
        assert!(seq.phase(0).unwrap().reveal.is_complete());

        seq.advance(ms(100));
        assert_eq!(seq.shown(1), 0);
        seq.advance(ms(100));
        assert_eq!(seq.shown(1), 1);
    }

    #[test]
    fn test_empty_phase_is_skipped() {
        let mut seq = RevealSequence::texts(RevealTiming::default(), &["", "x"]);
        seq.advance(ms(50));
        assert_eq!(seq.shown(1), 1);
        assert!(seq.is_complete());
    }

    #[test]
    fn test_reset_and_cancel_pending() {
        let mut seq = RevealSequence::items(RevealTiming::default(), 4);
        seq.advance(ms(450));
        assert_eq!(seq.shown(0), 2);

        seq.cancel_pending();
        assert_eq!(seq.pending, Duration::ZERO);
        assert_eq!(seq.shown(0), 2);

        seq.advance(ms(30));
        seq.reset();
        assert_eq!(seq.shown(0), 0);
        assert_eq!(seq.pending, Duration::ZERO);
    }

    #[test]
    fn test_zero_interval_reveals_phase_at_once() {
        let timing = RevealTiming {
            char_interval: Duration::ZERO,
            item_interval: ITEM_INTERVAL,
        };
        let mut seq = RevealSequence::texts(timing, &["hello"]);
        assert!(seq.advance(Duration::ZERO));
        assert!(seq.is_complete());
    }
}
