//! Virtual-clock timer wheel.
//!
//! Timers never run on their own. The owner advances the wheel with the
//! elapsed milliseconds it observed and applies each due [`TimerEvent`]
//! itself, so everything stays on the UI thread and tests can drive time
//! by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::trace;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Raise the mascot bounce flag.
    BounceStart,
    /// Lower the mascot bounce flag.
    BounceEnd,
    /// Drop the visible sparkle batch.
    ClearSparkles,
}

/// Owned handle to a scheduled timer.
///
/// The timer is cancelled when the handle is dropped, so a handle stored in
/// a view cannot outlive it and fire into freed state.
#[derive(Debug)]
pub struct TimerHandle {
    alive: Rc<Cell<bool>>,
}

impl TimerHandle {
    /// Cancel the timer. Cancelling twice is harmless.
    pub fn cancel(&self) {
        self.alive.set(false);
    }

    /// Whether the timer can still fire.
    pub fn is_pending(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug)]
struct Entry {
    due_ms: u64,
    period_ms: Option<u64>,
    /// Scheduling order, breaks ties between timers due at the same instant.
    seq: u64,
    event: TimerEvent,
    alive: Rc<Cell<bool>>,
}

/// Timer wheel driven by an externally supplied millisecond clock.
#[derive(Debug, Default)]
pub struct Timers {
    now_ms: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl Timers {
    /// Create a wheel whose clock starts at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    /// Current wheel time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire `event` every `period`, first one `period` from now.
    pub fn set_interval(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        // A zero period would make pop_due spin forever.
        let period_ms = duration_ms(period).max(1);
        self.schedule(period_ms, Some(period_ms), event)
    }

    /// Fire `event` once, `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.schedule(duration_ms(delay), None, event)
    }

    fn schedule(
        &mut self,
        delay_ms: u64,
        period_ms: Option<u64>,
        event: TimerEvent,
    ) -> TimerHandle {
        let alive = Rc::new(Cell::new(true));
        let seq = self.bump_seq();
        self.entries.push(Entry {
            due_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
            seq,
            event,
            alive: Rc::clone(&alive),
        });
        TimerHandle { alive }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Pop the earliest timer due at or before `now_ms`.
    ///
    /// The wheel clock moves to the popped timer's due time, so timers the
    /// caller schedules while handling the event are placed relative to the
    /// moment it fired. Once nothing is due the clock moves to `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TimerEvent> {
        self.entries.retain(|entry| entry.alive.get());

        let Some(index) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(index, _)| index)
        else {
            self.now_ms = self.now_ms.max(now_ms);
            return None;
        };

        let seq = self.bump_seq();
        let entry = &mut self.entries[index];
        self.now_ms = self.now_ms.max(entry.due_ms);
        let event = entry.event;
        trace!(?event, due_ms = entry.due_ms, "timer fired");

        match entry.period_ms {
            Some(period_ms) => {
                // Re-arm from the due time, not from now, so intervals don't drift.
                entry.due_ms = entry.due_ms.saturating_add(period_ms);
                entry.seq = seq;
            }
            None => {
                entry.alive.set(false);
                self.entries.swap_remove(index);
            }
        }

        Some(event)
    }

    /// Cancel every outstanding timer.
    pub fn cancel_all(&mut self) {
        for entry in self.entries.drain(..) {
            entry.alive.set(false);
        }
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|entry| entry.alive.get()).count()
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timers: &mut Timers, now_ms: u64) -> Vec<(u64, TimerEvent)> {
        let mut fired = Vec::new();
        while let Some(event) = timers.pop_due(now_ms) {
            fired.push((timers.now_ms(), event));
        }
        fired
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut timers = Timers::new(0);
        let handle = timers.set_timeout(Duration::from_millis(2000), TimerEvent::ClearSparkles);

        assert!(drain(&mut timers, 1999).is_empty());
        assert_eq!(
            drain(&mut timers, 2000),
            vec![(2000, TimerEvent::ClearSparkles)]
        );
        assert!(!handle.is_pending());
        assert!(drain(&mut timers, 10_000).is_empty());
    }

    #[test]
    fn test_interval_rearms_without_drift() {
        let mut timers = Timers::new(0);
        let _handle = timers.set_interval(Duration::from_millis(3000), TimerEvent::BounceStart);

        let fired = drain(&mut timers, 9500);
        assert_eq!(
            fired,
            vec![
                (3000, TimerEvent::BounceStart),
                (6000, TimerEvent::BounceStart),
                (9000, TimerEvent::BounceStart),
            ]
        );
        assert_eq!(timers.now_ms(), 9500);
    }

    #[test]
    fn test_dropped_handle_never_fires() {
        let mut timers = Timers::new(0);
        let handle = timers.set_timeout(Duration::from_millis(100), TimerEvent::BounceEnd);
        drop(handle);

        assert!(drain(&mut timers, 1000).is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_cancel_all_clears_wheel() {
        let mut timers = Timers::new(0);
        let interval = timers.set_interval(Duration::from_millis(10), TimerEvent::BounceStart);
        let timeout = timers.set_timeout(Duration::from_millis(10), TimerEvent::BounceEnd);

        timers.cancel_all();
        assert!(!interval.is_pending());
        assert!(!timeout.is_pending());
        assert!(drain(&mut timers, 1000).is_empty());
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut timers = Timers::new(0);
        let _a = timers.set_timeout(Duration::from_millis(50), TimerEvent::BounceEnd);
        let _b = timers.set_timeout(Duration::from_millis(50), TimerEvent::ClearSparkles);

        let fired: Vec<_> = drain(&mut timers, 50).into_iter().map(|(_, e)| e).collect();
        assert_eq!(fired, vec![TimerEvent::BounceEnd, TimerEvent::ClearSparkles]);
    }

    #[test]
    fn test_timeout_scheduled_mid_advance_is_relative_to_fire_time() {
        let mut timers = Timers::new(0);
        let _interval = timers.set_interval(Duration::from_millis(3000), TimerEvent::BounceStart);
        let mut follow_ups = Vec::new();
        let mut fired = Vec::new();

        while let Some(event) = timers.pop_due(7000) {
            fired.push((timers.now_ms(), event));
            if event == TimerEvent::BounceStart {
                let delay = Duration::from_millis(600);
                follow_ups.push(timers.set_timeout(delay, TimerEvent::BounceEnd));
            }
        }

        assert_eq!(
            fired,
            vec![
                (3000, TimerEvent::BounceStart),
                (3600, TimerEvent::BounceEnd),
                (6000, TimerEvent::BounceStart),
                (6600, TimerEvent::BounceEnd),
            ]
        );
    }

    #[test]
    fn test_zero_period_interval_is_clamped() {
        let mut timers = Timers::new(0);
        let _handle = timers.set_interval(Duration::ZERO, TimerEvent::BounceStart);
        assert_eq!(drain(&mut timers, 3).len(), 3);
    }
}
