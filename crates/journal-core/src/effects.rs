//! Timed visual effects: the mascot bounce and sparkle bursts.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use crate::timer::{TimerEvent, TimerHandle, Timers};

/// How often the mascots bounce.
pub const BOUNCE_INTERVAL: Duration = Duration::from_millis(3000);

/// How long a single bounce lasts.
pub const BOUNCE_DURATION: Duration = Duration::from_millis(600);

/// How long a sparkle batch stays on screen.
pub const SPARKLE_LIFETIME: Duration = Duration::from_millis(2000);

/// Number of particles in one burst.
pub const SPARKLE_COUNT: usize = 5;

/// Area particles are scattered over, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A single sparkle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub id: u64,
    pub x: u16,
    pub y: u16,
}

/// Owns the bounce flag, the sparkle batch and the timers that drive them.
#[derive(Debug)]
pub struct EffectScheduler<R: Rng = StdRng> {
    timers: Timers,
    rng: R,
    bounce: bool,
    sparkles: Vec<Particle>,
    next_particle_id: u64,
    bounce_interval: Option<TimerHandle>,
    bounce_end: Option<TimerHandle>,
    sparkle_clear: Option<TimerHandle>,
    torn_down: bool,
}

impl EffectScheduler<StdRng> {
    /// Create a scheduler seeded from the OS random source.
    pub fn new(now_ms: u64) -> Self {
        Self::with_rng(now_ms, StdRng::from_os_rng())
    }
}

impl<R: Rng> EffectScheduler<R> {
    /// Create a scheduler with an explicit random source.
    pub fn with_rng(now_ms: u64, rng: R) -> Self {
        Self {
            timers: Timers::new(now_ms),
            rng,
            bounce: false,
            sparkles: Vec::new(),
            next_particle_id: 0,
            bounce_interval: None,
            bounce_end: None,
            sparkle_clear: None,
            torn_down: false,
        }
    }

    /// Arm the recurring bounce. Starting twice keeps the first interval.
    pub fn start(&mut self) {
        if self.torn_down || self.bounce_interval.is_some() {
            return;
        }
        let event = TimerEvent::BounceStart;
        self.bounce_interval = Some(self.timers.set_interval(BOUNCE_INTERVAL, event));
    }

    /// Fire every timer due up to `now_ms`, in order.
    pub fn advance_to(&mut self, now_ms: u64) {
        if self.torn_down {
            return;
        }
        while let Some(event) = self.timers.pop_due(now_ms) {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::BounceStart => {
                self.bounce = true;
                // Replacing the handle cancels a bounce end still in flight.
                let event = TimerEvent::BounceEnd;
                self.bounce_end = Some(self.timers.set_timeout(BOUNCE_DURATION, event));
            }
            TimerEvent::BounceEnd => {
                self.bounce = false;
                self.bounce_end = None;
            }
            TimerEvent::ClearSparkles => {
                trace!(count = self.sparkles.len(), "sparkles cleared");
                self.sparkles = Vec::new();
                self.sparkle_clear = None;
            }
        }
    }

    /// Replace the visible sparkles with a fresh batch scattered over
    /// `viewport` and restart the clear countdown from `now_ms`.
    ///
    /// Timers due before `now_ms` fire first, so the new batch lives the
    /// full [`SPARKLE_LIFETIME`] from the moment of the burst.
    pub fn burst(&mut self, now_ms: u64, viewport: Viewport) {
        if self.torn_down {
            return;
        }
        self.advance_to(now_ms);

        let batch: Vec<Particle> = (0..SPARKLE_COUNT)
            .map(|_| {
                let id = self.next_particle_id;
                self.next_particle_id += 1;
                Particle {
                    id,
                    x: random_coord(&mut self.rng, viewport.width),
                    y: random_coord(&mut self.rng, viewport.height),
                }
            })
            .collect();
        let replaced = self
            .sparkle_clear
            .as_ref()
            .is_some_and(TimerHandle::is_pending);
        debug!(
            first_id = batch[0].id,
            width = viewport.width,
            height = viewport.height,
            now_ms,
            replaced,
            "sparkle burst"
        );

        self.sparkles = batch;
        let event = TimerEvent::ClearSparkles;
        self.sparkle_clear = Some(self.timers.set_timeout(SPARKLE_LIFETIME, event));
    }

    /// Cancel every outstanding timer. Nothing mutates afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.bounce_interval = None;
        self.bounce_end = None;
        self.sparkle_clear = None;
        self.timers.cancel_all();
        debug!("effect timers released");
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce
    }

    pub fn sparkles(&self) -> &[Particle] {
        &self.sparkles
    }

    /// Wheel time of the last advance or burst.
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Number of timers that can still fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<R: Rng> Drop for EffectScheduler<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn random_coord<R: Rng>(rng: &mut R, extent: u16) -> u16 {
    if extent == 0 {
        0
    } else {
        rng.random_range(0..extent)
    }
}
