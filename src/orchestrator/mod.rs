//! Transition Orchestrator: the authoritative section state machine
//!
//! ```text
//!   Idle(s) ──request_navigate(t)──▶ Animating(s, t) ──settle timer──▶ Idle(t)
//! ```
//!
//! - The committed section changes the moment a request is accepted; only
//!   the visuals are in flight.
//! - At most one transition is in flight. Requests that arrive while
//!   animating are dropped, not queued.
//! - Rejections are ordinary outcomes, never errors.
//!
//! The settle window and the default tween duration are the same value
//! ([`TransitionConfig::duration_ms`]), so the gate reopens when the
//! entities land.

pub mod settle;

pub use settle::SettleTimer;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::scene::{SectionTargetTable, ViewportClass};
use crate::tween::{Easing, TweenDriver, TweenSpec};

/// Shared transition timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Settle window and default per-entity tween duration
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 1500, easing: Easing::CubicInOut }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// A navigation request from an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Advance,
    Retreat,
    JumpTo(usize),
}

/// Why a request did not start a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Target is the current section
    SameSection,
    /// Target is outside `0..total`
    OutOfRange,
    /// Another transition is in flight
    InFlight,
    /// The orchestrator has been shut down
    Disposed,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Accepted { from: usize, to: usize },
    Rejected(Rejection),
}

impl Navigation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Navigation::Accepted { .. })
    }
}

/// State machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle { section: usize },
    Animating { from: usize, to: usize },
}

/// Owns the current section and the animating gate; issues tween commands
/// through `D` on every accepted transition.
#[derive(Debug)]
pub struct Orchestrator<D: TweenDriver> {
    table: SectionTargetTable,
    total: usize,
    transition: TransitionConfig,
    phase: Phase,
    settle: SettleTimer,
    driver: D,
    disposed: bool,
}

impl<D: TweenDriver> Orchestrator<D> {
    /// Starts in `Idle(0)`. `table` is expected to be validated for `total`.
    pub fn new(table: SectionTargetTable, total: usize, transition: TransitionConfig, driver: D) -> Self {
        Self {
            table,
            total,
            transition,
            phase: Phase::Idle { section: 0 },
            settle: SettleTimer::default(),
            driver,
            disposed: false,
        }
    }

    /// The committed section (the destination while animating).
    pub fn current_section(&self) -> usize {
        match self.phase {
            Phase::Idle { section } => section,
            Phase::Animating { to, .. } => to,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total_sections(&self) -> usize {
        self.total
    }

    pub fn table(&self) -> &SectionTargetTable {
        &self.table
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// When the gate will reopen, if a transition is in flight.
    pub fn settles_at(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    /// Tween every entity toward the current section's targets without
    /// touching the gate. Used for the intro pose and after the viewport
    /// class changes.
    pub fn refresh(&mut self, viewport: ViewportClass, now: Instant) {
        if self.disposed {
            return;
        }
        self.issue(self.current_section(), viewport, now);
    }

    /// Primary mutation entry point.
    pub fn request_navigate(&mut self, target: usize, viewport: ViewportClass, now: Instant) -> Navigation {
        self.tick(now);

        let verdict = if self.disposed {
            Err(Rejection::Disposed)
        } else if let Phase::Animating { .. } = self.phase {
            Err(Rejection::InFlight)
        } else if target >= self.total {
            Err(Rejection::OutOfRange)
        } else if target == self.current_section() {
            Err(Rejection::SameSection)
        } else {
            Ok(self.current_section())
        };

        let from = match verdict {
            Ok(from) => from,
            Err(reason) => {
                log::debug!("Navigation to {} rejected: {:?}", target, reason);
                return Navigation::Rejected(reason);
            }
        };

        // Commit first; tween commands observe the new index.
        self.phase = Phase::Animating { from, to: target };
        log::info!("Section {} -> {} ({:?})", from, target, viewport);

        self.issue(target, viewport, now);
        self.settle.arm(now, self.transition.duration());

        Navigation::Accepted { from, to: target }
    }

    /// `request_navigate(current + 1)`.
    pub fn advance(&mut self, viewport: ViewportClass, now: Instant) -> Navigation {
        let target = self.current_section() + 1;
        self.request_navigate(target, viewport, now)
    }

    /// `request_navigate(current - 1)`; a no-op at section 0.
    pub fn retreat(&mut self, viewport: ViewportClass, now: Instant) -> Navigation {
        match self.current_section().checked_sub(1) {
            Some(target) => self.request_navigate(target, viewport, now),
            None => {
                self.tick(now);
                log::debug!("Retreat at first section rejected");
                Navigation::Rejected(if self.disposed {
                    Rejection::Disposed
                } else if self.is_animating() {
                    Rejection::InFlight
                } else {
                    Rejection::OutOfRange
                })
            }
        }
    }

    pub fn handle(&mut self, intent: NavigationIntent, viewport: ViewportClass, now: Instant) -> Navigation {
        match intent {
            NavigationIntent::Advance => self.advance(viewport, now),
            NavigationIntent::Retreat => self.retreat(viewport, now),
            NavigationIntent::JumpTo(target) => self.request_navigate(target, viewport, now),
        }
    }

    /// Poll the settle timer. Returns true on the frame the gate reopens.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed || !self.settle.poll(now) {
            return false;
        }
        if let Phase::Animating { to, .. } = self.phase {
            log::debug!("Settled on section {}", to);
            self.phase = Phase::Idle { section: to };
            return true;
        }
        false
    }

    /// Teardown: cancel the pending settle timer and refuse further input.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.settle.cancel();
        self.disposed = true;
        log::debug!("Orchestrator disposed at section {}", self.current_section());
    }

    fn issue(&mut self, section: usize, viewport: ViewportClass, now: Instant) {
        let targets = self.table.lookup(section, viewport);
        for (entity, target) in targets.iter() {
            let spec = TweenSpec {
                duration: target
                    .duration_ms
                    .map(Duration::from_millis)
                    .unwrap_or_else(|| self.transition.duration()),
                easing: target.easing.unwrap_or(self.transition.easing),
            };
            self.driver.animate(*entity, target, spec, now);
        }
    }
}
