//! Pre-serve countdown timer
//!
//! Runs on wall-clock milliseconds, not on the simulation clock. The timer
//! keeps its own next deadline and is polled with the current time; any
//! deadlines that have passed fire in order.

use super::state::GameEvent;
use crate::consts::COUNTDOWN_INTERVAL_MS;

/// Countdown state machine: idle, or showing `n..=1` one step at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Countdown {
    /// Value shown on screen (`None` when idle)
    shown: Option<u32>,
    /// Value the next step will show (0 means the next step clears)
    remaining: u32,
    /// Wall-clock time of the next step
    next_step_ms: Option<f64>,
    /// Set while frozen by a pause
    suspended_at: Option<f64>,
}

impl Countdown {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start counting down from `seconds`, replacing any countdown in flight
    ///
    /// The first value is shown (and ticks) immediately.
    pub fn start(&mut self, seconds: u32, now_ms: f64, events: &mut Vec<GameEvent>) {
        *self = Self {
            shown: Some(seconds),
            remaining: seconds,
            next_step_ms: None,
            suspended_at: None,
        };
        self.step(now_ms, events);
    }

    /// Drop the countdown without firing anything
    pub fn cancel(&mut self) {
        *self = Self::idle();
    }

    /// Fire every step whose deadline is at or before `now_ms`
    pub fn poll(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        if self.suspended_at.is_some() {
            return;
        }
        while let Some(at) = self.next_step_ms {
            if at > now_ms {
                break;
            }
            self.step(at, events);
        }
    }

    /// Freeze the countdown (used when pause also stops the countdown)
    pub fn suspend(&mut self, now_ms: f64) {
        if self.next_step_ms.is_some() && self.suspended_at.is_none() {
            self.suspended_at = Some(now_ms);
        }
    }

    /// Thaw after `suspend`, pushing the pending deadline back by the time spent frozen
    pub fn resume(&mut self, now_ms: f64) {
        if let Some(since) = self.suspended_at.take() {
            let frozen_for = (now_ms - since).max(0.0);
            if let Some(at) = self.next_step_ms.as_mut() {
                *at += frozen_for;
            }
        }
    }

    fn step(&mut self, at_ms: f64, events: &mut Vec<GameEvent>) {
        if self.remaining == 0 {
            self.shown = None;
            self.next_step_ms = None;
            events.push(GameEvent::CountdownDone);
            return;
        }
        self.shown = Some(self.remaining);
        events.push(GameEvent::CountdownTick {
            value: self.remaining,
        });
        log::debug!("countdown {}", self.remaining);
        self.remaining -= 1;
        self.next_step_ms = Some(at_ms + COUNTDOWN_INTERVAL_MS);
    }

    /// Whether the countdown is on screen (the ball is held while it is)
    pub fn is_active(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<u32> {
        self.shown
    }

    /// Text to overlay on the playfield; empty when idle
    pub fn display_text(&self) -> String {
        self.shown.map(|n| n.to_string()).unwrap_or_default()
    }
}
