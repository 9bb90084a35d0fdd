//! A running game session
//!
//! Owns the match state together with keyboard state, the countdown and the
//! pause flag. The browser shell (or a test) drives it with timestamps and key
//! events and gets back the events each frame produced.

use super::countdown::Countdown;
use super::input::{InputState, Key};
use super::state::{Ball, GameEvent, GameState, Paddle, Scoreboard};
use super::tick::{TickInput, tick};
use crate::consts::*;
use crate::settings::Settings;

/// Read-only snapshot of everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub left: &'a Paddle,
    pub right: &'a Paddle,
    pub ball: &'a Ball,
    pub scoreboard: &'a Scoreboard,
    pub countdown: Option<u32>,
    pub paused: bool,
}

impl FrameView<'_> {
    /// Countdown overlay text; empty when no countdown is running
    pub fn countdown_text(&self) -> String {
        self.countdown.map(|n| n.to_string()).unwrap_or_default()
    }
}

/// Game session: one match at a time, plus the clocks that drive it
#[derive(Debug, Clone)]
pub struct GameSession {
    /// `None` until the first match starts
    state: Option<GameState>,
    /// Names from the last match (used to prefill the name form)
    names: Scoreboard,
    input: InputState,
    countdown: Countdown,
    paused: bool,
    /// Timestamp of the previous frame
    last_frame_ms: Option<f64>,
    max_frame_dt: f64,
    pause_freezes_countdown: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl GameSession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: None,
            names: Scoreboard::default(),
            input: InputState::new(),
            countdown: Countdown::idle(),
            paused: false,
            last_frame_ms: None,
            max_frame_dt: settings.max_frame_dt,
            pause_freezes_countdown: settings.pause_freezes_countdown,
        }
    }

    /// Start a fresh match
    ///
    /// Every entity is recreated, scores go to zero, held keys are released,
    /// the pause is lifted and a 3 second countdown replaces any countdown
    /// left over from the previous match.
    pub fn start_match(&mut self, p1_name: &str, p2_name: &str, seed: u64, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.names = Scoreboard::new(p1_name, p2_name);
        self.state = Some(GameState::new(self.names.clone(), seed));
        self.input = InputState::new();
        self.paused = false;
        self.last_frame_ms = Some(now_ms);
        self.countdown.start(MATCH_START_COUNTDOWN, now_ms, &mut events);

        log::info!(
            "Match started: {} vs {} (seed {})",
            self.names.p1.name,
            self.names.p2.name,
            seed
        );
        events
    }

    /// Record a key press or release; pressing the pause key toggles pause
    pub fn set_key_state(&mut self, key: Key, pressed: bool, now_ms: f64) {
        self.input.set(key, pressed);
        if key == Key::Space && pressed {
            self.toggle_pause(now_ms);
        }
    }

    pub fn toggle_pause(&mut self, now_ms: f64) {
        self.set_paused(!self.paused, now_ms);
    }

    pub fn set_paused(&mut self, paused: bool, now_ms: f64) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        if paused {
            if self.pause_freezes_countdown {
                self.countdown.suspend(now_ms);
            }
            log::info!("Paused");
        } else {
            if self.pause_freezes_countdown {
                self.countdown.resume(now_ms);
            }
            // Don't let the paused stretch turn into one huge dt
            self.last_frame_ms = Some(now_ms);
            log::info!("Resumed");
        }
    }

    /// Run one display frame at wall-clock time `now_ms`
    ///
    /// Countdown deadlines are serviced first, then the simulation advances
    /// by the time since the previous frame unless paused.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.countdown.poll(now_ms, &mut events);

        let dt = match self.last_frame_ms {
            Some(last) => (now_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        if !self.paused {
            events.extend(self.update(dt, now_ms));
        }
        events
    }

    /// Advance the simulation by `dt` seconds, ending at wall-clock `now_ms`
    ///
    /// No-op while paused or before the first match. `dt` is clamped to
    /// `[0, max_frame_dt]` so a stalled tab can't tunnel the ball. A goal
    /// scored in this step starts its countdown at `now_ms`.
    pub fn update(&mut self, dt: f64, now_ms: f64) -> Vec<GameEvent> {
        if self.paused {
            return Vec::new();
        }
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };

        let dt = dt.clamp(0.0, self.max_frame_dt);
        let input = TickInput::from_keys(&self.input, self.countdown.is_active());
        let mut events = tick(state, &input, dt);

        let scored = events
            .iter()
            .find_map(|e| match e {
                GameEvent::Scored { scorer, .. } => Some(*scorer),
                _ => None,
            });
        if let Some(scorer) = scored {
            let board = &state.scoreboard;
            log::info!(
                "{} scores ({} {} - {} {})",
                board.player(scorer).name,
                board.p1.name,
                board.p1.score,
                board.p2.score,
                board.p2.name
            );
            self.countdown
                .start(POST_SCORE_COUNTDOWN, now_ms, &mut events);
        }
        events
    }

    /// Everything the renderer draws, or `None` before the first match
    pub fn view(&self) -> Option<FrameView<'_>> {
        let state = self.state.as_ref()?;
        Some(FrameView {
            left: &state.left,
            right: &state.right,
            ball: &state.ball,
            scoreboard: &state.scoreboard,
            countdown: self.countdown.shown(),
            paused: self.paused,
        })
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn has_match(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn countdown_text(&self) -> String {
        self.countdown.display_text()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Names of the most recent match (defaults before any match)
    pub fn names(&self) -> &Scoreboard {
        &self.names
    }
}
