//! Neon Pong - A two-player arcade Pong
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, collisions, scoring, countdown, pause)
//! - `renderer`: Scene building and the WebGPU pipeline
//! - `audio`: Procedural sound effects
//! - `platform`: Browser shell and startup errors
//! - `settings`: Host-provided preferences

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};
pub use sim::{GameEvent, GameSession};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units, y grows downward)
    pub const GAME_WIDTH: f64 = 800.0;
    pub const GAME_HEIGHT: f64 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 12.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    /// Gap between a paddle and its side of the playfield
    pub const PADDLE_MARGIN: f64 = 24.0;
    /// Paddle travel speed (units/s)
    pub const PADDLE_SPEED: f64 = 420.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 8.0;
    pub const BALL_SPEED_START: f64 = 360.0;
    pub const BALL_SPEED_MAX: f64 = 720.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const BALL_SPEED_INC: f64 = 1.03;

    /// Serve directions with |vy| below this are snapped to it
    pub const MIN_SERVE_SLOPE: f64 = 0.2;

    /// Countdown lengths (whole seconds shown)
    pub const MATCH_START_COUNTDOWN: u32 = 3;
    pub const POST_SCORE_COUNTDOWN: u32 = 2;
    /// Wall-clock time between countdown steps
    pub const COUNTDOWN_INTERVAL_MS: f64 = 700.0;

    /// Default per-step delta clamp (seconds)
    pub const DEFAULT_MAX_FRAME_DT: f64 = 1.0 / 30.0;

    /// Names used when the name form is left blank
    pub const DEFAULT_P1_NAME: &str = "Player 1";
    pub const DEFAULT_P2_NAME: &str = "Player 2";
}

/// Restrict `v` to `[min, max]`. Assumes `min <= max`.
#[inline]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.5, 0.0, 10.0), 10.0);
        assert_eq!(clamp(4.0, 4.0, 4.0), 4.0);
    }
}
