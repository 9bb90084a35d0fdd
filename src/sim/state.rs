//! Match state and core simulation types
//!
//! Everything here is recreated wholesale when a match starts.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Which half of the playfield something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Discrete things that happened during a frame, for audio and HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle on `side`
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball left the playfield through `conceded`'s goal; `scorer` gets the point
    Scored { scorer: Side, conceded: Side },
    /// Countdown now shows `value`
    CountdownTick { value: u32 },
    /// Countdown finished; the ball is live
    CountdownDone,
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed per side)
    pub x: f64,
    /// Top edge, always within `[0, GAME_HEIGHT - h]`
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Vertical intent: -1 (up), 0, +1 (down)
    pub dy: f64,
    pub speed: f64,
}

impl Paddle {
    /// Create a vertically centered paddle with its left edge at `x`
    pub fn new(x: f64) -> Self {
        Self {
            x,
            y: (GAME_HEIGHT - PADDLE_HEIGHT) / 2.0,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
            dy: 0.0,
            speed: PADDLE_SPEED,
        }
    }

    /// Paddle for the given side, inset by the margin
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self::new(PADDLE_MARGIN),
            Side::Right => Self::new(GAME_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Largest valid `y`
    #[inline]
    pub fn max_y(&self) -> f64 {
        GAME_HEIGHT - self.h
    }
}

/// The ball
///
/// `dir` is the direction of travel and `speed` the magnitude; velocity is
/// always `dir * speed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub radius: f64,
    pub dir: DVec2,
    pub speed: f64,
}

impl Ball {
    /// Centered ball at serve speed heading toward `dir_x` (±1)
    pub fn serve<R: Rng>(dir_x: f64, rng: &mut R) -> Self {
        Self {
            pos: DVec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0),
            radius: BALL_RADIUS,
            dir: DVec2::new(dir_x, random_signish(rng)),
            speed: BALL_SPEED_START,
        }
    }

    /// Centered ball with a random horizontal direction (match start)
    pub fn kickoff<R: Rng>(rng: &mut R) -> Self {
        let dir_x = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        Self::serve(dir_x, rng)
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.dir * self.speed
    }
}

/// Random slope in `[-1, 1]` that is never flatter than `MIN_SERVE_SLOPE`
///
/// Values inside the flat band snap to the band edge with the same sign.
pub fn random_signish<R: Rng>(rng: &mut R) -> f64 {
    snap_out_of_flat_band(rng.random_range(-1.0..1.0))
}

#[inline]
pub(crate) fn snap_out_of_flat_band(v: f64) -> f64 {
    if v.abs() < MIN_SERVE_SLOPE {
        if v < 0.0 { -MIN_SERVE_SLOPE } else { MIN_SERVE_SLOPE }
    } else {
        v
    }
}

/// One player's name and score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    /// Trimmed name, falling back to `default` when blank
    pub fn named(name: &str, default: &str) -> Self {
        let trimmed = name.trim();
        Self {
            name: if trimmed.is_empty() { default.to_string() } else { trimmed.to_string() },
            score: 0,
        }
    }
}

/// Both players; p1 defends the left side, p2 the right
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub p1: Player,
    pub p2: Player,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl Scoreboard {
    pub fn new(p1_name: &str, p2_name: &str) -> Self {
        Self {
            p1: Player::named(p1_name, DEFAULT_P1_NAME),
            p2: Player::named(p2_name, DEFAULT_P2_NAME),
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.p1,
            Side::Right => &self.p2,
        }
    }

    /// Award one point to the player defending `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.p1.score += 1,
            Side::Right => self.p2.score += 1,
        }
    }

    pub fn reset(&mut self) {
        self.p1.score = 0;
        self.p2.score = 0;
    }
}

/// Complete state of a match in progress
#[derive(Debug, Clone)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scoreboard: Scoreboard,
    rng: Pcg32,
}

impl GameState {
    /// Fresh match: centered paddles, kickoff ball, zeroed scores
    pub fn new(scoreboard: Scoreboard, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::kickoff(&mut rng);
        let mut scoreboard = scoreboard;
        scoreboard.reset();
        Self {
            left: Paddle::for_side(Side::Left),
            right: Paddle::for_side(Side::Right),
            ball,
            scoreboard,
            rng,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Re-center the ball at serve speed heading toward `dir_x`
    pub fn reset_ball(&mut self, dir_x: f64) {
        self.ball = Ball::serve(dir_x, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered() {
        let state = GameState::new(Scoreboard::default(), 1);
        assert_eq!(state.left.x, 24.0);
        assert_eq!(state.right.x, 764.0);
        assert_eq!(state.left.y, 250.0);
        assert_eq!(state.right.y, 250.0);
        assert_eq!(state.left.dy, 0.0);
    }

    #[test]
    fn test_kickoff_ball() {
        let state = GameState::new(Scoreboard::default(), 7);
        assert_eq!(state.ball.pos, DVec2::new(400.0, 300.0));
        assert_eq!(state.ball.speed, BALL_SPEED_START);
        assert_eq!(state.ball.dir.x.abs(), 1.0);
        assert!(state.ball.dir.y.abs() >= MIN_SERVE_SLOPE);
        assert!(state.ball.dir.y.abs() <= 1.0);
    }

    #[test]
    fn test_reset_ball_direction() {
        let mut state = GameState::new(Scoreboard::default(), 3);
        state.ball.speed = 700.0;
        state.ball.pos = DVec2::new(-20.0, 10.0);
        state.reset_ball(-1.0);
        assert_eq!(state.ball.pos, DVec2::new(400.0, 300.0));
        assert_eq!(state.ball.dir.x, -1.0);
        assert_eq!(state.ball.speed, BALL_SPEED_START);
    }

    #[test]
    fn test_snap_out_of_flat_band() {
        assert_eq!(snap_out_of_flat_band(0.05), 0.2);
        assert_eq!(snap_out_of_flat_band(-0.05), -0.2);
        assert_eq!(snap_out_of_flat_band(0.0), 0.2);
        assert_eq!(snap_out_of_flat_band(-0.7), -0.7);
        assert_eq!(snap_out_of_flat_band(0.2), 0.2);
    }

    #[test]
    fn test_random_signish_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_signish(&mut rng);
            assert!((-1.0..=1.0).contains(&v));
            assert!(v.abs() >= MIN_SERVE_SLOPE);
        }
    }

    #[test]
    fn test_player_names_default_when_blank() {
        let board = Scoreboard::new("   ", " Ada ");
        assert_eq!(board.p1.name, "Player 1");
        assert_eq!(board.p2.name, "Ada");
    }

    #[test]
    fn test_new_match_resets_scores() {
        let mut board = Scoreboard::new("A", "B");
        board.award(Side::Left);
        board.award(Side::Right);
        let state = GameState::new(board, 1);
        assert_eq!(state.scoreboard.p1.score, 0);
        assert_eq!(state.scoreboard.p2.score, 0);
        assert_eq!(state.scoreboard.p1.name, "A");
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(Scoreboard::default(), 99);
        let b = GameState::new(Scoreboard::default(), 99);
        assert_eq!(a.ball, b.ball);
    }
}
