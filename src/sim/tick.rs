//! Variable timestep simulation tick
//!
//! Advances paddles and the ball by one frame and reports what happened.

use glam::DVec2;

use super::collision::circle_rect_collision;
use super::input::InputState;
use super::state::{Ball, GameEvent, GameState, Paddle, Side};
use crate::clamp;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Left paddle vertical intent (-1, 0, +1)
    pub left_intent: f64,
    /// Right paddle vertical intent (-1, 0, +1)
    pub right_intent: f64,
    /// Countdown on screen: paddles move, the ball does not
    pub ball_frozen: bool,
}

impl TickInput {
    pub fn from_keys(keys: &InputState, ball_frozen: bool) -> Self {
        Self {
            left_intent: keys.left_intent(),
            right_intent: keys.right_intent(),
            ball_frozen,
        }
    }
}

/// Advance the match by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.left.dy = input.left_intent;
    state.right.dy = input.right_intent;
    update_paddle(&mut state.left, dt);
    update_paddle(&mut state.right, dt);

    if !input.ball_frozen {
        update_ball(state, dt, &mut events);
    }

    events
}

fn update_paddle(paddle: &mut Paddle, dt: f64) {
    paddle.y += paddle.dy * paddle.speed * dt;
    paddle.y = clamp(paddle.y, 0.0, paddle.max_y());
}

fn update_ball(state: &mut GameState, dt: f64, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    ball.pos += ball.velocity() * dt;

    // Ceiling / floor
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.dir.y = -ball.dir.y;
        events.push(GameEvent::WallBounce);
    } else if ball.pos.y + ball.radius >= GAME_HEIGHT {
        ball.pos.y = GAME_HEIGHT - ball.radius;
        ball.dir.y = -ball.dir.y;
        events.push(GameEvent::WallBounce);
    }

    // Both paddles are checked every frame, even after a hit
    if bounce_off_paddle(ball, &state.left, Side::Left) {
        events.push(GameEvent::PaddleHit { side: Side::Left });
    }
    if bounce_off_paddle(ball, &state.right, Side::Right) {
        events.push(GameEvent::PaddleHit { side: Side::Right });
    }

    if ball.pos.x + ball.radius < 0.0 {
        on_score(state, Side::Left, events);
    } else if ball.pos.x - ball.radius > GAME_WIDTH {
        on_score(state, Side::Right, events);
    }
}

/// Reflect the ball off `paddle` if they overlap
///
/// The outgoing angle depends only on where the ball met the paddle:
/// center sends it straight, the ends send it steep. Returns true on a hit.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !circle_rect_collision(ball.pos, ball.radius, &paddle.rect()) {
        return false;
    }

    let away = match side {
        Side::Left => {
            ball.pos.x = paddle.x + paddle.w + ball.radius;
            1.0
        }
        Side::Right => {
            ball.pos.x = paddle.x - ball.radius;
            -1.0
        }
    };
    ball.dir.x = away * ball.dir.x.abs();
    // Unclamped: corner hits can exceed ±1 before normalizing
    ball.dir.y = (ball.pos.y - paddle.center_y()) / (paddle.h / 2.0);
    ball.dir = ball.dir.try_normalize().unwrap_or(DVec2::new(away, 0.0));
    ball.speed = (ball.speed * BALL_SPEED_INC).min(BALL_SPEED_MAX);

    log::debug!("paddle hit ({}), speed {:.1}", side.as_str(), ball.speed);
    true
}

/// Ball left through `conceded`'s goal
fn on_score(state: &mut GameState, conceded: Side, events: &mut Vec<GameEvent>) {
    let scorer = conceded.opponent();
    state.scoreboard.award(scorer);
    events.push(GameEvent::Scored { scorer, conceded });

    // Serve back toward the player who just scored
    let dir_x = match conceded {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    state.reset_ball(dir_x);
}
