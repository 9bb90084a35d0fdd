//! Frame scene building
//!
//! Turns a `FrameView` into one vertex list, back to front. Text (scores,
//! countdown digits, the pause label) is drawn by the HUD, not here.

use glam::Vec2;

use super::shapes::{self, mix};
use super::vertex::{Vertex, colors};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::settings::QualityPreset;
use crate::sim::{Ball, FrameView, Paddle, Side};

const GRID_STEP: f32 = 40.0;
const PADDLE_CORNER: f32 = 8.0;
const PADDLE_GLOW_SPREAD: f32 = 18.0;
const BALL_GLOW_SPREAD: f32 = 20.0;

/// Center line dash geometry
const DASH_HEIGHT: f32 = 22.0;
const DASH_GAP: f32 = 16.0;
const DASH_WIDTH: f32 = 6.0;
const DASH_TOP: f32 = 12.0;

#[inline]
fn playfield() -> Vec2 {
    Vec2::new(GAME_WIDTH as f32, GAME_HEIGHT as f32)
}

/// Build the full frame
pub fn build_scene(view: &FrameView<'_>, quality: QualityPreset) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);

    vertices.extend(background());
    if quality.grid_enabled() {
        vertices.extend(grid());
    }
    vertices.extend(center_line());
    vertices.extend(paddle(view.left, Side::Left, quality));
    vertices.extend(paddle(view.right, Side::Right, quality));
    vertices.extend(ball(view.ball, quality));

    if view.paused {
        vertices.extend(shapes::rect(Vec2::ZERO, playfield(), colors::PAUSE_DIM));
    }

    vertices
}

/// Dark fill with a faint light wash from the top
fn background() -> Vec<Vertex> {
    let size = playfield();
    let mut v = shapes::rect(Vec2::ZERO, size, colors::BACKGROUND);
    let split = size.y * 0.35;
    let mid = mix(colors::BACKGROUND_GLOW, colors::BACKGROUND_FADE, 0.35);
    v.extend(shapes::vertical_gradient_rect(
        Vec2::ZERO,
        Vec2::new(size.x, split),
        colors::BACKGROUND_GLOW,
        mid,
    ));
    v.extend(shapes::vertical_gradient_rect(
        Vec2::new(0.0, split),
        Vec2::new(size.x, size.y - split),
        mid,
        colors::BACKGROUND_FADE,
    ));
    v
}

/// One-unit lines every `GRID_STEP`
fn grid() -> Vec<Vertex> {
    let size = playfield();
    let mut v = Vec::new();
    let mut x = GRID_STEP;
    while x < size.x {
        v.extend(shapes::rect(Vec2::new(x, 0.0), Vec2::new(1.0, size.y), colors::GRID));
        x += GRID_STEP;
    }
    let mut y = GRID_STEP;
    while y < size.y {
        v.extend(shapes::rect(Vec2::new(0.0, y), Vec2::new(size.x, 1.0), colors::GRID));
        y += GRID_STEP;
    }
    v
}

/// Dashed net, each dash fading cyan → white → magenta
fn center_line() -> Vec<Vertex> {
    let size = playfield();
    let x = (size.x - DASH_WIDTH) / 2.0;
    let half = DASH_HEIGHT / 2.0;
    let mut v = Vec::new();
    let mut y = DASH_TOP;
    while y < size.y - DASH_HEIGHT {
        v.extend(shapes::vertical_gradient_rect(
            Vec2::new(x, y),
            Vec2::new(DASH_WIDTH, half),
            colors::NEON_CYAN,
            colors::NEON_WHITE,
        ));
        v.extend(shapes::vertical_gradient_rect(
            Vec2::new(x, y + half),
            Vec2::new(DASH_WIDTH, half),
            colors::NEON_WHITE,
            colors::NEON_MAGENTA,
        ));
        y += DASH_HEIGHT + DASH_GAP;
    }
    v
}

fn paddle(p: &Paddle, side: Side, quality: QualityPreset) -> Vec<Vertex> {
    let pos = Vec2::new(p.x as f32, p.y as f32);
    let size = Vec2::new(p.w as f32, p.h as f32);
    let glow = match side {
        Side::Left => colors::PADDLE_GLOW_LEFT,
        Side::Right => colors::PADDLE_GLOW_RIGHT,
    };

    let mut v = shapes::rect_glow(pos, size, PADDLE_CORNER, glow, PADDLE_GLOW_SPREAD, quality.glow_layers());
    v.extend(shapes::rounded_rect(pos, size, PADDLE_CORNER, colors::PADDLE));
    v
}

fn ball(b: &Ball, quality: QualityPreset) -> Vec<Vertex> {
    let center = Vec2::new(b.pos.x as f32, b.pos.y as f32);
    let radius = b.radius as f32;
    let segments = quality.circle_segments();

    let mut v = shapes::circle_glow(
        center,
        radius,
        colors::BALL_GLOW,
        BALL_GLOW_SPREAD,
        quality.glow_layers(),
        segments,
    );
    v.extend(shapes::circle(center, radius, colors::BALL, segments));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;

    fn session() -> GameSession {
        let mut session = GameSession::default();
        session.start_match("A", "B", 1, 0.0);
        session
    }

    #[test]
    fn test_scene_is_triangle_list() {
        let session = session();
        let view = session.view().unwrap();
        for quality in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            let v = build_scene(&view, quality);
            assert!(!v.is_empty());
            assert_eq!(v.len() % 3, 0);
        }
    }

    #[test]
    fn test_pause_adds_dim_overlay() {
        let mut session = session();
        let running = build_scene(&session.view().unwrap(), QualityPreset::Low);

        session.toggle_pause(10.0);
        let paused = build_scene(&session.view().unwrap(), QualityPreset::Low);
        assert_eq!(paused.len(), running.len() + 6);
        assert_eq!(paused.last().unwrap().color, colors::PAUSE_DIM);
    }

    #[test]
    fn test_low_quality_is_lighter() {
        let session = session();
        let view = session.view().unwrap();
        assert!(build_scene(&view, QualityPreset::Low).len() < build_scene(&view, QualityPreset::High).len());
    }

    #[test]
    fn test_ball_drawn_last_before_overlay() {
        let session = session();
        let view = session.view().unwrap();
        let v = build_scene(&view, QualityPreset::Medium);
        // Final fan triangle starts at the ball center
        let center = v[v.len() - 3].position;
        assert_eq!(center, [400.0, 300.0]);
        assert_eq!(v[v.len() - 1].color, colors::BALL);
    }

    #[test]
    fn test_center_line_dash_count() {
        // Dashes start at 12 and repeat every 38 while y < 578
        assert_eq!(center_line().len(), 15 * 12);
    }
}
