//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies: the shell feeds in timestamps and key events and reads back
//! state and `GameEvent`s.

pub mod collision;
pub mod countdown;
pub mod input;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_collision};
pub use countdown::Countdown;
pub use input::{InputState, Key};
pub use session::{FrameView, GameSession};
pub use state::{Ball, GameEvent, GameState, Paddle, Player, Scoreboard, Side, random_signish};
pub use tick::{TickInput, bounce_off_paddle, tick};
