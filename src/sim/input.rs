//! Keyboard state for both players

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left paddle up
    W,
    /// Left paddle down
    S,
    /// Right paddle up
    ArrowUp,
    /// Right paddle down
    ArrowDown,
    /// Pause toggle
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; unknown keys yield `None`
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            " " | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }

    /// Map a keyboard event by its `key`, falling back to the physical
    /// `code` for the space bar
    pub fn from_dom_event(key: &str, code: &str) -> Option<Self> {
        Self::from_dom_key(key).or_else(|| (code == "Space").then_some(Key::Space))
    }

    /// Keys whose browser default (page scrolling) must be suppressed
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown | Key::Space)
    }

    fn index(self) -> usize {
        match self {
            Key::W => 0,
            Key::S => 1,
            Key::ArrowUp => 2,
            Key::ArrowDown => 3,
            Key::Space => 4,
        }
    }
}

/// Pressed state of every recognized key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 5],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Vertical intent for the left paddle (-1 up, +1 down, 0 both/neither)
    pub fn left_intent(&self) -> f64 {
        axis(self.is_pressed(Key::W), self.is_pressed(Key::S))
    }

    /// Vertical intent for the right paddle
    pub fn right_intent(&self) -> f64 {
        axis(self.is_pressed(Key::ArrowUp), self.is_pressed(Key::ArrowDown))
    }
}

#[inline]
fn axis(up: bool, down: bool) -> f64 {
    let mut v = 0.0;
    if up {
        v -= 1.0;
    }
    if down {
        v += 1.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom_key() {
        assert_eq!(Key::from_dom_key("w"), Some(Key::W));
        assert_eq!(Key::from_dom_key("S"), Some(Key::S));
        assert_eq!(Key::from_dom_key("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("Enter"), None);
        assert_eq!(Key::from_dom_key("ArrowLeft"), None);
    }

    #[test]
    fn test_space_code_fallback() {
        assert_eq!(Key::from_dom_key("Space"), None);
        assert_eq!(Key::from_dom_event("Unidentified", "Space"), Some(Key::Space));
        assert_eq!(Key::from_dom_event("w", "KeyW"), Some(Key::W));
        assert_eq!(Key::from_dom_event("x", "KeyX"), None);
    }

    #[test]
    fn test_intents() {
        let mut input = InputState::new();
        assert_eq!(input.left_intent(), 0.0);

        input.set(Key::W, true);
        assert_eq!(input.left_intent(), -1.0);

        input.set(Key::S, true);
        assert_eq!(input.left_intent(), 0.0, "both keys cancel");

        input.set(Key::W, false);
        assert_eq!(input.left_intent(), 1.0);

        input.set(Key::ArrowUp, true);
        assert_eq!(input.right_intent(), -1.0);
        assert_eq!(input.left_intent(), 1.0);
    }

    #[test]
    fn test_suppresses_default() {
        assert!(Key::Space.suppresses_default());
        assert!(Key::ArrowDown.suppresses_default());
        assert!(!Key::W.suppresses_default());
    }
}
