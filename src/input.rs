//! Keyboard input
//!
//! DOM callbacks only push [`InputEvent`]s into an [`InputQueue`]. The scene
//! drains the queue once at the start of each tick and folds it into an
//! [`InputSnapshot`], which is the only thing systems read.

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space: start, jump, restart
    Jump,
    /// Up arrow / W: boosted jump modifier
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent` (`key`, `code`) to a game key
    pub fn from_dom(key: &str, code: &str) -> Option<Self> {
        match code {
            "Space" => return Some(Key::Jump),
            "ArrowUp" | "KeyW" => return Some(Key::Up),
            "ArrowDown" | "KeyS" => return Some(Key::Down),
            "ArrowLeft" | "KeyA" => return Some(Key::Left),
            "ArrowRight" | "KeyD" => return Some(Key::Right),
            _ => {}
        }
        // Some layouts report an empty code
        match key {
            " " => Some(Key::Jump),
            "w" | "W" => Some(Key::Up),
            "s" | "S" => Some(Key::Down),
            "a" | "A" => Some(Key::Left),
            "d" | "D" => Some(Key::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

/// A queue of input events.
/// The page writes events into the queue; the scene drains it each tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Key state as seen by one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub jump_held: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Jump went down since the last tick (auto-repeat excluded)
    jump_pressed: bool,
}

impl InputSnapshot {
    /// Fold queued events into the held flags and the jump edge
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown(key) => {
                    if key == Key::Jump && !self.jump_held {
                        self.jump_pressed = true;
                    }
                    self.set_held(key, true);
                }
                InputEvent::KeyUp(key) => self.set_held(key, false),
            }
        }
    }

    fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Jump => self.jump_held = held,
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
        }
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    /// Consume the jump edge. Returns whether there was one.
    pub fn take_jump_press(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }

    /// Drop edges nobody consumed this tick
    pub fn end_tick(&mut self) {
        self.jump_pressed = false;
    }

    /// Horizontal debug movement axis (-1, 0, 1)
    pub fn horizontal(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Vertical debug movement axis (-1 up, 1 down)
    pub fn vertical(&self) -> f32 {
        (self.down as i32 - self.up as i32) as f32
    }
}
