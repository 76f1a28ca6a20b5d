//! Input model: the camera commands and the gesture state machine that
//! produces them from raw pointer, touch, wheel and keyboard events.
//!
//! [`Gesture`] holds no sky data. It only remembers enough about the active
//! gesture (last pointer position, last pinch distance) to turn the next event
//! into [`Command`]s, which the engine applies to its camera.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::config::ViewerConfig;
use crate::consts::KEY_ZOOM_SPEED;

/// A camera transition requested by user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pan by a screen delta in logical pixels.
    Pan { dx: f64, dy: f64 },
    /// Turn the boresight by fixed angles in radians.
    DiscretePan { azimuth: f64, polar: f64 },
    /// Zoom in or out at the given speed.
    Zoom { zoom_in: bool, speed: f64 },
    /// Zoom by the ratio of two successive finger distances.
    PinchZoom { current: f64, previous: f64 },
    /// Re-read the surface size, keeping at least this azimuthal half-angle in view.
    Resize { min_azimuth_fov: f64 },
}

/// A keyboard key.
///
/// The inner string holds either the DOM `code` (e.g. `"Equal"`, `"ArrowLeft"`)
/// or the produced `key` (e.g. `"+"`); both spellings are understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A mouse button or single finger is down and moves pan the view.
    Dragging {
        /// Position of the previous event, used to compute the pan delta.
        last: Point,
        /// Multiplier applied to each delta (touch drags pan faster).
        scale: f64,
    },
    /// Two fingers are down and their spread zooms the view.
    Pinching {
        /// Finger distance at the previous event.
        distance: f64,
    },
}

/// Translates raw input events into [`Command`]s.
#[derive(Debug, Clone)]
pub struct Gesture {
    state: InputState,
    touch_pan_scale: f64,
    wheel_speed: f64,
    key_step: f64,
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl Gesture {
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            state: InputState::Idle,
            touch_pan_scale: config.touch_pan_scale,
            wheel_speed: config.wheel_speed,
            key_step: config.key_step,
        }
    }

    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    // --- Pointer ---

    pub fn pointer_down(&mut self, at: Point) -> Vec<Command> {
        self.state = InputState::Dragging { last: at, scale: 1.0 };
        Vec::new()
    }

    pub fn pointer_move(&mut self, at: Point) -> Vec<Command> {
        self.drag_to(at)
    }

    pub fn pointer_up(&mut self) -> Vec<Command> {
        self.state = InputState::Idle;
        Vec::new()
    }

    // --- Touch ---

    /// Two or more touches start a pinch; a single touch starts a fast drag.
    pub fn touch_start(&mut self, touches: &[Point]) -> Vec<Command> {
        self.state = match touches {
            [] => InputState::Idle,
            [only] => InputState::Dragging { last: *only, scale: self.touch_pan_scale },
            [a, b, ..] => InputState::Pinching { distance: distance(*a, *b) },
        };
        Vec::new()
    }

    /// Lifting one finger of a pinch ends the gesture rather than turning it into a drag.
    pub fn touch_move(&mut self, touches: &[Point]) -> Vec<Command> {
        match (self.state, touches) {
            (InputState::Dragging { .. }, [first, ..]) => self.drag_to(*first),
            (InputState::Pinching { distance: previous }, [a, b, ..]) => {
                let current = distance(*a, *b);
                self.state = InputState::Pinching { distance: current };
                vec![Command::PinchZoom { current, previous }]
            }
            (InputState::Pinching { .. }, _) => {
                self.state = InputState::Idle;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn touch_end(&mut self) -> Vec<Command> {
        self.state = InputState::Idle;
        Vec::new()
    }

    // --- Wheel / keyboard ---

    /// Scrolling down (`dy > 0`) zooms in. A zero or non-finite delta does nothing.
    #[must_use]
    pub fn wheel(&self, dy: f64) -> Vec<Command> {
        if dy == 0.0 || !dy.is_finite() {
            return Vec::new();
        }
        vec![Command::Zoom { zoom_in: dy > 0.0, speed: self.wheel_speed }]
    }

    /// Arrow keys turn the view in the arrow's direction; `+`/`=` and `-` zoom.
    #[must_use]
    pub fn key_down(&self, key: &Key) -> Vec<Command> {
        let step = self.key_step;
        let command = match key.0.as_str() {
            "Equal" | "NumpadAdd" | "+" | "=" => Command::Zoom { zoom_in: true, speed: KEY_ZOOM_SPEED },
            "Minus" | "NumpadSubtract" | "-" => Command::Zoom { zoom_in: false, speed: KEY_ZOOM_SPEED },
            "ArrowRight" => Command::DiscretePan { azimuth: -step, polar: 0.0 },
            "ArrowLeft" => Command::DiscretePan { azimuth: step, polar: 0.0 },
            "ArrowUp" => Command::DiscretePan { azimuth: 0.0, polar: step },
            "ArrowDown" => Command::DiscretePan { azimuth: 0.0, polar: -step },
            _ => return Vec::new(),
        };
        vec![command]
    }

    fn drag_to(&mut self, at: Point) -> Vec<Command> {
        let InputState::Dragging { last, scale } = self.state else {
            return Vec::new();
        };
        self.state = InputState::Dragging { last: at, scale };
        vec![Command::Pan { dx: (at.x - last.x) * scale, dy: (at.y - last.y) * scale }]
    }
}

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
