//! Camera control: maps pointer and key input onto the transform stack.

use chartkit_core::{CanvasSize, Options, TransformStack};
use glam::{DVec3, Vec2};
use serde::{Deserialize, Serialize};

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Primary button.
    #[default]
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

/// Keyboard modifier held during a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    /// No modifier.
    #[default]
    None,
    /// Shift key.
    Shift,
    /// Control key.
    Control,
    /// Alt key.
    Alt,
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub modifier: Modifier,
    /// Current pointer position.
    pub screen_pos: Vec2,
    /// Pointer position at the previous event.
    pub last_screen_pos: Vec2,
}

impl MouseEvent {
    /// Creates an event without modifiers.
    pub fn new(button: MouseButton, screen_pos: Vec2, last_screen_pos: Vec2) -> Self {
        Self {
            button,
            modifier: Modifier::None,
            screen_pos,
            last_screen_pos,
        }
    }

    /// Returns a copy with the given modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Pointer movement since the previous event.
    pub fn delta(&self) -> Vec2 {
        self.screen_pos - self.last_screen_pos
    }
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
}

impl KeyEvent {
    /// Creates a key event.
    pub const fn new(key: char) -> Self {
        Self { key }
    }
}

/// The camera operation a drag performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// Rotate about the screen's vertical and horizontal axes.
    Rotate,
    /// Rotate about the viewing axis.
    Spin,
    /// Translate in the screen plane.
    Pan,
    /// Scale the data points.
    Zoom,
}

impl DragAction {
    /// Chooses the action for a button and modifier, if any.
    pub fn from_event(event: &MouseEvent) -> Option<Self> {
        match (event.button, event.modifier) {
            (MouseButton::Left, Modifier::Shift) => Some(Self::Spin),
            (MouseButton::Left, _) => Some(Self::Rotate),
            (MouseButton::Right, Modifier::Shift) => Some(Self::Pan),
            (MouseButton::Right, _) => Some(Self::Zoom),
            (MouseButton::Middle, _) => None,
        }
    }
}

/// Axis-aligned viewing directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPreset {
    /// Look down the X axis (YZ plane).
    LookDownX,
    /// Look up the X axis.
    LookUpX,
    /// Look down the Y axis (XZ plane).
    LookDownY,
    /// Look up the Y axis.
    LookUpY,
    /// Look down the Z axis (XY plane).
    LookDownZ,
    /// Look up the Z axis.
    LookUpZ,
}

impl ViewPreset {
    /// All presets.
    pub const ALL: [ViewPreset; 6] = [
        ViewPreset::LookDownX,
        ViewPreset::LookUpX,
        ViewPreset::LookDownY,
        ViewPreset::LookUpY,
        ViewPreset::LookDownZ,
        ViewPreset::LookUpZ,
    ];

    /// Maps `x`, `X`, `y`, `Y`, `z`, `Z` to a preset.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'x' => Some(Self::LookDownX),
            'X' => Some(Self::LookUpX),
            'y' => Some(Self::LookDownY),
            'Y' => Some(Self::LookUpY),
            'z' => Some(Self::LookDownZ),
            'Z' => Some(Self::LookUpZ),
            _ => None,
        }
    }

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LookDownX => "Look down X",
            Self::LookUpX => "Look up X",
            Self::LookDownY => "Look down Y",
            Self::LookUpY => "Look up Y",
            Self::LookDownZ => "Look down Z",
            Self::LookUpZ => "Look up Z",
        }
    }

    /// Replaces the stack's rotation with this view.
    pub fn apply(self, stack: &mut TransformStack) {
        stack.rotation.identity();
        match self {
            Self::LookDownX => stack.rotation.rotate_y(90.0),
            Self::LookUpX => stack.rotation.rotate_y(-90.0),
            Self::LookDownY => stack.rotation.rotate_x(90.0),
            Self::LookUpY => stack.rotation.rotate_x(-90.0),
            Self::LookDownZ => {}
            Self::LookUpZ => stack.rotation.rotate_z(180.0),
        }
    }
}

/// Converts drags, wheel notches and presets into transform updates.
///
/// The controller is stateless apart from its gains. Each method returns
/// whether the stack was changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    /// Multiplier on the per-pixel rotation angle.
    pub rotate_gain: f64,
    /// Zoom factor for a drag across the full canvas height.
    pub drag_zoom_base: f64,
    /// Wheel notches per doubling of scale.
    pub notches_per_doubling: f64,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl CameraController {
    /// Takes the gains from `options`.
    pub fn from_options(options: &Options) -> Self {
        Self {
            rotate_gain: options.rotate_gain,
            drag_zoom_base: options.drag_zoom_base,
            notches_per_doubling: options.zoom_notches_per_doubling,
        }
    }

    /// Performs `action` for a drag event.
    pub fn drag(
        &self,
        action: DragAction,
        stack: &mut TransformStack,
        event: &MouseEvent,
        canvas: CanvasSize,
    ) -> bool {
        match action {
            DragAction::Rotate => self.rotate(stack, event, canvas),
            DragAction::Spin => self.spin(stack, event),
            DragAction::Pan => self.pan(stack, event),
            DragAction::Zoom => self.zoom(stack, event, canvas),
        }
    }

    /// Turns horizontal drag into azimuth and vertical drag into elevation.
    pub fn rotate(&self, stack: &mut TransformStack, event: &MouseEvent, canvas: CanvasSize) -> bool {
        if canvas.width == 0 || canvas.height == 0 {
            log::debug!("rotate ignored on empty canvas {canvas:?}");
            return false;
        }
        let delta = event.delta();
        let azimuth = -20.0 / f64::from(canvas.width) * f64::from(delta.x) * self.rotate_gain;
        let elevation = -20.0 / f64::from(canvas.height) * f64::from(delta.y) * self.rotate_gain;

        stack.rotation.rotate_y(azimuth);
        stack.rotation.rotate_x(-elevation);
        true
    }

    /// Rotates about the viewing axis by the angle swept around the screen origin.
    pub fn spin(&self, stack: &mut TransformStack, event: &MouseEvent) -> bool {
        let angle = |p: Vec2| f64::from(p.y).atan2(f64::from(p.x)).to_degrees();
        let swept = angle(event.screen_pos) - angle(event.last_screen_pos);
        stack.rotation.rotate_z(-swept);
        true
    }

    /// Translates by the raw screen delta.
    pub fn pan(&self, stack: &mut TransformStack, event: &MouseEvent) -> bool {
        let delta = event.delta();
        stack
            .translation
            .translate(DVec3::new(f64::from(delta.x), f64::from(delta.y), 0.0));
        true
    }

    /// Scales the data points by dragging vertically.
    ///
    /// Dragging down the full canvas height scales by `drag_zoom_base`.
    pub fn zoom(&self, stack: &mut TransformStack, event: &MouseEvent, canvas: CanvasSize) -> bool {
        let fraction = if canvas.height > 0 {
            f64::from(event.last_screen_pos.y - event.screen_pos.y) / f64::from(canvas.height)
        } else {
            0.0
        };
        stack.point_scale.uniform_scale(self.drag_zoom_base.powf(fraction));
        true
    }

    /// Scale factor for `delta` wheel notches.
    pub fn wheel_factor(&self, delta: i32) -> f64 {
        2f64.powf(f64::from(delta) / self.notches_per_doubling)
    }

    /// Scales the data points by wheel notches.
    pub fn wheel_zoom(&self, stack: &mut TransformStack, delta: i32) -> bool {
        stack.point_scale.uniform_scale(self.wheel_factor(delta));
        true
    }

    /// Scales the axis box (and the data inside it) by wheel notches.
    pub fn zoom_axes(&self, stack: &mut TransformStack, delta: i32) -> bool {
        stack.box_scale.uniform_scale(self.wheel_factor(delta));
        true
    }

    /// Resets the rotation to a preset view.
    pub fn apply_preset(&self, stack: &mut TransformStack, preset: ViewPreset) -> bool {
        log::debug!("applying view preset: {}", preset.name());
        preset.apply(stack);
        true
    }
}
