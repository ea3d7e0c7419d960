//! Mouse and key handling for [`InteractiveChartXyz`].

use chartkit_render::{DragAction, KeyEvent, MouseButton, MouseEvent, ViewPreset};

use crate::chart::InteractiveChartXyz;

impl InteractiveChartXyz {
    /// Whether the chart claims pointer events at all.
    pub fn hit(&self, _event: &MouseEvent) -> bool {
        self.options.interactive
    }

    /// Accepts left presses so that the following drags are delivered.
    pub fn mouse_button_press_event(&mut self, event: &MouseEvent) -> bool {
        event.button == MouseButton::Left
    }

    /// Routes a drag to rotate, spin, pan or zoom.
    ///
    /// Returns false for buttons that have no drag action.
    pub fn mouse_move_event(&mut self, event: &MouseEvent) -> bool {
        let Some(action) = DragAction::from_event(event) else {
            return false;
        };
        let canvas = self.canvas();
        if self.camera.drag(action, &mut self.stack, event, canvas) {
            self.interaction_changed();
        }
        true
    }

    /// Zooms the data points by wheel notches.
    pub fn mouse_wheel_event(&mut self, _event: &MouseEvent, delta: i32) -> bool {
        self.camera.wheel_zoom(&mut self.stack, delta);
        self.interaction_changed();
        true
    }

    /// Handles the view preset keys. Every key is consumed.
    pub fn key_press_event(&mut self, event: &KeyEvent) -> bool {
        if let Some(preset) = ViewPreset::from_key(event.key) {
            self.apply_preset(preset);
        }
        true
    }

    /// Switches to an axis-aligned view.
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        self.camera.apply_preset(&mut self.stack, preset);
        self.interaction_changed();
    }

    /// Registers a callback run after every user-driven camera change.
    pub fn add_interaction_observer(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn interaction_changed(&mut self) {
        self.mark_dirty();
        for observer in &mut self.observers {
            observer();
        }
    }
}
