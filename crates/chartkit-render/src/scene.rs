//! The scene a chart is placed in.

use chartkit_core::CanvasSize;

/// The surface hosting a chart: its pixel size and a repaint flag.
pub trait Scene {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Requests (or cancels) a repaint.
    fn set_dirty(&mut self, dirty: bool);

    /// Both dimensions at once.
    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width(), self.height())
    }
}

/// A minimal in-memory scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleScene {
    width: u32,
    height: u32,
    dirty: bool,
}

impl SimpleScene {
    /// Creates a clean scene of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dirty: false,
        }
    }

    /// Changes the size and requests a repaint.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            log::debug!("scene resized from {}x{} to {width}x{height}", self.width, self.height);
            self.width = width;
            self.height = height;
            self.dirty = true;
        }
    }

    /// Returns whether a repaint has been requested.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the repaint flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Scene for SimpleScene {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_marks_dirty() {
        let mut scene = SimpleScene::new(100, 50);
        assert!(!scene.is_dirty());
        scene.resize(100, 50);
        assert!(!scene.is_dirty());
        scene.resize(200, 50);
        assert!(scene.is_dirty());
        assert_eq!(scene.size(), CanvasSize::new(200, 50));
    }

    #[test]
    fn test_take_dirty_clears() {
        let mut scene = SimpleScene::new(10, 10);
        scene.set_dirty(true);
        assert!(scene.take_dirty());
        assert!(!scene.take_dirty());
    }
}
