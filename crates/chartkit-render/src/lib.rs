//! Drawing surfaces, camera control and colour lookup for chartkit-rs.
//!
//! The chart widget draws through the [`Painter`] and [`Context3D`] traits
//! and reads its canvas size from a [`Scene`]. [`HeadlessPainter`] records
//! commands for tests and offline inspection.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

pub mod camera;
pub mod color_maps;
pub mod context;
pub mod headless;
pub mod scene;

pub use camera::{CameraController, DragAction, KeyEvent, Modifier, MouseButton, MouseEvent, ViewPreset};
pub use color_maps::{hsv_to_rgb, LookupTable, Ramp};
pub use context::{Context3D, Justification, Painter, Pen, Rgb, TextStyle, VerticalJustification};
pub use headless::{DrawCommand, HeadlessContext, HeadlessPainter};
pub use scene::{Scene, SimpleScene};
