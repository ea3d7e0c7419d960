//! chartkit-rs: an interactive 3D scatter chart.
//!
//! Points come from table columns and are drawn inside an on-screen axis box
//! that can be rotated, spun, panned and zoomed. Points that leave the box
//! are clipped, and the box refits itself when the canvas is resized.
//!
//! # Quick Start
//!
//! ```
//! use chartkit::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut table = Table::new();
//!     table.add_column("x", vec![0.0, 1.0, 2.0])?;
//!     table.add_column("y", vec![2.0, 0.5, 1.0])?;
//!     table.add_column("z", vec![1.0, 1.0, 0.0])?;
//!
//!     let mut chart = InteractiveChartXyz::new();
//!     chart.set_geometry(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
//!     chart.set_input(&table, "x", "y", "z")?;
//!
//!     let scene: SceneHandle = Rc::new(RefCell::new(SimpleScene::new(400, 400)));
//!     chart.set_scene(scene);
//!
//!     let mut painter = HeadlessPainter::new();
//!     assert!(chart.paint(&mut painter));
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - `chartkit-core`: transforms, axes, clip frustum, viewport fit, options
//! - `chartkit-render`: painter traits, camera control, colour lookup
//! - `chartkit-sources`: Gaussian and Mandelbrot image sources

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

mod chart;
mod input;
mod selection;
mod table;

pub use chart::{InteractiveChartXyz, PointCloudChart, SceneHandle};
pub use selection::Selection;
pub use table::{Table, TableSource};

// Re-export core types
pub use chartkit_core::{
    axes_boundary_points, matrices_approx_eq, Axis, AxisBox, CanvasSize, ChartError, ClipFrustum, ClipPlane,
    Composition, FitSearch, Options, Result, ThresholdMode, Transform, TransformStack, DMat4,
    DVec2, DVec3, Vec2, Vec3,
};

// Re-export render types
pub use chartkit_render::{
    CameraController, Context3D, DragAction, DrawCommand, HeadlessPainter, KeyEvent, LookupTable,
    Modifier, MouseButton, MouseEvent, Painter, Pen, Rgb, Scene, SimpleScene, TextStyle,
    ViewPreset,
};

// Re-export image sources
pub use chartkit_sources::{
    GaussianSource, ImageData, ImageExtent, MandelbrotSource, SourceError,
};

/// Installs the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls are ignored. Verbosity follows
/// `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
