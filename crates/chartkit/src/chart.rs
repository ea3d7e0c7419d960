//! The interactive 3D scatter chart.
//!
//! Each paint recomputes the context and box transforms from the transform
//! stack, rebuilds the clip frustum, filters the data points against it, and
//! draws the surviving points, the selection, the box edges and the axis
//! titles. Canvas resizes recenter the box and rerun the viewport fit.

use std::cell::RefCell;
use std::rc::Rc;

use chartkit_core::{
    AxisBox, CanvasSize, ClipFrustum, DMat4, DVec2, DVec3, FitSearch, Options, Result, TransformStack,
};
use chartkit_render::{CameraController, LookupTable, Painter, Pen, Rgb, Scene, TextStyle};
use glam::{Vec2, Vec3};

use crate::selection::Selection;
use crate::table::TableSource;

/// The twelve edges of the unit cube.
const BOX_EDGES: [(Vec3, Vec3); 12] = [
    (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    (Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)),
    (Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
    (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)),
    (Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0)),
    (Vec3::new(0.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0)),
    (Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 1.0)),
    (Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0)),
    (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    (Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0)),
    (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 1.0)),
    (Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
];

/// Shared handle to the scene a chart is drawn in.
pub type SceneHandle = Rc<RefCell<dyn Scene>>;

/// A chart that draws a point cloud from table columns.
pub trait PointCloudChart {
    /// Binds three columns as point coordinates.
    fn set_input(&mut self, table: &dyn TableSource, x: &str, y: &str, z: &str) -> Result<()>;

    /// Attaches the chart to a scene.
    fn set_scene(&mut self, scene: SceneHandle);

    /// Draws the chart. Returns false if nothing was drawn.
    fn paint(&mut self, painter: &mut dyn Painter) -> bool;

    /// Whether the chart is drawn at all.
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);
}

/// An interactive XYZ scatter chart.
pub struct InteractiveChartXyz {
    pub(crate) options: Options,
    pub(crate) camera: CameraController,
    pub(crate) stack: TransformStack,
    pub(crate) axes: AxisBox,
    pub(crate) geometry_origin: DVec2,
    pub(crate) visible: bool,

    pub(crate) scene: Option<SceneHandle>,
    /// Canvas size the axes were last fitted to. `None` until the first paint
    /// on a non-empty canvas.
    pub(crate) recorded_size: Option<CanvasSize>,

    points: Vec<Vec3>,
    colors: Option<Vec<Rgb>>,
    clipped_points: Vec<Vec3>,
    clipped_colors: Vec<Rgb>,
    /// Bumped whenever the point set changes.
    version: u64,

    selection: Option<Rc<RefCell<Selection>>>,
    selected_points: Vec<Vec3>,
    /// `(selection version, chart version)` the selected points were built from.
    selection_built: Option<(u64, u64)>,

    context_transform: DMat4,
    box_transform: DMat4,
    frustum: ClipFrustum,

    point_pen: Pen,
    selected_pen: Pen,
    axis_pen: Pen,

    pub(crate) observers: Vec<Box<dyn FnMut()>>,
}

impl Default for InteractiveChartXyz {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveChartXyz {
    /// Creates an empty chart with default options.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Creates an empty chart.
    pub fn with_options(options: Options) -> Self {
        let frustum = ClipFrustum::from_box_transform(&DMat4::IDENTITY, options.threshold_mode);
        Self {
            camera: CameraController::from_options(&options),
            options,
            stack: TransformStack::new(),
            axes: AxisBox::default(),
            geometry_origin: DVec2::ZERO,
            visible: true,
            scene: None,
            recorded_size: None,
            points: Vec::new(),
            colors: None,
            clipped_points: Vec::new(),
            clipped_colors: Vec::new(),
            version: 0,
            selection: None,
            selected_points: Vec::new(),
            selection_built: None,
            context_transform: DMat4::IDENTITY,
            box_transform: DMat4::IDENTITY,
            frustum,
            point_pen: Pen::new([0, 0, 255, 255], 5.0),
            selected_pen: Pen::new([255, 0, 0, 255], 6.0),
            axis_pen: Pen::new([0, 0, 0, 255], 5.0),
            observers: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options and rebuilds the camera gains.
    pub fn set_options(&mut self, options: Options) {
        self.camera = CameraController::from_options(&options);
        self.options = options;
    }

    /// Places the chart box at `origin` with the given width and height.
    /// The depth equals the height.
    pub fn set_geometry(&mut self, origin: Vec2, size: Vec2) {
        let titles = self.axes.axes().clone().map(|axis| axis.title);
        self.axes = AxisBox::from_origin_and_size(
            origin,
            DVec3::new(f64::from(size.x), f64::from(size.y), f64::from(size.y)),
        );
        self.axes.set_titles(&titles[0], &titles[1], &titles[2]);
        self.recalculate_transform();
    }

    /// Screen offset subtracted from the axis origin when placing points.
    pub fn geometry_origin(&self) -> DVec2 {
        self.geometry_origin
    }

    pub fn set_geometry_origin(&mut self, origin: DVec2) {
        self.geometry_origin = origin;
    }

    pub fn axes(&self) -> &AxisBox {
        &self.axes
    }

    /// Replaces the axes, keeping the current titles.
    pub fn set_axes(&mut self, axes: AxisBox) {
        let titles = self.axes.axes().clone().map(|axis| axis.title);
        self.axes = axes;
        self.axes.set_titles(&titles[0], &titles[1], &titles[2]);
        self.recalculate_transform();
    }

    /// The five transform primitives.
    pub fn transforms(&self) -> &TransformStack {
        &self.stack
    }

    /// Mutable access to the primitives. Call [`Self::mark_dirty`] afterwards
    /// if the chart is on screen.
    pub fn transforms_mut(&mut self) -> &mut TransformStack {
        &mut self.stack
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn set_point_pen(&mut self, pen: Pen) {
        self.point_pen = pen;
    }

    pub fn set_selected_pen(&mut self, pen: Pen) {
        self.selected_pen = pen;
    }

    pub fn set_axis_pen(&mut self, pen: Pen) {
        self.axis_pen = pen;
    }

    /// All bound points.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Per-point colours, if a colour column was bound.
    pub fn colors(&self) -> Option<&[Rgb]> {
        self.colors.as_deref()
    }

    /// Points inside the axis box as of the last paint.
    pub fn clipped_points(&self) -> &[Vec3] {
        &self.clipped_points
    }

    /// Colours of [`Self::clipped_points`]; empty without a colour column.
    pub fn clipped_colors(&self) -> &[Rgb] {
        &self.clipped_colors
    }

    /// Points picked out by the selection as of the last update.
    pub fn selected_points(&self) -> &[Vec3] {
        &self.selected_points
    }

    pub fn context_transform(&self) -> DMat4 {
        self.context_transform
    }

    pub fn box_transform(&self) -> DMat4 {
        self.box_transform
    }

    pub fn frustum(&self) -> &ClipFrustum {
        &self.frustum
    }

    /// Current canvas size, zero without a scene.
    pub fn canvas(&self) -> CanvasSize {
        self.scene
            .as_ref()
            .map(|scene| scene.borrow().size())
            .unwrap_or_default()
    }

    /// Requests a repaint from the scene.
    pub fn mark_dirty(&self) {
        if let Some(scene) = &self.scene {
            scene.borrow_mut().set_dirty(true);
        }
    }

    /// Binds coordinates and a colour column.
    ///
    /// Colours come from a 256-entry rainbow over the colour column's range.
    /// Nothing changes if any column is missing or the lengths differ.
    pub fn set_input_with_colors(
        &mut self,
        table: &dyn TableSource,
        x: &str,
        y: &str,
        z: &str,
        color: &str,
    ) -> Result<()> {
        let points = collect_points(table, x, y, z)?;
        let values = table.require_column(color)?;
        if values.len() != points.len() {
            return Err(chartkit_core::ChartError::SizeMismatch {
                expected: points.len(),
                actual: values.len(),
            });
        }

        let (min, max) = value_range(values);
        let lookup = LookupTable::new(min, max);
        let colors = values.iter().map(|&v| lookup.map_value(v)).collect();

        log::debug!("colouring {} points by '{color}' over [{min}, {max}]", points.len());
        self.bind(points, x, y, z);
        self.colors = Some(colors);
        Ok(())
    }

    fn bind(&mut self, points: Vec<Vec3>, x: &str, y: &str, z: &str) {
        log::debug!("binding {} points from columns ({x}, {y}, {z})", points.len());
        self.points = points;
        self.colors = None;
        self.axes.set_titles(x, y, z);
        self.version += 1;
        self.recalculate_transform();
    }

    /// Shares a selection with the chart.
    pub fn set_selection(&mut self, selection: Rc<RefCell<Selection>>) {
        self.selection = Some(selection);
        self.selection_built = None;
    }

    /// Rebuilds the selected points if the selection or the data changed.
    ///
    /// Indices past the end of the point set are skipped.
    pub fn update(&mut self) {
        let Some(selection) = self.selection.clone() else {
            return;
        };
        if self.points.is_empty() {
            self.selected_points.clear();
            self.selection_built = None;
            return;
        }
        let selection = selection.borrow();
        let stamp = (selection.version(), self.version);
        if self.selection_built == Some(stamp) {
            return;
        }

        self.selected_points.clear();
        for &index in selection.indices() {
            match self.points.get(index) {
                Some(point) => self.selected_points.push(*point),
                None => log::warn!(
                    "selected row {index} is out of range for {} points",
                    self.points.len()
                ),
            }
        }
        self.selection_built = Some(stamp);
    }

    /// Fits the device transform so the data bounds fill the axis extents.
    ///
    /// A flat dimension is mapped with unit scale.
    pub fn recalculate_transform(&mut self) {
        self.stack.device.identity();
        let Some((min, max)) = bounds(&self.points) else {
            return;
        };
        let range = max - min;
        let range = DVec3::select(range.cmpeq(DVec3::ZERO), DVec3::ONE, range);
        self.stack.device.scale(self.axes.extents() / range);
        self.stack.device.translate(-min);
    }

    /// Recomputes the context and box transforms and the clip frustum.
    pub fn calculate_transforms(&mut self) {
        self.context_transform = self.stack.context_transform(&self.axes, self.geometry_origin);
        self.box_transform = self.stack.box_transform(&self.axes);
        self.frustum = ClipFrustum::from_box_transform(&self.box_transform, self.options.threshold_mode);
    }

    /// Whether a data point falls outside the axis box.
    pub fn point_should_be_clipped(&self, point: Vec3) -> bool {
        self.frustum
            .point_should_be_clipped(&self.context_transform, point.as_dvec3())
    }

    /// Rebuilds the visible points and their colours, keeping data order.
    pub fn update_clipped_points(&mut self) {
        self.clipped_points.clear();
        self.clipped_colors.clear();
        for (i, &point) in self.points.iter().enumerate() {
            if self.point_should_be_clipped(point) {
                continue;
            }
            self.clipped_points.push(point);
            if let Some(colors) = &self.colors {
                self.clipped_colors.push(colors[i]);
            }
        }
        log::trace!("{} of {} points inside the box", self.clipped_points.len(), self.points.len());
    }

    /// Scales the axis box by `2^(delta/10)` and requests a repaint.
    ///
    /// Unlike user interaction this does not notify observers.
    pub fn zoom_axes(&mut self, delta: i32) {
        self.camera.zoom_axes(&mut self.stack, delta);
        self.mark_dirty();
    }

    /// Reacts to a change in canvas size. Returns true if one happened.
    ///
    /// The first non-empty size seen once the axes have non-zero extents fits
    /// the box to the canvas. Later changes
    /// recenter the axes by half the size change; [`Self::rescale_axes`]
    /// then refits the box.
    #[allow(clippy::cast_precision_loss)]
    pub fn check_for_scene_resize(&mut self) -> bool {
        let current = self.canvas();
        match self.recorded_size {
            Some(previous) if previous == current => false,
            Some(previous) => {
                let dx = (i64::from(current.width) - i64::from(previous.width)) / 2;
                let dy = (i64::from(current.height) - i64::from(previous.height)) / 2;
                log::debug!("canvas resized {previous:?} -> {current:?}, shifting axes by ({dx}, {dy})");
                self.axes.shift(dx as f32, dy as f32);
                self.recalculate_transform();
                true
            }
            None if current.area() == 0 => false,
            None if self.axes.is_degenerate() => {
                log::debug!("axes not placed yet, deferring the initial fit on {current:?}");
                false
            }
            None => {
                self.recorded_size = Some(current);
                let (grown, shrunk) = {
                    let mut search = FitSearch::new(&self.stack, &self.axes, current, &self.options);
                    (search.grow(), search.shrink())
                };
                log::debug!("initial axis fit on {current:?}: grow {grown}, shrink {shrunk}");
                if grown != 0 {
                    self.zoom_axes(grown);
                }
                if shrunk != 0 {
                    self.zoom_axes(shrunk);
                }
                true
            }
        }
    }

    /// Refits the box after a resize: shrinks if the canvas area decreased,
    /// grows otherwise. Returns the committed zoom delta.
    pub fn rescale_axes(&mut self) -> i32 {
        let current = self.canvas();
        let previous = self.recorded_size.unwrap_or(current);
        let delta = {
            let mut search = FitSearch::new(&self.stack, &self.axes, current, &self.options);
            if current.area() < previous.area() {
                search.shrink()
            } else {
                search.grow()
            }
        };
        if delta != 0 {
            self.zoom_axes(delta);
        }
        self.recorded_size = Some(current);
        delta
    }

    /// Screen positions of the X, Y and Z titles.
    ///
    /// The X title sits `x_height` below the middle of the X edge and the Y
    /// title `y_height` left of the middle of the Y edge.
    pub fn axis_label_positions(&self, x_height: f32, y_height: f32) -> [Vec2; 3] {
        let project = |p: DVec3| {
            let screen = self.box_transform.transform_point3(p);
            Vec2::new(screen.x as f32, screen.y as f32)
        };
        [
            project(DVec3::new(0.5, 0.0, 0.0)) - Vec2::new(0.0, x_height),
            project(DVec3::new(0.0, 0.5, 0.0)) - Vec2::new(y_height, 0.0),
            project(DVec3::new(0.0, 0.0, 0.5)),
        ]
    }

    fn draw_labels(&self, painter: &mut dyn Painter) {
        let style = TextStyle::centered(
            self.options.label_font_family.clone(),
            self.options.label_font_size,
        );
        painter.apply_text_style(&style);

        let [x_axis, y_axis, z_axis] = self.axes.axes();
        let x_height = painter.compute_string_bounds(&x_axis.title)[3];
        let y_height = painter.compute_string_bounds(&y_axis.title)[3];
        let [x_pos, y_pos, z_pos] = self.axis_label_positions(x_height, y_height);

        painter.draw_string(x_pos.x, x_pos.y, &x_axis.title);
        painter.draw_string(z_pos.x, z_pos.y, &z_axis.title);
        painter.apply_text_style(&style.with_orientation(90.0));
        painter.draw_string(y_pos.x, y_pos.y, &y_axis.title);
    }
}

impl PointCloudChart for InteractiveChartXyz {
    fn set_input(&mut self, table: &dyn TableSource, x: &str, y: &str, z: &str) -> Result<()> {
        let points = collect_points(table, x, y, z)?;
        self.bind(points, x, y, z);
        Ok(())
    }

    /// The canvas size is not recorded here; the first paint does that.
    fn set_scene(&mut self, scene: SceneHandle) {
        self.scene = Some(scene);
        self.recorded_size = None;
    }

    fn paint(&mut self, painter: &mut dyn Painter) -> bool {
        if !self.visible || self.points.is_empty() {
            return false;
        }
        if painter.context_3d().is_none() {
            log::debug!("painter has no 3D context, skipping chart");
            return false;
        }

        self.update();
        let resized = self.check_for_scene_resize();
        self.calculate_transforms();
        self.update_clipped_points();

        if let Some(context) = painter.context_3d() {
            if !self.clipped_points.is_empty() {
                context.push_matrix();
                context.append_transform(&self.context_transform);
                context.apply_pen(&self.point_pen);
                let colors = self.colors.as_ref().map(|_| self.clipped_colors.as_slice());
                context.draw_points(&self.clipped_points, colors);

                if !self.selected_points.is_empty() {
                    context.apply_pen(&self.selected_pen);
                    context.draw_points(&self.selected_points, None);
                }
                context.pop_matrix();
            }

            context.push_matrix();
            context.append_transform(&self.box_transform);
            context.apply_pen(&self.axis_pen);
            for (start, end) in BOX_EDGES {
                context.draw_line(start, end);
            }
            context.pop_matrix();
        }

        self.draw_labels(painter);

        if resized {
            self.rescale_axes();
        }
        true
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[allow(clippy::cast_possible_truncation)]
fn collect_points(table: &dyn TableSource, x: &str, y: &str, z: &str) -> Result<Vec<Vec3>> {
    let xs = table.require_column(x)?;
    let ys = table.require_column(y)?;
    let zs = table.require_column(z)?;
    for other in [ys, zs] {
        if other.len() != xs.len() {
            return Err(chartkit_core::ChartError::SizeMismatch {
                expected: xs.len(),
                actual: other.len(),
            });
        }
    }
    Ok(xs
        .iter()
        .zip(ys)
        .zip(zs)
        .map(|((&x, &y), &z)| Vec3::new(x as f32, y as f32, z as f32))
        .collect())
}

/// Smallest and largest non-NaN value, `(0, 0)` if there are none.
fn value_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

fn bounds(points: &[Vec3]) -> Option<(DVec3, DVec3)> {
    let first = points.first()?.as_dvec3();
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        let p = p.as_dvec3();
        (lo.min(p), hi.max(p))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;
    use chartkit_core::{Axis, ChartError};
    use chartkit_render::{HeadlessPainter, SimpleScene};

    fn table() -> Table {
        let mut table = Table::new();
        table.add_column("a", vec![0.0, 1.0, 2.0, 3.0]).expect("column");
        table.add_column("b", vec![0.0, 10.0, 20.0, 30.0]).expect("column");
        table.add_column("c", vec![5.0, 5.0, 5.0, 5.0]).expect("column");
        table
    }

    fn cube_axes() -> AxisBox {
        AxisBox::new(
            Axis::new(Vec2::new(50.0, 50.0), Vec2::new(450.0, 450.0)),
            Axis::new(Vec2::new(50.0, 50.0), Vec2::new(450.0, 450.0)),
            Axis::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 450.0)),
        )
    }

    #[test]
    fn test_value_range() {
        assert_eq!(value_range(&[3.0, 1.0, 2.0]), (1.0, 3.0));
        // Ascending input must still find the minimum.
        assert_eq!(value_range(&[1.0, 2.0, 3.0]), (1.0, 3.0));
        assert_eq!(value_range(&[f64::NAN, -4.0]), (-4.0, -4.0));
        assert_eq!(value_range(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_set_input_titles_and_device() {
        let mut chart = InteractiveChartXyz::new();
        chart.set_axes(cube_axes());
        chart.set_input(&table(), "a", "b", "c").expect("columns exist");
        assert_eq!(chart.points().len(), 4);
        assert_eq!(chart.axes().axes()[1].title, "b");

        // a spans [0, 3] onto 400 px; c is flat, so its range counts as one.
        let device = chart.transforms().device.transform_point(DVec3::new(3.0, 30.0, 5.0));
        assert!((device - DVec3::new(400.0, 400.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_missing_column() {
        let mut chart = InteractiveChartXyz::new();
        let result = chart.set_input(&table(), "a", "nope", "c");
        assert!(matches!(result, Err(ChartError::ColumnNotFound(name)) if name == "nope"));
        assert!(chart.points().is_empty());
    }

    #[test]
    fn test_color_column_length_mismatch() {
        struct Mixed(Table, Vec<f64>);
        impl TableSource for Mixed {
            fn num_rows(&self) -> usize {
                self.0.num_rows()
            }
            fn column(&self, name: &str) -> Option<&[f64]> {
                if name == "color" {
                    Some(&self.1)
                } else {
                    self.0.column(name)
                }
            }
        }

        let mut coords = Table::new();
        coords.add_column("x", vec![0.0, 1.0]).expect("column");
        let mixed = Mixed(coords, vec![1.0, 2.0, 3.0]);

        let mut chart = InteractiveChartXyz::new();
        let result = chart.set_input_with_colors(&mixed, "x", "x", "x", "color");
        assert!(matches!(result, Err(ChartError::SizeMismatch { expected: 2, actual: 3 })));
        assert!(chart.points().is_empty());
        assert!(chart.colors().is_none());
    }

    #[test]
    fn test_colors_span_lookup_table() {
        let mut chart = InteractiveChartXyz::new();
        chart.set_axes(cube_axes());
        let mut table = Table::new();
        table.add_column("x", vec![0.0, 1.0, 2.0]).expect("column");
        table.add_column("v", vec![1.0, 2.0, 3.0]).expect("column");
        chart
            .set_input_with_colors(&table, "x", "x", "x", "v")
            .expect("columns exist");
        let colors = chart.colors().expect("coloured");
        assert_eq!(colors[0], [255, 0, 0]);
        assert_eq!(colors[2], [0, 0, 255]);
    }

    #[test]
    fn test_selection_rebuilds_on_change() {
        let mut chart = InteractiveChartXyz::new();
        chart.set_input(&table(), "a", "b", "c").expect("columns exist");
        let selection = Rc::new(RefCell::new(Selection::from_indices([1, 99, 3])));
        chart.set_selection(Rc::clone(&selection));

        chart.update();
        assert_eq!(chart.selected_points(), &[Vec3::new(1.0, 10.0, 5.0), Vec3::new(3.0, 30.0, 5.0)]);

        selection.borrow_mut().set_indices([0]);
        chart.update();
        assert_eq!(chart.selected_points(), &[Vec3::new(0.0, 0.0, 5.0)]);

        // New data with the same selection version still rebuilds.
        let mut shifted = Table::new();
        shifted.add_column("p", vec![7.0]).expect("column");
        chart.set_input(&shifted, "p", "p", "p").expect("column exists");
        chart.update();
        assert_eq!(chart.selected_points(), &[Vec3::splat(7.0)]);
    }

    #[test]
    fn test_empty_data_clears_selected_points() {
        let mut chart = InteractiveChartXyz::new();
        chart.set_input(&table(), "a", "b", "c").expect("columns exist");
        let selection = Rc::new(RefCell::new(Selection::from_indices([0, 1])));
        chart.set_selection(Rc::clone(&selection));
        chart.update();
        assert_eq!(chart.selected_points().len(), 2);

        let mut empty = Table::new();
        empty.add_column("e", Vec::new()).expect("column");
        chart.set_input(&empty, "e", "e", "e").expect("column exists");
        chart.update();
        assert!(chart.points().is_empty());
        assert!(chart.selected_points().is_empty());

        // Data coming back rebuilds from the unchanged selection.
        chart.set_input(&table(), "a", "b", "c").expect("columns exist");
        chart.update();
        assert_eq!(chart.selected_points().len(), 2);
    }

    #[test]
    fn test_resize_before_any_size_is_noop() {
        let mut chart = InteractiveChartXyz::new();
        assert!(!chart.check_for_scene_resize());
        let scene: SceneHandle = Rc::new(RefCell::new(SimpleScene::new(0, 0)));
        chart.set_scene(scene);
        assert!(!chart.check_for_scene_resize());
    }

    #[test]
    fn test_paint_requires_points_and_3d() {
        let mut chart = InteractiveChartXyz::new();
        let mut painter = HeadlessPainter::new();
        assert!(!chart.paint(&mut painter));

        chart.set_input(&table(), "a", "b", "c").expect("columns exist");
        let mut flat = HeadlessPainter::without_3d();
        assert!(!chart.paint(&mut flat));
        assert!(flat.commands().is_empty());

        chart.set_visible(false);
        assert!(!chart.paint(&mut painter));
    }

    #[test]
    fn test_label_positions() {
        let mut chart = InteractiveChartXyz::new();
        chart.set_axes(cube_axes());
        chart.calculate_transforms();
        let [x, y, z] = chart.axis_label_positions(14.0, 10.0);
        assert_eq!(x, Vec2::new(250.0, 36.0));
        assert_eq!(y, Vec2::new(40.0, 250.0));
        assert_eq!(z, Vec2::new(50.0, 50.0));
    }
}
