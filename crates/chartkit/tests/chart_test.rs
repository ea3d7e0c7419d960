//! Integration tests for the interactive chart.
//!
//! These run the chart end to end against a [`SimpleScene`] and a
//! [`HeadlessPainter`]: clipping, the viewport fit across resizes, and the
//! commands a paint produces.

use std::cell::RefCell;
use std::rc::Rc;

use chartkit::*;
use proptest::prelude::*;

/// Deterministic values in `[0, 1)`.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn cube_axes() -> AxisBox {
    AxisBox::new(
        Axis::new(Vec2::new(50.0, 50.0), Vec2::new(450.0, 450.0)),
        Axis::new(Vec2::new(50.0, 50.0), Vec2::new(450.0, 450.0)),
        Axis::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 450.0)),
    )
}

fn small_table() -> Table {
    let mut table = Table::new();
    table.add_column("x", vec![0.0, 1.0, 2.0]).expect("column");
    table.add_column("y", vec![2.0, 0.5, 1.0]).expect("column");
    table.add_column("z", vec![1.0, 1.0, 0.0]).expect("column");
    table
}

fn scene(width: u32, height: u32) -> (Rc<RefCell<SimpleScene>>, SceneHandle) {
    let scene = Rc::new(RefCell::new(SimpleScene::new(width, height)));
    let handle: SceneHandle = scene.clone();
    (scene, handle)
}

fn box_scale_factor(chart: &InteractiveChartXyz) -> f64 {
    chart.transforms().box_scale.matrix().x_axis.x
}

#[test]
fn test_unit_cube_points_stay_inside_cube_box() {
    let mut rng = Lcg(42);
    let mut table = Table::new();
    for name in ["x", "y", "z"] {
        let values = (0..100).map(|_| rng.next()).collect();
        table.add_column(name, values).expect("column");
    }

    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(cube_axes());
    chart.set_input(&table, "x", "y", "z").expect("columns exist");

    // Points land at their own coordinates shifted onto the box origin.
    chart.transforms_mut().device.identity();
    chart.calculate_transforms();
    chart.update_clipped_points();

    assert_eq!(chart.clipped_points().len(), 100);
    assert_eq!(chart.clipped_points(), chart.points());
}

#[test]
fn test_translated_points_leave_box() {
    let mut table = Table::new();
    table.add_column("x", vec![0.0, 1.0, 0.5]).expect("column");
    table.add_column("y", vec![0.0, 1.0, 0.5]).expect("column");
    table.add_column("z", vec![0.0, 1.0, 0.5]).expect("column");

    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(cube_axes());
    chart.set_input(&table, "x", "y", "z").expect("columns exist");

    // Data is mapped onto the full box, then pushed far to the right.
    chart.transforms_mut().translation.translate(DVec3::new(1000.0, 0.0, 0.0));
    chart.calculate_transforms();
    chart.update_clipped_points();
    assert!(chart.clipped_points().is_empty());

    chart.transforms_mut().translation.identity();
    chart.calculate_transforms();
    chart.update_clipped_points();
    assert!(chart.clipped_points().contains(&Vec3::splat(0.5)));
}

#[test]
fn test_first_paint_fits_box_to_canvas() {
    let (scene, handle) = scene(400, 400);
    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(AxisBox::from_origin_and_size(
        Vec2::new(100.0, 100.0),
        DVec3::splat(200.0),
    ));
    chart.set_input(&small_table(), "x", "y", "z").expect("columns exist");
    chart.set_scene(handle);

    let mut painter = HeadlessPainter::new();
    assert!(chart.paint(&mut painter));

    // Sentinels reach 173.2 px from the centre at scale one: two steps fit,
    // a third would cross the canvas edge.
    assert!((box_scale_factor(&chart) - 2f64.powf(0.2)).abs() < 1e-9);
    assert!(scene.borrow_mut().take_dirty());

    let search = FitSearch::new(chart.transforms(), chart.axes(), chart.canvas(), chart.options());
    assert!(search.sentinels_inside());
}

#[test]
fn test_resize_recenters_and_refits() {
    let (scene, handle) = scene(400, 400);
    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(AxisBox::from_origin_and_size(
        Vec2::new(100.0, 100.0),
        DVec3::splat(200.0),
    ));
    chart.set_input(&small_table(), "x", "y", "z").expect("columns exist");
    chart.set_scene(handle);
    assert!(chart.check_for_scene_resize());
    assert!(!chart.check_for_scene_resize());

    scene.borrow_mut().resize(800, 800);
    assert!(chart.check_for_scene_resize());
    assert_eq!(chart.axes().origin(), DVec3::new(300.0, 300.0, 100.0));

    let grown = chart.rescale_axes();
    assert_eq!(grown, 10);
    let search = FitSearch::new(chart.transforms(), chart.axes(), chart.canvas(), chart.options());
    assert!(search.sentinels_inside());

    scene.borrow_mut().resize(400, 400);
    assert!(chart.check_for_scene_resize());
    assert_eq!(chart.axes().origin(), DVec3::new(100.0, 100.0, 100.0));

    let shrunk = chart.rescale_axes();
    assert_eq!(shrunk, -10);
    let search = FitSearch::new(chart.transforms(), chart.axes(), chart.canvas(), chart.options());
    assert!(search.sentinels_inside());
    assert!((box_scale_factor(&chart) - 2f64.powf(0.2)).abs() < 1e-9);
}

#[test]
fn test_paint_before_geometry_defers_fit() {
    let (_scene, handle) = scene(400, 400);
    let mut chart = InteractiveChartXyz::new();
    chart.set_input(&small_table(), "x", "y", "z").expect("columns exist");
    chart.set_scene(handle);

    // Zero-length axes leave nothing to fit.
    let mut painter = HeadlessPainter::new();
    chart.paint(&mut painter);
    assert_eq!(box_scale_factor(&chart), 1.0);

    chart.set_geometry(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
    let mut painter = HeadlessPainter::new();
    assert!(chart.paint(&mut painter));
    assert!((box_scale_factor(&chart) - 2f64.powf(0.2)).abs() < 1e-9);

    let search = FitSearch::new(chart.transforms(), chart.axes(), chart.canvas(), chart.options());
    assert!(search.sentinels_inside());
}

#[test]
fn test_minimize_and_restore_keeps_fit() {
    let (scene, handle) = scene(400, 400);
    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(AxisBox::from_origin_and_size(
        Vec2::new(100.0, 100.0),
        DVec3::splat(200.0),
    ));
    chart.set_input(&small_table(), "x", "y", "z").expect("columns exist");
    chart.set_scene(handle);
    assert!(chart.check_for_scene_resize());
    assert!((box_scale_factor(&chart) - 2f64.powf(0.2)).abs() < 1e-9);

    scene.borrow_mut().resize(0, 0);
    assert!(chart.check_for_scene_resize());
    assert_eq!(chart.rescale_axes(), 0);
    assert!((box_scale_factor(&chart) - 2f64.powf(0.2)).abs() < 1e-9);

    scene.borrow_mut().resize(400, 400);
    assert!(chart.check_for_scene_resize());
    assert_eq!(chart.axes().origin(), DVec3::new(100.0, 100.0, 100.0));
    assert_eq!(chart.rescale_axes(), 0);
    assert!((box_scale_factor(&chart) - 2f64.powf(0.2)).abs() < 1e-9);

    let search = FitSearch::new(chart.transforms(), chart.axes(), chart.canvas(), chart.options());
    assert!(search.sentinels_inside());
}

#[test]
fn test_odd_resize_truncates_shift() {
    let (scene, handle) = scene(400, 400);
    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(AxisBox::from_origin_and_size(
        Vec2::new(100.0, 100.0),
        DVec3::splat(200.0),
    ));
    chart.set_scene(handle);
    assert!(chart.check_for_scene_resize());

    scene.borrow_mut().resize(403, 397);
    assert!(chart.check_for_scene_resize());
    assert_eq!(chart.axes().origin(), DVec3::new(101.0, 99.0, 100.0));
}

#[test]
fn test_paint_draws_points_box_and_titles() {
    let (_scene, handle) = scene(400, 400);
    let mut chart = InteractiveChartXyz::new();
    chart.set_geometry(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
    chart.set_input(&small_table(), "x", "y", "z").expect("columns exist");
    chart.set_scene(handle);
    // Data extremes sit on the box faces; pull them inside.
    assert!(chart.mouse_wheel_event(&MouseEvent::default(), -5));

    let selection = Rc::new(RefCell::new(Selection::from_indices([2])));
    chart.set_selection(Rc::clone(&selection));

    let mut painter = HeadlessPainter::new();
    assert!(chart.paint(&mut painter));

    let batches = painter.point_batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1], &[Vec3::new(2.0, 1.0, 0.0)]);
    assert_eq!(painter.line_count(), 12);

    let texts = painter.texts();
    let titles: Vec<&str> = texts.iter().map(|(_, _, text, _)| *text).collect();
    assert_eq!(titles, ["x", "z", "y"]);
    assert_eq!(texts[2].3.orientation, 90.0);

    // Every push was matched by a pop.
    assert_eq!(painter.context().stack_depth(), 0);
}

#[test]
fn test_colored_points_follow_clipping() {
    let (_scene, handle) = scene(400, 400);
    let mut table = small_table();
    table.add_column("v", vec![0.0, 0.5, 1.0]).expect("column");

    let mut chart = InteractiveChartXyz::new();
    chart.set_geometry(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
    chart
        .set_input_with_colors(&table, "x", "y", "z", "v")
        .expect("columns exist");
    chart.set_scene(handle);
    chart.mouse_wheel_event(&MouseEvent::default(), -5);

    let mut painter = HeadlessPainter::new();
    assert!(chart.paint(&mut painter));
    assert_eq!(chart.clipped_points().len(), 3);
    assert_eq!(chart.clipped_colors().len(), chart.clipped_points().len());
    assert_eq!(chart.clipped_colors()[0], [255, 0, 0]);
    assert_eq!(chart.clipped_colors()[2], [0, 0, 255]);
}

#[test]
fn test_view_presets_ignore_previous_rotation() {
    for preset in ViewPreset::ALL {
        let mut fresh = InteractiveChartXyz::new();
        fresh.apply_preset(preset);

        let mut turned = InteractiveChartXyz::new();
        turned.transforms_mut().rotation.rotate_z(33.0);
        turned.transforms_mut().rotation.rotate_x(-12.0);
        turned.apply_preset(preset);

        assert!(
            matrices_approx_eq(
                &fresh.transforms().rotation.matrix(),
                &turned.transforms().rotation.matrix(),
                1e-12,
            ),
            "{}",
            preset.name()
        );
    }
    let mut chart = InteractiveChartXyz::new();
    chart.transforms_mut().rotation.rotate_y(90.0);
    chart.apply_preset(ViewPreset::from_key('z').expect("z is a preset"));
    assert!(chart.transforms().rotation.is_identity());
}

#[test]
fn test_options_round_trip_through_json() {
    let options = Options {
        rotate_gain: 2.0,
        threshold_mode: ThresholdMode::PerPlane,
        ..Options::default()
    };
    let json = options.to_json().expect("serializable");
    let parsed = Options::from_json(&json).expect("parsable");
    assert_eq!(parsed, options);

    let chart = InteractiveChartXyz::with_options(parsed);
    assert_eq!(chart.camera().rotate_gain, 2.0);
}

fn identity_device_chart() -> InteractiveChartXyz {
    let mut table = Table::new();
    for name in ["x", "y", "z"] {
        table.add_column(name, vec![0.0, 1.0]).expect("column");
    }
    let mut chart = InteractiveChartXyz::new();
    chart.set_axes(cube_axes());
    chart.set_input(&table, "x", "y", "z").expect("columns exist");
    chart.transforms_mut().device.identity();
    chart.calculate_transforms();
    chart
}

proptest! {
    #[test]
    fn prop_box_interior_is_kept(
        x in 1.0f32..399.0, y in 1.0f32..399.0, z in 1.0f32..399.0,
    ) {
        let chart = identity_device_chart();
        prop_assert!(!chart.point_should_be_clipped(Vec3::new(x, y, z)));
    }

    #[test]
    fn prop_points_past_a_face_are_clipped(
        inside in 1.0f32..399.0, outside in 401.0f32..2000.0, axis in 0usize..3,
    ) {
        let chart = identity_device_chart();
        let mut point = Vec3::splat(inside);
        point[axis] = outside;
        prop_assert!(chart.point_should_be_clipped(point));
        point[axis] = 400.0 - outside;
        prop_assert!(chart.point_should_be_clipped(point));
    }
}
