use approx::assert_abs_diff_eq;
use drawpad::engine::stroke;
use drawpad::{Bitmap, BrushConfig, Color, Pencil, Session, Snapshot};
use glam::{vec2, Vec2};

fn session(width: f32, opacity: f32) -> Session {
	Session::builder()
		.width(64)
		.height(64)
		.brush(BrushConfig::builder().width(width).opacity(opacity).build())
		.build()
		.unwrap()
}

fn stroke_through(session: &mut Session, points: &[Vec2]) {
	let (first, rest) = points.split_first().unwrap();
	session.on_touch_begin(Some(*first));
	for point in rest {
		session.on_touch_move(Some(*point));
	}
	session.on_touch_end();
}

fn alpha(session: &Session, x: u32, y: u32) -> f32 {
	session.current_base_bitmap().alpha_at(x, y)
}

#[test]
fn path_through_three_points_is_merged_once() {
	let mut session = session(4.0, 0.6);
	session.on_touch_begin(Some(vec2(10.0, 10.0)));
	session.on_touch_move(Some(vec2(20.0, 10.0)));
	session.on_touch_move(Some(vec2(20.0, 20.0)));
	// Nothing reaches the base until the stroke ends.
	assert!(session.current_base_bitmap().is_empty());
	assert!(!session.overlay().is_empty());
	session.on_touch_end();

	assert!(session.overlay().is_empty());
	// Both legs and the corner between them, at the stroke opacity.
	for (x, y) in [(10, 9), (15, 9), (19, 9), (19, 15), (19, 19)] {
		assert_abs_diff_eq!(alpha(&session, x, y), 0.6, epsilon = 1e-6);
	}
	// Round caps reach past the end points, but not far.
	assert!(alpha(&session, 8, 9) > 0.0);
	assert!(alpha(&session, 19, 21) > 0.0);
	assert_eq!(alpha(&session, 6, 9), 0.0);
	assert_eq!(alpha(&session, 19, 24), 0.0);
	assert_eq!(alpha(&session, 15, 15), 0.0);
}

#[test]
fn base_matches_compositor_merging_once() {
	let points = [vec2(5.0, 5.0), vec2(40.0, 30.0), vec2(10.0, 50.0), vec2(50.0, 10.0)];
	let brush = BrushConfig::builder().width(7.0).opacity(0.35).build();

	let mut session = Session::builder()
		.width(64)
		.height(64)
		.brush(brush)
		.build()
		.unwrap();
	stroke_through(&mut session, &points);

	let mut base = Bitmap::new(64, 64);
	let mut overlay = Bitmap::new(64, 64);
	let mut state = stroke::begin_stroke(points[0]);
	for point in &points[1..] {
		state = stroke::extend_stroke(state, *point, &brush, &mut overlay);
	}
	let opaque = overlay.clone();
	stroke::end_stroke(state, &brush, &mut base, &mut overlay);

	assert_eq!(session.current_base_bitmap(), &base);
	// Merging once means every pixel is exactly the opaque overlay scaled by the opacity.
	for y in 0..64 {
		for x in 0..64 {
			assert_abs_diff_eq!(base.alpha_at(x, y), 0.35 * opaque.alpha_at(x, y), epsilon = 1e-6);
		}
	}
}

#[test]
fn tap_leaves_a_dot() {
	let mut session = session(10.0, 0.8);
	stroke_through(&mut session, &[vec2(32.0, 32.0)]);

	let centre = vec2(32.0, 32.0);
	for y in 0..64u32 {
		for x in 0..64u32 {
			let d = vec2(x as f32 + 0.5, y as f32 + 0.5).distance(centre);
			let a = alpha(&session, x, y);
			if d <= 4.5 {
				assert_abs_diff_eq!(a, 0.8, epsilon = 1e-6);
			} else if d >= 5.5 {
				assert_eq!(a, 0.0, "({x}, {y})");
			}
		}
	}
}

#[test]
fn thinnest_tap_still_leaves_a_dot() {
	let mut session = session(0.1, 1.0);
	assert_eq!(session.brush().width(), 0.1);
	stroke_through(&mut session, &[vec2(32.0, 32.0)]);

	let base = session.current_base_bitmap();
	let total: f32 = (28..36)
		.flat_map(|y| (28..36).map(move |x| (x, y)))
		.map(|(x, y)| base.alpha_at(x, y))
		.sum();
	let area = std::f32::consts::FRAC_PI_4 * 0.01;
	assert!(total > 0.5 * area && total < 2.0 * area, "{total} for area {area}");
	assert!(base.alpha_at(31, 31) > 0.0);
}

#[test]
fn different_strokes_compound_but_one_stroke_does_not() {
	let mut session = session(6.0, 0.5);
	let zigzag = [vec2(4.0, 32.0), vec2(60.0, 32.0), vec2(4.0, 32.0), vec2(60.0, 32.0)];
	stroke_through(&mut session, &zigzag);
	assert_abs_diff_eq!(alpha(&session, 32, 31), 0.5, epsilon = 1e-6);

	stroke_through(&mut session, &[vec2(32.0, 4.0), vec2(32.0, 60.0)]);
	assert_abs_diff_eq!(alpha(&session, 31, 31), 0.75, epsilon = 1e-6);
	assert_abs_diff_eq!(alpha(&session, 31, 10), 0.5, epsilon = 1e-6);
}

#[test]
fn reset_then_export_is_transparent() {
	let mut session = session(6.0, 1.0);
	stroke_through(&mut session, &[vec2(4.0, 4.0), vec2(60.0, 60.0)]);
	stroke_through(&mut session, &[vec2(30.0, 30.0)]);
	session.reset();

	let snapshot = session.current_base_bitmap().snapshot();
	assert_eq!((snapshot.width, snapshot.height), (64, 64));
	assert!(snapshot.is_transparent());

	let mut shared: Vec<Snapshot> = Vec::new();
	assert!(!session.share(&mut |s: Snapshot| shared.push(s)));
}

#[test]
fn width_change_only_affects_later_strokes() {
	let mut session = session(4.0, 1.0);
	stroke_through(&mut session, &[vec2(4.0, 16.0), vec2(60.0, 16.0)]);
	let before = session.current_base_bitmap().clone();

	session.set_brush(session.brush().with_width(20.0));
	assert_eq!(session.current_base_bitmap(), &before);

	stroke_through(&mut session, &[vec2(4.0, 48.0), vec2(60.0, 48.0)]);
	let after = session.current_base_bitmap();
	for y in 0..30 {
		for x in 0..64 {
			assert_eq!(after.pixel(x, y), before.pixel(x, y), "({x}, {y})");
		}
	}
	assert_eq!(after.alpha_at(32, 39), 1.0);
}

#[test]
fn eraser_overwrites_at_full_strength() {
	let mut session = session(8.0, 0.3);
	session.select_pencil(Pencil::Red);
	stroke_through(&mut session, &[vec2(4.0, 32.0), vec2(60.0, 32.0)]);
	assert_eq!(session.brush().opacity(), 0.3);

	session.select_pencil(Pencil::Eraser);
	assert_eq!(session.brush().opacity(), 1.0);
	stroke_through(&mut session, &[vec2(32.0, 4.0), vec2(32.0, 60.0)]);

	assert_eq!(session.current_base_bitmap().color_at(31, 31), Some(Color::WHITE));
	let red = session.current_base_bitmap().color_at(10, 31).unwrap();
	assert_abs_diff_eq!(red.alpha(), 0.3, epsilon = 1e-6);
	assert_abs_diff_eq!(red.red(), 1.0, epsilon = 1e-6);
}

#[test]
fn settings_apply_to_next_stroke() {
	let mut session = session(4.0, 1.0);
	let mut settings = session.open_settings();
	settings.width = 2.0;
	settings.opacity = 0.25;
	settings.green = 1.0;
	session.apply_settings(settings).unwrap();

	stroke_through(&mut session, &[vec2(10.0, 10.0), vec2(50.0, 10.0)]);
	let color = session.current_base_bitmap().color_at(30, 9).unwrap();
	assert_abs_diff_eq!(color.alpha(), 0.25, epsilon = 1e-6);
	assert_abs_diff_eq!(color.green(), 1.0, epsilon = 1e-6);
	assert_eq!(alpha(&session, 30, 12), 0.0);
}
