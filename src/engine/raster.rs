use crate::geom::AABox;
use glam::{vec2, Vec2};
use itertools::iproduct;

pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
	let ab = b - a;
	let length_squared = ab.length_squared();
	if length_squared <= f32::EPSILON {
		return p.distance(a);
	}
	let t = ((p - a).dot(ab) / length_squared).clamp(0.0, 1.0);
	p.distance(a + t * ab)
}

/// Coverage of a pixel whose centre is `distance` away from the spine of a round-capped
/// segment of radius `radius`, with a one pixel wide anti-aliased edge.
pub fn edge_coverage(distance: f32, radius: f32) -> f32 {
	(radius + 0.5 - distance).clamp(0.0, 1.0)
}

/// Scale applied to a one pixel wide stroke of `length` so that it covers about as much area
/// as a stroke of `stroke_width < 1` would. A one pixel stroke covers `length + PI / 3`.
fn thin_stroke_fade(length: f32, stroke_width: f32) -> f32 {
	let cap = std::f32::consts::FRAC_PI_3;
	(stroke_width * length + cap * stroke_width * stroke_width) / (length + cap)
}

/// Covered pixels of a `width` by `height` surface with their coverage in `(0, 1]`. Strokes
/// thinner than a pixel are drawn one pixel wide and faded instead.
pub fn stroke_segment(
	p0: Vec2,
	p1: Vec2,
	stroke_width: f32,
	width: u32,
	height: u32,
) -> impl Iterator<Item = (u32, u32, f32)> {
	let stroke_width = stroke_width.max(0.0);
	let (radius, fade) = if stroke_width < 1.0 {
		(0.5, thin_stroke_fade(p0.distance(p1), stroke_width))
	} else {
		(0.5 * stroke_width, 1.0)
	};
	// The anti-aliased edge reaches half a pixel past the radius.
	let bounds = AABox::around_segment(p0, p1, radius + 0.5);
	let (xs, ys) = bounds.pixel_ranges(width, height).unwrap_or((0..0, 0..0));
	iproduct!(ys, xs).filter_map(move |(y, x)| {
		let centre = vec2(x as f32 + 0.5, y as f32 + 0.5);
		let coverage = fade * edge_coverage(distance_to_segment(centre, p0, p1), radius);
		(coverage > 0.0).then_some((x, y, coverage))
	})
}
