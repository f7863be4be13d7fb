use glam::Vec2;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn inflated(self, margin: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
	}

	pub fn around_segment(p0: Vec2, p1: Vec2, radius: f32) -> Self {
		Self::containing([p0, p1].into_iter()).inflated(radius)
	}

	/// The columns and rows of a `width` by `height` pixel grid whose cells touch this box.
	pub fn pixel_ranges(&self, width: u32, height: u32) -> Option<(Range<u32>, Range<u32>)> {
		if self.is_empty() {
			return None;
		}
		let clamp_axis = |min: f32, max: f32, size: u32| {
			let start = min.floor().clamp(0.0, size as f32) as u32;
			let end = max.ceil().clamp(0.0, size as f32) as u32;
			(start < end).then_some(start..end)
		};
		let xs = clamp_axis(self.min.x, self.max.x, width)?;
		let ys = clamp_axis(self.min.y, self.max.y, height)?;
		Some((xs, ys))
	}
}
