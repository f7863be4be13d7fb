use super::{raster, Bitmap, Color};
use glam::Vec2;

#[derive(Clone, Debug, thiserror::Error)]
pub enum ContextError {
	#[error("no drawing context for a {width}x{height} surface")]
	Unavailable { width: u32, height: u32 },

	#[error("out of memory allocating a {width}x{height} surface")]
	OutOfMemory { width: u32, height: u32 },
}

static_assertions::assert_impl_all!(ContextError: std::error::Error, Send, Sync);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
	pub width: f32,
	pub color: Color,
}

/// A scoped drawing surface. [`DrawingContext::finish`] hands back what was drawn; dropping the
/// context discards it.
#[derive(Debug)]
pub struct DrawingContext {
	target: Bitmap,
	committed: bool,
}

impl DrawingContext {
	pub fn begin(width: u32, height: u32) -> Result<Self, ContextError> {
		if width == 0 || height == 0 {
			return Err(ContextError::Unavailable { width, height });
		}
		let target =
			Bitmap::try_new(width, height).map_err(|_| ContextError::OutOfMemory { width, height })?;
		tracing::trace!(width, height, "DrawingContext::begin");
		Ok(Self {
			target,
			committed: false,
		})
	}

	pub fn begin_like(bitmap: &Bitmap) -> Result<Self, ContextError> {
		let (width, height) = bitmap.size();
		Self::begin(width, height)
	}

	pub fn draw_bitmap(&mut self, bitmap: &Bitmap, alpha: f32) -> &mut Self {
		self.target.draw_bitmap(bitmap, alpha);
		self
	}

	pub fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &StrokeStyle) -> &mut Self {
		let color = style.color.premultiplied();
		let (width, height) = self.target.size();
		for (x, y, coverage) in raster::stroke_segment(from, to, style.width, width, height) {
			self.target.blend_pixel(x, y, color * coverage);
		}
		self
	}

	pub fn finish(mut self) -> Bitmap {
		self.committed = true;
		std::mem::take(&mut self.target)
	}
}

impl Drop for DrawingContext {
	fn drop(&mut self) {
		if !self.committed {
			let (width, height) = self.target.size();
			tracing::trace!(width, height, "DrawingContext discarded");
		}
	}
}
