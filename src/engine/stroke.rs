//! Incremental stroke compositing.
//!
//! A stroke is drawn opaque into an overlay one segment at a time and merged into the base
//! exactly once, when it ends, at the brush opacity. Opacity therefore applies to the stroke as
//! a whole: a stroke crossing itself does not darken where it overlaps, while two separate
//! strokes do.

use super::{Bitmap, BrushConfig, ContextError, DrawingContext};
use crate::util::ResultExt;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeState {
	pub last_point: Vec2,
	/// False until the stroke has moved, i.e. while it is still a tap.
	pub is_continuous: bool,
}

pub fn begin_stroke(point: Vec2) -> StrokeState {
	StrokeState {
		last_point: point,
		is_continuous: false,
	}
}

fn draw_segment(
	from: Vec2,
	to: Vec2,
	brush: &BrushConfig,
	overlay: &mut Bitmap,
) -> Result<(), ContextError> {
	let mut context = DrawingContext::begin_like(overlay)?;
	context
		.draw_bitmap(overlay, 1.0)
		.stroke_line(from, to, &brush.stroke_style());
	*overlay = context.finish();
	Ok(())
}

/// If no drawing context is available the overlay is left as it was, but the stroke still
/// advances to `point`.
pub fn extend_stroke(
	state: StrokeState,
	point: Vec2,
	brush: &BrushConfig,
	overlay: &mut Bitmap,
) -> StrokeState {
	draw_segment(state.last_point, point, brush, overlay).ok_or_log();
	StrokeState {
		last_point: point,
		is_continuous: true,
	}
}

fn merge(brush: &BrushConfig, base: &mut Bitmap, overlay: &Bitmap) -> Result<(), ContextError> {
	let mut context = DrawingContext::begin_like(base)?;
	context
		.draw_bitmap(base, 1.0)
		.draw_bitmap(overlay, brush.opacity());
	*base = context.finish();
	Ok(())
}

/// Finishes the stroke: a tap leaves a dot, then the overlay is merged into `base` at the brush
/// opacity and cleared. This is the only operation that changes `base`.
pub fn end_stroke(state: StrokeState, brush: &BrushConfig, base: &mut Bitmap, overlay: &mut Bitmap) {
	if !state.is_continuous {
		draw_segment(state.last_point, state.last_point, brush, overlay).ok_or_log();
	}
	if merge(brush, base, overlay).ok_or_log().is_some() {
		tracing::debug!(opacity = brush.opacity(), "stroke merged");
	}
	overlay.clear();
}

pub fn reset(base: &mut Bitmap) {
	base.clear();
}
