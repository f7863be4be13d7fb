use crate::engine::{
	stroke, Bitmap, BrushConfig, ContextError, DrawingContext, Pencil, Snapshot, StrokeState,
};
use crate::settings::{BrushSettings, SettingsError};
use crate::util::ResultExt;
use glam::Vec2;

pub trait ShareSink {
	fn share(&mut self, snapshot: Snapshot);
}

impl<F: FnMut(Snapshot)> ShareSink for F {
	fn share(&mut self, snapshot: Snapshot) {
		self(snapshot)
	}
}

/// Single-touch drawing session. Touch points are in canvas pixels.
#[derive(Debug)]
pub struct Session {
	brush: BrushConfig,
	base: Bitmap,
	overlay: Bitmap,
	stroke: Option<StrokeState>,
}

#[bon::bon]
impl Session {
	#[builder]
	pub fn new(
		width: u32,
		height: u32,
		#[builder(default)] brush: BrushConfig,
	) -> Result<Self, ContextError> {
		tracing::info!(width, height, ?brush, "Session::new");
		let canvas = || {
			Bitmap::try_new(width, height).map_err(|_| ContextError::OutOfMemory { width, height })
		};
		Ok(Self {
			brush,
			base: canvas()?,
			overlay: canvas()?,
			stroke: None,
		})
	}
}

impl Session {
	pub fn is_drawing(&self) -> bool {
		self.stroke.is_some()
	}

	#[tracing::instrument(level = "trace", skip(self))]
	pub fn on_touch_begin(&mut self, point: Option<Vec2>) {
		let Some(point) = point else {
			return;
		};
		if self.stroke.is_some() {
			tracing::warn!("touch began during a stroke");
			self.on_touch_end();
		}
		self.stroke = Some(stroke::begin_stroke(point));
	}

	#[tracing::instrument(level = "trace", skip(self))]
	pub fn on_touch_move(&mut self, point: Option<Vec2>) {
		let Some(point) = point else {
			return;
		};
		let Some(state) = self.stroke else {
			tracing::warn!("touch moved without a stroke");
			return;
		};
		self.stroke = Some(stroke::extend_stroke(
			state,
			point,
			&self.brush,
			&mut self.overlay,
		));
	}

	#[tracing::instrument(level = "trace", skip(self))]
	pub fn on_touch_end(&mut self) {
		let Some(state) = self.stroke.take() else {
			tracing::warn!("touch ended without a stroke");
			return;
		};
		stroke::end_stroke(state, &self.brush, &mut self.base, &mut self.overlay);
	}

	#[tracing::instrument(level = "trace", skip(self))]
	pub fn on_touch_cancel(&mut self) {
		if self.stroke.take().is_some() {
			self.overlay.clear();
		}
	}

	pub fn reset(&mut self) {
		tracing::info!("Session::reset");
		stroke::reset(&mut self.base);
	}

	/// Returns false, without calling `sink`, when there is nothing to share.
	pub fn share(&self, sink: &mut impl ShareSink) -> bool {
		if self.base.is_empty() {
			tracing::info!("nothing to share");
			return false;
		}
		sink.share(self.base.snapshot());
		true
	}

	pub fn current_base_bitmap(&self) -> &Bitmap {
		&self.base
	}

	pub fn overlay(&self) -> &Bitmap {
		&self.overlay
	}

	/// Alpha at which the host displays the overlay over the base.
	pub fn overlay_alpha(&self) -> f32 {
		self.brush.opacity()
	}

	pub fn composed(&self) -> Bitmap {
		DrawingContext::begin_like(&self.base)
			.map(|mut context| {
				context
					.draw_bitmap(&self.base, 1.0)
					.draw_bitmap(&self.overlay, self.overlay_alpha());
				context.finish()
			})
			.ok_or_log()
			.unwrap_or_else(|| self.base.clone())
	}

	pub fn brush(&self) -> BrushConfig {
		self.brush
	}

	pub fn set_brush(&mut self, brush: BrushConfig) {
		if self.is_drawing() {
			tracing::warn!("brush changed during a stroke");
		}
		self.brush = brush;
	}

	pub fn select_pencil(&mut self, pencil: Pencil) {
		tracing::debug!(%pencil, "select_pencil");
		self.set_brush(pencil.apply(self.brush));
	}

	pub fn select_pencil_tag(&mut self, tag: i64) -> bool {
		let Some(pencil) = Pencil::from_tag(tag) else {
			tracing::warn!(tag, "unknown pencil tag");
			return false;
		};
		self.select_pencil(pencil);
		true
	}

	pub fn open_settings(&self) -> BrushSettings {
		BrushSettings::from_brush(&self.brush)
	}

	pub fn apply_settings(&mut self, settings: BrushSettings) -> Result<(), SettingsError> {
		let brush = settings.to_brush()?;
		self.set_brush(brush);
		Ok(())
	}
}
