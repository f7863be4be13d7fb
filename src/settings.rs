use crate::engine::{stroke, Bitmap, BrushConfig, Color};
use glam::vec2;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SettingsError {
	#[error("brush width must be positive, got {0}")]
	InvalidWidth(f32),

	#[error("{field} is not a finite number")]
	NotFinite { field: &'static str },
}

static_assertions::assert_impl_all!(SettingsError: std::error::Error, Send, Sync);

/// The values exchanged with the brush settings screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushSettings {
	pub width: f32,
	pub opacity: f32,
	pub red: f32,
	pub green: f32,
	pub blue: f32,
}

impl BrushSettings {
	pub fn from_brush(brush: &BrushConfig) -> Self {
		let color = brush.color();
		Self {
			width: brush.width(),
			opacity: brush.opacity(),
			red: color.red(),
			green: color.green(),
			blue: color.blue(),
		}
	}

	pub fn to_brush(&self) -> Result<BrushConfig, SettingsError> {
		if !self.width.is_finite() || self.width <= 0.0 {
			return Err(SettingsError::InvalidWidth(self.width));
		}
		for (field, value) in [
			("opacity", self.opacity),
			("red", self.red),
			("green", self.green),
			("blue", self.blue),
		] {
			if !value.is_finite() {
				return Err(SettingsError::NotFinite { field });
			}
		}
		Ok(BrushConfig::builder()
			.color(Color::rgb(self.red, self.green, self.blue))
			.width(self.width)
			.opacity(self.opacity)
			.build())
	}

	/// The dot a tap with these settings leaves in the middle of an empty canvas.
	pub fn preview(&self, size: u32) -> Result<Bitmap, SettingsError> {
		let brush = self.to_brush()?;
		let mut base = Bitmap::new(size, size);
		let mut overlay = Bitmap::new(size, size);
		let centre = vec2(size as f32, size as f32) * 0.5;
		stroke::end_stroke(stroke::begin_stroke(centre), &brush, &mut base, &mut overlay);
		Ok(base)
	}
}
