use glam::{vec4, Vec4};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ParseColorError {
	input: String,
	reason: String,
}

static_assertions::assert_impl_all!(ParseColorError: std::error::Error, Send, Sync);

/// A straight (not premultiplied) RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(Vec4);

impl Color {
	pub const BLACK: Self = Self(Vec4::new(0.0, 0.0, 0.0, 1.0));
	pub const WHITE: Self = Self(Vec4::ONE);
	pub const TRANSPARENT: Self = Self(Vec4::ZERO);

	pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
		Self(vec4(red, green, blue, alpha).clamp(Vec4::ZERO, Vec4::ONE))
	}

	pub fn rgb(red: f32, green: f32, blue: f32) -> Self {
		Self::new(red, green, blue, 1.0)
	}

	pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
		Self(vec4(r as f32, g as f32, b as f32, a as f32) / 255.0)
	}

	pub fn parse(input: &str) -> Result<Self, ParseColorError> {
		csscolorparser::parse(input)
			.map(|c| Self::from_rgba8(c.to_rgba8()))
			.map_err(|e| ParseColorError {
				input: input.to_owned(),
				reason: e.to_string(),
			})
	}

	pub fn red(&self) -> f32 {
		self.0.x
	}

	pub fn green(&self) -> f32 {
		self.0.y
	}

	pub fn blue(&self) -> f32 {
		self.0.z
	}

	pub fn alpha(&self) -> f32 {
		self.0.w
	}

	pub fn with_alpha(self, alpha: f32) -> Self {
		Self::new(self.red(), self.green(), self.blue(), alpha)
	}

	pub fn premultiplied(&self) -> Vec4 {
		(self.0.truncate() * self.0.w).extend(self.0.w)
	}

	pub fn from_premultiplied(pixel: Vec4) -> Self {
		if pixel.w <= 0.0 {
			return Self::TRANSPARENT;
		}
		Self::new(pixel.x / pixel.w, pixel.y / pixel.w, pixel.z / pixel.w, pixel.w)
	}

	pub fn to_rgba8(&self) -> [u8; 4] {
		let v = (self.0 * 255.0).round();
		[v.x as u8, v.y as u8, v.z as u8, v.w as u8]
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::BLACK
	}
}
