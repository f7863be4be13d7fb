use super::{Color, StrokeStyle};

pub const MIN_BRUSH_WIDTH: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushConfig {
	color: Color,
	width: f32,
	opacity: f32,
}

#[bon::bon]
impl BrushConfig {
	/// Widths below [`MIN_BRUSH_WIDTH`] are raised to it and the opacity is clamped to `[0, 1]`.
	#[builder]
	pub fn new(
		#[builder(default)] color: Color,
		#[builder(default = 10.0)] width: f32,
		#[builder(default = 1.0)] opacity: f32,
	) -> Self {
		Self::sanitized(color, width, opacity)
	}
}

impl BrushConfig {
	fn sanitized(color: Color, width: f32, opacity: f32) -> Self {
		Self {
			color,
			width: width.max(MIN_BRUSH_WIDTH),
			opacity: if opacity.is_nan() {
				1.0
			} else {
				opacity.clamp(0.0, 1.0)
			},
		}
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn width(&self) -> f32 {
		self.width
	}

	pub fn opacity(&self) -> f32 {
		self.opacity
	}

	pub fn with_color(self, color: Color) -> Self {
		Self::sanitized(color, self.width, self.opacity)
	}

	pub fn with_width(self, width: f32) -> Self {
		Self::sanitized(self.color, width, self.opacity)
	}

	pub fn with_opacity(self, opacity: f32) -> Self {
		Self::sanitized(self.color, self.width, opacity)
	}

	/// Segments are always stroked opaque; opacity is applied once per stroke when it is merged.
	pub fn stroke_style(&self) -> StrokeStyle {
		StrokeStyle {
			width: self.width,
			color: self.color.with_alpha(1.0),
		}
	}
}

impl Default for BrushConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Pencil {
	#[display("black")]
	Black,
	#[display("red")]
	Red,
	#[display("blue")]
	Blue,
	/// Paints the canvas background colour at full opacity.
	#[display("eraser")]
	Eraser,
}

impl Pencil {
	pub const ALL: [Pencil; 4] = [Pencil::Black, Pencil::Red, Pencil::Blue, Pencil::Eraser];

	/// Toolbar buttons are tagged 1 to 4 in the order of [`Pencil::ALL`].
	pub fn from_tag(tag: i64) -> Option<Self> {
		let index = usize::try_from(tag.checked_sub(1)?).ok()?;
		Self::ALL.get(index).copied()
	}

	pub fn tag(self) -> i64 {
		match self {
			Pencil::Black => 1,
			Pencil::Red => 2,
			Pencil::Blue => 3,
			Pencil::Eraser => 4,
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|p| p.to_string().eq_ignore_ascii_case(name))
	}

	pub fn color(self) -> Color {
		match self {
			Pencil::Black => Color::BLACK,
			Pencil::Red => Color::rgb(1.0, 0.0, 0.0),
			Pencil::Blue => Color::rgb(0.0, 0.0, 1.0),
			Pencil::Eraser => Color::WHITE,
		}
	}

	pub fn is_eraser(self) -> bool {
		self == Pencil::Eraser
	}

	pub fn apply(self, brush: BrushConfig) -> BrushConfig {
		let brush = brush.with_color(self.color());
		if self.is_eraser() {
			brush.with_opacity(1.0)
		} else {
			brush
		}
	}
}
