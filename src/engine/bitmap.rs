use super::color::Color;
use glam::Vec4;
use itertools::iproduct;

/// A `width` by `height` surface of premultiplied RGBA pixels, row-major.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bitmap {
	width: u32,
	height: u32,
	pixels: Vec<Vec4>,
}

impl Bitmap {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			pixels: vec![Vec4::ZERO; width as usize * height as usize],
		}
	}

	pub fn try_new(width: u32, height: u32) -> Result<Self, std::collections::TryReserveError> {
		let len = width as usize * height as usize;
		let mut pixels = Vec::new();
		pixels.try_reserve_exact(len)?;
		pixels.resize(len, Vec4::ZERO);
		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	fn index(&self, x: u32, y: u32) -> Option<usize> {
		(x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
		self.index(x, y).map(|i| self.pixels[i])
	}

	pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
		self.pixel(x, y).map(Color::from_premultiplied)
	}

	pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
		self.pixel(x, y).map_or(0.0, |p| p.w)
	}

	pub fn is_empty(&self) -> bool {
		self.pixels.iter().all(|p| p.w <= 0.0)
	}

	pub fn clear(&mut self) {
		self.pixels.fill(Vec4::ZERO);
	}

	pub(crate) fn blend_pixel(&mut self, x: u32, y: u32, source: Vec4) {
		if let Some(i) = self.index(x, y) {
			let destination = self.pixels[i];
			self.pixels[i] = source + destination * (1.0 - source.w);
		}
	}

	/// Both bitmaps are aligned at their top-left corner; only the overlap is drawn.
	pub(crate) fn draw_bitmap(&mut self, source: &Bitmap, alpha: f32) {
		let alpha = alpha.clamp(0.0, 1.0);
		if alpha <= 0.0 {
			return;
		}
		let width = self.width.min(source.width);
		let height = self.height.min(source.height);
		for (y, x) in iproduct!(0..height, 0..width) {
			let Some(pixel) = source.pixel(x, y) else {
				continue;
			};
			if pixel.w > 0.0 {
				self.blend_pixel(x, y, pixel * alpha);
			}
		}
	}

	pub fn snapshot(&self) -> Snapshot {
		let pixels: Vec<[u8; 4]> = self
			.pixels
			.iter()
			.map(|p| Color::from_premultiplied(*p).to_rgba8())
			.collect();
		Snapshot {
			width: self.width,
			height: self.height,
			data: bytemuck::cast_slice::<[u8; 4], u8>(&pixels).to_vec(),
		}
	}
}

/// Straight-alpha RGBA8 pixels of a [`Bitmap`], row-major, for handing to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
	pub width: u32,
	pub height: u32,
	pub data: Vec<u8>,
}

impl Snapshot {
	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = 4 * (y as usize * self.width as usize + x as usize);
		self.data.get(offset..offset + 4)?.try_into().ok()
	}

	pub fn is_transparent(&self) -> bool {
		self.data.chunks_exact(4).all(|p| p[3] == 0)
	}
}
