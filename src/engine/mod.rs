mod color;
pub use color::*;

mod bitmap;
pub use bitmap::*;

pub mod raster;

mod context;
pub use context::*;

mod brush;
pub use brush::*;

pub mod stroke;
pub use stroke::StrokeState;
