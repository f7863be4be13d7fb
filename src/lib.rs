pub(crate) mod util;

pub mod engine;
mod geom;
pub mod script;
pub mod settings;

mod session;
pub use session::*;


pub use engine::{Bitmap, BrushConfig, Color, Pencil, Snapshot};
pub use settings::{BrushSettings, SettingsError};
