mod ink_canvas;
mod surface;

pub use ink_canvas::InkCanvas;
pub use surface::DrawingSurface;
