//! Presentation of solve results. Nothing here takes part in the search.

pub use dot::{circle_layout, to_dot, Dot, CENTER, RADIUS};
pub use palette::{Palette, Swatch};
pub use text::Report;

mod dot;
mod palette;
mod text;
