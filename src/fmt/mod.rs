//! Everything that decides what a painted character looks like on the wire: the hue
//! function, the palette mapping, and recognition of escapes already in the input.

mod color;
pub mod escape;
mod gradient;

pub use color::{Color, color_index};
pub use escape::{Csi, scan_csi, strip_escapes};
pub use gradient::{DEFAULT_FREQ, DEFAULT_SPREAD, Gradient, hue_phase};
