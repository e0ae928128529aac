mod aabb;
mod color;
mod easing;

pub use aabb::AABB;
pub use color::{hsl_to_rgb, lerp_rgb, srgb_to_linear, HexColor};
pub use easing::{ease_in_out_quad, lerp};
