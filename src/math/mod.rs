pub mod color;

pub use color::hex_to_rgb;
