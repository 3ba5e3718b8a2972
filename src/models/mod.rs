//! Models are structs that hold the three channels of a color in one
//! specific model, giving a type safe way to convert between RYB and RGB.

mod rgb;
mod ryb;

pub use rgb::Rgb;
pub use ryb::Ryb;
