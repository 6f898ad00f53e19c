//! Colors and color normalization
//!
//! - `model.rs` - The canonical `Color` value and the `ColorFormat` shapes
//! - `normalize.rs` - Turning loaded literals into colors
//! - `names.rs` - Named color table

mod model;
pub mod names;
mod normalize;

pub use model::{Color, ColorFormat};
pub use normalize::{normalize, ColorError, ColorErrorKind, Normalized};
