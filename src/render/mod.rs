//! Terminal rendering.

pub mod pages;
pub mod tone;

pub use pages::render;
pub use tone::{Painter, Tone};
