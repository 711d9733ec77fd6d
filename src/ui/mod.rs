//! Terminal UI: rendering, keyboard input, and styles.

pub mod input;
pub mod render;
pub mod styles;
