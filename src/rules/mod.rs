//! Rules: how dice move tokens, when tokens capture, and who moves next.
//!
//! - `movement`: pure destination function (legality and resolution)
//! - `capture`: sends opposing tokens on a non-safe landing square to base
//! - `engine`: `GameEngine`, the only way to change game state

pub mod capture;
pub mod engine;
pub mod movement;

pub use capture::resolve_captures;
pub use engine::GameEngine;
pub use movement::destination;
