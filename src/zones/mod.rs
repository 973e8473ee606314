//! Board zones: where a token sits, as a pure function of state.
//!
//! A renderer maps each `Zone` to screen geometry and hit-tests clicks
//! against it; the engine itself never deals in pixels.
//!
//! ## Key Types
//!
//! - `Zone`: Base slot, shared ring square, home path cell, or the finish

pub mod zone;

pub use zone::Zone;
