//! **delve-core** — geometry shared by the *delve* crates.
//!
//! Provides the layered grid coordinate [`Point`] and the layered box
//! [`Range`] that bounds a map.

pub mod geom;

pub use geom::{Point, Range};
