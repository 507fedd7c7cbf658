//! Dashboard component library built on `dioxus-primitives`.
//!
//! Each component lives in `components/<name>/component.rs` next to the
//! `style.css` it links.

pub mod components;

pub use components::*;
