//! # gizmo3d
//!
//! **gizmo3d** - small 3d debug-geometry core: vector algebra, 4x4 matrices,
//! world-to-screen transform pipelines and wireframe gizmo drawing.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate serde;
extern crate thiserror;

#[cfg(feature = "sdl2")]
extern crate sdl2;

// cores
pub mod graphicscore;
pub mod mathcore;
