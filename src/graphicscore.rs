//! `gizmo3d::graphicscore` module is a core that provides interfaces for
//! wireframe visualization of `mathcore` primitives.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod drawing;
