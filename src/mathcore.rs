//! `gizmo3d::mathcore` module is a core that implements all math functionality for the crate.
//!
//! # Prelude
//! `gizmo3d::mathcore` prelude can be imported with `use gizmo3d::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent positions, directions and normals in three-dimensional space.
//! Transformations of objects are expressed as 4x4 matrices in the row-vector convention:
//! a point is carried as the homogeneous row `(x, y, z, 1)` and multiplied by the matrix
//! from the left (`v' = v * M`). That convention fixes the sign layout of every rotation
//! and projection matrix in this core and is relied upon throughout.
//!
//! Going from world space to pixel space is always a two-step application:
//! once with a view-projection matrix and once with a viewport matrix.
//! The two are never pre-multiplied so that the intermediate clip-space point
//! stays available to callers.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod collisions;
pub mod floats;
pub mod matrices;
pub mod shapes;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
