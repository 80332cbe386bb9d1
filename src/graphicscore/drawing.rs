//! `graphicscore::drawing` submodule implements wireframe rendering of
//! `mathcore` primitives on top of an abstract line-drawing surface.
//!
//! This submodule provides [`DrawTarget`] trait that defines the drawing interface,
//! [`Pipeline`] struct that carries world-to-screen matrices and
//! free functions ([`draw_grid`], [`draw_sphere`], [`draw_plane`]) that decompose
//! primitives into projected line segments.
//!

use crate::{
    graphicscore::Color,
    mathcore::{
        matrices::Matrix4,
        shapes::{Plane, Sphere},
        vectors::{Point, Vector3},
        MathError,
    },
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// [`DrawTarget`] trait defines surfaces that wireframes can be drawn on.
///
/// Implementors only need to rasterize a single line segment between two pixels;
/// everything else is expressed through it.
///
pub trait DrawTarget {
    /// Draws line between two pixels with given color.
    ///
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
}

/// [`Pipeline`] struct carries the two matrices which map world space onto the screen.
///
/// The matrices are deliberately kept separate instead of being pre-multiplied:
/// the intermediate clip-space point stays observable through [`Pipeline::to_clip`],
/// which helps debugging of projection issues.
///
/// # Example
/// ```rust
/// # use gizmo3d::graphicscore::drawing::Pipeline;
/// # use gizmo3d::mathcore::{transforms::{affine, Projection, Viewport}, vectors::Vector3, Angle};
/// let camera = affine(
///     Vector3::one(),
///     [Angle::from_radians(0.26), Angle::ZERO, Angle::ZERO],
///     Vector3 { x: 0.0, y: 1.9, z: -6.49 },
/// );
/// let projection = Projection::PerspectiveFov {
///     fov_y: Angle::from_radians(0.45),
///     aspect_ratio: 1280.0 / 720.0,
///     near_clip: 0.1,
///     far_clip: 100.0,
/// };
/// let viewport = Viewport {
///     left: 0.0,
///     top: 0.0,
///     width: 1280.0,
///     height: 720.0,
///     min_depth: 0.0,
///     max_depth: 1.0,
/// };
/// let pipeline: Pipeline = Pipeline {
///     view_projection: camera.inverse().unwrap() * projection.matrix().unwrap(),
///     viewport: viewport.matrix(),
/// };
/// let screen: Vector3 = pipeline.project(Vector3::zero()).unwrap();
/// assert_eq!(screen.x, 640.0);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pipeline {
    /// Product of view and projection matrices, maps world space to clip space.
    ///
    pub view_projection: Matrix4,
    /// Viewport matrix, maps clip space to pixel coordinates.
    ///
    pub viewport: Matrix4,
}
impl Pipeline {
    /// Maps world-space point to clip space (normalized device coordinates after w-divide).
    ///
    /// # Errors
    /// [`MathError::DegenerateHomogeneousW`] is returned if the point maps to `w == 0`
    /// (e.g. it lies exactly on the camera plane of a perspective projection).
    ///
    pub fn to_clip(&self, point: Point) -> Result<Point, MathError> {
        self.view_projection.apply_to(point)
    }
    /// Maps clip-space point to pixel coordinates.
    ///
    /// # Errors
    /// [`MathError::DegenerateHomogeneousW`] is returned if the viewport matrix
    /// maps the point to `w == 0` (impossible for matrices built with
    /// [`Viewport::matrix`](crate::mathcore::transforms::Viewport::matrix)).
    ///
    pub fn to_screen(&self, clip: Point) -> Result<Point, MathError> {
        self.viewport.apply_to(clip)
    }
    /// Maps world-space point all the way to pixel coordinates.
    ///
    pub fn project(&self, point: Point) -> Result<Point, MathError> {
        self.to_screen(self.to_clip(point)?)
    }
}

/// Projects both endpoints and rasterizes the segment between them,
/// truncating pixel coordinates towards integers.
///
fn draw_projected_line(
    target: &mut impl DrawTarget,
    pipeline: &Pipeline,
    start: Point,
    end: Point,
    color: Color,
) -> Result<(), MathError> {
    let start: Point = pipeline.project(start)?;
    let end: Point = pipeline.project(end)?;
    target.draw_line(
        start.x as i32,
        start.y as i32,
        end.x as i32,
        end.y as i32,
        color,
    );
    Ok(())
}

/// Draws reference grid in the `y = 0` plane: 4x4 world units around the origin,
/// split into 10 cells along each axis (22 lines in total).
///
/// # Errors
/// [`MathError::DegenerateHomogeneousW`] is returned if some grid vertex
/// cannot be projected with given pipeline.
///
pub fn draw_grid(target: &mut impl DrawTarget, pipeline: &Pipeline) -> Result<(), MathError> {
    const GRID_HALF_WIDTH: f32 = 2.0;
    const GRID_SUBDIVISION: u32 = 10;
    const GRID_COLOR: Color = Color {
        r: 0xaa,
        g: 0xaa,
        b: 0xaa,
        a: 0xff,
    };

    let step: f32 = (GRID_HALF_WIDTH * 2.0) / GRID_SUBDIVISION as f32;
    for index in 0..=GRID_SUBDIVISION {
        let offset: f32 = GRID_HALF_WIDTH - step * index as f32;
        // line along Z at fixed X, then line along X at fixed Z
        draw_projected_line(
            target,
            pipeline,
            Vector3 {
                x: offset,
                y: 0.0,
                z: -GRID_HALF_WIDTH,
            },
            Vector3 {
                x: offset,
                y: 0.0,
                z: GRID_HALF_WIDTH,
            },
            GRID_COLOR,
        )?;
        draw_projected_line(
            target,
            pipeline,
            Vector3 {
                x: -GRID_HALF_WIDTH,
                y: 0.0,
                z: offset,
            },
            Vector3 {
                x: GRID_HALF_WIDTH,
                y: 0.0,
                z: offset,
            },
            GRID_COLOR,
        )?;
    }
    Ok(())
}

/// Draws sphere as a latitude/longitude wireframe with 16 subdivisions along both directions.
///
/// Each cell contributes one meridian segment and one parallel segment (512 lines in total).
///
/// # Errors
/// [`MathError::DegenerateHomogeneousW`] is returned if some surface vertex
/// cannot be projected with given pipeline.
///
pub fn draw_sphere(
    target: &mut impl DrawTarget,
    sphere: &Sphere,
    pipeline: &Pipeline,
    color: Color,
) -> Result<(), MathError> {
    const SUBDIVISION: u32 = 16;
    let lon_every: f32 = TAU / SUBDIVISION as f32;
    let lat_every: f32 = PI / SUBDIVISION as f32;

    let surface_point = |lat: f32, lon: f32| -> Point {
        Vector3 {
            x: lat.cos() * lon.cos(),
            y: lat.sin(),
            z: lat.cos() * lon.sin(),
        } * sphere.radius
            + sphere.center
    };

    for lat_index in 0..SUBDIVISION {
        let lat: f32 = -FRAC_PI_2 + lat_every * lat_index as f32;
        for lon_index in 0..SUBDIVISION {
            let lon: f32 = lon_every * lon_index as f32;

            let a: Point = pipeline.project(surface_point(lat, lon))?;
            let b: Point = pipeline.project(surface_point(lat + lat_every, lon))?;
            let c: Point = pipeline.project(surface_point(lat, lon + lon_every))?;

            target.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
            target.draw_line(a.x as i32, a.y as i32, c.x as i32, c.y as i32, color);
        }
    }
    Ok(())
}

/// Draws plane as a quad of half-extent 2 centered at the point of the plane
/// closest to `normal * distance`.
///
/// Quad corners are obtained by offsetting the center along two in-plane axes
/// (normalized perpendicular of the normal and their cross product) in both directions.
///
/// # Errors
/// [`MathError::ZeroNormal`] is returned if `plane.normal` is a zero vector;
/// [`MathError::DegenerateHomogeneousW`] is returned if some quad corner
/// cannot be projected with given pipeline.
///
pub fn draw_plane(
    target: &mut impl DrawTarget,
    plane: &Plane,
    pipeline: &Pipeline,
    color: Color,
) -> Result<(), MathError> {
    if plane.normal.sqr_magnitude() == 0.0 {
        return Err(MathError::ZeroNormal);
    }
    let center: Point = plane.normal * plane.distance;

    let tangent: Vector3 = plane.normal.perpendicular().normalized()?;
    let bitangent: Vector3 = plane.normal.cross_product(tangent);
    let perpendiculars: [Vector3; 4] = [tangent, -tangent, bitangent, -bitangent];

    let mut points: [Point; 4] = [Vector3::zero(); 4];
    for (point, perpendicular) in points.iter_mut().zip(perpendiculars) {
        *point = pipeline.project(center + perpendicular * 2.0)?;
    }

    for (from, to) in [(0, 2), (2, 1), (1, 3), (3, 0)] {
        target.draw_line(
            points[from].x as i32,
            points[from].y as i32,
            points[to].x as i32,
            points[to].y as i32,
            color,
        );
    }
    Ok(())
}

/// [`WindowTarget`] struct adapts an SDL2 window canvas to the [`DrawTarget`] interface.
///
#[cfg(feature = "sdl2")]
pub struct WindowTarget {
    canvas: sdl2::render::WindowCanvas,
}
#[cfg(feature = "sdl2")]
impl WindowTarget {
    /// Initializes target from SDL2 window canvas.
    ///
    pub fn from_canvas(canvas: sdl2::render::WindowCanvas) -> Self {
        WindowTarget { canvas }
    }

    /// Fills entire surface with given color.
    ///
    pub fn clear(&mut self, color: Color) {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
        self.canvas.clear();
    }
    /// Presents everything that was drawn since the last call.
    ///
    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Consumes target and returns underlying SDL2 canvas.
    ///
    pub fn into_canvas(self) -> sdl2::render::WindowCanvas {
        self.canvas
    }
}
#[cfg(feature = "sdl2")]
impl DrawTarget for WindowTarget {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
        self.canvas
            .draw_line((x0, y0), (x1, y1))
            .expect("`gizmo3d` renderer should be able to draw a line");
    }
}
