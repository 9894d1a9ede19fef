//! Thick-segment quad batcher.
//!
//! Turns line segments (legs, antennae, the world border) into filled rectangles the
//! host can rasterize as polygons. Every segment is handled independently, so a
//! batch is a plain map over its inputs.
//!
//! Works in whatever space the caller's points are in; normally screen pixels
//! after `Camera::world_to_screen`.

mod batch;
mod border;
mod quad;

pub use batch::{StrokeBatch, StrokeList};
pub use border::{border_segments, scaled_thickness};
pub use quad::{QUAD_INDICES, Quad, Segment, build_quads, build_quads_into};
