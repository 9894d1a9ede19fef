use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Triangle-list indices covering a quad's corners in `Quad::corners` order.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// One stroked segment as a filled rectangle.
///
/// Corners run UL, UR, BR, BL in the segment's local frame: UL/BL sit at the segment
/// start, UR/BR at the end, UL/UR on the left-hand normal side. Walking them in
/// order traces a simple (non-self-intersecting) polygon.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub corners: [Vec2; 4],
}

impl Quad {
    #[inline]
    pub fn center(&self) -> Vec2 {
        let [a, b, c, d] = self.corners;
        (a + b + c + d) / 4.0
    }

    /// Two triangles, ready for a non-indexed triangle list.
    pub fn triangles(&self) -> [Vec2; 6] {
        QUAD_INDICES.map(|i| self.corners[i as usize])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.corners.iter().all(|c| c.is_finite())
    }
}

/// A segment to be stroked.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Builds the stroke rectangle of this segment.
    ///
    /// A zero-length segment has no direction; it becomes an axis-aligned square of
    /// side `thickness` centred on the point.
    pub fn quad(self, thickness: f32) -> Quad {
        let half_thick = thickness.max(0.0) / 2.0;
        let delta = self.start - self.end;
        let length = delta.length();
        let center = (self.start + self.end) / 2.0;

        // (cos, sin) of the segment angle, and half the long side.
        let (dir, half_len) = if length > 0.0 {
            (delta / length, length / 2.0)
        } else {
            (Vec2::new(1.0, 0.0), half_thick)
        };

        let along = dir * half_len;
        let across = dir.perp() * half_thick;

        Quad {
            corners: [
                center + along + across,
                center - along + across,
                center - along - across,
                center + along - across,
            ],
        }
    }
}

/// Builds one quad per index from parallel start/end slices.
///
/// Negative thickness is treated as zero.
///
/// # Panics
/// Panics if `starts` and `ends` differ in length.
pub fn build_quads(starts: &[Vec2], ends: &[Vec2], thickness: f32) -> Vec<Quad> {
    assert_eq!(
        starts.len(),
        ends.len(),
        "segment start/end slices must have the same length"
    );
    starts
        .iter()
        .zip(ends)
        .map(|(&start, &end)| Segment::new(start, end).quad(thickness))
        .collect()
}

/// Appends one quad per segment to `out`, reusing its allocation across frames.
pub fn build_quads_into(segments: &[Segment], thickness: f32, out: &mut Vec<Quad>) {
    out.reserve(segments.len());
    out.extend(segments.iter().map(|s| s.quad(thickness)));
}
