use crate::coords::{ColorRgba, Vec2};

use super::quad::{Quad, Segment, build_quads_into};

/// Quads sharing one fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBatch {
    pub color: ColorRgba,
    pub quads: Vec<Quad>,
}

/// Per-frame collection of stroke batches, in submission order.
///
/// Batches are painted in the order they were pushed; there is no z-sorting.
#[derive(Debug, Default)]
pub struct StrokeList {
    batches: Vec<StrokeBatch>,
}

impl StrokeList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes `segments` at `thickness` screen pixels.
    ///
    /// Consecutive pushes with the same color extend the previous batch.
    pub fn push(&mut self, color: ColorRgba, thickness: f32, segments: &[Segment]) {
        if segments.is_empty() {
            return;
        }
        if self.batches.last().map_or(true, |last| last.color != color) {
            self.batches.push(StrokeBatch { color, quads: Vec::with_capacity(segments.len()) });
        }
        let Some(batch) = self.batches.last_mut() else { return };
        build_quads_into(segments, thickness, &mut batch.quads);
    }

    /// Parallel-slice form of [`StrokeList::push`].
    ///
    /// # Panics
    /// Panics if `starts` and `ends` differ in length.
    pub fn push_lines(&mut self, color: ColorRgba, thickness: f32, starts: &[Vec2], ends: &[Vec2]) {
        assert_eq!(
            starts.len(),
            ends.len(),
            "segment start/end slices must have the same length"
        );
        let segments: Vec<Segment> =
            starts.iter().zip(ends).map(|(&s, &e)| Segment::new(s, e)).collect();
        self.push(color, thickness, &segments);
    }

    pub fn batches(&self) -> &[StrokeBatch] {
        &self.batches
    }

    pub fn quad_count(&self) -> usize {
        self.batches.iter().map(|b| b.quads.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Moves the recorded batches out, leaving the list empty.
    pub fn take(&mut self) -> Vec<StrokeBatch> {
        std::mem::take(&mut self.batches)
    }
}
