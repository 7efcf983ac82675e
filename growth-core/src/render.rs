//! Drawing surface seam.
//!
//! The scheduler only ever clears the surface and draws straight segments.
//! [`SegmentLog`] keeps those segments in memory so a host can repaint
//! them every frame, and tests can inspect what was drawn.

use crate::types::{Generation, Point, Segment};

/// Something line segments can be drawn onto.
pub trait LineRenderer {
    /// Wipes the surface. Called once per start.
    fn clear(&mut self);

    /// Draws a segment from `from` to `to`. Assumed infallible.
    fn draw_segment(&mut self, from: Point, to: Point);

    /// Called before any segment of `generation` is drawn.
    fn begin_generation(&mut self, _generation: Generation) {}
}

/// Records every drawn segment in draw order.
#[derive(Debug, Default, Clone)]
pub struct SegmentLog {
    segments: Vec<Segment>,
    generation: Generation,
    clears: usize,
}

impl SegmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// How many times the surface was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Segments drawn during `generation`, in draw order.
    pub fn in_generation(&self, generation: Generation) -> impl Iterator<Item = &Segment> + '_ {
        self.segments
            .iter()
            .filter(move |s| s.generation == generation)
    }
}

impl LineRenderer for SegmentLog {
    fn clear(&mut self) {
        self.segments.clear();
        self.generation = 0;
        self.clears += 1;
    }

    fn draw_segment(&mut self, from: Point, to: Point) {
        self.segments.push(Segment {
            from,
            to,
            generation: self.generation,
        });
    }

    fn begin_generation(&mut self, generation: Generation) {
        self.generation = generation;
    }
}
