use glam::Vec2;

/// A position in canvas coordinates.
pub type Point = Vec2;

/// Number of generations executed so far in a run.
///
/// Generation `1` is the first frame after a start.
pub type Generation = u32;

/// A pending "grow one more segment from here" task.
///
/// Tips are consumed by value when their generation runs and never
/// executed twice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchTip {
    pub origin: Point,
    /// Heading in radians, standard trigonometric orientation.
    pub heading: f32,
}

impl BranchTip {
    pub fn new(origin: Point, heading: f32) -> Self {
        Self { origin, heading }
    }
}

/// One drawn line, tagged with the generation it was drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub generation: Generation,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// What happened to a tip when it was executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The endpoint left the bounds; nothing was spawned.
    Discarded,
    /// The tip stayed inside and spawned `children` (0, 1 or 2) new tips.
    Grown { children: u8 },
}

impl StepOutcome {
    pub fn children(self) -> u8 {
        match self {
            StepOutcome::Discarded => 0,
            StepOutcome::Grown { children } => children,
        }
    }
}
