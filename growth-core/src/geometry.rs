use crate::{config::Config, types::Point};
use glam::Vec2;

/// Returns the point reached by moving `len` units from `origin` along `angle`.
///
/// ### Parameters
/// - `origin` - Start of the segment.
/// - `len` - Distance to travel.
/// - `angle` - Heading in radians; `0` points along +x, `π/2` along +y.
#[inline]
pub fn end_position(origin: Point, len: f32, angle: f32) -> Point {
    origin + Vec2::from_angle(angle) * len
}

/// Axis-aligned rectangle a tip must stay inside to keep growing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Canvas rectangle `[0, W] x [0, H]`, widened by `cfg.margin` on every side.
    pub fn from_config(cfg: &Config) -> Self {
        let m = Vec2::splat(cfg.margin);
        Self {
            min: -m,
            max: cfg.canvas + m,
        }
    }

    /// Edges count as inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
