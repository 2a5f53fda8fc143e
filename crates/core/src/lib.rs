#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod config;
pub mod entity;
pub mod input;
pub mod level;
pub mod render;
pub mod step;
pub mod world;

pub use color::Color;
pub use config::{Config, ConfigError, EntityConfig};
pub use entity::Entity;
pub use input::{Control, Controls, InputState};
pub use level::{default_platforms, Platform};
pub use render::{draw_frame, Renderer};
pub use step::{step, StepEvents};
pub use world::World;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap of the two x-ranges; touching edges do not count.
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.0, 10.0, 20.0, 5.0);
        assert!(!a.overlaps_x(&b));
        assert!(!b.overlaps_x(&a));

        let c = Rect::new(49.5, 10.0, 20.0, 5.0);
        assert!(a.overlaps_x(&c));
        assert!(c.overlaps_x(&a));
    }
}
