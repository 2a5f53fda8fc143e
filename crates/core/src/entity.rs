use crate::{Color, EntityConfig, Rect};

/// The controllable box. Width, height, speed and jump impulse never change
/// after spawn.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub dx: f32,
    pub dy: f32,
    pub speed: f32,
    pub jump_impulse: f32,
    /// Set on landing, cleared only by a jump.
    pub grounded: bool,
    pub color: Color,
}

impl Entity {
    /// Spawns at rest with a jump available, even though nothing is under
    /// it yet.
    pub fn spawn(config: &EntityConfig) -> Self {
        Self {
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            dx: 0.0,
            dy: 0.0,
            speed: config.speed,
            jump_impulse: config.jump_impulse,
            grounded: true,
            color: Color::RED,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::spawn(&EntityConfig::default())
    }
}
