use crate::{Color, Rect};

pub const GROUND_Y: f32 = 550.0;
pub const GROUND_H: f32 = 50.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub color: Color,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            color,
        }
    }
}

pub const LEDGES: [Platform; 3] = [
    Platform::new(200.0, 450.0, 150.0, 20.0, Color::BROWN),
    Platform::new(400.0, 350.0, 150.0, 20.0, Color::BROWN),
    Platform::new(600.0, 250.0, 150.0, 20.0, Color::BROWN),
];

/// Ground spanning the field, then the ledges. Collision checks them in
/// this order.
pub fn default_platforms(field_width: f32) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(1 + LEDGES.len());
    platforms.push(Platform::new(0.0, GROUND_Y, field_width, GROUND_H, Color::GREEN));
    platforms.extend_from_slice(&LEDGES);
    platforms
}

#[cfg(test)]
mod tests {
    use super::{default_platforms, GROUND_Y};
    use crate::Color;

    #[test]
    fn ground_comes_first_and_spans_field() {
        let platforms = default_platforms(800.0);
        assert_eq!(platforms.len(), 4);
        let ground = platforms[0];
        assert_eq!(ground.rect.x, 0.0);
        assert_eq!(ground.rect.y, GROUND_Y);
        assert_eq!(ground.rect.w, 800.0);
        assert_eq!(ground.color, Color::GREEN);
        assert!(platforms[1..].iter().all(|p| p.color == Color::BROWN));
    }
}
