use crate::{Color, Rect, World};

/// Drawing surface a host provides.
pub trait Renderer {
    /// Wipe the whole field.
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Clear, then paint platforms in declared order, then the entity on top.
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, world: &World) {
    let config = world.config();
    renderer.clear(config.field_width, config.field_height);
    for p in world.platforms() {
        renderer.fill_rect(p.rect, p.color);
    }
    renderer.fill_rect(world.entity.rect(), world.entity.color);
}
